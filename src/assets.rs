//! Decoded image assets (applicant photo, signature, company logo)
//! consumed by image elements. The pipeline only ever sees resolved
//! bytes, data URIs, or local paths; fetching them is the caller's job.

use base64::Engine;
use std::collections::HashMap;
use std::path::Path;
use tiny_skia::Pixmap;

#[derive(Default, Clone)]
pub struct AssetStore {
    images: HashMap<String, Pixmap>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers image bytes (png or jpeg) under a resource id. Bytes
    /// that fail to decode are dropped: an image element whose asset is
    /// unresolvable renders as blank space, the same degradation policy
    /// as unresolved fields.
    pub fn insert_bytes(&mut self, resource_id: impl Into<String>, data: &[u8]) -> bool {
        match decode_image_to_pixmap(data, None) {
            Some(pixmap) => {
                self.images.insert(resource_id.into(), pixmap);
                true
            }
            None => false,
        }
    }

    /// Registers from a reference string: a `data:` URI or a file path.
    pub fn insert_ref(&mut self, resource_id: impl Into<String>, reference: &str) -> bool {
        match load_image_pixmap(reference) {
            Some(pixmap) => {
                self.images.insert(resource_id.into(), pixmap);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, resource_id: &str) -> Option<&Pixmap> {
        self.images.get(resource_id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn load_image_pixmap(source: &str) -> Option<Pixmap> {
    if let Some((mime, data)) = parse_data_uri(source) {
        return decode_image_to_pixmap(&data, Some(&mime));
    }
    let bytes = std::fs::read(Path::new(source)).ok()?;
    decode_image_to_pixmap(&bytes, None)
}

fn decode_image_to_pixmap(data: &[u8], mime: Option<&str>) -> Option<Pixmap> {
    let guessed_format = if let Some(mime) = mime {
        if mime.contains("png") {
            Some(image::ImageFormat::Png)
        } else if mime.contains("jpeg") || mime.contains("jpg") {
            Some(image::ImageFormat::Jpeg)
        } else {
            None
        }
    } else {
        image::guess_format(data).ok()
    };

    let decoded = if let Some(fmt) = guessed_format {
        image::load_from_memory_with_format(data, fmt).ok()?
    } else {
        image::load_from_memory(data).ok()?
    };
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut pixmap = Pixmap::new(width, height)?;
    let src = rgba.as_raw();
    let dst = pixmap.data_mut();
    for (src_px, dst_px) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let r = src_px[0];
        let g = src_px[1];
        let b = src_px[2];
        let a = src_px[3];
        dst_px[0] = premul_u8(r, a);
        dst_px[1] = premul_u8(g, a);
        dst_px[2] = premul_u8(b, a);
        dst_px[3] = a;
    }
    Some(pixmap)
}

fn premul_u8(channel: u8, alpha: u8) -> u8 {
    let prod = (channel as u16) * (alpha as u16) + 127;
    ((prod + (prod >> 8)) >> 8) as u8
}

fn parse_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    if !uri.starts_with("data:") {
        return None;
    }
    let (header, payload) = uri.split_once(',')?;
    let mime = header
        .trim_start_matches("data:")
        .split(';')
        .next()
        .filter(|v| !v.is_empty())
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = if header.contains(";base64") {
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .ok()?
    } else {
        payload.as_bytes().to_vec()
    };
    Some((mime, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_bytes() {
        let mut store = AssetStore::new();
        assert!(store.insert_bytes("photo", &tiny_png()));
        let pixmap = store.get("photo").unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (2, 2));
    }

    #[test]
    fn rejects_garbage_bytes() {
        let mut store = AssetStore::new();
        assert!(!store.insert_bytes("photo", &[0u8; 8]));
        assert!(store.is_empty());
    }

    #[test]
    fn accepts_base64_data_uri() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(tiny_png());
        let uri = format!("data:image/png;base64,{encoded}");
        let mut store = AssetStore::new();
        assert!(store.insert_ref("signature", &uri));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_reference_is_dropped() {
        let mut store = AssetStore::new();
        assert!(!store.insert_ref("logo", "/definitely/not/here.png"));
    }
}
