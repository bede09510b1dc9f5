//! Document composer: accumulates ordered page bitmaps into one
//! immutable artifact and projects it as PDF bytes or a saved file.
//! Generating once and exporting twice yields equivalent content.

use crate::error::FormPressError;
use crate::types::Size;
use lopdf::{Document as PdfDocument, Object, Stream, dictionary};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;

/// Final ordered collection of page bitmaps for one generated document.
/// Owned exclusively by the composer until handed to the output sink;
/// immutable once produced.
#[derive(Debug)]
pub struct RenderedArtifact {
    pages: Vec<Pixmap>,
    page_size: Size,
}

/// Places each bitmap as one full page, in order, with no gaps and no
/// implicit extra pages. An empty page set is `MissingTarget`; pages
/// with mismatched pixel dimensions are rejected.
pub fn compose(pages: Vec<Pixmap>, page_size: Size) -> Result<RenderedArtifact, FormPressError> {
    if pages.is_empty() {
        return Err(FormPressError::MissingTarget);
    }
    let first = (pages[0].width(), pages[0].height());
    for (index, page) in pages.iter().enumerate() {
        let dims = (page.width(), page.height());
        if dims != first {
            return Err(FormPressError::InvalidConfiguration(format!(
                "page {index} is {}x{} but page 0 is {}x{}",
                dims.0, dims.1, first.0, first.1
            )));
        }
    }
    Ok(RenderedArtifact { pages, page_size })
}

impl RenderedArtifact {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn page_dimensions_px(&self) -> (u32, u32) {
        (self.pages[0].width(), self.pages[0].height())
    }

    /// SHA-256 over page count, dimensions and pixel content. Two
    /// generations from identical inputs produce identical fingerprints.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.pages.len() as u32).to_le_bytes());
        for page in &self.pages {
            hasher.update(page.width().to_le_bytes());
            hasher.update(page.height().to_le_bytes());
            hasher.update(page.data());
        }
        hasher.finalize().into()
    }

    /// PNG bytes for one page, for previews and thumbnails.
    pub fn page_png(&self, index: usize) -> Result<Vec<u8>, FormPressError> {
        let page = self.pages.get(index).ok_or_else(|| {
            FormPressError::InvalidConfiguration(format!(
                "page index {index} out of range ({} pages)",
                self.pages.len()
            ))
        })?;
        page.encode_png()
            .map_err(|e| FormPressError::CaptureFailure(format!("png encode failed: {e}")))
    }

    /// In-memory PDF projection: each page bitmap becomes one full-page
    /// DeviceRGB image XObject. Object order is deterministic, so equal
    /// artifacts yield byte-identical output.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, FormPressError> {
        let mut doc = PdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let width_pt = self.page_size.width.to_f32();
        let height_pt = self.page_size.height.to_f32();

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for (index, page) in self.pages.iter().enumerate() {
            let image_name = format!("Im{index}");
            let image_stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => page.width() as i64,
                    "Height" => page.height() as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                },
                pixmap_rgb(page),
            );
            let image_id = doc.add_object(image_stream);

            let content = format!(
                "q\n{width_pt:.2} 0 0 {height_pt:.2} 0 0 cm\n/{image_name} Do\nQ\n"
            );
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    Object::Real(width_pt),
                    Object::Real(height_pt),
                ],
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "XObject" => dictionary! {
                        image_name.as_str() => image_id,
                    },
                },
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| FormPressError::InvalidConfiguration(format!("pdf write failed: {e}")))?;
        Ok(bytes)
    }

    /// Persists under the deterministic name `{subject}_{label}.pdf`.
    /// A second save for the same subject and kind overwrites the first.
    pub fn save_to(
        &self,
        dir: impl AsRef<Path>,
        subject_name: &str,
        kind_label: &str,
    ) -> Result<PathBuf, FormPressError> {
        let bytes = self.to_pdf_bytes()?;
        let path = dir
            .as_ref()
            .join(document_filename(subject_name, kind_label));
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Deterministic output filename, a pure function of subject and kind
/// label. Filesystem-hostile characters map to `_`.
pub fn document_filename(subject_name: &str, kind_label: &str) -> String {
    format!(
        "{}_{}.pdf",
        sanitize_component(subject_name),
        sanitize_component(kind_label)
    )
}

fn sanitize_component(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "document".to_string();
    }
    trimmed
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Strips alpha from a rendered page. Pages are composited over opaque
/// white, so premultiplied and straight RGB coincide.
fn pixmap_rgb(page: &Pixmap) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(page.width() as usize * page.height() as usize * 3);
    for px in page.data().chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_page(width: u32, height: u32, red: u8) -> Pixmap {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(red, 255, 255, 255));
        pixmap
    }

    #[test]
    fn empty_page_set_is_missing_target() {
        let err = compose(Vec::new(), Size::a4()).unwrap_err();
        assert!(matches!(err, FormPressError::MissingTarget));
    }

    #[test]
    fn mismatched_page_dimensions_are_rejected() {
        let pages = vec![solid_page(100, 200, 255), solid_page(100, 201, 255)];
        let err = compose(pages, Size::a4()).unwrap_err();
        assert!(matches!(err, FormPressError::InvalidConfiguration(_)));
    }

    #[test]
    fn artifact_reports_page_count_and_dimensions() {
        let pages = vec![solid_page(100, 200, 255); 3];
        let artifact = compose(pages, Size::a4()).unwrap();
        assert_eq!(artifact.page_count(), 3);
        assert_eq!(artifact.page_dimensions_px(), (100, 200));
    }

    #[test]
    fn fingerprint_is_stable_and_content_sensitive() {
        let a = compose(vec![solid_page(10, 10, 255)], Size::a4()).unwrap();
        let b = compose(vec![solid_page(10, 10, 255)], Size::a4()).unwrap();
        let c = compose(vec![solid_page(10, 10, 0)], Size::a4()).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn pdf_bytes_are_reproducible_and_structurally_sound() {
        let artifact = compose(vec![solid_page(20, 30, 128); 2], Size::a4()).unwrap();
        let first = artifact.to_pdf_bytes().unwrap();
        let second = artifact.to_pdf_bytes().unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with(b"%PDF-1.5"));
        let parsed = PdfDocument::load_mem(&first).unwrap();
        assert_eq!(parsed.get_pages().len(), 2);
    }

    #[test]
    fn rgb_projection_drops_alpha_only() {
        let rgb = pixmap_rgb(&solid_page(3, 2, 128));
        assert_eq!(rgb.len(), 3 * 2 * 3);
        assert_eq!(&rgb[..3], &[128, 255, 255]);
    }

    #[test]
    fn page_png_round_trips_through_image_decoder() {
        let artifact = compose(vec![solid_page(8, 8, 0)], Size::a4()).unwrap();
        let png = artifact.page_png(0).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert!(artifact.page_png(1).is_err());
    }

    #[test]
    fn filename_is_pure_and_sanitized() {
        assert_eq!(
            document_filename("Somchai Jaidee", "employment_contract"),
            "Somchai Jaidee_employment_contract.pdf"
        );
        assert_eq!(
            document_filename("a/b\\c:d", "kind"),
            "a_b_c_d_kind.pdf"
        );
        assert_eq!(document_filename("  ", "kind"), "document_kind.pdf");
        // Same inputs, same name.
        assert_eq!(
            document_filename("x", "y"),
            document_filename("x", "y")
        );
    }

    #[test]
    fn save_writes_deterministically_named_file() {
        let dir = std::env::temp_dir().join(format!(
            "formpress_compose_test_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let artifact = compose(vec![solid_page(10, 10, 200)], Size::a4()).unwrap();
        let path = artifact.save_to(&dir, "Tester", "application_sheet").unwrap();
        assert!(path.ends_with("Tester_application_sheet.pdf"));
        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk, artifact.to_pdf_bytes().unwrap());
        fs::remove_dir_all(&dir).unwrap();
    }
}
