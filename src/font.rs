use crate::error::FormPressError;
use crate::types::Pt;
use rustybuzz::{Face as HbFace, UnicodeBuffer};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Fonts registered for template rendering, keyed by normalized family
/// name. Corrupt font bytes fail loudly at registration; silent fallback
/// would change text metrics between runs.
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<RegisteredFont>,
    lookup: HashMap<String, usize>,
}

#[derive(Debug)]
pub struct RegisteredFont {
    pub name: String,
    pub data: Vec<u8>,
    units_per_em: u16,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_bytes(
        &mut self,
        name: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<(), FormPressError> {
        let name = name.into();
        let face = ttf_parser::Face::parse(&data, 0)
            .map_err(|e| FormPressError::Asset(format!("font {name:?} parse failed: {e}")))?;
        let font = RegisteredFont {
            units_per_em: face.units_per_em().max(1),
            name: name.clone(),
            data,
        };
        let index = self.fonts.len();
        self.fonts.push(font);
        self.lookup.insert(normalize_name(&name), index);
        Ok(())
    }

    pub fn register_file(&mut self, path: impl AsRef<Path>) -> Result<(), FormPressError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("font")
            .to_string();
        self.register_bytes(name, data)
    }

    pub fn resolve(&self, name: &str) -> Option<&RegisteredFont> {
        if let Some(&index) = self.lookup.get(&normalize_name(name)) {
            return self.fonts.get(index);
        }
        // First registered font doubles as the fallback family so a
        // template with a misspelled font name still prints text.
        self.fonts.first()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Advance width of `text`, used for centered and right-aligned
    /// fields. Widths come from the same shaper that positions glyphs
    /// at raster time, so scripts with marks and ligatures measure the
    /// way they draw. Unknown glyphs count half an em.
    pub fn measure_text_width(&self, name: &str, font_size: Pt, text: &str) -> Pt {
        let Some(font) = self.resolve(name) else {
            return Pt::from_f32(font_size.to_f32() * 0.5 * text.chars().count() as f32);
        };
        let size = font_size.to_f32();
        if let Some(face) = HbFace::from_slice(&font.data, 0) {
            let upem = face.units_per_em().max(1) as f32;
            let mut buffer = UnicodeBuffer::new();
            buffer.push_str(text);
            let output = rustybuzz::shape(&face, &[], buffer);
            let positions = output.glyph_positions();
            if !positions.is_empty() {
                let mut width = 0.0f32;
                for pos in positions {
                    width += (pos.x_advance as f32 / upem) * size;
                }
                return Pt::from_f32(width);
            }
        }
        let Ok(face) = ttf_parser::Face::parse(&font.data, 0) else {
            return Pt::ZERO;
        };
        let upem = font.units_per_em as f32;
        let mut width = 0.0f32;
        for ch in text.chars() {
            match face.glyph_index(ch) {
                Some(gid) => {
                    let advance = face.glyph_hor_advance(gid).unwrap_or(0) as f32;
                    let adv = (advance / upem) * size;
                    width += if adv > 0.0 { adv } else { size * 0.5 };
                }
                None => width += size * 0.5,
            }
        }
        Pt::from_f32(width)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(|c| c.to_lowercase())
        .collect()
}
