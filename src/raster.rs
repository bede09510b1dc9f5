//! Layout unit renderer: replays one recorded page of canvas commands
//! onto a supersampled pixmap. Canvas space is Pt with a top-left
//! origin, pixel space is Pt multiplied by the scale factor, so the
//! base transform is a uniform scale.

use crate::assets::AssetStore;
use crate::canvas::{Command, Page};
use crate::error::FormPressError;
use crate::font::FontRegistry;
use crate::types::{Color, Pt, Size};
use rustybuzz::{Face as HbFace, UnicodeBuffer};
use tiny_skia::{
    FillRule, FilterQuality, LineCap, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
    StrokeDash, Transform,
};
use ttf_parser::{GlyphId, OutlineBuilder};

#[derive(Clone)]
struct RasterState {
    fill_color: Color,
    stroke_color: Color,
    line_width: Pt,
    dash_pattern: Vec<Pt>,
    dash_phase: Pt,
    font_name: String,
    font_size: Pt,
    clip_mask: Option<Mask>,
}

impl Default for RasterState {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: Pt::from_f32(1.0),
            dash_pattern: Vec::new(),
            dash_phase: Pt::ZERO,
            font_name: String::new(),
            font_size: Pt::from_f32(12.0),
            clip_mask: None,
        }
    }
}

/// Rasterizes one layout unit page at `scale` supersampling. A unit that
/// cannot be captured (degenerate dimensions, allocation failure) is a
/// `CaptureFailure`; no partial bitmap is returned.
pub fn render_unit(
    page: &Page,
    size: Size,
    scale: f32,
    fonts: &FontRegistry,
    assets: &AssetStore,
) -> Result<Pixmap, FormPressError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(FormPressError::InvalidConfiguration(format!(
            "render scale must be positive, got {scale}"
        )));
    }
    let width_px = pt_to_px_u32(size.width, scale)?;
    let height_px = pt_to_px_u32(size.height, scale)?;

    let mut pixmap = Pixmap::new(width_px, height_px).ok_or_else(|| {
        FormPressError::CaptureFailure(format!(
            "pixmap allocation failed for {width_px}x{height_px}"
        ))
    })?;
    pixmap.fill(tiny_skia::Color::from_rgba8(255, 255, 255, 255));

    let base_transform = Transform::from_scale(scale, scale);
    let mut state = RasterState::default();
    let mut stack: Vec<RasterState> = Vec::new();
    let mut path_builder = PathBuilder::new();
    let mut has_path = false;

    for cmd in &page.commands {
        match cmd {
            Command::SaveState => stack.push(state.clone()),
            Command::RestoreState => {
                if let Some(restored) = stack.pop() {
                    state = restored;
                }
            }
            Command::SetFillColor(color) => state.fill_color = *color,
            Command::SetStrokeColor(color) => state.stroke_color = *color,
            Command::SetLineWidth(width) => {
                state.line_width = if *width < Pt::ZERO { Pt::ZERO } else { *width };
            }
            Command::SetDash { pattern, phase } => {
                state.dash_pattern = pattern.clone();
                state.dash_phase = *phase;
            }
            Command::SetFontName(name) => state.font_name = name.clone(),
            Command::SetFontSize(font_size) => state.font_size = *font_size,
            Command::MoveTo { x, y } => {
                path_builder.move_to(x.to_f32(), y.to_f32());
                has_path = true;
            }
            Command::LineTo { x, y } => {
                path_builder.line_to(x.to_f32(), y.to_f32());
                has_path = true;
            }
            Command::ClosePath => {
                if has_path {
                    path_builder.close();
                }
            }
            Command::Fill => {
                if let Some(path) = take_path(&mut path_builder, &mut has_path) {
                    let paint = fill_paint(state.fill_color);
                    pixmap.fill_path(
                        &path,
                        &paint,
                        FillRule::Winding,
                        base_transform,
                        state.clip_mask.as_ref(),
                    );
                }
            }
            Command::Stroke => {
                if let Some(path) = take_path(&mut path_builder, &mut has_path) {
                    let paint = fill_paint(state.stroke_color);
                    let stroke = build_stroke(&state);
                    pixmap.stroke_path(
                        &path,
                        &paint,
                        &stroke,
                        base_transform,
                        state.clip_mask.as_ref(),
                    );
                }
            }
            Command::FillRect {
                x,
                y,
                width,
                height,
            } => {
                if let Some(rect) = tiny_skia::Rect::from_xywh(
                    x.to_f32(),
                    y.to_f32(),
                    width.to_f32(),
                    height.to_f32(),
                ) {
                    let path = PathBuilder::from_rect(rect);
                    let paint = fill_paint(state.fill_color);
                    pixmap.fill_path(
                        &path,
                        &paint,
                        FillRule::Winding,
                        base_transform,
                        state.clip_mask.as_ref(),
                    );
                }
            }
            Command::StrokeRect {
                x,
                y,
                width,
                height,
            } => {
                if let Some(rect) = tiny_skia::Rect::from_xywh(
                    x.to_f32(),
                    y.to_f32(),
                    width.to_f32(),
                    height.to_f32(),
                ) {
                    let path = PathBuilder::from_rect(rect);
                    let paint = fill_paint(state.stroke_color);
                    let stroke = build_stroke(&state);
                    pixmap.stroke_path(
                        &path,
                        &paint,
                        &stroke,
                        base_transform,
                        state.clip_mask.as_ref(),
                    );
                }
            }
            Command::ClipRect {
                x,
                y,
                width,
                height,
            } => {
                if let Some(rect) = tiny_skia::Rect::from_xywh(
                    x.to_f32(),
                    y.to_f32(),
                    width.to_f32(),
                    height.to_f32(),
                ) {
                    let path = PathBuilder::from_rect(rect);
                    apply_clip_path(&mut state, &path, base_transform, width_px, height_px);
                }
            }
            Command::DrawString { x, y, text } => {
                draw_string(
                    &mut pixmap,
                    &state,
                    x.to_f32(),
                    y.to_f32(),
                    text,
                    base_transform,
                    fonts,
                );
            }
            Command::DrawImage {
                x,
                y,
                width,
                height,
                resource_id,
            } => {
                let Some(image) = assets.get(resource_id) else {
                    // Asset never resolved: leave blank space, same policy
                    // as an unresolved field.
                    continue;
                };
                let src_w = image.width() as f32;
                let src_h = image.height() as f32;
                if src_w <= 0.0 || src_h <= 0.0 {
                    continue;
                }
                let sx = width.to_f32() / src_w;
                let sy = height.to_f32() / src_h;
                let placement = Transform::from_row(sx, 0.0, 0.0, sy, x.to_f32(), y.to_f32());
                let mut paint = PixmapPaint::default();
                paint.quality = FilterQuality::Bilinear;
                pixmap.draw_pixmap(
                    0,
                    0,
                    image.as_ref(),
                    &paint,
                    base_transform.pre_concat(placement),
                    state.clip_mask.as_ref(),
                );
            }
        }
    }

    Ok(pixmap)
}

fn apply_clip_path(
    state: &mut RasterState,
    path: &Path,
    transform: Transform,
    width: u32,
    height: u32,
) {
    if let Some(mask) = state.clip_mask.as_mut() {
        mask.intersect_path(path, FillRule::Winding, true, transform);
        return;
    }
    let Some(mut mask) = Mask::new(width, height) else {
        return;
    };
    mask.fill_path(path, FillRule::Winding, true, transform);
    state.clip_mask = Some(mask);
}

fn take_path(path_builder: &mut PathBuilder, has_path: &mut bool) -> Option<Path> {
    if !*has_path {
        return None;
    }
    *has_path = false;
    let builder = std::mem::replace(path_builder, PathBuilder::new());
    builder.finish()
}

fn build_stroke(state: &RasterState) -> Stroke {
    let mut stroke = Stroke::default();
    stroke.width = state.line_width.to_f32().max(0.0);
    stroke.line_cap = LineCap::Butt;

    if !state.dash_pattern.is_empty() {
        let mut pattern: Vec<f32> = state
            .dash_pattern
            .iter()
            .map(|p| p.to_f32().abs().max(0.0))
            .collect();
        if pattern.len() % 2 == 1 {
            let copy = pattern.clone();
            pattern.extend(copy);
        }
        if pattern.len() >= 2 {
            if let Some(dash) = StrokeDash::new(pattern, state.dash_phase.to_f32()) {
                stroke.dash = Some(dash);
            }
        }
    }

    stroke
}

fn fill_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_sk_color(color));
    paint.anti_alias = true;
    paint
}

fn to_sk_color(color: Color) -> tiny_skia::Color {
    let r = color.r.clamp(0.0, 1.0);
    let g = color.g.clamp(0.0, 1.0);
    let b = color.b.clamp(0.0, 1.0);
    tiny_skia::Color::from_rgba(r, g, b, 1.0)
        .unwrap_or_else(|| tiny_skia::Color::from_rgba8(0, 0, 0, 255))
}

pub(crate) fn pt_to_px_u32(value: Pt, scale: f32) -> Result<u32, FormPressError> {
    let px = pt_to_px_i64(value, scale);
    if px <= 0 {
        return Err(FormPressError::CaptureFailure(format!(
            "non-positive pixel dimension {px} for {}mpt at scale {scale}",
            value.to_milli_i64()
        )));
    }
    u32::try_from(px).map_err(|_| {
        FormPressError::CaptureFailure(format!(
            "pixel dimension out of range: {px} for {}mpt at scale {scale}",
            value.to_milli_i64()
        ))
    })
}

pub(crate) fn pt_to_px_i64(value: Pt, scale: f32) -> i64 {
    let px = (value.to_milli_i64() as f64) * (scale as f64) / 1000.0;
    px.round() as i64
}

fn draw_string(
    pixmap: &mut Pixmap,
    state: &RasterState,
    baseline_x: f32,
    baseline_y: f32,
    text: &str,
    base_transform: Transform,
    fonts: &FontRegistry,
) {
    if text.is_empty() {
        return;
    }
    let font_size = state.font_size.to_f32().max(0.0);
    if font_size <= 0.0 {
        return;
    }
    let Some(font) = fonts.resolve(&state.font_name) else {
        return;
    };
    let Ok(face) = ttf_parser::Face::parse(&font.data, 0) else {
        return;
    };

    let paint = fill_paint(state.fill_color);
    let placements = layout_text_glyphs(&font.data, text, font_size, baseline_x, baseline_y);
    for placement in placements {
        let mut builder =
            GlyphPathBuilder::new(placement.origin_x, placement.origin_y, placement.scale);
        if face
            .outline_glyph(GlyphId(placement.glyph_id), &mut builder)
            .is_none()
        {
            continue;
        }
        let Some(path) = builder.finish() else {
            continue;
        };
        pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            base_transform,
            state.clip_mask.as_ref(),
        );
    }
}

#[derive(Clone, Copy)]
struct GlyphPlacement {
    glyph_id: u16,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

fn layout_text_glyphs(
    font_data: &[u8],
    text: &str,
    font_size: f32,
    baseline_x: f32,
    baseline_y: f32,
) -> Vec<GlyphPlacement> {
    let Some(face) = HbFace::from_slice(font_data, 0) else {
        return layout_text_glyphs_unshaped(font_data, text, font_size, baseline_x, baseline_y);
    };
    let hb_units = face.units_per_em().max(1) as f32;
    let scale = font_size / hb_units;
    let mut buffer = UnicodeBuffer::new();
    buffer.push_str(text);
    let output = rustybuzz::shape(&face, &[], buffer);
    let infos = output.glyph_infos();
    let positions = output.glyph_positions();
    if infos.is_empty() || infos.len() != positions.len() {
        return layout_text_glyphs_unshaped(font_data, text, font_size, baseline_x, baseline_y);
    }

    let mut out = Vec::with_capacity(infos.len());
    let mut pen_x = 0.0f32;
    for (info, pos) in infos.iter().zip(positions.iter()) {
        let gid = info.glyph_id as u16;
        if gid == 0 {
            pen_x += (pos.x_advance as f32 / hb_units) * font_size;
            continue;
        }
        let x_off = (pos.x_offset as f32 / hb_units) * font_size;
        // Shaper offsets are y-up; the canvas is y-down.
        let y_off = (pos.y_offset as f32 / hb_units) * font_size;
        out.push(GlyphPlacement {
            glyph_id: gid,
            origin_x: baseline_x + pen_x + x_off,
            origin_y: baseline_y - y_off,
            scale,
        });
        pen_x += (pos.x_advance as f32 / hb_units) * font_size;
    }
    out
}

fn layout_text_glyphs_unshaped(
    font_data: &[u8],
    text: &str,
    font_size: f32,
    baseline_x: f32,
    baseline_y: f32,
) -> Vec<GlyphPlacement> {
    let Ok(face) = ttf_parser::Face::parse(font_data, 0) else {
        return Vec::new();
    };
    let units_per_em = face.units_per_em().max(1) as f32;
    let scale = font_size / units_per_em;

    let mut out = Vec::new();
    let mut pen_x = 0.0f32;
    for ch in text.chars() {
        let gid = face.glyph_index(ch).map(|id| id.0).unwrap_or(0);
        if gid == 0 {
            pen_x += font_size * 0.5;
            continue;
        }
        out.push(GlyphPlacement {
            glyph_id: gid,
            origin_x: baseline_x + pen_x,
            origin_y: baseline_y,
            scale,
        });
        let advance_units = face.glyph_hor_advance(GlyphId(gid)).unwrap_or(0) as f32;
        let mut adv = (advance_units / units_per_em) * font_size;
        if adv <= 0.0 {
            adv = font_size * 0.5;
        }
        pen_x += adv;
    }
    out
}

/// Glyph outlines arrive y-up relative to the baseline; the canvas is
/// y-down, so the builder flips y around the baseline while scaling from
/// font units to Pt.
struct GlyphPathBuilder {
    builder: PathBuilder,
    origin_x: f32,
    origin_y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(origin_x: f32, origin_y: f32, scale: f32) -> Self {
        Self {
            builder: PathBuilder::new(),
            origin_x,
            origin_y,
            scale,
        }
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(
            self.origin_x + x * self.scale,
            self.origin_y - y * self.scale,
        );
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(
            self.origin_x + x * self.scale,
            self.origin_y - y * self.scale,
        );
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.origin_x + x1 * self.scale,
            self.origin_y - y1 * self.scale,
            self.origin_x + x * self.scale,
            self.origin_y - y * self.scale,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.origin_x + x1 * self.scale,
            self.origin_y - y1 * self.scale,
            self.origin_x + x2 * self.scale,
            self.origin_y - y2 * self.scale,
            self.origin_x + x * self.scale,
            self.origin_y - y * self.scale,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;

    fn has_non_white_pixel(pixmap: &Pixmap) -> bool {
        pixmap
            .data()
            .chunks_exact(4)
            .any(|px| !(px[0] == 255 && px[1] == 255 && px[2] == 255))
    }

    #[test]
    fn pt_to_px_rounds_to_nearest() {
        assert_eq!(pt_to_px_i64(Pt::from_f32(100.0), 2.0), 200);
        assert_eq!(pt_to_px_i64(Pt::from_f32(100.3), 1.0), 100);
        assert_eq!(pt_to_px_i64(Pt::from_f32(100.5), 1.0), 101);
    }

    #[test]
    fn zero_height_unit_is_a_capture_failure() {
        let canvas = Canvas::new(Size::new(Pt::from_i32(100), Pt::ZERO));
        let surface = canvas.finish();
        let err = render_unit(
            &surface.pages[0],
            surface.size,
            2.0,
            &FontRegistry::new(),
            &AssetStore::new(),
        )
        .unwrap_err();
        assert!(matches!(err, FormPressError::CaptureFailure(_)));
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let surface = Canvas::new(Size::a4()).finish();
        for scale in [0.0, -1.0, f32::NAN] {
            let err = render_unit(
                &surface.pages[0],
                surface.size,
                scale,
                &FontRegistry::new(),
                &AssetStore::new(),
            )
            .unwrap_err();
            assert!(matches!(err, FormPressError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn empty_page_renders_all_white_at_scaled_dimensions() {
        let size = Size::new(Pt::from_i32(100), Pt::from_i32(50));
        let surface = Canvas::new(size).finish();
        let pixmap = render_unit(
            &surface.pages[0],
            size,
            2.0,
            &FontRegistry::new(),
            &AssetStore::new(),
        )
        .unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (200, 100));
        assert!(!has_non_white_pixel(&pixmap));
    }

    #[test]
    fn filled_rect_marks_pixels() {
        let size = Size::new(Pt::from_i32(100), Pt::from_i32(100));
        let mut canvas = Canvas::new(size);
        canvas.fill_rect(
            Pt::from_i32(10),
            Pt::from_i32(10),
            Pt::from_i32(30),
            Pt::from_i32(30),
        );
        let surface = canvas.finish();
        let pixmap = render_unit(
            &surface.pages[0],
            size,
            1.0,
            &FontRegistry::new(),
            &AssetStore::new(),
        )
        .unwrap();
        assert!(has_non_white_pixel(&pixmap));
        // Pixel inside the rect is black, pixel outside stays white.
        let inside = pixmap.pixel(20, 20).unwrap();
        let outside = pixmap.pixel(80, 80).unwrap();
        assert_eq!(inside.red(), 0);
        assert_eq!(outside.red(), 255);
    }

    #[test]
    fn dashed_line_leaves_gaps() {
        let size = Size::new(Pt::from_i32(100), Pt::from_i32(20));
        let mut canvas = Canvas::new(size);
        canvas.set_dash(vec![Pt::from_f32(2.0), Pt::from_f32(4.0)], Pt::ZERO);
        canvas.move_to(Pt::ZERO, Pt::from_i32(10));
        canvas.line_to(Pt::from_i32(100), Pt::from_i32(10));
        canvas.stroke();
        let surface = canvas.finish();
        let pixmap = render_unit(
            &surface.pages[0],
            size,
            1.0,
            &FontRegistry::new(),
            &AssetStore::new(),
        )
        .unwrap();
        let row: Vec<bool> = (0..100)
            .map(|x| pixmap.pixel(x, 10).map(|p| p.red() < 128).unwrap_or(false))
            .collect();
        assert!(row.iter().any(|&b| b));
        assert!(row.iter().any(|&b| !b));
    }

    #[test]
    fn clip_rect_confines_fills_until_restore() {
        let size = Size::new(Pt::from_i32(100), Pt::from_i32(100));
        let mut canvas = Canvas::new(size);
        canvas.save_state();
        canvas.clip_rect(
            Pt::from_i32(10),
            Pt::from_i32(10),
            Pt::from_i32(20),
            Pt::from_i32(20),
        );
        canvas.fill_rect(Pt::ZERO, Pt::ZERO, Pt::from_i32(100), Pt::from_i32(100));
        canvas.restore_state();
        canvas.fill_rect(
            Pt::from_i32(60),
            Pt::from_i32(60),
            Pt::from_i32(10),
            Pt::from_i32(10),
        );
        let surface = canvas.finish();
        let pixmap = render_unit(
            &surface.pages[0],
            size,
            1.0,
            &FontRegistry::new(),
            &AssetStore::new(),
        )
        .unwrap();
        // The page-wide fill only lands inside the clip rect.
        assert_eq!(pixmap.pixel(15, 15).unwrap().red(), 0);
        assert_eq!(pixmap.pixel(50, 50).unwrap().red(), 255);
        // After restore the clip is lifted again.
        assert_eq!(pixmap.pixel(65, 65).unwrap().red(), 0);
    }

    #[test]
    fn text_without_registered_fonts_renders_blank() {
        let size = Size::new(Pt::from_i32(200), Pt::from_i32(40));
        let mut canvas = Canvas::new(size);
        canvas.set_font_size(Pt::from_f32(16.0));
        canvas.draw_string(Pt::from_i32(10), Pt::from_i32(24), "no fonts here");
        let surface = canvas.finish();
        let pixmap = render_unit(
            &surface.pages[0],
            size,
            1.0,
            &FontRegistry::new(),
            &AssetStore::new(),
        )
        .unwrap();
        assert!(!has_non_white_pixel(&pixmap));
    }

    #[test]
    fn missing_image_asset_is_skipped() {
        let size = Size::new(Pt::from_i32(100), Pt::from_i32(100));
        let mut canvas = Canvas::new(size);
        canvas.draw_image(
            Pt::from_i32(10),
            Pt::from_i32(10),
            Pt::from_i32(50),
            Pt::from_i32(50),
            "nonexistent",
        );
        let surface = canvas.finish();
        let pixmap = render_unit(
            &surface.pages[0],
            size,
            1.0,
            &FontRegistry::new(),
            &AssetStore::new(),
        )
        .unwrap();
        assert!(!has_non_white_pixel(&pixmap));
    }

    #[test]
    fn registered_image_is_drawn_scaled() {
        let mut store = AssetStore::new();
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 255, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        assert!(store.insert_bytes("photo", &bytes));

        let size = Size::new(Pt::from_i32(100), Pt::from_i32(100));
        let mut canvas = Canvas::new(size);
        canvas.draw_image(
            Pt::from_i32(20),
            Pt::from_i32(20),
            Pt::from_i32(40),
            Pt::from_i32(40),
            "photo",
        );
        let surface = canvas.finish();
        let pixmap = render_unit(
            &surface.pages[0],
            size,
            1.0,
            &FontRegistry::new(),
            &store,
        )
        .unwrap();
        let inside = pixmap.pixel(40, 40).unwrap();
        assert_eq!(inside.blue(), 255);
        assert_eq!(inside.red(), 0);
        let outside = pixmap.pixel(5, 5).unwrap();
        assert_eq!(outside.blue(), 255);
        assert_eq!(outside.red(), 255);
    }
}
