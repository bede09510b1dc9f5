//! Page layout strategies. Both consume the layout unit renderer and
//! produce page bitmaps of identical pixel dimensions, so the composer
//! never needs to know which strategy ran.

use crate::assets::AssetStore;
use crate::canvas::Canvas;
use crate::error::FormPressError;
use crate::font::FontRegistry;
use crate::raster::{self, pt_to_px_u32};
use crate::template::{DocTemplateDef, PopulateContext};
use crate::types::Size;
use serde_json::Value;
use tiny_skia::{Pixmap, PixmapPaint, Transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// Render the whole body as one tall surface, then slice page-height
    /// windows out of it. Page breaks fall wherever the slice lands.
    ContinuousFlow,
    /// The template declares fixed-height page sections; each renders
    /// independently and page breaks fall exactly where authored.
    PrePaginated,
}

pub struct RenderInputs<'a> {
    pub binding: &'a Value,
    pub fonts: &'a FontRegistry,
    pub assets: &'a AssetStore,
    pub scale: f32,
}

/// Renders a document definition into ordered page bitmaps. Units are
/// rasterized strictly one at a time; at most one unit bitmap is alive
/// at any moment (plus the tall body while a continuous flow is sliced).
pub fn render_document(
    strategy: LayoutStrategy,
    def: &DocTemplateDef,
    inputs: &RenderInputs<'_>,
) -> Result<Vec<Pixmap>, FormPressError> {
    if def.units.is_empty() {
        return Err(FormPressError::MissingTarget);
    }
    match strategy {
        LayoutStrategy::ContinuousFlow => render_continuous_flow(def, inputs),
        LayoutStrategy::PrePaginated => render_pre_paginated(def, inputs),
    }
}

fn render_continuous_flow(
    def: &DocTemplateDef,
    inputs: &RenderInputs<'_>,
) -> Result<Vec<Pixmap>, FormPressError> {
    let body_size = Size::new(def.page_size.width, def.natural_height());
    let mut canvas = Canvas::new(body_size);
    let ctx = PopulateContext {
        binding: inputs.binding,
        fonts: inputs.fonts,
        font_family: def.font_family,
        // The body has no page identity until it is sliced.
        page_number: None,
        page_count: 1,
    };
    // A continuous-flow template is one logical body; multiple units are
    // drawn onto the same surface in declaration order.
    for unit in &def.units {
        crate::template::populate_unit(&mut canvas, unit, &ctx);
    }
    let surface = canvas.finish();
    let tall = raster::render_unit(
        &surface.pages[0],
        body_size,
        inputs.scale,
        inputs.fonts,
        inputs.assets,
    )?;
    log::debug!(
        "continuous-flow body rendered: {}x{} px",
        tall.width(),
        tall.height()
    );

    let page_height_px = pt_to_px_u32(def.page_size.height, inputs.scale)?;
    slice_into_pages(&tall, page_height_px)
}

fn render_pre_paginated(
    def: &DocTemplateDef,
    inputs: &RenderInputs<'_>,
) -> Result<Vec<Pixmap>, FormPressError> {
    let page_count = def.units.len();
    let mut pages = Vec::with_capacity(page_count);
    for (index, unit) in def.units.iter().enumerate() {
        let mut canvas = Canvas::new(def.page_size);
        let ctx = PopulateContext {
            binding: inputs.binding,
            fonts: inputs.fonts,
            font_family: def.font_family,
            page_number: Some(index + 1),
            page_count,
        };
        crate::template::populate_unit(&mut canvas, unit, &ctx);
        let surface = canvas.finish();
        let pixmap = raster::render_unit(
            &surface.pages[0],
            def.page_size,
            inputs.scale,
            inputs.fonts,
            inputs.assets,
        )?;
        log::debug!("pre-paginated unit {}/{} rendered", index + 1, page_count);
        pages.push(pixmap);
    }
    Ok(pages)
}

/// Slices a tall body bitmap into page-height windows. Each output page
/// is a full-height white pixmap with the body placed at a negative
/// vertical offset, so successive pages reveal successive windows.
///
/// Boundary policy: the loop continues only while `remaining > 0`, so a
/// body whose height is an exact multiple of the page height yields
/// exactly `height / page_height` pages and never a trailing blank one.
pub(crate) fn slice_into_pages(
    tall: &Pixmap,
    page_height_px: u32,
) -> Result<Vec<Pixmap>, FormPressError> {
    if page_height_px == 0 {
        return Err(FormPressError::InvalidConfiguration(
            "page height must be positive".to_string(),
        ));
    }
    if tall.width() == 0 || tall.height() == 0 {
        return Err(FormPressError::MissingTarget);
    }

    let mut pages = Vec::new();
    let mut remaining = tall.height() as i64;
    let mut page_index: u32 = 0;
    loop {
        let mut page = Pixmap::new(tall.width(), page_height_px).ok_or_else(|| {
            FormPressError::CaptureFailure(format!(
                "page pixmap allocation failed for {}x{}",
                tall.width(),
                page_height_px
            ))
        })?;
        page.fill(tiny_skia::Color::from_rgba8(255, 255, 255, 255));
        let offset_y = -((page_index as i64 * page_height_px as i64) as f32);
        page.draw_pixmap(
            0,
            0,
            tall.as_ref(),
            &PixmapPaint::default(),
            Transform::from_translate(0.0, offset_y),
            None,
        );
        pages.push(page);

        remaining -= page_height_px as i64;
        if remaining > 0 {
            page_index += 1;
        } else {
            break;
        }
    }
    Ok(pages)
}
