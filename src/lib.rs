//! formpress renders filled-in applicant paperwork as PDF documents.
//!
//! An [`ApplicantRecord`] and per-document [`DocumentFormData`] are
//! merged into one binding value; each [`DocumentKind`] pairs a static
//! template with a layout strategy (continuous-flow bodies sliced into
//! pages, or fixed pre-paginated pages), rasterizes it at a
//! supersampling scale, and composes the pages into a deterministic
//! PDF. The whole path is pure: the same record and form always yield
//! byte-identical output.

mod assets;
mod canvas;
mod compose;
mod error;
mod font;
mod pipeline;
mod raster;
mod record;
mod registry;
mod resolver;
mod strategy;
mod template;
mod templates;
mod types;

pub use assets::AssetStore;
pub use canvas::{Canvas, Command, Page, UnitSurface};
pub use compose::{RenderedArtifact, compose, document_filename};
pub use error::FormPressError;
pub use font::FontRegistry;
pub use pipeline::{DEFAULT_SCALE, Pipeline, PipelineBuilder};
pub use raster::render_unit;
pub use record::{ApplicantRecord, DocumentFormData, binding_value};
pub use registry::DocumentKind;
pub use resolver::{CHECK_MARK, PLACEHOLDER, is_checked, is_checked_at, resolve};
pub use strategy::{LayoutStrategy, RenderInputs, render_document};
pub use template::{
    CheckOption, DocTemplateDef, Element, FillLine, PopulateContext, TextAlign, UnitTemplate,
    populate_unit,
};
pub use types::{Color, Margins, Pt, Size};
