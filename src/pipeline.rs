//! Entry point tying the stages together: binding, template, raster,
//! artifact. One pipeline instance is shared per process; a busy flag
//! rejects overlapping generations instead of queueing them.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::assets::AssetStore;
use crate::compose::{RenderedArtifact, compose};
use crate::error::FormPressError;
use crate::font::FontRegistry;
use crate::record::{ApplicantRecord, DocumentFormData, binding_value};
use crate::registry::DocumentKind;
use crate::strategy::{RenderInputs, render_document};

/// Supersampling factor used when none is configured. Two device pixels
/// per point keeps thin rules crisp without ballooning page streams.
pub const DEFAULT_SCALE: f32 = 2.0;

enum FontSource {
    Bytes(String, Vec<u8>),
    File(PathBuf),
}

enum AssetSource {
    Bytes(String, Vec<u8>),
    Ref(String, String),
}

/// Collects fonts, shared assets and the raster scale, then validates
/// the lot in [`build`](PipelineBuilder::build). Font data that fails to
/// parse aborts the build; image data that fails to decode is dropped,
/// matching the blank-field degradation used for unresolved bindings.
#[derive(Default)]
pub struct PipelineBuilder {
    fonts: Vec<FontSource>,
    assets: Vec<AssetSource>,
    scale: Option<f32>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_bytes(mut self, name: impl Into<String>, data: Vec<u8>) -> Self {
        self.fonts.push(FontSource::Bytes(name.into(), data));
        self
    }

    pub fn font_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.fonts.push(FontSource::File(path.into()));
        self
    }

    pub fn asset_bytes(mut self, resource_id: impl Into<String>, data: Vec<u8>) -> Self {
        self.assets
            .push(AssetSource::Bytes(resource_id.into(), data));
        self
    }

    pub fn asset_ref(mut self, resource_id: impl Into<String>, reference: impl Into<String>) -> Self {
        self.assets
            .push(AssetSource::Ref(resource_id.into(), reference.into()));
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn build(self) -> Result<Pipeline, FormPressError> {
        let scale = self.scale.unwrap_or(DEFAULT_SCALE);
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FormPressError::InvalidConfiguration(format!(
                "scale must be a positive finite number, got {scale}"
            )));
        }
        let mut fonts = FontRegistry::new();
        for source in self.fonts {
            match source {
                FontSource::Bytes(name, data) => fonts.register_bytes(name, data)?,
                FontSource::File(path) => fonts.register_file(path)?,
            }
        }
        let mut assets = AssetStore::new();
        for source in self.assets {
            let ok = match &source {
                AssetSource::Bytes(id, data) => assets.insert_bytes(id.clone(), data),
                AssetSource::Ref(id, reference) => assets.insert_ref(id.clone(), reference),
            };
            if !ok {
                let id = match &source {
                    AssetSource::Bytes(id, _) | AssetSource::Ref(id, _) => id,
                };
                log::warn!("asset {id:?} failed to decode, elements using it render blank");
            }
        }
        Ok(Pipeline {
            fonts,
            assets,
            scale,
            busy: AtomicBool::new(false),
        })
    }
}

pub struct Pipeline {
    fonts: FontRegistry,
    assets: AssetStore,
    scale: f32,
    busy: AtomicBool,
}

/// Clears the busy flag when a generation ends, on every exit path.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Renders one document for one applicant. Returns `Ok(None)` when
    /// another generation is already in flight; callers retry later
    /// rather than queue.
    pub fn generate(
        &self,
        kind: DocumentKind,
        record: &ApplicantRecord,
        form: &DocumentFormData,
    ) -> Result<Option<RenderedArtifact>, FormPressError> {
        let Some(_guard) = self.begin() else {
            log::warn!(
                "rejected {} for {:?}: a generation is already in flight",
                kind.label(),
                record.subject_name()
            );
            return Ok(None);
        };
        log::info!("generating {} for {:?}", kind.label(), record.subject_name());

        let binding = binding_value(record, form);
        let assets = self.record_assets(record);
        let def = kind.template();
        let inputs = RenderInputs {
            binding: &binding,
            fonts: &self.fonts,
            assets: &assets,
            scale: self.scale,
        };
        let result = render_document(kind.strategy(), &def, &inputs)
            .and_then(|pages| compose(pages, def.page_size));
        match result {
            Ok(artifact) => {
                log::info!(
                    "finished {}: {} page(s)",
                    kind.label(),
                    artifact.page_count()
                );
                Ok(Some(artifact))
            }
            Err(err) => {
                log::error!("generation of {} failed: {err}", kind.label());
                Err(err)
            }
        }
    }

    /// Attempts to claim the busy flag. Kept separate from `generate` so
    /// tests can hold the claim across a call.
    fn begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
            .then(|| BusyGuard(&self.busy))
    }

    /// Shared assets plus the applicant's own photo and signature, which
    /// templates reference as `photo` and `signature`.
    fn record_assets(&self, record: &ApplicantRecord) -> AssetStore {
        let mut assets = self.assets.clone();
        if let Some(photo) = record.photo_ref.as_deref() {
            if !assets.insert_ref("photo", photo) {
                log::debug!("photo for {:?} failed to load", record.subject_name());
            }
        }
        if let Some(signature) = record.signature_ref.as_deref() {
            if !assets.insert_ref("signature", signature) {
                log::debug!("signature for {:?} failed to load", record.subject_name());
            }
        }
        assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::LayoutStrategy;

    fn pipeline() -> Pipeline {
        Pipeline::builder().scale(1.0).build().unwrap()
    }

    fn sample_record() -> ApplicantRecord {
        serde_json::from_str(
            r#"{
                "fullName": "Somchai Jaidee",
                "personal": {
                    "firstName": "Somchai",
                    "lastName": "Jaidee",
                    "nationalId": "1100500123456",
                    "gender": "male",
                    "maritalStatus": "single"
                }
            }"#,
        )
        .unwrap()
    }

    fn sample_form() -> DocumentFormData {
        serde_json::from_str(
            r#"{
                "position": "Line Operator",
                "dailyWage": "380",
                "startDate": "2024-07-01",
                "probationDays": 119
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn rejects_invalid_scale() {
        assert!(Pipeline::builder().scale(0.0).build().is_err());
        assert!(Pipeline::builder().scale(f32::NAN).build().is_err());
    }

    #[test]
    fn rejects_corrupt_font() {
        let result = Pipeline::builder()
            .font_bytes("broken", vec![0, 1, 2, 3])
            .build();
        assert!(matches!(result, Err(FormPressError::Asset(_))));
    }

    #[test]
    fn second_generation_is_rejected_while_busy() {
        let p = pipeline();
        let _held = p.begin().unwrap();
        let result = p
            .generate(
                DocumentKind::InsuranceEnrollment,
                &sample_record(),
                &sample_form(),
            )
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn busy_flag_clears_after_generation() {
        let p = pipeline();
        for _ in 0..2 {
            let artifact = p
                .generate(
                    DocumentKind::CriminalCheckConsent,
                    &sample_record(),
                    &sample_form(),
                )
                .unwrap();
            assert!(artifact.is_some());
        }
    }

    #[test]
    fn dropping_the_guard_clears_the_flag() {
        let p = pipeline();
        drop(p.begin().unwrap());
        assert!(p.begin().is_some());
    }

    #[test]
    fn repeated_generation_is_reproducible() {
        let p = pipeline();
        let a = p
            .generate(
                DocumentKind::EmploymentContract,
                &sample_record(),
                &sample_form(),
            )
            .unwrap()
            .unwrap();
        let b = p
            .generate(
                DocumentKind::EmploymentContract,
                &sample_record(),
                &sample_form(),
            )
            .unwrap()
            .unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.to_pdf_bytes().unwrap(), b.to_pdf_bytes().unwrap());
    }

    #[test]
    fn prepaginated_kinds_emit_one_page_per_unit() {
        let p = pipeline();
        for kind in DocumentKind::all() {
            if kind.strategy() != LayoutStrategy::PrePaginated {
                continue;
            }
            let artifact = p
                .generate(kind, &sample_record(), &sample_form())
                .unwrap()
                .unwrap();
            assert_eq!(
                artifact.page_count(),
                kind.template().units.len(),
                "{}",
                kind.label()
            );
        }
    }

    #[test]
    fn application_sheet_slices_to_two_pages() {
        let p = pipeline();
        let artifact = p
            .generate(
                DocumentKind::ApplicationSheet,
                &sample_record(),
                &sample_form(),
            )
            .unwrap()
            .unwrap();
        assert_eq!(artifact.page_count(), 2);
    }

    #[test]
    fn missing_record_assets_do_not_fail_generation() {
        let p = pipeline();
        let mut record = sample_record();
        record.photo_ref = Some("/no/such/file.png".to_string());
        let artifact = p
            .generate(DocumentKind::ApplicationSheet, &record, &sample_form())
            .unwrap();
        assert!(artifact.is_some());
    }
}
