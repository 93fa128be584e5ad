#![forbid(unsafe_code)]

//! `techsheet` turns SVG design files into client and workshop tech sheets.
//!
//! This crate re-exports [`techsheet_core`] and adds the orchestration on top of it:
//! extract, verify against a [`DimensionSpec`], then format both sheets. Mismatches are returned
//! alongside the sheets; they never prevent sheet generation; acting on them is left to the
//! caller.

pub use techsheet_core::*;

use serde::Serialize;
use std::path::Path;

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechSheets {
    pub client_sheet: String,
    pub workshop_sheet: String,
    pub mismatches: Vec<Mismatch>,
}

impl TechSheets {
    pub fn has_mismatches(&self) -> bool {
        !self.mismatches.is_empty()
    }
}

/// Extracts, verifies and formats with default options.
pub fn create_tech_sheets(path: impl AsRef<Path>, spec: &DimensionSpec) -> Result<TechSheets> {
    TechSheetGenerator::default().generate(path, spec)
}

/// Bundles verification and formatting options so repeated runs don't have to pass them around.
#[derive(Debug, Clone, Default)]
pub struct TechSheetGenerator {
    pub verify: VerifyOptions,
    pub labels: SheetLabels,
}

impl TechSheetGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.verify.tolerance = tolerance;
        self
    }

    pub fn with_labels(mut self, labels: SheetLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_locale(self, locale: SheetLocale) -> Self {
        self.with_labels(SheetLabels::for_locale(locale))
    }

    pub fn generate(&self, path: impl AsRef<Path>, spec: &DimensionSpec) -> Result<TechSheets> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("generate", path = %path.display()).entered();
        let objects = extract_dimensions(path)?;
        tracing::debug!(count = objects.len(), "extracted design objects");
        Ok(self.generate_from_objects(&objects, spec))
    }

    pub fn generate_from_objects(
        &self,
        objects: &[DesignObject],
        spec: &DimensionSpec,
    ) -> TechSheets {
        let mismatches = verify_with(objects, spec, &self.verify);
        for m in &mismatches {
            tracing::warn!(
                id = %m.id,
                field = %m.field,
                expected = m.expected,
                actual = m.actual,
                "dimension mismatch"
            );
        }

        TechSheets {
            client_sheet: format_client_sheet_with(objects, &self.labels),
            workshop_sheet: format_workshop_sheet_with(objects, &self.labels),
            mismatches,
        }
    }
}
