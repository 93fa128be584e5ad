//! Checks extracted objects against expected dimensions.
//!
//! The check is spec-driven: objects whose id has no (non-empty) spec entry are skipped, and
//! spec entries that match no object are not reported.

use crate::Result;
use crate::model::DesignObject;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum absolute deviation accepted when no tolerance is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Width,
    Height,
}

impl Field {
    /// Fields in the order they are checked.
    pub const ALL: [Field; 2] = [Field::Width, Field::Height];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
        }
    }

    pub fn actual(self, object: &DesignObject) -> f64 {
        match self {
            Field::Width => object.width(),
            Field::Height => object.height(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected dimensions for one object id. Unset fields are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectedDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl ExpectedDimensions {
    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Width => self.width,
            Field::Height => self.height,
        }
    }

    /// An empty entry is treated exactly like a missing one.
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Expected dimensions keyed by object id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionSpec {
    entries: FxHashMap<String, ExpectedDimensions>,
}

impl DimensionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `{"<id>": {"width": <n>, "height": <n>}, ...}`. Other keys inside an entry are
    /// ignored.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn insert(&mut self, id: impl Into<String>, expected: ExpectedDimensions) {
        self.entries.insert(id.into(), expected);
    }

    pub fn with(mut self, id: impl Into<String>, expected: ExpectedDimensions) -> Self {
        self.insert(id, expected);
        self
    }

    pub fn get(&self, id: &str) -> Option<&ExpectedDimensions> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ExpectedDimensions)> for DimensionSpec {
    fn from_iter<I: IntoIterator<Item = (K, ExpectedDimensions)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub id: String,
    pub field: Field,
    pub expected: f64,
    pub actual: f64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} expected {}, got {}",
            self.id, self.field, self.expected, self.actual
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerifyOptions {
    pub tolerance: f64,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl VerifyOptions {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

/// Returns one [`Mismatch`] per (object, field) pair that deviates from `spec` by more than
/// `tolerance`.
///
/// Output follows object order, then field order (width before height). Objects sharing an id
/// are checked independently, so duplicates can produce duplicate mismatches.
pub fn verify_against_spec(
    objects: &[DesignObject],
    spec: &DimensionSpec,
    tolerance: f64,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for obj in objects {
        let Some(expected) = spec.get(&obj.id).filter(|e| !e.is_empty()) else {
            continue;
        };
        for field in Field::ALL {
            let Some(exp) = expected.get(field) else {
                continue;
            };
            let act = field.actual(obj);
            if (act - exp).abs() > tolerance {
                mismatches.push(Mismatch {
                    id: obj.id.clone(),
                    field,
                    expected: exp,
                    actual: act,
                });
            }
        }
    }
    mismatches
}

pub fn verify_with(
    objects: &[DesignObject],
    spec: &DimensionSpec,
    options: &VerifyOptions,
) -> Vec<Mismatch> {
    verify_against_spec(objects, spec, options.tolerance)
}
