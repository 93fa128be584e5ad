#![forbid(unsafe_code)]

//! Dimension extraction, spec verification and tech sheet formatting (headless).
//!
//! The pipeline is linear and synchronous:
//! - [`extract_dimensions`] reads an SVG file into [`DesignObject`]s
//! - [`verify_against_spec`] compares them with a [`DimensionSpec`]
//! - [`format_client_sheet`] / [`format_workshop_sheet`] render the text reports
//!
//! Nothing here logs or caches; every call is a pure function of its inputs plus at most one
//! file read.

pub mod error;
pub mod extract;
pub mod geom;
pub mod model;
pub mod sheet;
pub mod verify;

pub use error::{Error, Result};
pub use extract::{DesignFormat, SVG_NAMESPACE, extract_dimensions, extract_svg_str};
pub use model::{DesignObject, Shape, ShapeKind};
pub use sheet::{
    SheetLabels, SheetLocale, format_client_sheet, format_client_sheet_with,
    format_workshop_sheet, format_workshop_sheet_with,
};
pub use verify::{
    DEFAULT_TOLERANCE, DimensionSpec, ExpectedDimensions, Field, Mismatch, VerifyOptions,
    verify_against_spec, verify_with,
};
