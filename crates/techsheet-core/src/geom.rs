#![forbid(unsafe_code)]

/// Marker for lengths expressed in the source document's user units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentUnit;

pub type Size = euclid::Size2D<f64, DocumentUnit>;

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}
