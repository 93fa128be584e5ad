//! Dimension extraction from design files.
//!
//! Only SVG is supported. Objects are grouped by type in a fixed priority order (all `<rect>`
//! elements, then all `<circle>` elements) and keep document order within each group. Mixed
//! documents are therefore *not* reported in strict document order.

use crate::model::{DesignObject, Shape, ShapeKind};
use crate::{Error, Result};
use std::path::Path;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignFormat {
    Svg,
    /// CorelDRAW. Recognized so it can be rejected with a precise error.
    Cdr,
}

impl DesignFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("cdr") => Ok(Self::Cdr),
            _ => Err(Error::InvalidInput {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Svg => "SVG",
            Self::Cdr => "CDR",
        }
    }
}

/// Extracts objects and their dimensions from a design file.
///
/// The file is read once; nothing is cached between calls.
pub fn extract_dimensions(path: impl AsRef<Path>) -> Result<Vec<DesignObject>> {
    let path = path.as_ref();
    match DesignFormat::from_path(path)? {
        DesignFormat::Svg => {
            let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            extract_svg_str(&text)
        }
        format @ DesignFormat::Cdr => Err(Error::UnsupportedFormat {
            format: format.name(),
        }),
    }
}

/// Extracts objects from SVG text already held in memory.
pub fn extract_svg_str(svg: &str) -> Result<Vec<DesignObject>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(svg, options)?;
    let root = doc.root_element();

    let mut objects = Vec::new();
    for kind in ShapeKind::ALL {
        // `descendants()` starts with the root itself, which is never a shape.
        for node in root
            .descendants()
            .skip(1)
            .filter(|n| is_svg_element(n, kind.as_str()))
        {
            objects.push(design_object(&node, kind)?);
        }
    }
    Ok(objects)
}

fn is_svg_element(node: &roxmltree::Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(SVG_NAMESPACE)
        && node.tag_name().name() == local_name
}

fn design_object(node: &roxmltree::Node<'_, '_>, kind: ShapeKind) -> Result<DesignObject> {
    let element = kind.as_str();
    let shape = match kind {
        ShapeKind::Rect => Shape::Rect {
            width: length_attr(node, element, "width")?.unwrap_or(0.0),
            height: length_attr(node, element, "height")?.unwrap_or(0.0),
        },
        ShapeKind::Circle => Shape::Circle {
            radius: length_attr(node, element, "r")?.unwrap_or(0.0),
        },
    };
    let id = node.attribute("id").unwrap_or(element);
    Ok(DesignObject::new(id, shape))
}

/// Reads a plain numeric length. `None` means the attribute is absent; callers decide the
/// default.
fn length_attr(
    node: &roxmltree::Node<'_, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<Option<f64>> {
    let Some(raw) = node.attribute(attribute) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(Error::InvalidAttribute {
            element,
            attribute,
            value: raw.to_string(),
        }),
    }
}
