use crate::geom::{self, Size};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Shape kinds recognized by the extractor.
///
/// The declaration order is also the extraction priority: all rectangles of a document are
/// reported before any circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Rect, ShapeKind::Circle];

    /// SVG element local name, which doubles as the type tag and the default object id.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { width: f64, height: f64 },
    Circle { radius: f64 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    pub fn width(&self) -> f64 {
        match *self {
            Shape::Rect { width, .. } => width,
            Shape::Circle { radius } => 2.0 * radius,
        }
    }

    pub fn height(&self) -> f64 {
        match *self {
            Shape::Rect { height, .. } => height,
            Shape::Circle { radius } => 2.0 * radius,
        }
    }

    /// Bounding size of the shape (a circle reports its diameter on both axes).
    pub fn size(&self) -> Size {
        geom::size(self.width(), self.height())
    }
}

/// A recognized graphical object with its dimensions.
///
/// Ids are copied from the source document and are not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignObject {
    pub id: String,
    pub shape: Shape,
}

impl DesignObject {
    pub fn new(id: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            shape,
        }
    }

    pub fn rect(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self::new(id, Shape::Rect { width, height })
    }

    pub fn circle(id: impl Into<String>, radius: f64) -> Self {
        Self::new(id, Shape::Circle { radius })
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn width(&self) -> f64 {
        self.shape.width()
    }

    pub fn height(&self) -> f64 {
        self.shape.height()
    }
}

// Flattened to `{ id, type, width, height }` so consumers never need to know about `Shape`.
impl Serialize for DesignObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DesignObject", 4)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("type", &self.kind())?;
        s.serialize_field("width", &self.width())?;
        s.serialize_field("height", &self.height())?;
        s.end()
    }
}
