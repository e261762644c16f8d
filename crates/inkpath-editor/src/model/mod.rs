use lyon::path::Path;
use serde::{Deserialize, Serialize};

use inkpath_core::constants::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};

mod ellipse;
mod path;
mod rectangle;

pub use ellipse::DesignEllipse;
pub use path::DesignPath;
pub use rectangle::DesignRectangle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn number(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value: PropertyValue::Number(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    String(String),
    Bool(bool),
}

pub trait DesignerShape {
    fn render(&self) -> Path;
    /// `(min_x, min_y, max_x, max_y)`
    fn bounds(&self) -> (f64, f64, f64, f64);
    fn properties(&self) -> Vec<Property>;
    fn contains_point(&self, p: Point, tolerance: f64) -> bool;
}

/// Fill paint of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fill {
    /// Transparent
    #[default]
    None,
    Color(String),
}

impl Fill {
    /// Parses an SVG `fill` attribute value.
    pub fn from_attribute(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("none") {
            Fill::None
        } else {
            Fill::Color(value.to_string())
        }
    }

    pub fn as_attribute(&self) -> &str {
        match self {
            Fill::None => "none",
            Fill::Color(c) => c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: Fill,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill: Fill::None,
        }
    }
}

/// Bounding-box form of a rectangle or ellipse, as edited in the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryUpdate {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Path,
    Rectangle,
    Ellipse,
}

impl ShapeType {
    /// SVG element name.
    pub fn element_name(&self) -> &'static str {
        match self {
            ShapeType::Path => "path",
            ShapeType::Rectangle => "rect",
            ShapeType::Ellipse => "ellipse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Path(DesignPath),
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
}

impl DesignerShape for Shape {
    fn render(&self) -> Path {
        match self {
            Shape::Path(s) => s.render(),
            Shape::Rectangle(s) => s.render(),
            Shape::Ellipse(s) => s.render(),
        }
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Path(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
        }
    }

    fn properties(&self) -> Vec<Property> {
        match self {
            Shape::Path(s) => s.properties(),
            Shape::Rectangle(s) => s.properties(),
            Shape::Ellipse(s) => s.properties(),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            Shape::Path(s) => s.contains_point(p, tolerance),
            Shape::Rectangle(s) => s.contains_point(p, tolerance),
            Shape::Ellipse(s) => s.contains_point(p, tolerance),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Path(_) => ShapeType::Path,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
        }
    }

    pub fn as_path(&self) -> Option<&DesignPath> {
        match self {
            Shape::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_path_mut(&mut self) -> Option<&mut DesignPath> {
        match self {
            Shape::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Applies a bounding-box edit. Paths ignore it and return false.
    pub fn set_geometry(&mut self, update: GeometryUpdate) -> bool {
        match self {
            Shape::Path(_) => false,
            Shape::Rectangle(r) => {
                r.set_geometry(update);
                true
            }
            Shape::Ellipse(e) => {
                e.set_geometry(update);
                true
            }
        }
    }

    /// Bounding-box form for rectangles and ellipses.
    pub fn geometry(&self) -> Option<GeometryUpdate> {
        match self {
            Shape::Path(_) => None,
            Shape::Rectangle(r) => Some(r.geometry()),
            Shape::Ellipse(e) => Some(e.geometry()),
        }
    }
}

/// Clamps an extent to the minimum, logging when it had to.
pub(crate) fn clamp_extent(field: &'static str, value: f64) -> f64 {
    use inkpath_core::constants::MIN_SHAPE_EXTENT;

    if value.is_finite() && value >= MIN_SHAPE_EXTENT {
        return value;
    }
    tracing::debug!(
        "{}",
        inkpath_core::Recovery::InvalidGeometry {
            field,
            value,
            clamped: MIN_SHAPE_EXTENT,
        }
    );
    MIN_SHAPE_EXTENT
}

/// Replaces a non-finite coordinate with zero.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
