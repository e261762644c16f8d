use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use super::{clamp_extent, finite_or_zero, DesignerShape, GeometryUpdate, Point, Property};

/// Axis-aligned rectangle stored by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            width: clamp_extent("width", width),
            height: clamp_extent("height", height),
        }
    }

    /// Rectangle spanned by a pointer drag, whatever its direction.
    pub fn from_drag(start: Point, current: Point) -> Self {
        Self::new(
            start.x.min(current.x),
            start.y.min(current.y),
            (current.x - start.x).abs(),
            (current.y - start.y).abs(),
        )
    }

    pub fn geometry(&self) -> GeometryUpdate {
        GeometryUpdate {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_geometry(&mut self, update: GeometryUpdate) {
        *self = Self::new(update.x, update.y, update.width, update.height);
    }
}

impl DesignerShape for DesignRectangle {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_rectangle(
            &Box2D::new(
                point(self.x as f32, self.y as f32),
                point((self.x + self.width) as f32, (self.y + self.height) as f32),
            ),
            Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::number("X", self.x),
            Property::number("Y", self.y),
            Property::number("Width", self.width),
            Property::number("Height", self.height),
        ]
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.x - tolerance
            && p.x <= self.x + self.width + tolerance
            && p.y >= self.y - tolerance
            && p.y <= self.y + self.height + tolerance
    }
}
