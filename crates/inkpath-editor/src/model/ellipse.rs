use lyon::math::{point, vector, Angle};
use lyon::path::{Path, Winding};
use serde::{Deserialize, Serialize};

use super::{clamp_extent, finite_or_zero, DesignerShape, GeometryUpdate, Point, Property};

/// Axis-aligned ellipse.
///
/// Persisted as center and radii but edited through its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignEllipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl DesignEllipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self {
            center: Point::new(finite_or_zero(center.x), finite_or_zero(center.y)),
            rx: clamp_extent("rx", rx),
            ry: clamp_extent("ry", ry),
        }
    }

    /// Ellipse inscribed in the box spanned by a pointer drag.
    pub fn from_drag(start: Point, current: Point) -> Self {
        let x = start.x.min(current.x);
        let y = start.y.min(current.y);
        let width = (current.x - start.x).abs();
        let height = (current.y - start.y).abs();
        Self::from_bounding_box(x, y, width, height)
    }

    pub fn from_bounding_box(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            Point::new(x + width / 2.0, y + height / 2.0),
            width / 2.0,
            height / 2.0,
        )
    }

    pub fn geometry(&self) -> GeometryUpdate {
        GeometryUpdate {
            x: self.center.x - self.rx,
            y: self.center.y - self.ry,
            width: self.rx * 2.0,
            height: self.ry * 2.0,
        }
    }

    pub fn set_geometry(&mut self, update: GeometryUpdate) {
        *self = Self::from_bounding_box(update.x, update.y, update.width, update.height);
    }
}

impl DesignerShape for DesignEllipse {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(self.center.x as f32, self.center.y as f32),
            vector(self.rx as f32, self.ry as f32),
            Angle::radians(0.0),
            Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.rx,
            self.center.y - self.ry,
            self.center.x + self.rx,
            self.center.y + self.ry,
        )
    }

    fn properties(&self) -> Vec<Property> {
        let g = self.geometry();
        vec![
            Property::number("X", g.x),
            Property::number("Y", g.y),
            Property::number("Width", g.width),
            Property::number("Height", g.height),
        ]
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        // (x/a)^2 + (y/b)^2 <= 1 with the radii grown by the tolerance
        let nx = (p.x - self.center.x) / (self.rx + tolerance);
        let ny = (p.y - self.center.y) / (self.ry + tolerance);
        nx * nx + ny * ny <= 1.0
    }
}
