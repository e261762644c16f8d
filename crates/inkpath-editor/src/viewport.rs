//! Mapping from pointer (client) coordinates to document coordinates.
//!
//! The drawing surface sits at `origin` in client space, may be scrolled by
//! `scroll` and is displayed at `scale`. Every pointer event is converted
//! through [`Viewport::to_document_coords`] before it reaches hit-testing or
//! point storage.

use std::fmt;

use crate::editor_state::PointerEvent;
use crate::model::Point;

#[derive(Debug, Clone)]
pub struct Viewport {
    origin: Point,
    scroll: Point,
    scale: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            scroll: Point::new(0.0, 0.0),
            scale: 1.0,
        }
    }

    /// Client position of the drawing surface's top-left corner.
    pub fn surface_origin(&self) -> Point {
        self.origin
    }

    pub fn set_surface_origin(&mut self, x: f64, y: f64) {
        self.origin = Point::new(x, y);
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }

    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.scroll = Point::new(x, y);
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the display scale. Non-positive or non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        } else {
            tracing::warn!("Ignoring invalid viewport scale {}", scale);
        }
    }

    /// Converts a pointer event into integer document coordinates.
    pub fn to_document_coords(&self, event: &PointerEvent) -> Point {
        self.client_to_document(event.client_x, event.client_y)
    }

    pub fn client_to_document(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(
            ((client_x - self.origin.x + self.scroll.x) / self.scale).floor(),
            ((client_y - self.origin.y + self.scroll.y) / self.scale).floor(),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(origin: ({:.1}, {:.1}), scroll: ({:.1}, {:.1}), scale: {:.2})",
            self.origin.x, self.origin.y, self.scroll.x, self.scroll.y, self.scale
        )
    }
}
