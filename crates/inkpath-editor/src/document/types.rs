//! Document type definitions: DrawingObject, Layer.

use inkpath_core::constants::DEFAULT_STROKE_COLOR;

use crate::model::{DesignerShape, Fill, GeometryUpdate, Point, Shape, ShapeStyle, ShapeType};

/// A shape placed in the document with its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: u64,
    pub layer_id: String,
    pub shape: Shape,
    pub style: ShapeStyle,
    pub selected: bool,
}

impl DrawingObject {
    /// Creates a drawing object, normalizing its style for the shape kind.
    pub fn create(id: u64, layer_id: impl Into<String>, shape: Shape, style: ShapeStyle) -> Self {
        let mut obj = Self {
            id,
            layer_id: layer_id.into(),
            shape,
            style: ShapeStyle::default(),
            selected: false,
        };
        obj.update_style(style);
        obj
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// Replaces the style, normalized the way it reads back from markup.
    ///
    /// Paths are never filled, a blank stroke falls back to the default color
    /// and negative or non-finite widths become zero.
    pub fn update_style(&mut self, mut style: ShapeStyle) {
        style.fill = match self.shape_type() {
            ShapeType::Path => Fill::None,
            _ => Fill::from_attribute(style.fill.as_attribute()),
        };
        let stroke = style.stroke.trim();
        style.stroke = if stroke.is_empty() {
            DEFAULT_STROKE_COLOR.to_string()
        } else {
            stroke.to_string()
        };
        if !style.stroke_width.is_finite() || style.stroke_width < 0.0 {
            tracing::debug!("Stroke width {} reset to 0", style.stroke_width);
            style.stroke_width = 0.0;
        }
        self.style = style;
    }

    /// Applies a bounding-box edit to a rectangle or ellipse.
    pub fn update_geometry(&mut self, update: GeometryUpdate) -> bool {
        self.shape.set_geometry(update)
    }

    /// Hit-test slack for this object: the caller's tolerance plus half the stroke.
    pub fn hit_tolerance(&self, base: f64) -> f64 {
        base + self.style.stroke_width / 2.0
    }

    pub fn contains_point(&self, point: &Point, base_tolerance: f64) -> bool {
        self.shape
            .contains_point(*point, self.hit_tolerance(base_tolerance))
    }

    /// Editable path points are shown as handles when selected.
    pub fn has_handles(&self) -> bool {
        self.shape
            .as_path()
            .is_some_and(|p| p.is_editable() && !p.points().is_empty())
    }
}

/// A named, ordered group of drawing objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: String,
    pub objects: Vec<DrawingObject>,
}

impl Layer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            objects: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
