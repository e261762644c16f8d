//! Style and geometry setters plus the property panel view.

use super::EditorState;
use crate::model::{DesignerShape, Fill, GeometryUpdate, Property, ShapeStyle, ShapeType};

/// What the property panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPanel {
    /// False when nothing is selected.
    pub enabled: bool,
    pub shape_type: Option<ShapeType>,
    /// Style of the active shape, or the style for new shapes.
    pub style: ShapeStyle,
    /// Bounding-box form for rectangles and ellipses.
    pub geometry: Option<GeometryUpdate>,
    pub properties: Vec<Property>,
}

impl EditorState {
    pub fn property_panel(&self) -> PropertyPanel {
        match self.active_object() {
            Some(obj) => PropertyPanel {
                enabled: true,
                shape_type: Some(obj.shape_type()),
                style: obj.style.clone(),
                geometry: obj.shape.geometry(),
                properties: obj.shape.properties(),
            },
            None => PropertyPanel {
                enabled: false,
                shape_type: None,
                style: self.style.clone(),
                geometry: None,
                properties: Vec::new(),
            },
        }
    }

    /// Sets the stroke color for new shapes and the active one.
    pub fn set_stroke_color(&mut self, color: &str) {
        self.style.stroke = color.to_string();
        self.restyle_active(|style| style.stroke = color.to_string());
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        if !(width.is_finite() && width >= 0.0) {
            tracing::warn!("Ignoring invalid stroke width {}", width);
            return;
        }
        self.style.stroke_width = width;
        self.restyle_active(|style| style.stroke_width = width);
    }

    /// Sets the fill for new shapes and the active one. Paths stay unfilled.
    pub fn set_fill(&mut self, fill: Fill) {
        self.style.fill = fill.clone();
        self.restyle_active(|style| style.fill = fill);
    }

    /// Applies a bounding-box edit to the active rectangle or ellipse.
    pub fn update_active_geometry(&mut self, update: GeometryUpdate) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        let changed = self
            .document
            .get_mut(id)
            .is_some_and(|obj| obj.update_geometry(update));
        if changed {
            self.mark_modified();
        }
        changed
    }

    fn active_object(&self) -> Option<&crate::document::DrawingObject> {
        self.selection
            .selected_id()
            .and_then(|id| self.document.get(id))
    }

    fn restyle_active(&mut self, edit: impl FnOnce(&mut ShapeStyle)) {
        let Some(obj) = self
            .selection
            .selected_id()
            .and_then(|id| self.document.get_mut(id))
        else {
            return;
        };
        let mut style = obj.style.clone();
        edit(&mut style);
        obj.update_style(style);
        self.mark_modified();
    }
}
