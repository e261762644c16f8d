use inkpath_core::constants::{ANCHOR_HANDLE_HALF_SIZE, CONTROL_HANDLE_RADIUS};
use inkpath_settings::EditorSettings;

use crate::document::Document;
use crate::model::Point;
use crate::path_points::PathPoint;

/// Size of the on-screen handle markers, in document units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSizes {
    /// Half the side of the square anchor marker
    pub anchor_half_size: f64,
    /// Radius of the round control marker
    pub control_radius: f64,
}

impl HandleSizes {
    /// True when `p` falls on the marker drawn for `point`.
    pub fn hits(&self, point: &PathPoint, p: Point) -> bool {
        if point.is_anchor() {
            (p.x - point.pos.x).abs() <= self.anchor_half_size
                && (p.y - point.pos.y).abs() <= self.anchor_half_size
        } else {
            p.distance_to(&point.pos) <= self.control_radius
        }
    }
}

impl Default for HandleSizes {
    fn default() -> Self {
        Self {
            anchor_half_size: ANCHOR_HANDLE_HALF_SIZE,
            control_radius: CONTROL_HANDLE_RADIUS,
        }
    }
}

impl From<&EditorSettings> for HandleSizes {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            anchor_half_size: settings.anchor_handle_half_size,
            control_radius: settings.control_handle_radius,
        }
    }
}

/// A point of a path being dragged by its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleDrag {
    pub shape_id: u64,
    pub index: usize,
}

/// Tracks the active shape and an in-progress handle drag.
///
/// The `selected` flags on drawing objects are kept in sync through
/// [`Document::set_active`], so at most one object is ever selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<u64>,
    drag: Option<HandleDrag>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Makes `id` the active shape (or clears it), updating the document flags.
    pub fn select(&mut self, document: &mut Document, id: Option<u64>) {
        let found = document.set_active(id);
        self.selected_id = if found { id } else { None };
        if self.drag.is_some_and(|d| Some(d.shape_id) != self.selected_id) {
            self.drag = None;
        }
    }

    pub fn deselect_all(&mut self, document: &mut Document) {
        self.select(document, None);
    }

    /// Selects the topmost shape at `point`; a miss clears the selection.
    pub fn select_at(&mut self, document: &mut Document, point: &Point, tolerance: f64) -> Option<u64> {
        let hit = document.hit_test(point, tolerance);
        self.select(document, hit);
        tracing::trace!("Select at ({}, {}) -> {:?}", point.x, point.y, hit);
        hit
    }

    /// Index of the handle of the active path under `point`, topmost first.
    pub fn handle_at(&self, document: &Document, point: &Point, sizes: &HandleSizes) -> Option<usize> {
        let obj = document.get(self.selected_id?)?;
        if !obj.has_handles() {
            return None;
        }
        let path = obj.shape.as_path()?;
        path.points()
            .as_slice()
            .iter()
            .rposition(|handle| sizes.hits(handle, *point))
    }

    pub fn begin_handle_drag(&mut self, shape_id: u64, index: usize) {
        tracing::debug!("Dragging handle {} of shape {}", index, shape_id);
        self.drag = Some(HandleDrag { shape_id, index });
    }

    pub fn handle_drag(&self) -> Option<HandleDrag> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Moves the dragged point to `point` and re-derives the path.
    pub fn drag_to(&self, document: &mut Document, point: Point) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        document
            .get_mut(drag.shape_id)
            .and_then(|obj| obj.shape.as_path_mut())
            .is_some_and(|path| path.set_point(drag.index, point))
    }

    pub fn end_drag(&mut self) -> Option<HandleDrag> {
        self.drag.take()
    }

    /// Forgets the selection without touching the document (it was replaced).
    pub fn reset(&mut self) {
        self.selected_id = None;
        self.drag = None;
    }
}
