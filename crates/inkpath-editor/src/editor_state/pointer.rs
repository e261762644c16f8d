//! Pointer routing: select, path tools and shape drags.

use super::{EditorState, PointerEvent, ShapeDrag, Tool};
use crate::model::{DesignEllipse, DesignPath, DesignRectangle, Point, Shape, ShapeType};
use crate::path_builder::{BuildStep, FinishedPath};

impl EditorState {
    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        let p = self.viewport.to_document_coords(event);
        tracing::trace!("Pointer down at ({}, {}) with {:?}", p.x, p.y, self.tool);
        self.pressed = true;

        match self.tool {
            Tool::Select => self.select_down(p),
            Tool::Pen | Tool::QuadraticBezier | Tool::CubicBezier => {
                let Some(builder) = self.builder.as_mut() else {
                    return;
                };
                if !builder.is_active() {
                    self.selection.deselect_all(&mut self.document);
                }
                let step = builder.pointer_down(p);
                self.apply_step(step);
            }
            Tool::Rectangle | Tool::Ellipse => {
                self.selection.deselect_all(&mut self.document);
                let kind = if self.tool == Tool::Rectangle {
                    ShapeType::Rectangle
                } else {
                    ShapeType::Ellipse
                };
                self.shape_drag = Some(ShapeDrag {
                    kind,
                    start: p,
                    shape_id: None,
                });
            }
        }
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let p = self.viewport.to_document_coords(event);

        match self.tool {
            Tool::Select => {
                if self.selection.drag_to(&mut self.document, p) {
                    self.mark_modified();
                }
            }
            Tool::Pen | Tool::QuadraticBezier | Tool::CubicBezier => {
                let Some(builder) = self.builder.as_mut() else {
                    return;
                };
                let step = builder.pointer_move(p);
                if builder.is_active() && self.throttle.should_render(event.timestamp_ms) {
                    self.preview = builder.preview(p);
                }
                self.apply_step(step);
            }
            Tool::Rectangle | Tool::Ellipse => {
                if self.pressed {
                    self.drag_shape_to(p);
                }
            }
        }
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        let p = self.viewport.to_document_coords(event);
        self.pressed = false;

        match self.tool {
            Tool::Select => {
                if let Some(drag) = self.selection.end_drag() {
                    tracing::debug!("Handle drag ended on shape {}", drag.shape_id);
                }
            }
            Tool::Pen | Tool::QuadraticBezier | Tool::CubicBezier => {
                let Some(builder) = self.builder.as_mut() else {
                    return;
                };
                let step = builder.pointer_up(p);
                self.apply_step(step);
            }
            Tool::Rectangle | Tool::Ellipse => {
                self.drag_shape_to(p);
                if let Some(id) = self.shape_drag.take().and_then(|d| d.shape_id) {
                    tracing::debug!("Shape {} drawn", id);
                }
            }
        }
    }

    /// Ends the in-progress path the way a double click does.
    pub fn on_double_click(&mut self, _event: &PointerEvent) {
        if let Some(builder) = self.builder.as_mut() {
            let step = builder.finish();
            self.apply_step(step);
        }
    }

    /// Ends the in-progress path keeping every placed point.
    pub fn end_path(&mut self) {
        self.commit_in_progress();
    }

    pub(super) fn commit_in_progress(&mut self) {
        if let Some(finished) = self.builder.as_mut().and_then(|b| b.take_in_progress()) {
            self.commit_path(finished);
        }
    }

    fn select_down(&mut self, p: Point) {
        let sizes = self.handle_sizes();
        if let (Some(id), Some(index)) = (
            self.selection.selected_id(),
            self.selection.handle_at(&self.document, &p, &sizes),
        ) {
            self.selection.begin_handle_drag(id, index);
            return;
        }
        let hit = self
            .selection
            .select_at(&mut self.document, &p, self.settings.hit_tolerance);
        // Picked-up stroke becomes the current style for the next shape.
        if let Some(obj) = hit.and_then(|id| self.document.get(id)) {
            self.style.stroke = obj.style.stroke.clone();
            self.style.stroke_width = obj.style.stroke_width;
        }
    }

    fn apply_step(&mut self, step: BuildStep) {
        match step {
            BuildStep::Finished(finished) => self.commit_path(finished),
            BuildStep::Started => self.throttle.reset(),
            BuildStep::Extended | BuildStep::Ignored => {}
        }
    }

    fn commit_path(&mut self, finished: FinishedPath) {
        self.preview = None;
        self.throttle.reset();
        if finished.points.len() < 2 {
            tracing::debug!("Discarding path with {} point(s)", finished.points.len());
            return;
        }
        let path = DesignPath::new(finished.points, finished.mode, finished.closed);
        let id = self
            .document
            .add_shape(Shape::Path(path), self.style.clone());
        tracing::debug!(
            "Committed {:?} path {} (closed: {})",
            finished.mode,
            id,
            finished.closed
        );
        self.mark_modified();
    }

    fn drag_shape_to(&mut self, p: Point) {
        let Some(drag) = self.shape_drag.as_mut() else {
            return;
        };
        if drag.shape_id.is_none() && p == drag.start {
            return;
        }
        let shape = match drag.kind {
            ShapeType::Ellipse => Shape::Ellipse(DesignEllipse::from_drag(drag.start, p)),
            _ => Shape::Rectangle(DesignRectangle::from_drag(drag.start, p)),
        };
        match drag.shape_id {
            Some(id) => {
                if let Some(obj) = self.document.get_mut(id) {
                    obj.shape = shape;
                }
            }
            None => {
                drag.shape_id = Some(self.document.add_shape(shape, self.style.clone()));
            }
        }
        self.mark_modified();
    }
}
