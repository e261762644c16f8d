//! Overlay primitives drawn on top of the document.
//!
//! Decorations are a pure projection of editor state: selection box, point
//! handles, control lines and the in-progress/preview paths. They are never
//! part of the serialized document.

use std::fmt::Write;

use crate::curve::{format_path_data, CurveCommand};
use crate::document::DrawingObject;
use crate::model::{DesignerShape, Point};
use crate::path_points::{PathPoints, PointKind};
use crate::selection_manager::HandleSizes;
use crate::serialization::escape_attribute;

/// Opacity of the tentative path drawn under the pointer.
const PREVIEW_OPACITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Box around `obj` grown by half its stroke plus `padding`.
    pub fn around(obj: &DrawingObject, padding: f64) -> Self {
        let (x1, y1, x2, y2) = obj.shape.bounds();
        let pad = obj.style.stroke_width / 2.0 + padding;
        Self {
            x: x1 - pad,
            y: y1 - pad,
            width: (x2 - x1) + pad * 2.0,
            height: (y2 - y1) + pad * 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleMarkerKind {
    /// Square marker
    Anchor,
    /// Round marker
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    pub kind: HandleMarkerKind,
    /// Index of the point in its path.
    pub index: usize,
    pub center: Point,
    /// Half side for anchors, radius for controls.
    pub size: f64,
}

/// Guide from a quadratic control to the anchor that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlLine {
    pub from: Point,
    pub to: Point,
}

/// A path overlay with its stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPath {
    pub commands: Vec<CurveCommand>,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decorations {
    pub bounding_box: Option<BoundingBox>,
    pub handles: Vec<HandleMarker>,
    pub control_lines: Vec<ControlLine>,
    pub live_path: Option<OverlayPath>,
    pub preview_path: Option<OverlayPath>,
}

impl Decorations {
    pub fn is_empty(&self) -> bool {
        self.bounding_box.is_none()
            && self.handles.is_empty()
            && self.control_lines.is_empty()
            && self.live_path.is_none()
            && self.preview_path.is_none()
    }

    /// Adds markers and control lines for every point in `points`.
    pub fn add_handles(&mut self, points: &PathPoints, sizes: &HandleSizes) {
        for (index, point) in points.iter().enumerate() {
            let (kind, size) = if point.is_anchor() {
                (HandleMarkerKind::Anchor, sizes.anchor_half_size)
            } else {
                (HandleMarkerKind::Control, sizes.control_radius)
            };
            self.handles.push(HandleMarker {
                kind,
                index,
                center: point.pos,
                size,
            });

            if let PointKind::Control { anchor_index } = point.kind {
                if let Some(anchor) = points.get(anchor_index) {
                    self.control_lines.push(ControlLine {
                        from: point.pos,
                        to: anchor.pos,
                    });
                }
            }
        }
    }

    pub fn set_live_path(&mut self, commands: Vec<CurveCommand>, stroke: &str, stroke_width: f64) {
        self.live_path = overlay(commands, stroke, stroke_width, 1.0);
    }

    pub fn set_preview_path(&mut self, commands: Vec<CurveCommand>, stroke: &str, stroke_width: f64) {
        self.preview_path = overlay(commands, stroke, stroke_width, PREVIEW_OPACITY);
    }

    /// Renders the overlay as an SVG fragment.
    pub fn overlay_markup(&self) -> String {
        let mut out = String::new();

        for path in [&self.live_path, &self.preview_path].into_iter().flatten() {
            let _ = write!(
                out,
                r#"<path class="{}" d="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}" fill="none"/>"#,
                if path.opacity < 1.0 { "preview-path" } else { "live-path" },
                format_path_data(&path.commands),
                escape_attribute(&path.stroke),
                path.stroke_width,
                path.opacity,
            );
        }

        if let Some(bb) = self.bounding_box {
            let _ = write!(
                out,
                r#"<rect class="bounding-box" x="{}" y="{}" width="{}" height="{}" fill="none"/>"#,
                bb.x, bb.y, bb.width, bb.height
            );
        }

        for line in &self.control_lines {
            let _ = write!(
                out,
                r#"<line class="control-line" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                line.from.x, line.from.y, line.to.x, line.to.y
            );
        }

        for handle in &self.handles {
            let _ = match handle.kind {
                HandleMarkerKind::Anchor => write!(
                    out,
                    r#"<rect class="anchor-point" data-index="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
                    handle.index,
                    handle.center.x - handle.size,
                    handle.center.y - handle.size,
                    handle.size * 2.0,
                    handle.size * 2.0
                ),
                HandleMarkerKind::Control => write!(
                    out,
                    r#"<circle class="control-point" data-index="{}" cx="{}" cy="{}" r="{}"/>"#,
                    handle.index, handle.center.x, handle.center.y, handle.size
                ),
            };
        }

        out
    }
}

fn overlay(
    commands: Vec<CurveCommand>,
    stroke: &str,
    stroke_width: f64,
    opacity: f64,
) -> Option<OverlayPath> {
    if commands.is_empty() {
        return None;
    }
    Some(OverlayPath {
        commands,
        stroke: stroke.to_string(),
        stroke_width,
        opacity,
    })
}
