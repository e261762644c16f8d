use lyon::path::iterator::*;
use lyon::path::{Event, Path};
use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point, Property, PropertyValue};
use crate::curve::{build_lyon_path, format_path_data, CurveCommand};
use crate::path_points::{CurveMode, PathPoints};

/// Flattening tolerance used for bounds and hit-testing.
const FLATTEN_TOLERANCE: f32 = 0.1;

/// A path shape.
///
/// Editable paths own a point sequence and cache the commands derived from
/// it. Paths imported from hand-written markup that cannot be expressed as a
/// point sequence keep their parsed commands as fixed geometry instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPath {
    points: PathPoints,
    mode: CurveMode,
    closed: bool,
    commands: Vec<CurveCommand>,
    editable: bool,
}

impl DesignPath {
    pub fn new(points: PathPoints, mode: CurveMode, closed: bool) -> Self {
        let commands = points.to_curve_commands(mode, closed);
        Self {
            points,
            mode,
            closed,
            commands,
            editable: true,
        }
    }

    /// Path with fixed, non-editable geometry.
    pub fn from_commands(commands: Vec<CurveCommand>) -> Self {
        let closed = matches!(commands.last(), Some(CurveCommand::Close));
        Self {
            points: PathPoints::new(),
            mode: CurveMode::Quadratic,
            closed,
            commands,
            editable: false,
        }
    }

    pub fn points(&self) -> &PathPoints {
        &self.points
    }

    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn commands(&self) -> &[CurveCommand] {
        &self.commands
    }

    /// Text for the `d` attribute.
    pub fn path_data(&self) -> String {
        format_path_data(&self.commands)
    }

    /// Moves one point and re-derives the commands.
    pub fn set_point(&mut self, index: usize, pos: Point) -> bool {
        if !self.editable || !self.points.set_position(index, pos) {
            return false;
        }
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.commands = self.points.to_curve_commands(self.mode, self.closed);
    }
}

impl DesignerShape for DesignPath {
    fn render(&self) -> Path {
        build_lyon_path(&self.commands)
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let path = self.render();
        if path.iter().next().is_none() {
            return (0.0, 0.0, 0.0, 0.0);
        }
        let bb = lyon::algorithms::aabb::bounding_box(path.iter());
        (
            bb.min.x as f64,
            bb.min.y as f64,
            bb.max.x as f64,
            bb.max.y as f64,
        )
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property {
                name: "Points".to_string(),
                value: PropertyValue::Number(self.points.len() as f64),
            },
            Property {
                name: "Closed".to_string(),
                value: PropertyValue::Bool(self.closed),
            },
            Property {
                name: "Path Data".to_string(),
                value: PropertyValue::String(self.path_data()),
            },
        ]
    }

    /// Hit-tests the stroke: true when `p` lies within `tolerance` of the outline.
    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let path = self.render();
        let near = |from: lyon::math::Point, to: lyon::math::Point| {
            distance_to_segment(
                p,
                Point::new(from.x as f64, from.y as f64),
                Point::new(to.x as f64, to.y as f64),
            ) <= tolerance
        };

        for event in path.iter().flattened(FLATTEN_TOLERANCE) {
            let hit = match event {
                Event::Begin { at } => near(at, at),
                Event::Line { from, to } => near(from, to),
                Event::End {
                    last,
                    first,
                    close: true,
                } => near(last, first),
                _ => false,
            };
            if hit {
                return true;
            }
        }
        false
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}
