//! Anchor/control point sequence of a path.
//!
//! A path is stored as the ordered list of points the user placed, not as
//! curve commands. Commands are derived on demand by [`PathPoints::to_curve_commands`].
//!
//! - Quadratic sequences look like `Anchor, (Control?, Anchor)*`, where a
//!   control only follows a smooth anchor and records that anchor's index.
//! - Cubic sequences look like `Anchor, (Control1, Control2, Anchor)*` with an
//!   optional incomplete trailing group while the path is being drawn.
//!
//! The model never reorders or repairs points. Points that do not form a
//! complete segment are left out of the derived commands.

use inkpath_core::Recovery;
use serde::{Deserialize, Serialize};

use crate::curve::CurveCommand;
use crate::model::Point;

/// How a path's points are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveMode {
    /// Lines and quadratic curves. Also used by the freehand pen.
    #[default]
    Quadratic,
    /// Cubic curves only.
    Cubic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoothness {
    #[default]
    Corner,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Anchor { smoothness: Smoothness },
    /// Quadratic control owned by the smooth anchor at `anchor_index`.
    Control { anchor_index: usize },
    Control1,
    Control2,
}

impl PointKind {
    pub fn is_anchor(&self) -> bool {
        matches!(self, PointKind::Anchor { .. })
    }
}

/// Where a control point goes in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSlot {
    Quadratic { anchor_index: usize },
    First,
    Second,
}

/// One placed point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "WirePoint", into = "WirePoint")]
pub struct PathPoint {
    pub pos: Point,
    pub kind: PointKind,
}

impl PathPoint {
    pub fn anchor(pos: Point, smoothness: Smoothness) -> Self {
        Self {
            pos,
            kind: PointKind::Anchor { smoothness },
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.kind.is_anchor()
    }
}

/// Shape of a point inside the `data-bezier-points` attribute.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WirePoint {
    Anchor {
        #[serde(default)]
        subtype: Smoothness,
        x: f64,
        y: f64,
    },
    Control {
        #[serde(rename = "anchorIndex")]
        anchor_index: usize,
        x: f64,
        y: f64,
    },
    Control1 {
        x: f64,
        y: f64,
    },
    Control2 {
        x: f64,
        y: f64,
    },
}

impl From<WirePoint> for PathPoint {
    fn from(wire: WirePoint) -> Self {
        let (x, y, kind) = match wire {
            WirePoint::Anchor { subtype, x, y } => (x, y, PointKind::Anchor { smoothness: subtype }),
            WirePoint::Control { anchor_index, x, y } => (x, y, PointKind::Control { anchor_index }),
            WirePoint::Control1 { x, y } => (x, y, PointKind::Control1),
            WirePoint::Control2 { x, y } => (x, y, PointKind::Control2),
        };
        PathPoint {
            pos: Point::new(x, y),
            kind,
        }
    }
}

impl From<PathPoint> for WirePoint {
    fn from(p: PathPoint) -> Self {
        let Point { x, y } = p.pos;
        match p.kind {
            PointKind::Anchor { smoothness } => WirePoint::Anchor {
                subtype: smoothness,
                x,
                y,
            },
            PointKind::Control { anchor_index } => WirePoint::Control { anchor_index, x, y },
            PointKind::Control1 => WirePoint::Control1 { x, y },
            PointKind::Control2 => WirePoint::Control2 { x, y },
        }
    }
}

/// Ordered point sequence of one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPoints {
    points: Vec<PathPoint>,
}

impl PathPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PathPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn first(&self) -> Option<&PathPoint> {
        self.points.first()
    }

    pub fn anchor_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_anchor()).count()
    }

    /// Index of the most recent anchor.
    pub fn last_anchor_index(&self) -> Option<usize> {
        self.points.iter().rposition(|p| p.is_anchor())
    }

    /// Appends an anchor and returns its index.
    pub fn append_anchor(&mut self, pos: Point, smoothness: Smoothness) -> usize {
        self.points.push(PathPoint::anchor(pos, smoothness));
        self.points.len() - 1
    }

    /// Appends a control point and returns its index.
    pub fn append_control(&mut self, pos: Point, slot: ControlSlot) -> usize {
        let kind = match slot {
            ControlSlot::Quadratic { anchor_index } => PointKind::Control { anchor_index },
            ControlSlot::First => PointKind::Control1,
            ControlSlot::Second => PointKind::Control2,
        };
        self.points.push(PathPoint { pos, kind });
        self.points.len() - 1
    }

    pub fn last_point(&self) -> Option<&PathPoint> {
        self.points.last()
    }

    pub fn last_point_mut(&mut self) -> Option<&mut PathPoint> {
        self.points.last_mut()
    }

    /// Changes the smoothness of the last point when it is an anchor.
    pub fn set_smoothness(&mut self, smoothness: Smoothness) -> bool {
        match self.points.last_mut() {
            Some(PathPoint {
                kind: PointKind::Anchor { smoothness: s },
                ..
            }) => {
                *s = smoothness;
                true
            }
            _ => false,
        }
    }

    /// Moves the point at `index`. Returns false when out of range.
    pub fn set_position(&mut self, index: usize, pos: Point) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                p.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Removes a trailing anchor when more than one point exists.
    pub fn pop_incomplete(&mut self) -> Option<PathPoint> {
        if self.points.len() > 1 && self.points.last().is_some_and(|p| p.is_anchor()) {
            self.points.pop()
        } else {
            None
        }
    }

    /// Derives the curve commands for these points.
    pub fn to_curve_commands(&self, mode: CurveMode, closed: bool) -> Vec<CurveCommand> {
        let Some(first) = self.points.first() else {
            return Vec::new();
        };

        let mut commands = vec![CurveCommand::MoveTo(first.pos)];
        let rest = &self.points[1..];
        let mut dangling = 0usize;

        match mode {
            CurveMode::Quadratic => {
                let mut i = 0;
                while i < rest.len() {
                    let point = rest[i];
                    match (point.kind, rest.get(i + 1)) {
                        (PointKind::Control { .. }, Some(next)) if next.is_anchor() => {
                            commands.push(CurveCommand::QuadTo {
                                ctrl: point.pos,
                                to: next.pos,
                            });
                            i += 2;
                        }
                        (PointKind::Anchor { .. }, _) => {
                            commands.push(CurveCommand::LineTo(point.pos));
                            i += 1;
                        }
                        _ => {
                            dangling += 1;
                            i += 1;
                        }
                    }
                }
            }
            CurveMode::Cubic => {
                let groups = rest.chunks_exact(3);
                dangling = groups.remainder().len();
                for group in groups {
                    commands.push(CurveCommand::CubicTo {
                        ctrl1: group[0].pos,
                        ctrl2: group[1].pos,
                        to: group[2].pos,
                    });
                }
            }
        }

        if dangling > 0 {
            tracing::trace!("{}", Recovery::StructuralGap { dangling });
        }

        if closed {
            commands.push(CurveCommand::Close);
        }
        commands
    }

    /// Rebuilds an editable point sequence from curve commands.
    ///
    /// Only a single subpath is accepted, made of lines and quadratic curves
    /// or of cubic curves alone, optionally ending with a close.
    pub fn from_curve_commands(commands: &[CurveCommand]) -> Option<(PathPoints, CurveMode, bool)> {
        let (CurveCommand::MoveTo(start), rest) = commands.split_first()? else {
            return None;
        };
        let (body, closed) = match rest.split_last() {
            Some((CurveCommand::Close, body)) => (body, true),
            _ => (rest, false),
        };

        let mode = if !body.is_empty()
            && body
                .iter()
                .all(|c| matches!(c, CurveCommand::CubicTo { .. }))
        {
            CurveMode::Cubic
        } else {
            CurveMode::Quadratic
        };

        let mut points = PathPoints::new();
        points.append_anchor(*start, Smoothness::Corner);

        for command in body {
            match (*command, mode) {
                (CurveCommand::LineTo(to), CurveMode::Quadratic) => {
                    points.append_anchor(to, Smoothness::Corner);
                }
                (CurveCommand::QuadTo { ctrl, to }, CurveMode::Quadratic) => {
                    let anchor_index = points.len() - 1;
                    points.set_smoothness(Smoothness::Smooth);
                    points.append_control(ctrl, ControlSlot::Quadratic { anchor_index });
                    points.append_anchor(to, Smoothness::Corner);
                }
                (CurveCommand::CubicTo { ctrl1, ctrl2, to }, CurveMode::Cubic) => {
                    points.append_control(ctrl1, ControlSlot::First);
                    points.append_control(ctrl2, ControlSlot::Second);
                    points.append_anchor(to, Smoothness::Corner);
                }
                _ => return None,
            }
        }

        Some((points, mode, closed))
    }
}
