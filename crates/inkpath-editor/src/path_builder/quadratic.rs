use crate::curve::CurveCommand;
use crate::model::Point;
use crate::path_points::{ControlSlot, CurveMode, PathPoints, Smoothness};

use super::{BuildStep, BuildThresholds, FinishedPath};

/// The anchor being placed by the current press.
#[derive(Debug, Clone, Copy)]
struct Press {
    down: Point,
    anchor_index: usize,
    /// Set once the drag exceeded the threshold; tracks the pointer.
    control: Option<Point>,
}

/// Quadratic Bezier tool.
///
/// Each click places an anchor. Dragging a freshly placed anchor past the drag
/// threshold makes it smooth and pulls out a control point, which turns the
/// following segment into a quadratic curve.
#[derive(Debug, Clone)]
pub struct QuadraticBuilder {
    thresholds: BuildThresholds,
    points: PathPoints,
    active: bool,
    press: Option<Press>,
}

impl QuadraticBuilder {
    pub fn new(thresholds: BuildThresholds) -> Self {
        Self {
            thresholds,
            points: PathPoints::new(),
            active: false,
            press: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn points(&self) -> &PathPoints {
        &self.points
    }

    pub fn pointer_down(&mut self, p: Point) -> BuildStep {
        if !self.active {
            self.points = PathPoints::new();
            let anchor_index = self.points.append_anchor(p, Smoothness::Corner);
            self.active = true;
            self.press = Some(Press {
                down: p,
                anchor_index,
                control: None,
            });
            tracing::debug!("Quadratic path started at ({}, {})", p.x, p.y);
            return BuildStep::Started;
        }

        if self.near_start(p) {
            tracing::debug!("Quadratic path closed");
            return self.complete(true);
        }

        let anchor_index = self.points.append_anchor(p, Smoothness::Corner);
        self.press = Some(Press {
            down: p,
            anchor_index,
            control: None,
        });
        BuildStep::Extended
    }

    /// Once a drag makes the anchor smooth, the anchor stays pinned at its down position.
    pub fn pointer_move(&mut self, p: Point) -> BuildStep {
        let Some(press) = self.press.as_mut() else {
            return BuildStep::Ignored;
        };

        if press.control.is_none() && p.distance_to(&press.down) <= self.thresholds.drag {
            self.points.set_position(press.anchor_index, p);
            return BuildStep::Extended;
        }

        if press.control.is_none() {
            self.points.set_position(press.anchor_index, press.down);
            self.points.set_smoothness(Smoothness::Smooth);
            tracing::trace!("Anchor {} became smooth", press.anchor_index);
        }
        press.control = Some(p);
        BuildStep::Extended
    }

    pub fn pointer_up(&mut self, p: Point) -> BuildStep {
        let Some(press) = self.press.take() else {
            return BuildStep::Ignored;
        };

        if press.control.is_some() {
            self.points.append_control(
                p,
                ControlSlot::Quadratic {
                    anchor_index: press.anchor_index,
                },
            );
        } else {
            self.points.set_position(press.anchor_index, p);
        }
        BuildStep::Extended
    }

    /// Double click: drops the anchor placed by the second press, ends open.
    pub fn finish(&mut self) -> BuildStep {
        if !self.active {
            return BuildStep::Ignored;
        }
        self.press = None;
        self.points.pop_incomplete();
        self.complete(false)
    }

    /// Tentative path with the pointer at `pointer`.
    pub fn preview(&self, pointer: Point) -> Option<Vec<CurveCommand>> {
        if !self.active {
            return None;
        }
        let mut tentative = self.points.clone();
        if let Some(Press {
            anchor_index,
            control: Some(control),
            ..
        }) = self.press
        {
            tentative.append_control(control, ControlSlot::Quadratic { anchor_index });
        }
        tentative.append_anchor(pointer, Smoothness::Corner);
        Some(tentative.to_curve_commands(CurveMode::Quadratic, false))
    }

    pub(super) fn take_points(&mut self) -> PathPoints {
        self.active = false;
        self.press = None;
        std::mem::take(&mut self.points)
    }

    fn near_start(&self, p: Point) -> bool {
        self.points
            .first()
            .is_some_and(|start| p.distance_to(&start.pos) < self.thresholds.close)
    }

    fn complete(&mut self, closed: bool) -> BuildStep {
        BuildStep::Finished(FinishedPath {
            points: self.take_points(),
            mode: CurveMode::Quadratic,
            closed,
        })
    }
}
