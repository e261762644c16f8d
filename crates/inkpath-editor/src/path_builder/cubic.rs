use crate::curve::CurveCommand;
use crate::model::Point;
use crate::path_points::{ControlSlot, CurveMode, PathPoints, Smoothness};

use super::{BuildStep, BuildThresholds, FinishedPath};

/// What the next click of the cubic tool places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CubicState {
    #[default]
    Idle,
    AwaitAnchor,
    AwaitControl1,
    AwaitControl2,
}

/// Cubic Bezier tool: anchor, then control 1, control 2, anchor, repeating.
#[derive(Debug, Clone)]
pub struct CubicBuilder {
    thresholds: BuildThresholds,
    points: PathPoints,
    state: CubicState,
}

impl CubicBuilder {
    pub fn new(thresholds: BuildThresholds) -> Self {
        Self {
            thresholds,
            points: PathPoints::new(),
            state: CubicState::Idle,
        }
    }

    pub fn state(&self) -> CubicState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != CubicState::Idle
    }

    pub fn points(&self) -> &PathPoints {
        &self.points
    }

    pub fn pointer_down(&mut self, p: Point) -> BuildStep {
        if self.state == CubicState::Idle {
            self.points = PathPoints::new();
            self.points.append_anchor(p, Smoothness::Corner);
            self.state = CubicState::AwaitControl1;
            tracing::debug!("Cubic path started at ({}, {})", p.x, p.y);
            return BuildStep::Started;
        }

        // From the fourth click on, a click near the start closes and a click
        // near the last anchor ends the path.
        if self.points.len() >= 3 {
            if self.is_near(p, self.points.first().map(|pt| pt.pos)) {
                tracing::debug!("Cubic path closed");
                return self.complete(true);
            }
            let last_anchor = self
                .points
                .last_anchor_index()
                .and_then(|i| self.points.get(i))
                .map(|pt| pt.pos);
            if self.is_near(p, last_anchor) {
                tracing::debug!("Cubic path ended at last anchor");
                return self.complete(false);
            }
        }

        self.state = match self.state {
            CubicState::AwaitControl1 => {
                self.points.append_control(p, ControlSlot::First);
                CubicState::AwaitControl2
            }
            CubicState::AwaitControl2 => {
                self.points.append_control(p, ControlSlot::Second);
                CubicState::AwaitAnchor
            }
            CubicState::AwaitAnchor | CubicState::Idle => {
                self.points.append_anchor(p, Smoothness::Corner);
                CubicState::AwaitControl1
            }
        };
        BuildStep::Extended
    }

    /// Ends the path open, keeping any partial trailing group.
    pub fn finish(&mut self) -> BuildStep {
        if !self.is_active() {
            return BuildStep::Ignored;
        }
        self.complete(false)
    }

    pub fn preview(&self, pointer: Point) -> Option<Vec<CurveCommand>> {
        match self.state {
            CubicState::Idle => None,
            CubicState::AwaitAnchor => {
                let mut tentative = self.points.clone();
                tentative.append_anchor(pointer, Smoothness::Corner);
                Some(tentative.to_curve_commands(CurveMode::Cubic, false))
            }
            CubicState::AwaitControl1 | CubicState::AwaitControl2 => {
                let mut commands = self.points.to_curve_commands(CurveMode::Cubic, false);
                commands.push(CurveCommand::LineTo(pointer));
                Some(commands)
            }
        }
    }

    pub(super) fn take_points(&mut self) -> PathPoints {
        self.state = CubicState::Idle;
        std::mem::take(&mut self.points)
    }

    fn is_near(&self, p: Point, target: Option<Point>) -> bool {
        target.is_some_and(|t| p.distance_to(&t) < self.thresholds.close)
    }

    fn complete(&mut self, closed: bool) -> BuildStep {
        BuildStep::Finished(FinishedPath {
            points: self.take_points(),
            mode: CurveMode::Cubic,
            closed,
        })
    }
}
