use crate::model::Point;
use crate::path_points::{CurveMode, PathPoints, Smoothness};

use super::{BuildStep, FinishedPath};

/// Pen tool: records a polyline while the pointer is pressed.
#[derive(Debug, Clone, Default)]
pub struct FreehandBuilder {
    points: PathPoints,
    pressed: bool,
}

impl FreehandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.pressed
    }

    pub fn points(&self) -> &PathPoints {
        &self.points
    }

    pub fn pointer_down(&mut self, p: Point) -> BuildStep {
        if self.pressed {
            return BuildStep::Ignored;
        }
        self.points = PathPoints::new();
        self.points.append_anchor(p, Smoothness::Corner);
        self.pressed = true;
        BuildStep::Started
    }

    pub fn pointer_move(&mut self, p: Point) -> BuildStep {
        if self.pressed && self.append_distinct(p) {
            BuildStep::Extended
        } else {
            BuildStep::Ignored
        }
    }

    pub fn pointer_up(&mut self, p: Point) -> BuildStep {
        if !self.pressed {
            return BuildStep::Ignored;
        }
        self.append_distinct(p);
        self.finish()
    }

    pub fn finish(&mut self) -> BuildStep {
        if !self.pressed {
            return BuildStep::Ignored;
        }
        BuildStep::Finished(FinishedPath {
            points: self.take_points(),
            mode: CurveMode::Quadratic,
            closed: false,
        })
    }

    pub(super) fn take_points(&mut self) -> PathPoints {
        self.pressed = false;
        std::mem::take(&mut self.points)
    }

    fn append_distinct(&mut self, p: Point) -> bool {
        if self.points.last_point().is_some_and(|last| last.pos == p) {
            return false;
        }
        self.points.append_anchor(p, Smoothness::Corner);
        true
    }
}
