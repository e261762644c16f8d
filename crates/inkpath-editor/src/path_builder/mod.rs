//! Incremental path construction.
//!
//! Each drawing tool has its own state machine turning pointer input into a
//! [`PathPoints`] sequence. [`PathBuilder`] wraps the three of them behind a
//! single interface the editor drives.

mod cubic;
mod freehand;
mod quadratic;

pub use cubic::{CubicBuilder, CubicState};
pub use freehand::FreehandBuilder;
pub use quadratic::QuadraticBuilder;

use inkpath_core::constants::{CLOSE_THRESHOLD, DRAG_THRESHOLD};
use inkpath_settings::EditorSettings;

use crate::curve::CurveCommand;
use crate::model::Point;
use crate::path_points::{CurveMode, PathPoints};

/// Distances that drive the builders' transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildThresholds {
    /// A click closer than this (strictly) to the start or last anchor ends the path.
    pub close: f64,
    /// Drag distance (strictly) beyond which an anchor turns smooth.
    pub drag: f64,
}

impl Default for BuildThresholds {
    fn default() -> Self {
        Self {
            close: CLOSE_THRESHOLD,
            drag: DRAG_THRESHOLD,
        }
    }
}

impl From<&EditorSettings> for BuildThresholds {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            close: settings.close_threshold,
            drag: settings.drag_threshold,
        }
    }
}

/// A path handed back by a builder once the user ends it.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedPath {
    pub points: PathPoints,
    pub mode: CurveMode,
    pub closed: bool,
}

/// Outcome of feeding one input to a builder.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildStep {
    /// The input did not change anything.
    Ignored,
    /// A new path was started.
    Started,
    /// The in-progress path changed.
    Extended,
    /// The path is complete. The builder is idle again.
    Finished(FinishedPath),
}

impl BuildStep {
    pub fn is_finished(&self) -> bool {
        matches!(self, BuildStep::Finished(_))
    }
}

#[derive(Debug, Clone)]
pub enum PathBuilder {
    Freehand(FreehandBuilder),
    Quadratic(QuadraticBuilder),
    Cubic(CubicBuilder),
}

impl PathBuilder {
    pub fn freehand() -> Self {
        PathBuilder::Freehand(FreehandBuilder::new())
    }

    pub fn quadratic(thresholds: BuildThresholds) -> Self {
        PathBuilder::Quadratic(QuadraticBuilder::new(thresholds))
    }

    pub fn cubic(thresholds: BuildThresholds) -> Self {
        PathBuilder::Cubic(CubicBuilder::new(thresholds))
    }

    pub fn mode(&self) -> CurveMode {
        match self {
            PathBuilder::Freehand(_) | PathBuilder::Quadratic(_) => CurveMode::Quadratic,
            PathBuilder::Cubic(_) => CurveMode::Cubic,
        }
    }

    /// True while a path is in progress.
    pub fn is_active(&self) -> bool {
        match self {
            PathBuilder::Freehand(b) => b.is_active(),
            PathBuilder::Quadratic(b) => b.is_active(),
            PathBuilder::Cubic(b) => b.is_active(),
        }
    }

    /// Points placed so far.
    pub fn points(&self) -> &PathPoints {
        match self {
            PathBuilder::Freehand(b) => b.points(),
            PathBuilder::Quadratic(b) => b.points(),
            PathBuilder::Cubic(b) => b.points(),
        }
    }

    pub fn pointer_down(&mut self, p: Point) -> BuildStep {
        match self {
            PathBuilder::Freehand(b) => b.pointer_down(p),
            PathBuilder::Quadratic(b) => b.pointer_down(p),
            PathBuilder::Cubic(b) => b.pointer_down(p),
        }
    }

    pub fn pointer_move(&mut self, p: Point) -> BuildStep {
        match self {
            PathBuilder::Freehand(b) => b.pointer_move(p),
            PathBuilder::Quadratic(b) => b.pointer_move(p),
            PathBuilder::Cubic(_) => BuildStep::Ignored,
        }
    }

    pub fn pointer_up(&mut self, p: Point) -> BuildStep {
        match self {
            PathBuilder::Freehand(b) => b.pointer_up(p),
            PathBuilder::Quadratic(b) => b.pointer_up(p),
            PathBuilder::Cubic(_) => BuildStep::Ignored,
        }
    }

    /// Ends the path the way a double click does.
    pub fn finish(&mut self) -> BuildStep {
        match self {
            PathBuilder::Freehand(b) => b.finish(),
            PathBuilder::Quadratic(b) => b.finish(),
            PathBuilder::Cubic(b) => b.finish(),
        }
    }

    /// Ends the path keeping every placed point, open.
    pub fn take_in_progress(&mut self) -> Option<FinishedPath> {
        if !self.is_active() {
            return None;
        }
        let mode = self.mode();
        let points = match self {
            PathBuilder::Freehand(b) => b.take_points(),
            PathBuilder::Quadratic(b) => b.take_points(),
            PathBuilder::Cubic(b) => b.take_points(),
        };
        Some(FinishedPath {
            points,
            mode,
            closed: false,
        })
    }

    /// Commands derived from the committed points.
    pub fn committed_commands(&self) -> Vec<CurveCommand> {
        self.points().to_curve_commands(self.mode(), false)
    }

    /// Commands for the tentative path with the pointer at `pointer`.
    pub fn preview(&self, pointer: Point) -> Option<Vec<CurveCommand>> {
        match self {
            PathBuilder::Freehand(_) => None,
            PathBuilder::Quadratic(b) => b.preview(pointer),
            PathBuilder::Cubic(b) => b.preview(pointer),
        }
    }
}
