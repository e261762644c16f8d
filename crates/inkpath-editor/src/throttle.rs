//! Rate limiting for preview recomputation.

/// Accepts at most one preview per interval, keyed on event timestamps.
///
/// Only previews go through the throttle. Committed points, handle drags and
/// freehand samples are always processed.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    interval_ms: f64,
    last_accepted: Option<f64>,
}

impl RenderThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_accepted: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Returns true when a preview may be recomputed at `timestamp_ms`.
    pub fn should_render(&mut self, timestamp_ms: f64) -> bool {
        match self.last_accepted {
            Some(last) if timestamp_ms - last < self.interval_ms => false,
            _ => {
                self.last_accepted = Some(timestamp_ms);
                true
            }
        }
    }

    /// Forgets the last accepted timestamp so the next request passes.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(inkpath_core::constants::PREVIEW_INTERVAL_MS)
    }
}
