//! Editor-wide numeric defaults.
//!
//! All distances are in document units.

/// Default page width written to the `<svg>` root.
pub const DEFAULT_PAGE_WIDTH: f64 = 800.0;

/// Default page height written to the `<svg>` root.
pub const DEFAULT_PAGE_HEIGHT: f64 = 600.0;

/// A click closer than this to a path's start (or last) anchor finishes the path.
pub const CLOSE_THRESHOLD: f64 = 5.0;

/// Pointer travel beyond this while pressed turns a corner anchor smooth.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Extra slack added around shapes when hit-testing.
pub const HIT_TOLERANCE: f64 = 3.0;

/// Half of the side of the square anchor marker.
pub const ANCHOR_HANDLE_HALF_SIZE: f64 = 3.0;

/// Radius of the circular control marker.
pub const CONTROL_HANDLE_RADIUS: f64 = 5.0;

/// Extra padding around the selection bounding box, on top of half the stroke width.
pub const BOUNDING_BOX_PADDING: f64 = 5.0;

/// Minimum elapsed time between two preview recomputations (~60 Hz).
pub const PREVIEW_INTERVAL_MS: f64 = 16.0;

/// Smallest width/height/radius a rectangle or ellipse may have.
pub const MIN_SHAPE_EXTENT: f64 = 1.0;

/// Default stroke color for new shapes.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

/// Default stroke width for new shapes.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Id given to the layer synthesized for an empty document.
pub const DEFAULT_LAYER_ID: &str = "layer1";
