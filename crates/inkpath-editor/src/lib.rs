//! # inkpath editor
//!
//! The editing engine behind inkpath: an incremental path builder for
//! polylines and quadratic/cubic Bezier curves, a point model of anchors and
//! control handles, geometric hit-testing with handle dragging, and a
//! round-trip between the in-memory document and SVG markup.
//!
//! ## Architecture
//!
//! ```text
//! EditorState (pointer input, tools, markup view)
//!   ├── Viewport (client -> document coordinates)
//!   ├── PathBuilder (freehand, quadratic, cubic)
//!   ├── SelectionManager (active shape, handle drag)
//!   └── Document
//!         └── Layers -> DrawingObjects (path, rectangle, ellipse)
//!
//! serialization::serialize  Document -> SVG text
//! import::deserialize       SVG text -> Document
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inkpath_editor::{EditorState, PointerEvent, Tool};
//!
//! let mut editor = EditorState::new();
//! editor.set_tool(Tool::QuadraticBezier);
//! for (x, y) in [(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)] {
//!     editor.on_pointer_down(&PointerEvent::new(x, y));
//!     editor.on_pointer_up(&PointerEvent::new(x, y));
//! }
//! editor.end_path();
//! let svg = editor.export_markup();
//! ```

pub mod curve;
pub mod decorations;
pub mod document;
pub mod editor_state;
pub mod import;
pub mod model;
pub mod path_builder;
pub mod path_points;
pub mod selection_manager;
pub mod serialization;
pub mod throttle;
pub mod viewport;

pub use curve::{format_path_data, parse_path_data, CurveCommand};
pub use decorations::{Decorations, HandleMarker, HandleMarkerKind};
pub use document::{Document, DrawingObject, Layer};
pub use editor_state::{EditorState, PointerEvent, PropertyPanel, Tool};
pub use import::{deserialize, SvgImporter};
pub use model::{
    DesignEllipse, DesignPath, DesignRectangle, DesignerShape, Fill, GeometryUpdate, Point,
    Shape, ShapeStyle, ShapeType,
};
pub use path_builder::{BuildStep, FinishedPath, PathBuilder};
pub use path_points::{ControlSlot, CurveMode, PathPoint, PathPoints, PointKind, Smoothness};
pub use selection_manager::{HandleDrag, SelectionManager};
pub use serialization::serialize;
pub use throttle::RenderThrottle;
pub use viewport::Viewport;

pub use inkpath_core::{ParseError, Recovery};
pub use inkpath_settings::{EditorSettings, PageSize};
