//! # inkpath
//!
//! A vector path editing engine with SVG round-tripping:
//! - Freehand, quadratic and cubic Bezier path construction
//! - Anchor/control point model with draggable handles
//! - Rectangles and ellipses drawn by dragging
//! - Layers, selection and property editing
//! - Tolerant SVG import of hand-edited markup
//!
//! ## Architecture
//!
//! inkpath is organized as a workspace with multiple crates:
//!
//! 1. **inkpath-core** - Error types and editor constants
//! 2. **inkpath-settings** - Editor configuration (JSON/TOML)
//! 3. **inkpath-editor** - Path builders, shape model, selection, SVG serializer/importer
//! 4. **inkpath** - Command line front end that integrates all crates

pub use inkpath_editor as editor;

pub use inkpath_core::{ParseError, Recovery};
pub use inkpath_settings::{EditorSettings, PageSize, SettingsError};

pub use inkpath_editor::{
    deserialize, serialize, CurveCommand, CurveMode, Document, DrawingObject, EditorState, Fill,
    Layer, PathBuilder, PathPoints, Point, PointerEvent, Shape, ShapeStyle, Tool,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
