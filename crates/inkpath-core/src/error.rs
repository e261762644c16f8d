//! Error handling for inkpath
//!
//! Only [`ParseError`] is ever shown to the user: it is returned when
//! hand-edited markup cannot be turned into a document at all. Everything
//! else that can go wrong while editing is recovered locally and described by
//! [`Recovery`] purely for logging.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Markup could not be parsed into a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not well-formed XML
    #[error("Invalid markup: {message}")]
    Xml {
        /// Diagnostic from the XML parser.
        message: String,
    },

    /// The document element is not a drawing root
    #[error("No <svg> root element found (document element is <{found}>)")]
    MissingRoot {
        /// Local name of the element found instead.
        found: String,
    },
}

/// A condition that was silently repaired while editing or importing.
///
/// These never abort an operation; they are logged so hand-written or
/// degenerate input can be diagnosed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Recovery {
    /// A shape element lacked an attribute or carried an unparseable value
    #[error("<{element}> attribute '{attribute}' missing or malformed, using default")]
    MalformedElement {
        /// Element local name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// A computed extent was below the minimum and got clamped
    #[error("{field} = {value} clamped to {clamped}")]
    InvalidGeometry {
        /// Geometry field name.
        field: &'static str,
        /// Value before clamping.
        value: f64,
        /// Value after clamping.
        clamped: f64,
    },

    /// Trailing points that do not form a complete segment were left out
    #[error("{dangling} trailing point(s) omitted from curve commands")]
    StructuralGap {
        /// Number of omitted points.
        dangling: usize,
    },
}
