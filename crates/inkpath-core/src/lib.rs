//! # inkpath Core
//!
//! Shared error taxonomy and numeric constants used by the
//! settings and editor crates.

pub mod constants;
pub mod error;

pub use error::{ParseError, Recovery};
