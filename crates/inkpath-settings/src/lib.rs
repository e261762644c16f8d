//! inkpath Settings Crate
//!
//! Handles editor configuration: defaults, validation and JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{EditorSettings, PageSize};
pub use error::{SettingsError, SettingsResult};
