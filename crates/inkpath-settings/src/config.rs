//! Editor configuration
//!
//! Provides the tunable thresholds and defaults used by the vector editor and
//! reads/writes them as JSON or TOML. Every field falls back to its default
//! when missing from the file, so partial configs are accepted.

use inkpath_core::constants::{
    ANCHOR_HANDLE_HALF_SIZE, BOUNDING_BOX_PADDING, CLOSE_THRESHOLD, CONTROL_HANDLE_RADIUS,
    DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
    DRAG_THRESHOLD, HIT_TOLERANCE, PREVIEW_INTERVAL_MS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Config file name inside the platform config directory
const CONFIG_FILE_NAME: &str = "settings.toml";

/// Page size written to the document root
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAGE_WIDTH,
            height: DEFAULT_PAGE_HEIGHT,
        }
    }
}

/// Editor preferences and interaction thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Stroke color given to new shapes
    pub stroke_color: String,
    /// Stroke width given to new shapes
    pub stroke_width: f64,
    /// Distance under which a click closes or finishes a path
    pub close_threshold: f64,
    /// Drag distance over which an anchor becomes smooth
    pub drag_threshold: f64,
    /// Slack added around shapes when hit-testing
    pub hit_tolerance: f64,
    /// Half side of the square anchor marker
    pub anchor_handle_half_size: f64,
    /// Radius of the round control marker
    pub control_handle_radius: f64,
    /// Padding around the selection box, added to half the stroke width
    pub bounding_box_padding: f64,
    /// Minimum milliseconds between preview recomputations
    pub preview_interval_ms: f64,
    /// Re-serialize the markup view after every mutation
    pub live_markup: bool,
    /// Page size for new and exported documents
    pub page: PageSize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            close_threshold: CLOSE_THRESHOLD,
            drag_threshold: DRAG_THRESHOLD,
            hit_tolerance: HIT_TOLERANCE,
            anchor_handle_half_size: ANCHOR_HANDLE_HALF_SIZE,
            control_handle_radius: CONTROL_HANDLE_RADIUS,
            bounding_box_padding: BOUNDING_BOX_PADDING,
            preview_interval_ms: PREVIEW_INTERVAL_MS,
            live_markup: false,
            page: PageSize::default(),
        }
    }
}

impl EditorSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform-specific location of the settings file, if one can be determined
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inkpath").join(CONFIG_FILE_NAME))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from the platform config path, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.page.width > 0.0 && self.page.height > 0.0) {
            return Err(SettingsError::invalid("page", "dimensions must be > 0"));
        }

        if self.stroke_color.trim().is_empty() {
            return Err(SettingsError::invalid("stroke_color", "must not be empty"));
        }

        if !(self.stroke_width >= 0.0) {
            return Err(SettingsError::invalid("stroke_width", "must be >= 0"));
        }

        for (key, value) in [
            ("close_threshold", self.close_threshold),
            ("drag_threshold", self.drag_threshold),
            ("hit_tolerance", self.hit_tolerance),
            ("anchor_handle_half_size", self.anchor_handle_half_size),
            ("control_handle_radius", self.control_handle_radius),
            ("bounding_box_padding", self.bounding_box_padding),
            ("preview_interval_ms", self.preview_interval_ms),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::invalid(key, "must be a finite value >= 0"));
            }
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
