//! Editor state manager for UI integration.
//!
//! Owns the document plus everything transient: the current tool, selection,
//! in-progress path, shape drag, current style and viewport. The UI forwards
//! raw pointer events and reads back markup, decorations and the property
//! panel.
//!
//! This module is split into submodules:
//! - `pointer`: pointer routing per tool
//! - `properties`: style, geometry and property panel
//! - `file_io`: save/load operations

mod file_io;
mod pointer;
mod properties;

pub use properties::PropertyPanel;

use inkpath_core::ParseError;
use inkpath_settings::EditorSettings;

use crate::curve::CurveCommand;
use crate::decorations::{BoundingBox, Decorations};
use crate::document::Document;
use crate::import::SvgImporter;
use crate::model::{Point, ShapeStyle, ShapeType};
use crate::path_builder::{BuildThresholds, PathBuilder};
use crate::selection_manager::{HandleSizes, SelectionManager};
use crate::serialization::serialize;
use crate::throttle::RenderThrottle;
use crate::viewport::Viewport;

/// Raw pointer input in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    /// Event time, used to throttle previews.
    pub timestamp_ms: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self::at(client_x, client_y, 0.0)
    }

    pub fn at(client_x: f64, client_y: f64, timestamp_ms: f64) -> Self {
        Self {
            client_x,
            client_y,
            timestamp_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    /// Freehand polyline
    Pen,
    QuadraticBezier,
    CubicBezier,
    Rectangle,
    Ellipse,
}

impl Tool {
    pub fn is_path_tool(&self) -> bool {
        matches!(self, Tool::Pen | Tool::QuadraticBezier | Tool::CubicBezier)
    }
}

/// A rectangle or ellipse being drawn by dragging.
#[derive(Debug, Clone, Copy)]
struct ShapeDrag {
    kind: ShapeType,
    start: Point,
    shape_id: Option<u64>,
}

/// Editor state for UI integration
#[derive(Debug, Clone)]
pub struct EditorState {
    pub document: Document,
    pub settings: EditorSettings,
    pub viewport: Viewport,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    tool: Tool,
    selection: SelectionManager,
    builder: Option<PathBuilder>,
    shape_drag: Option<ShapeDrag>,
    style: ShapeStyle,
    throttle: RenderThrottle,
    preview: Option<Vec<CurveCommand>>,
    pressed: bool,
    live_markup: Option<String>,
}

impl EditorState {
    /// Creates an editor with default settings.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        let style = ShapeStyle {
            stroke: settings.stroke_color.clone(),
            stroke_width: settings.stroke_width,
            ..ShapeStyle::default()
        };
        let mut state = Self {
            document: Document::with_page_size(settings.page),
            viewport: Viewport::new(),
            current_file_path: None,
            is_modified: false,
            tool: Tool::Select,
            selection: SelectionManager::new(),
            builder: None,
            shape_drag: None,
            style,
            throttle: RenderThrottle::new(settings.preview_interval_ms),
            preview: None,
            pressed: false,
            live_markup: None,
            settings,
        };
        state.refresh_markup();
        state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn builder(&self) -> Option<&PathBuilder> {
        self.builder.as_ref()
    }

    /// Last computed preview of the in-progress path.
    pub fn preview(&self) -> Option<&[CurveCommand]> {
        self.preview.as_deref()
    }

    /// Switches tools.
    ///
    /// An in-progress path with at least two points is committed open, all
    /// construction state is reset and leaving select mode clears the selection.
    pub fn set_tool(&mut self, tool: Tool) {
        self.commit_in_progress();
        self.shape_drag = None;
        self.pressed = false;
        self.selection.end_drag();

        self.builder = self.builder_for(tool);
        if tool != Tool::Select {
            self.selection.deselect_all(&mut self.document);
        }
        tracing::debug!("Tool changed {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
    }

    /// Serialized document as shown in the markup view.
    pub fn get_markup_text(&self) -> String {
        match &self.live_markup {
            Some(markup) => markup.clone(),
            None => serialize(&self.document),
        }
    }

    /// Replaces the document with hand-edited markup.
    ///
    /// On failure the document is left untouched.
    pub fn commit_markup_text(&mut self, text: &str) -> Result<(), ParseError> {
        let importer = SvgImporter::new(self.style.clone(), self.settings.page);
        let document = match importer.import_string(text) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Markup rejected: {}", e);
                return Err(e);
            }
        };

        self.document = document;
        self.selection.reset();
        self.shape_drag = None;
        self.pressed = false;
        self.preview = None;
        self.builder = self.builder_for(self.tool);
        self.mark_modified();
        Ok(())
    }

    /// Document markup without any editing decorations.
    pub fn export_markup(&self) -> String {
        serialize(&self.document)
    }

    /// Removes the active shape.
    pub fn delete_active(&mut self) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        self.selection.reset();
        if self.document.remove(id).is_none() {
            return false;
        }
        tracing::debug!("Deleted shape {}", id);
        self.mark_modified();
        true
    }

    /// Adds a layer on top and makes it current.
    pub fn add_layer(&mut self, id: Option<&str>) -> String {
        let id = self.document.add_layer(id);
        self.mark_modified();
        id
    }

    pub fn select_layer(&mut self, id: &str) -> bool {
        self.document.select_layer(id)
    }

    /// Removes a layer; the last remaining layer cannot be removed.
    pub fn remove_layer(&mut self, id: &str) -> bool {
        if !self.document.remove_layer(id) {
            return false;
        }
        if let Some(selected) = self.selection.selected_id() {
            if self.document.get(selected).is_none() {
                self.selection.reset();
            }
        }
        self.mark_modified();
        true
    }

    /// Overlay for the current state.
    pub fn decorations(&self) -> Decorations {
        let mut decorations = Decorations::default();
        let sizes = self.handle_sizes();

        if self.tool == Tool::Select {
            if let Some(obj) = self
                .selection
                .selected_id()
                .and_then(|id| self.document.get(id))
            {
                decorations.bounding_box =
                    Some(BoundingBox::around(obj, self.settings.bounding_box_padding));
                if let Some(path) = obj.shape.as_path().filter(|_| obj.has_handles()) {
                    decorations.add_handles(path.points(), &sizes);
                }
            }
        }

        if let Some(builder) = self.builder.as_ref().filter(|b| b.is_active()) {
            decorations.add_handles(builder.points(), &sizes);
            decorations.set_live_path(
                builder.committed_commands(),
                &self.style.stroke,
                self.style.stroke_width,
            );
            if let Some(preview) = &self.preview {
                decorations.set_preview_path(
                    preview.clone(),
                    &self.style.stroke,
                    self.style.stroke_width,
                );
            }
        }

        decorations
    }

    fn builder_for(&self, tool: Tool) -> Option<PathBuilder> {
        let thresholds = BuildThresholds::from(&self.settings);
        match tool {
            Tool::Pen => Some(PathBuilder::freehand()),
            Tool::QuadraticBezier => Some(PathBuilder::quadratic(thresholds)),
            Tool::CubicBezier => Some(PathBuilder::cubic(thresholds)),
            _ => None,
        }
    }

    pub(crate) fn handle_sizes(&self) -> HandleSizes {
        HandleSizes::from(&self.settings)
    }

    /// Records a document change and refreshes the live markup.
    pub(crate) fn mark_modified(&mut self) {
        self.is_modified = true;
        self.refresh_markup();
    }

    fn refresh_markup(&mut self) {
        self.live_markup = self
            .settings
            .live_markup
            .then(|| serialize(&self.document));
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
