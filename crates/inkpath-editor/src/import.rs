//! # SVG Import
//!
//! Parses SVG markup back into a [`Document`]. This is how hand-edited markup
//! is committed into the model, so it is tolerant:
//!
//! - every `<g>` becomes a layer (missing or duplicate ids get a fresh `layerN`)
//! - only `path`, `rect` and `ellipse` children of a group are read
//! - missing or malformed attributes fall back to the creation defaults
//! - a document without groups gets a single empty `layer1`
//!
//! It fails only when the text is not XML or its root is not `<svg>`.

use inkpath_core::constants::{DEFAULT_STROKE_WIDTH, MIN_SHAPE_EXTENT};
use inkpath_core::{ParseError, Recovery};
use inkpath_settings::PageSize;

use crate::curve::{parse_path_data, CurveCommand};
use crate::document::{Document, DrawingObject, Layer};
use crate::model::{DesignEllipse, DesignPath, DesignRectangle, Fill, Point, Shape, ShapeStyle};
use crate::path_points::{CurveMode, PathPoints, PointKind};
use crate::serialization::POINTS_ATTRIBUTE;

/// Parses SVG markup into a document with the default import settings.
pub fn deserialize(markup: &str) -> Result<Document, ParseError> {
    SvgImporter::default().import_string(markup)
}

/// SVG importer for turning markup into a document.
#[derive(Debug, Clone, Default)]
pub struct SvgImporter {
    /// Style applied where the markup leaves paint attributes out.
    pub default_style: ShapeStyle,
    /// Page size used when the root lacks width/height.
    pub default_page: PageSize,
}

impl SvgImporter {
    pub fn new(default_style: ShapeStyle, default_page: PageSize) -> Self {
        Self {
            default_style,
            default_page,
        }
    }

    /// Import SVG from string content
    pub fn import_string(&self, svg_content: &str) -> Result<Document, ParseError> {
        let doc = roxmltree::Document::parse(svg_content).map_err(|e| ParseError::Xml {
            message: e.to_string(),
        })?;

        let root = doc.root_element();
        if root.tag_name().name() != "svg" {
            return Err(ParseError::MissingRoot {
                found: root.tag_name().name().to_string(),
            });
        }

        let page = PageSize {
            width: self.page_dimension(root, "width", self.default_page.width),
            height: self.page_dimension(root, "height", self.default_page.height),
        };

        let mut layers: Vec<Layer> = Vec::new();
        for group in root
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "g")
        {
            let id = match group.attribute("id").map(str::trim) {
                Some(id) if !id.is_empty() && !layers.iter().any(|l| l.id == id) => id.to_string(),
                _ => {
                    let generated = generate_layer_id(&layers);
                    tracing::debug!("Group without a usable id imported as '{}'", generated);
                    generated
                }
            };

            let mut layer = Layer::new(id);
            for node in group.children().filter(|n| n.is_element()) {
                let shape = match node.tag_name().name() {
                    "path" => self.read_path(node),
                    "rect" => self.read_rect(node),
                    "ellipse" => self.read_ellipse(node),
                    other => {
                        tracing::trace!("Skipping unsupported <{}>", other);
                        continue;
                    }
                };
                let style = self.read_style(node, &shape);
                // Ids are assigned by the document.
                layer
                    .objects
                    .push(DrawingObject::create(0, layer.id.clone(), shape, style));
            }
            layers.push(layer);
        }

        let document = Document::from_layers(page, layers);
        tracing::debug!(
            "Imported {} layer(s), {} shape(s)",
            document.layers().len(),
            document.shape_count()
        );
        Ok(document)
    }

    fn page_dimension(&self, node: roxmltree::Node<'_, '_>, name: &str, default: f64) -> f64 {
        match number_attr(node, name) {
            Some(v) if v > 0.0 => v,
            _ => default,
        }
    }

    fn read_rect(&self, node: roxmltree::Node<'_, '_>) -> Shape {
        Shape::Rectangle(DesignRectangle::new(
            attr_or(node, "x", 0.0),
            attr_or(node, "y", 0.0),
            attr_or(node, "width", MIN_SHAPE_EXTENT),
            attr_or(node, "height", MIN_SHAPE_EXTENT),
        ))
    }

    fn read_ellipse(&self, node: roxmltree::Node<'_, '_>) -> Shape {
        Shape::Ellipse(DesignEllipse::new(
            Point::new(attr_or(node, "cx", 0.0), attr_or(node, "cy", 0.0)),
            attr_or(node, "rx", MIN_SHAPE_EXTENT),
            attr_or(node, "ry", MIN_SHAPE_EXTENT),
        ))
    }

    fn read_path(&self, node: roxmltree::Node<'_, '_>) -> Shape {
        let commands = match node.attribute("d") {
            Some(d) => parse_path_data(d),
            None => {
                log_malformed(node, "d");
                Vec::new()
            }
        };
        let closed = matches!(commands.last(), Some(CurveCommand::Close));

        if let Some(points) = self.read_points(node) {
            let mode = if points
                .iter()
                .any(|p| matches!(p.kind, PointKind::Control1 | PointKind::Control2))
            {
                CurveMode::Cubic
            } else {
                CurveMode::Quadratic
            };
            if points.to_curve_commands(mode, closed) == commands {
                return Shape::Path(DesignPath::new(points, mode, closed));
            }
            tracing::debug!("Point data disagrees with path data, rebuilding from 'd'");
            log_malformed(node, POINTS_ATTRIBUTE);
        }

        match PathPoints::from_curve_commands(&commands) {
            Some((points, mode, closed)) => Shape::Path(DesignPath::new(points, mode, closed)),
            None => {
                tracing::debug!("Path kept as fixed geometry");
                Shape::Path(DesignPath::from_commands(commands))
            }
        }
    }

    fn read_points(&self, node: roxmltree::Node<'_, '_>) -> Option<PathPoints> {
        let raw = node.attribute(POINTS_ATTRIBUTE)?;
        match serde_json::from_str::<PathPoints>(raw) {
            Ok(points) if !points.is_empty() => Some(points),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Unreadable point data: {}", e);
                log_malformed(node, POINTS_ATTRIBUTE);
                None
            }
        }
    }

    fn read_style(&self, node: roxmltree::Node<'_, '_>, shape: &Shape) -> ShapeStyle {
        let stroke = match node.attribute("stroke").map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => self.default_style.stroke.clone(),
        };
        let default_width = if self.default_style.stroke_width.is_finite() {
            self.default_style.stroke_width
        } else {
            DEFAULT_STROKE_WIDTH
        };
        let fill = match (shape, node.attribute("fill")) {
            (Shape::Path(_), _) => Fill::None,
            (_, Some(fill)) => Fill::from_attribute(fill),
            (_, None) => self.default_style.fill.clone(),
        };
        ShapeStyle {
            stroke,
            stroke_width: attr_or(node, "stroke-width", default_width),
            fill,
        }
    }
}

fn generate_layer_id(layers: &[Layer]) -> String {
    (layers.len() + 1..)
        .map(|n| format!("layer{}", n))
        .find(|candidate| !layers.iter().any(|l| &l.id == candidate))
        .unwrap_or_default()
}

fn number_attr(node: roxmltree::Node<'_, '_>, name: &str) -> Option<f64> {
    let raw = node.attribute(name)?;
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log_malformed(node, name);
            None
        }
    }
}

fn attr_or(node: roxmltree::Node<'_, '_>, name: &str, default: f64) -> f64 {
    if node.attribute(name).is_none() {
        log_malformed(node, name);
        return default;
    }
    number_attr(node, name).unwrap_or(default)
}

fn log_malformed(node: roxmltree::Node<'_, '_>, attribute: &str) {
    tracing::debug!(
        "{}",
        Recovery::MalformedElement {
            element: node.tag_name().name().to_string(),
            attribute: attribute.to_string(),
        }
    );
}
