//! Document to SVG markup.
//!
//! Output layout:
//!
//! ```text
//! <svg xmlns width height viewBox>
//!   <g id="layer1">
//!     <path d stroke stroke-width fill="none" stroke-linecap stroke-linejoin data-bezier-points/>
//!     <rect x y width height stroke stroke-width fill/>
//!     <ellipse cx cy rx ry stroke stroke-width fill/>
//!   </g>
//! </svg>
//! ```
//!
//! Editable paths carry their point sequence as JSON in `data-bezier-points`
//! so a reload restores anchors and controls, not just the outline.

use std::fmt::Write;

use crate::document::{Document, DrawingObject, Layer};
use crate::model::{DesignEllipse, DesignPath, DesignRectangle, Shape};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Attribute holding the JSON point sequence of an editable path.
pub const POINTS_ATTRIBUTE: &str = "data-bezier-points";

/// Serializes the whole document. Never fails.
pub fn serialize(document: &Document) -> String {
    let page = document.page_size();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        SVG_NAMESPACE, page.width, page.height, page.width, page.height
    );
    for layer in document.layers() {
        write_layer(&mut out, layer);
    }
    out.push_str("</svg>\n");
    out
}

fn write_layer(out: &mut String, layer: &Layer) {
    if layer.is_empty() {
        let _ = writeln!(out, r#"  <g id="{}"/>"#, escape_attribute(&layer.id));
        return;
    }
    let _ = writeln!(out, r#"  <g id="{}">"#, escape_attribute(&layer.id));
    for obj in &layer.objects {
        out.push_str("    ");
        out.push_str(&shape_element(obj));
        out.push('\n');
    }
    out.push_str("  </g>\n");
}

/// Markup of a single drawing object.
pub fn shape_element(obj: &DrawingObject) -> String {
    match &obj.shape {
        Shape::Path(path) => path_element(obj, path),
        Shape::Rectangle(rect) => rect_element(obj, rect),
        Shape::Ellipse(ellipse) => ellipse_element(obj, ellipse),
    }
}

fn path_element(obj: &DrawingObject, path: &DesignPath) -> String {
    let mut el = format!(
        r#"<path d="{}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round""#,
        escape_attribute(&path.path_data()),
        escape_attribute(&obj.style.stroke),
        obj.style.stroke_width,
    );
    if path.is_editable() {
        match serde_json::to_string(path.points()) {
            Ok(json) => {
                let _ = write!(el, r#" {}="{}""#, POINTS_ATTRIBUTE, escape_attribute(&json));
            }
            Err(e) => tracing::warn!("Could not encode points of shape {}: {}", obj.id, e),
        }
    }
    el.push_str("/>");
    el
}

fn rect_element(obj: &DrawingObject, rect: &DesignRectangle) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        escape_attribute(&obj.style.stroke),
        obj.style.stroke_width,
        escape_attribute(obj.style.fill.as_attribute()),
    )
}

fn ellipse_element(obj: &DrawingObject, ellipse: &DesignEllipse) -> String {
    format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
        ellipse.center.x,
        ellipse.center.y,
        ellipse.rx,
        ellipse.ry,
        escape_attribute(&obj.style.stroke),
        obj.style.stroke_width,
        escape_attribute(obj.style.fill.as_attribute()),
    )
}

/// Escapes text for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
