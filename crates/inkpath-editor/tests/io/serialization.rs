use inkpath_editor::{
    serialize, CurveMode, DesignEllipse, DesignPath, DesignRectangle, Document, Fill, PathPoints,
    Point, Shape, ShapeStyle, Smoothness,
};

fn polyline(coords: &[(f64, f64)]) -> Shape {
    let mut points = PathPoints::new();
    for &(x, y) in coords {
        points.append_anchor(Point::new(x, y), Smoothness::Corner);
    }
    Shape::Path(DesignPath::new(points, CurveMode::Quadratic, false))
}

#[test]
fn test_path_element() {
    let mut doc = Document::new();
    doc.add_shape(
        polyline(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]),
        ShapeStyle::default(),
    );
    let svg = serialize(&doc);

    assert!(svg.contains(
        r##"<path d="M0,0 L50,0 L50,50" stroke="#000000" stroke-width="5" fill="none" stroke-linecap="round" stroke-linejoin="round" data-bezier-points="[{&quot;type&quot;:&quot;anchor&quot;"##
    ));
}

#[test]
fn test_rect_and_ellipse_elements() {
    let mut doc = Document::new();
    doc.add_shape(
        Shape::Rectangle(DesignRectangle::new(60.0, 40.0, 40.0, 60.0)),
        ShapeStyle::default(),
    );
    doc.add_shape(
        Shape::Ellipse(DesignEllipse::new(Point::new(20.0, 15.0), 10.0, 5.5)),
        ShapeStyle {
            stroke: "red".to_string(),
            stroke_width: 2.0,
            fill: Fill::Color("#00ff00".to_string()),
        },
    );
    let svg = serialize(&doc);

    assert!(svg.contains(
        r##"    <rect x="60" y="40" width="40" height="60" stroke="#000000" stroke-width="5" fill="none"/>"##
    ));
    assert!(svg.contains(
        r##"    <ellipse cx="20" cy="15" rx="10" ry="5.5" stroke="red" stroke-width="2" fill="#00ff00"/>"##
    ));
}

#[test]
fn test_layers_in_order() {
    let mut doc = Document::new();
    doc.add_shape(
        Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 5.0, 5.0)),
        ShapeStyle::default(),
    );
    doc.add_layer(Some("top"));

    let svg = serialize(&doc);
    let first = svg.find(r#"<g id="layer1">"#).unwrap();
    let second = svg.find(r#"<g id="top"/>"#).unwrap();
    assert!(first < second);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_fixed_path_has_no_point_data() {
    let mut doc = Document::new();
    doc.add_shape(
        Shape::Path(DesignPath::from_commands(inkpath_editor::parse_path_data(
            "M0 0 L10 0 M20 20 L30 30",
        ))),
        ShapeStyle::default(),
    );
    let svg = serialize(&doc);
    assert!(svg.contains(r#"d="M0,0 L10,0 M20,20 L30,30""#));
    assert!(!svg.contains("data-bezier-points"));
}

#[test]
fn test_attribute_values_escaped() {
    let mut doc = Document::new();
    doc.add_shape(
        Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 5.0, 5.0)),
        ShapeStyle {
            stroke: r#"a"b"#.to_string(),
            ..ShapeStyle::default()
        },
    );
    assert!(serialize(&doc).contains(r#"stroke="a&quot;b""#));
}
