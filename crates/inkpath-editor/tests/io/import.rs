use inkpath_editor::{
    deserialize, format_path_data, serialize, CurveMode, DesignEllipse, DesignPath,
    DesignRectangle, DesignerShape, Document, Fill, PageSize, ParseError, PathPoints, Point,
    Shape, ShapeStyle, ShapeType, Smoothness,
};

fn sample_document() -> Document {
    let mut doc = Document::new();

    let mut points = PathPoints::new();
    points.append_anchor(Point::new(0.0, 0.0), Smoothness::Corner);
    let a = points.append_anchor(Point::new(50.0, 0.0), Smoothness::Smooth);
    points.append_control(
        Point::new(60.5, 10.0),
        inkpath_editor::ControlSlot::Quadratic { anchor_index: a },
    );
    points.append_anchor(Point::new(100.0, 0.0), Smoothness::Corner);
    doc.add_shape(
        Shape::Path(DesignPath::new(points, CurveMode::Quadratic, true)),
        ShapeStyle::default(),
    );

    doc.add_layer(Some("shapes"));
    doc.add_shape(
        Shape::Rectangle(DesignRectangle::new(60.0, 40.0, 40.0, 60.0)),
        ShapeStyle {
            fill: Fill::Color("#336699".to_string()),
            ..ShapeStyle::default()
        },
    );
    doc.add_shape(
        Shape::Ellipse(DesignEllipse::new(Point::new(200.0, 100.0), 30.0, 12.25)),
        ShapeStyle {
            stroke: "blue".to_string(),
            stroke_width: 1.5,
            fill: Fill::None,
        },
    );
    doc.add_layer(None);
    doc
}

#[test]
fn test_round_trip_is_stable() {
    let first = serialize(&sample_document());
    let second = serialize(&deserialize(&first).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_round_trip_restores_points() {
    let doc = deserialize(&serialize(&sample_document())).unwrap();
    let path = doc
        .objects()
        .find_map(|o| o.shape.as_path().cloned())
        .unwrap();
    assert!(path.is_editable());
    assert!(path.is_closed());
    assert_eq!(path.points().len(), 4);
    assert_eq!(path.path_data(), "M0,0 L50,0 Q60.5,10 100,0 Z");
}

#[test]
fn test_no_groups_gives_one_empty_layer() {
    let doc = deserialize(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).unwrap();
    assert_eq!(doc.layers().len(), 1);
    assert_eq!(doc.layers()[0].id, "layer1");
    assert!(doc.layers()[0].is_empty());
}

#[test]
fn test_not_xml_is_rejected() {
    assert!(matches!(
        deserialize("<svg><g></svg>"),
        Err(ParseError::Xml { .. })
    ));
}

#[test]
fn test_wrong_root_is_rejected() {
    match deserialize("<html/>") {
        Err(ParseError::MissingRoot { found }) => assert_eq!(found, "html"),
        other => panic!("unexpected result: {:?}", other.map(|d| d.shape_count())),
    }
}

#[test]
fn test_page_size_read_from_root() {
    let doc = deserialize(r#"<svg width="1024px" height="768"><g id="a"/></svg>"#).unwrap();
    assert_eq!(
        doc.page_size(),
        PageSize {
            width: 1024.0,
            height: 768.0
        }
    );

    let fallback = deserialize(r#"<svg width="-3" height="abc"/>"#).unwrap();
    assert_eq!(fallback.page_size(), PageSize::default());
}

#[test]
fn test_missing_attributes_use_defaults() {
    let doc = deserialize(r#"<svg><g id="l"><rect/><ellipse cx="oops"/></g></svg>"#).unwrap();
    let objects: Vec<_> = doc.objects().collect();
    assert_eq!(objects.len(), 2);

    match &objects[0].shape {
        Shape::Rectangle(r) => {
            assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 1.0, 1.0));
        }
        other => panic!("expected a rectangle, got {:?}", other),
    }
    assert_eq!(objects[0].style, ShapeStyle::default());

    match &objects[1].shape {
        Shape::Ellipse(e) => {
            assert_eq!(e.center, Point::new(0.0, 0.0));
            assert_eq!((e.rx, e.ry), (1.0, 1.0));
        }
        other => panic!("expected an ellipse, got {:?}", other),
    }
}

#[test]
fn test_handwritten_path_becomes_editable() {
    let doc = deserialize(
        r#"<svg><g id="l"><path d="M0 0 L10 10 Q20 20 30 10" fill="red"/></g></svg>"#,
    )
    .unwrap();
    let obj = doc.objects().next().unwrap();
    let path = obj.shape.as_path().unwrap();

    assert!(path.is_editable());
    assert_eq!(path.mode(), CurveMode::Quadratic);
    assert_eq!(path.path_data(), "M0,0 L10,10 Q20,20 30,10");
    assert_eq!(obj.style.fill, Fill::None);
}

#[test]
fn test_multi_subpath_kept_as_fixed_geometry() {
    let doc = deserialize(
        r#"<svg><g id="l"><path d="M0 0 L10 0 M20 20 L30 30"/></g></svg>"#,
    )
    .unwrap();
    let obj = doc.objects().next().unwrap();
    let path = obj.shape.as_path().unwrap();

    assert!(!path.is_editable());
    assert!(!obj.has_handles());
    assert_eq!(path.path_data(), "M0,0 L10,0 M20,20 L30,30");
    assert_eq!(path.bounds(), (0.0, 0.0, 30.0, 30.0));
}

#[test]
fn test_point_data_disagreeing_with_d_is_ignored() {
    let markup = r#"<svg><g id="l"><path d="M0 0 L5 5" data-bezier-points='[{"type":"anchor","x":1,"y":1},{"type":"anchor","x":9,"y":9}]'/></g></svg>"#;
    let doc = deserialize(markup).unwrap();
    let path = doc.objects().next().and_then(|o| o.shape.as_path()).unwrap();
    assert_eq!(path.path_data(), "M0,0 L5,5");
    assert_eq!(path.points().get(1).map(|p| p.pos), Some(Point::new(5.0, 5.0)));
}

#[test]
fn test_unreadable_point_data_falls_back_to_d() {
    let markup = r#"<svg><g id="l"><path d="M0 0 L5 5" data-bezier-points="not json"/></g></svg>"#;
    let doc = deserialize(markup).unwrap();
    let path = doc.objects().next().and_then(|o| o.shape.as_path()).unwrap();
    assert!(path.is_editable());
    assert_eq!(format_path_data(path.commands()), "M0,0 L5,5");
}

#[test]
fn test_group_ids_made_unique() {
    let doc = deserialize(r#"<svg><g id="a"/><g/><g id="a"/></svg>"#).unwrap();
    let ids: Vec<_> = doc.layers().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "layer2", "layer3"]);
}

#[test]
fn test_unknown_elements_skipped() {
    let doc = deserialize(
        r#"<svg><g id="l"><circle r="4"/><text>hi</text><rect width="3" height="3"/></g></svg>"#,
    )
    .unwrap();
    assert_eq!(doc.shape_count(), 1);
    assert_eq!(
        doc.objects().next().map(|o| o.shape_type()),
        Some(ShapeType::Rectangle)
    );
}

#[test]
fn test_shapes_get_fresh_ids() {
    let doc = deserialize(&serialize(&sample_document())).unwrap();
    let mut ids: Vec<u64> = doc.objects().map(|o| o.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert!(doc.objects().all(|o| !o.selected));
}
