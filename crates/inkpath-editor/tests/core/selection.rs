use inkpath_editor::selection_manager::HandleSizes;
use inkpath_editor::{
    format_path_data, ControlSlot, CurveMode, DesignPath, DesignRectangle, Document, PathPoints,
    Point, SelectionManager, Shape, ShapeStyle, Smoothness,
};

fn polyline(coords: &[(f64, f64)]) -> Shape {
    let mut points = PathPoints::new();
    for &(x, y) in coords {
        points.append_anchor(Point::new(x, y), Smoothness::Corner);
    }
    Shape::Path(DesignPath::new(points, CurveMode::Quadratic, false))
}

fn curved() -> Shape {
    let mut points = PathPoints::new();
    points.append_anchor(Point::new(0.0, 0.0), Smoothness::Smooth);
    points.append_control(Point::new(60.0, 10.0), ControlSlot::Quadratic { anchor_index: 0 });
    points.append_anchor(Point::new(100.0, 0.0), Smoothness::Corner);
    Shape::Path(DesignPath::new(points, CurveMode::Quadratic, false))
}

#[test]
fn test_select_at_picks_topmost() {
    let mut doc = Document::new();
    doc.add_shape(
        Shape::Rectangle(DesignRectangle::new(0.0, 0.0, 50.0, 50.0)),
        ShapeStyle::default(),
    );
    let top = doc.add_shape(
        Shape::Rectangle(DesignRectangle::new(10.0, 10.0, 50.0, 50.0)),
        ShapeStyle::default(),
    );

    let mut selection = SelectionManager::new();
    assert_eq!(selection.select_at(&mut doc, &Point::new(20.0, 20.0), 3.0), Some(top));
    assert_eq!(selection.selected_id(), Some(top));
    assert_eq!(doc.active_id(), Some(top));

    assert_eq!(selection.select_at(&mut doc, &Point::new(300.0, 300.0), 3.0), None);
    assert_eq!(selection.selected_id(), None);
    assert_eq!(doc.active_id(), None);
}

#[test]
fn test_path_hit_widened_by_stroke() {
    let mut doc = Document::new();
    let id = doc.add_shape(
        polyline(&[(0.0, 0.0), (100.0, 0.0)]),
        ShapeStyle {
            stroke_width: 10.0,
            ..ShapeStyle::default()
        },
    );

    let mut selection = SelectionManager::new();
    assert_eq!(selection.select_at(&mut doc, &Point::new(50.0, 7.0), 3.0), Some(id));
    assert_eq!(selection.select_at(&mut doc, &Point::new(50.0, 9.0), 3.0), None);
}

#[test]
fn test_anchor_handle_is_square() {
    let mut doc = Document::new();
    let id = doc.add_shape(polyline(&[(0.0, 0.0), (100.0, 0.0)]), ShapeStyle::default());
    let mut selection = SelectionManager::new();
    selection.select(&mut doc, Some(id));

    let sizes = HandleSizes::default();
    assert_eq!(selection.handle_at(&doc, &Point::new(3.0, 3.0), &sizes), Some(0));
    assert_eq!(selection.handle_at(&doc, &Point::new(4.0, 0.0), &sizes), None);
    assert_eq!(selection.handle_at(&doc, &Point::new(98.0, -2.0), &sizes), Some(1));
}

#[test]
fn test_control_handle_is_round() {
    let mut doc = Document::new();
    let id = doc.add_shape(curved(), ShapeStyle::default());
    let mut selection = SelectionManager::new();
    selection.select(&mut doc, Some(id));

    let sizes = HandleSizes::default();
    assert_eq!(selection.handle_at(&doc, &Point::new(63.0, 13.0), &sizes), Some(1));
    assert_eq!(selection.handle_at(&doc, &Point::new(64.0, 14.0), &sizes), None);
}

#[test]
fn test_no_handles_without_selection() {
    let mut doc = Document::new();
    doc.add_shape(polyline(&[(0.0, 0.0), (100.0, 0.0)]), ShapeStyle::default());
    let selection = SelectionManager::new();
    assert_eq!(
        selection.handle_at(&doc, &Point::new(0.0, 0.0), &HandleSizes::default()),
        None
    );
}

#[test]
fn test_handle_drag_rederives_commands() {
    let mut doc = Document::new();
    let id = doc.add_shape(curved(), ShapeStyle::default());
    let mut selection = SelectionManager::new();
    selection.select(&mut doc, Some(id));

    let before = doc
        .get(id)
        .and_then(|o| o.shape.as_path())
        .map(|p| p.commands().len());

    selection.begin_handle_drag(id, 1);
    assert!(selection.is_dragging());
    assert!(selection.drag_to(&mut doc, Point::new(50.0, 40.0)));

    let path = doc.get(id).and_then(|o| o.shape.as_path()).unwrap();
    assert_eq!(Some(path.commands().len()), before);
    assert_eq!(format_path_data(path.commands()), "M0,0 Q50,40 100,0");

    assert!(selection.end_drag().is_some());
    assert!(!selection.drag_to(&mut doc, Point::new(0.0, 0.0)));
}

#[test]
fn test_selecting_another_shape_drops_drag() {
    let mut doc = Document::new();
    let a = doc.add_shape(curved(), ShapeStyle::default());
    let b = doc.add_shape(polyline(&[(0.0, 50.0), (10.0, 50.0)]), ShapeStyle::default());
    let mut selection = SelectionManager::new();
    selection.select(&mut doc, Some(a));
    selection.begin_handle_drag(a, 0);

    selection.select(&mut doc, Some(b));
    assert!(!selection.is_dragging());
    assert_eq!(doc.objects().filter(|o| o.selected).count(), 1);
}
