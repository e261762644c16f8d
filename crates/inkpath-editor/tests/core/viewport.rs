use inkpath_editor::{Point, PointerEvent, Viewport};

#[test]
fn test_identity_mapping_floors() {
    let viewport = Viewport::new();
    assert_eq!(
        viewport.to_document_coords(&PointerEvent::new(10.7, -0.5)),
        Point::new(10.0, -1.0)
    );
}

#[test]
fn test_origin_scroll_and_scale() {
    let mut viewport = Viewport::new();
    viewport.set_surface_origin(10.0, 20.0);
    viewport.set_scroll(5.0, 5.0);
    viewport.set_scale(2.0);

    assert_eq!(
        viewport.to_document_coords(&PointerEvent::new(31.0, 45.0)),
        Point::new(13.0, 15.0)
    );
    assert_eq!(viewport.client_to_document(10.0, 20.0), Point::new(2.0, 2.0));
}

#[test]
fn test_invalid_scale_ignored() {
    let mut viewport = Viewport::new();
    viewport.set_scale(0.0);
    viewport.set_scale(f64::NAN);
    viewport.set_scale(-1.0);
    assert_eq!(viewport.scale(), 1.0);
}
