use inkpath_editor::{
    deserialize, serialize, ControlSlot, CurveCommand, CurveMode, DesignEllipse, DesignPath,
    DesignRectangle, Document, PathPoints, Point, PointerEvent, Shape, ShapeStyle, Smoothness,
    Viewport,
};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    (-500i32..500).prop_map(f64::from)
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

/// A cubic point sequence: one anchor followed by any run of controls and anchors.
fn cubic_points() -> impl Strategy<Value = PathPoints> {
    (point(), prop::collection::vec(point(), 0..20)).prop_map(|(start, rest)| {
        let mut points = PathPoints::new();
        points.append_anchor(start, Smoothness::Corner);
        for (i, p) in rest.into_iter().enumerate() {
            match i % 3 {
                0 => points.append_control(p, ControlSlot::First),
                1 => points.append_control(p, ControlSlot::Second),
                _ => points.append_anchor(p, Smoothness::Corner),
            };
        }
        points
    })
}

/// Quadratic sequence where any anchor may carry a control.
fn quadratic_points() -> impl Strategy<Value = PathPoints> {
    prop::collection::vec((point(), prop::option::of(point())), 2..12).prop_map(|entries| {
        let mut points = PathPoints::new();
        for (anchor, control) in entries {
            let smoothness = if control.is_some() {
                Smoothness::Smooth
            } else {
                Smoothness::Corner
            };
            let index = points.append_anchor(anchor, smoothness);
            if let Some(c) = control {
                points.append_control(c, ControlSlot::Quadratic { anchor_index: index });
            }
        }
        points
    })
}

/// Line-only outline with two or more subpaths, which never imports as editable.
fn fixed_commands() -> impl Strategy<Value = Vec<CurveCommand>> {
    let subpath = (point(), prop::collection::vec(point(), 1..5));
    (prop::collection::vec(subpath, 2..4), any::<bool>()).prop_map(|(subpaths, closed)| {
        let mut commands = Vec::new();
        for (start, lines) in subpaths {
            commands.push(CurveCommand::MoveTo(start));
            commands.extend(lines.into_iter().map(CurveCommand::LineTo));
        }
        if closed {
            commands.push(CurveCommand::Close);
        }
        commands
    })
}

#[derive(Debug, Clone)]
enum ShapeRecipe {
    Rect(Point, Point),
    Ellipse(Point, Point),
    Path(PathPoints, CurveMode, bool),
    Fixed(Vec<CurveCommand>),
}

fn shape_recipe() -> impl Strategy<Value = ShapeRecipe> {
    prop_oneof![
        (point(), point()).prop_map(|(a, b)| ShapeRecipe::Rect(a, b)),
        (point(), point()).prop_map(|(a, b)| ShapeRecipe::Ellipse(a, b)),
        (quadratic_points(), any::<bool>())
            .prop_map(|(p, closed)| ShapeRecipe::Path(p, CurveMode::Quadratic, closed)),
        (cubic_points(), any::<bool>())
            .prop_map(|(p, closed)| ShapeRecipe::Path(p, CurveMode::Cubic, closed)),
        fixed_commands().prop_map(ShapeRecipe::Fixed),
    ]
}

fn build(recipe: &ShapeRecipe) -> Shape {
    match recipe {
        ShapeRecipe::Rect(a, b) => Shape::Rectangle(DesignRectangle::from_drag(*a, *b)),
        ShapeRecipe::Ellipse(a, b) => Shape::Ellipse(DesignEllipse::from_drag(*a, *b)),
        ShapeRecipe::Path(points, mode, closed) => {
            Shape::Path(DesignPath::new(points.clone(), *mode, *closed))
        }
        ShapeRecipe::Fixed(commands) => Shape::Path(DesignPath::from_commands(commands.clone())),
    }
}

proptest! {
    #[test]
    fn cubic_segment_count(points in cubic_points()) {
        let commands = points.to_curve_commands(CurveMode::Cubic, false);
        let curves = commands
            .iter()
            .filter(|c| matches!(c, CurveCommand::CubicTo { .. }))
            .count();
        prop_assert_eq!(curves, (points.len() - 1) / 3);
        prop_assert!(matches!(commands.first(), Some(CurveCommand::MoveTo(_))));
    }

    #[test]
    fn quadratic_one_segment_per_anchor(points in quadratic_points(), closed in any::<bool>()) {
        let commands = points.to_curve_commands(CurveMode::Quadratic, closed);
        let segments = commands
            .iter()
            .filter(|c| matches!(c, CurveCommand::LineTo(_) | CurveCommand::QuadTo { .. }))
            .count();
        prop_assert_eq!(segments, points.anchor_count() - 1);
        prop_assert_eq!(matches!(commands.last(), Some(CurveCommand::Close)), closed);
    }

    #[test]
    fn drag_box_ignores_direction(a in point(), b in point()) {
        let forward = DesignRectangle::from_drag(a, b);
        let backward = DesignRectangle::from_drag(b, a);
        prop_assert_eq!(&forward, &backward);
        prop_assert!(forward.width >= 1.0 && forward.height >= 1.0);
        prop_assert_eq!(DesignEllipse::from_drag(a, b), DesignEllipse::from_drag(b, a));
    }

    #[test]
    fn document_coords_are_integral(
        x in -2000.0f64..2000.0,
        y in -2000.0f64..2000.0,
        scale in 0.1f64..8.0,
    ) {
        let mut viewport = Viewport::new();
        viewport.set_scale(scale);
        let p = viewport.to_document_coords(&PointerEvent::new(x, y));
        prop_assert_eq!(p.x.fract(), 0.0);
        prop_assert_eq!(p.y.fract(), 0.0);
    }

    #[test]
    fn handle_drag_keeps_command_count(
        points in quadratic_points(),
        index in any::<prop::sample::Index>(),
        to in point(),
    ) {
        let mut path = DesignPath::new(points, CurveMode::Quadratic, false);
        let before = path.commands().len();
        let i = index.index(path.points().len());
        prop_assert!(path.set_point(i, to));
        prop_assert_eq!(path.commands().len(), before);
        prop_assert_eq!(path.points().get(i).map(|p| p.pos), Some(to));
    }

    #[test]
    fn serialize_round_trip_is_stable(recipes in prop::collection::vec(shape_recipe(), 0..8)) {
        let mut doc = Document::new();
        for (i, recipe) in recipes.iter().enumerate() {
            if i == 4 {
                doc.add_layer(None);
            }
            doc.add_shape(build(recipe), ShapeStyle::default());
        }
        let first = serialize(&doc);
        let reloaded = deserialize(&first).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(reloaded.shape_count(), doc.shape_count());
        prop_assert_eq!(serialize(&reloaded), first);
    }

    #[test]
    fn cubic_path_reloads_editable(points in cubic_points(), closed in any::<bool>()) {
        let mut doc = Document::new();
        let path = DesignPath::new(points.clone(), CurveMode::Cubic, closed);
        let commands = path.commands().to_vec();
        doc.add_shape(Shape::Path(path), ShapeStyle::default());

        let reloaded = deserialize(&serialize(&doc)).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let path = reloaded.objects().next().and_then(|o| o.shape.as_path());
        prop_assert!(path.is_some_and(|p| p.is_editable()));
        prop_assert_eq!(path.map(|p| p.points()), Some(&points));
        prop_assert_eq!(path.map(|p| p.commands().to_vec()), Some(commands));
    }

    #[test]
    fn at_most_one_selected(picks in prop::collection::vec(0u64..8, 1..20)) {
        let mut doc = Document::new();
        for i in 0..5 {
            let x = f64::from(i) * 10.0;
            doc.add_shape(
                Shape::Rectangle(DesignRectangle::new(x, 0.0, 5.0, 5.0)),
                ShapeStyle::default(),
            );
        }
        for pick in picks {
            doc.set_active(Some(pick));
            prop_assert!(doc.objects().filter(|o| o.selected).count() <= 1);
        }
    }
}
