use inkpath_editor::{
    format_path_data, ControlSlot, CurveCommand, CurveMode, PathPoints, Point, PointKind,
    Smoothness,
};

fn anchors(coords: &[(f64, f64)]) -> PathPoints {
    let mut points = PathPoints::new();
    for &(x, y) in coords {
        points.append_anchor(Point::new(x, y), Smoothness::Corner);
    }
    points
}

#[test]
fn test_empty_points_have_no_commands() {
    let points = PathPoints::new();
    assert!(points.to_curve_commands(CurveMode::Quadratic, false).is_empty());
    assert!(points.to_curve_commands(CurveMode::Cubic, true).is_empty());
}

#[test]
fn test_quadratic_lines() {
    let points = anchors(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);
    let commands = points.to_curve_commands(CurveMode::Quadratic, false);
    assert_eq!(format_path_data(&commands), "M0,0 L50,0 L50,50");
}

#[test]
fn test_quadratic_curve_from_control() {
    let mut points = PathPoints::new();
    let a = points.append_anchor(Point::new(0.0, 0.0), Smoothness::Smooth);
    points.append_control(Point::new(25.0, 40.0), ControlSlot::Quadratic { anchor_index: a });
    points.append_anchor(Point::new(50.0, 0.0), Smoothness::Corner);

    let commands = points.to_curve_commands(CurveMode::Quadratic, true);
    assert_eq!(format_path_data(&commands), "M0,0 Q25,40 50,0 Z");
}

#[test]
fn test_quadratic_dangling_control_is_omitted() {
    let mut points = anchors(&[(0.0, 0.0), (10.0, 0.0)]);
    points.set_smoothness(Smoothness::Smooth);
    points.append_control(Point::new(20.0, 5.0), ControlSlot::Quadratic { anchor_index: 1 });

    let commands = points.to_curve_commands(CurveMode::Quadratic, false);
    assert_eq!(format_path_data(&commands), "M0,0 L10,0");
}

#[test]
fn test_cubic_groups_of_three() {
    let mut points = anchors(&[(0.0, 0.0)]);
    points.append_control(Point::new(10.0, 20.0), ControlSlot::First);
    points.append_control(Point::new(30.0, 20.0), ControlSlot::Second);
    points.append_anchor(Point::new(40.0, 0.0), Smoothness::Corner);
    points.append_control(Point::new(50.0, -20.0), ControlSlot::First);

    let commands = points.to_curve_commands(CurveMode::Cubic, false);
    assert_eq!(commands.len(), 2);
    assert_eq!(format_path_data(&commands), "M0,0 C10,20 30,20 40,0");
}

#[test]
fn test_pop_incomplete() {
    let mut single = anchors(&[(0.0, 0.0)]);
    assert!(single.pop_incomplete().is_none());
    assert_eq!(single.len(), 1);

    let mut points = anchors(&[(0.0, 0.0), (5.0, 5.0)]);
    let popped = points.pop_incomplete().map(|p| p.pos);
    assert_eq!(popped, Some(Point::new(5.0, 5.0)));
    assert_eq!(points.len(), 1);

    let mut with_control = anchors(&[(0.0, 0.0)]);
    with_control.append_control(Point::new(1.0, 1.0), ControlSlot::First);
    assert!(with_control.pop_incomplete().is_none());
}

#[test]
fn test_last_point_mut() {
    let mut points = anchors(&[(0.0, 0.0), (5.0, 5.0)]);
    if let Some(last) = points.last_point_mut() {
        last.pos = Point::new(7.0, 7.0);
    }
    assert_eq!(points.last_point().map(|p| p.pos), Some(Point::new(7.0, 7.0)));
    assert!(!points.set_position(10, Point::new(0.0, 0.0)));
}

#[test]
fn test_rebuild_quadratic_from_commands() {
    let commands = vec![
        CurveCommand::MoveTo(Point::new(0.0, 0.0)),
        CurveCommand::LineTo(Point::new(10.0, 10.0)),
        CurveCommand::QuadTo {
            ctrl: Point::new(20.0, 20.0),
            to: Point::new(30.0, 10.0),
        },
        CurveCommand::Close,
    ];
    let (points, mode, closed) = PathPoints::from_curve_commands(&commands).unwrap();
    assert_eq!(mode, CurveMode::Quadratic);
    assert!(closed);
    assert_eq!(points.len(), 4);
    assert_eq!(
        points.get(1).map(|p| p.kind),
        Some(PointKind::Anchor {
            smoothness: Smoothness::Smooth
        })
    );
    assert_eq!(
        points.get(2).map(|p| p.kind),
        Some(PointKind::Control { anchor_index: 1 })
    );
    assert_eq!(points.to_curve_commands(mode, closed), commands);
}

#[test]
fn test_rebuild_cubic_from_commands() {
    let commands = vec![
        CurveCommand::MoveTo(Point::new(0.0, 0.0)),
        CurveCommand::CubicTo {
            ctrl1: Point::new(10.0, 20.0),
            ctrl2: Point::new(30.0, 20.0),
            to: Point::new(40.0, 0.0),
        },
    ];
    let (points, mode, closed) = PathPoints::from_curve_commands(&commands).unwrap();
    assert_eq!(mode, CurveMode::Cubic);
    assert!(!closed);
    assert_eq!(points.to_curve_commands(mode, closed), commands);
}

#[test]
fn test_rebuild_rejects_mixed_or_multiple_subpaths() {
    let mixed = vec![
        CurveCommand::MoveTo(Point::new(0.0, 0.0)),
        CurveCommand::LineTo(Point::new(1.0, 0.0)),
        CurveCommand::CubicTo {
            ctrl1: Point::new(1.0, 1.0),
            ctrl2: Point::new(2.0, 2.0),
            to: Point::new(3.0, 0.0),
        },
    ];
    assert!(PathPoints::from_curve_commands(&mixed).is_none());

    let two_subpaths = vec![
        CurveCommand::MoveTo(Point::new(0.0, 0.0)),
        CurveCommand::LineTo(Point::new(1.0, 0.0)),
        CurveCommand::MoveTo(Point::new(5.0, 5.0)),
        CurveCommand::LineTo(Point::new(6.0, 5.0)),
    ];
    assert!(PathPoints::from_curve_commands(&two_subpaths).is_none());

    assert!(PathPoints::from_curve_commands(&[]).is_none());
}
