use egui::{Color32, Rect, pos2, vec2};
use vector_canvas::{ControlPoint, FillMode, HatchStyle, Shape, ShapeDefaults, ShapeKind, ShapeType, factory};

fn defaults() -> ShapeDefaults {
    ShapeDefaults::default()
}

fn all_shapes() -> Vec<ShapeType> {
    let bounds = Rect::from_min_size(pos2(10.0, 10.0), vec2(110.0, 60.0));
    vec![
        factory::rectangle(bounds, &defaults()),
        factory::ellipse(bounds, &defaults()),
        factory::line(pos2(10.0, 10.0), pos2(120.0, 70.0), &defaults()),
    ]
}

#[test]
fn test_scale_from_start_keeps_opposite_corner() {
    for mut shape in all_shapes() {
        let [_, end] = shape.control_points();
        shape.transform_scale(vec2(7.0, -3.0), ControlPoint::Start);
        let [start, after] = shape.control_points();
        assert_eq!(after, end, "{} moved its end point", shape.kind().name());
        assert_eq!(start, pos2(17.0, 7.0));
    }
}

#[test]
fn test_scale_never_collapses_area_shapes() {
    for mut shape in all_shapes().into_iter().filter(|s| s.kind() != ShapeKind::Line) {
        shape.transform_scale(vec2(-500.0, -59.5), ControlPoint::End);
        let bounds = shape.bounds();
        assert!(bounds.width() > 1.0);
        assert!(bounds.height() > 1.0);

        shape.transform_scale(vec2(109.0, 0.0), ControlPoint::Start);
        assert!(shape.bounds().width() > 1.0);
    }
}

#[test]
fn test_scale_applies_axes_independently() {
    let mut shape = factory::rectangle(Rect::from_min_size(pos2(0.0, 0.0), vec2(50.0, 50.0)), &defaults());
    shape.transform_scale(vec2(-60.0, 20.0), ControlPoint::End);
    assert_eq!(shape.bounds().max, pos2(50.0, 70.0));
}

#[test]
fn test_move_translates_both_points() {
    for mut shape in all_shapes() {
        let [start, end] = shape.control_points();
        shape.transform_move(vec2(5.0, -5.0));
        assert_eq!(shape.control_points(), [start + vec2(5.0, -5.0), end + vec2(5.0, -5.0)]);
    }
}

#[test]
fn test_deep_copy_renders_identically_and_is_independent() {
    let _ = env_logger::builder().is_test(true).try_init();

    for mut original in all_shapes() {
        original.set_fill_mode(FillMode::Hatch);
        original.set_hatch(HatchStyle::DiagonalCross);
        let before = original.rasterize().unwrap().to_color_image();

        let mut copy = original.deep_copy();
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.rasterize().unwrap().to_color_image(), before);

        copy.set_primary(Color32::GREEN);
        copy.set_edge_color(Color32::YELLOW);
        copy.transform_move(vec2(30.0, 30.0));
        assert_eq!(original.rasterize().unwrap().to_color_image(), before);
        assert_eq!(original.primary(), Color32::from_rgb(211, 211, 211));
    }
}

#[test]
fn test_deep_copy_shares_texture() {
    let shape = all_shapes().remove(0);
    let copy = shape.deep_copy();
    assert_eq!(copy.texture(), shape.texture());
}

#[test]
fn test_to_ellipse_preserves_attributes() {
    let mut shape = all_shapes().remove(0);
    shape.set_fill_mode(FillMode::Gradient);
    shape.set_primary(Color32::RED);
    shape.set_secondary(Color32::BLUE);
    shape.set_edge_color(Color32::GREEN);
    shape.set_edge_width(7.0);
    shape.set_edge_enabled(false);

    let ellipse = shape.to_ellipse();
    assert_eq!(ellipse.kind(), ShapeKind::Ellipse);
    assert_ne!(ellipse.id(), shape.id());
    assert_eq!(ellipse.bounds(), shape.bounds());
    assert_eq!(ellipse.fill_mode(), FillMode::Gradient);
    assert_eq!(ellipse.primary(), Color32::RED);
    assert_eq!(ellipse.secondary(), Color32::BLUE);
    assert_eq!(ellipse.edge_color(), Color32::GREEN);
    assert_eq!(ellipse.edge_width(), 7.0);
    assert!(!ellipse.edge_enabled());

    let back = ellipse.to_rectangle();
    assert_eq!(back.appearance(), shape.appearance());
    assert_eq!(back.bounds(), shape.bounds());
}

#[test]
fn test_ellipse_contains_only_interior() {
    let ellipse = all_shapes().remove(1);
    assert!(ellipse.contains(pos2(65.0, 40.0)));
    assert!(!ellipse.contains(pos2(12.0, 12.0)));
}

#[test]
fn test_line_hit_test() {
    let line = factory::line(pos2(0.0, 0.0), pos2(100.0, 0.0), &defaults());
    assert!(line.hit_test(pos2(50.0, 8.0), 15.0));
    assert!(!line.hit_test(pos2(50.0, 20.0), 15.0));
    assert!(line.hit_test(pos2(105.0, 0.0), 15.0));
    assert!(!line.hit_test(pos2(120.0, 0.0), 15.0));
}

#[test]
fn test_size_tracks_edge() {
    let mut shape = all_shapes().remove(0);
    assert_eq!(shape.size(), [114, 64]);
    shape.set_edge_width(10.0);
    assert_eq!(shape.size(), [120, 70]);
    shape.set_edge_enabled(false);
    assert_eq!(shape.size(), [110, 60]);
}
