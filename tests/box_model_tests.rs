mod common;

use common::fixtures::*;
use common::TestResult;
use mathbox::layout::boxes::decor::{ColorBox, RotateBox};
use mathbox::layout::{HBox, VBox};
use mathbox::render::recorder::RecordingGraphics;
use mathbox::render::Graphics;
use mathbox::{Color, LayoutBox, Point};
use std::rc::Rc;

#[test]
fn test_row_metrics_compose_with_mixed_shifts() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut row = HBox::new();
    row.add(shifted_strut(1.0, 0.8, 0.1, 0.3));
    row.add(shifted_strut(2.0, 0.5, 0.2, -0.4));
    row.add(strut(0.5, 0.6, 0.6));

    assert!((row.metrics.width - 3.5).abs() < 1e-6);
    // the raised child dominates the height, the lowered one the depth
    assert!((row.metrics.height - 0.9).abs() < 1e-6);
    assert!((row.metrics.depth - 0.6).abs() < 1e-6);
    Ok(())
}

#[test]
fn test_column_width_spans_shifted_children() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut col = VBox::new();
    col.add(shifted_strut(1.0, 0.5, 0.0, -0.25));
    col.add(shifted_strut(2.0, 0.5, 0.0, 0.5));
    col.add(strut(0.5, 0.5, 0.0));

    // leftmost extent -0.25, rightmost 2.5
    assert!((col.metrics.width - 2.75).abs() < 1e-6);
    assert!((col.metrics.height - 0.5).abs() < 1e-6);
    assert!((col.metrics.depth - 1.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn test_nested_composition_keeps_baseline_bookkeeping() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut inner = HBox::new();
    inner.add(shifted_strut(1.0, 0.4, 0.1, 0.2));
    let mut outer = HBox::new();
    outer.add(Rc::new(LayoutBox::Horizontal(inner)));
    outer.add(strut(1.0, 0.1, 0.1));

    assert!((outer.metrics.height - 0.2).abs() < 1e-6);
    assert!((outer.metrics.depth - 0.3).abs() < 1e-6);
    Ok(())
}

#[test]
fn test_rotation_by_zero_degrees_preserves_metrics() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let child = strut(2.0, 0.7, 0.3);
    let rotated = RotateBox::new(child, 0.0, Point::new(1.0, 0.5));
    assert!((rotated.metrics.width - 2.0).abs() < 1e-5);
    assert!((rotated.metrics.height - 0.7).abs() < 1e-5);
    assert!((rotated.metrics.depth - 0.3).abs() < 1e-5);
    Ok(())
}

#[test]
fn test_draw_leaves_backend_state_untouched() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut row = HBox::new();
    row.add(Rc::new(LayoutBox::Color(ColorBox::new(
        strut(1.0, 0.5, 0.1),
        Some(Color::rgb(200, 30, 30)),
        Some(Color::rgb(240, 240, 240)),
    ))));
    row.add(Rc::new(LayoutBox::Rotate(RotateBox::new(
        strut(1.0, 0.5, 0.1),
        45.0,
        Point::new(0.5, 0.0),
    ))));

    let mut g = RecordingGraphics::new();
    let color_before = g.color();
    let stroke_before = g.stroke();
    LayoutBox::Horizontal(row).draw(&mut g, 5.0, 10.0);

    assert!(g.transforms_balanced());
    assert_eq!(g.color(), color_before);
    assert_eq!(g.stroke(), stroke_before);
    Ok(())
}

#[test]
fn test_dump_shows_whole_tree() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut col = VBox::new();
    let mut row = HBox::new();
    row.add(strut(1.0, 0.5, 0.0));
    col.add(Rc::new(LayoutBox::Horizontal(row)));
    let dump = LayoutBox::Vertical(col).dump();
    assert!(dump.contains("vbox"));
    assert!(dump.contains("hbox"));
    assert!(dump.contains("strut"));
    Ok(())
}
