//! Unit tests for pointer classification through the controller.

use crate::helpers::TestEditorBuilder;
use regionboard::input::PointerTarget;
use regionboard::{Container, ContainerFrame, Direction, Geometry, Point};

fn frame_at(x: f32, y: f32) -> ContainerFrame {
    ContainerFrame::new(Point::new(x, y), Container::new(800.0, 600.0))
}

#[test]
fn test_body_handle_and_miss() {
    let (editor, _view) = TestEditorBuilder::new()
        .with_rect(Geometry::new(100.0, 100.0, 200.0, 100.0))
        .build();
    let id = editor.rectangles()[0].id;
    let frame = frame_at(0.0, 0.0);

    assert_eq!(
        editor.hit_test(Point::new(200.0, 150.0), frame),
        Some(PointerTarget::Body(id))
    );
    assert_eq!(
        editor.hit_test(Point::new(300.0, 200.0), frame),
        Some(PointerTarget::Handle(id, Direction::SE))
    );
    assert_eq!(
        editor.hit_test(Point::new(200.0, 97.0), frame),
        Some(PointerTarget::Handle(id, Direction::N))
    );
    assert_eq!(editor.hit_test(Point::new(500.0, 500.0), frame), None);
}

#[test]
fn test_hit_test_uses_container_origin() {
    let (editor, _view) = TestEditorBuilder::new()
        .with_rect(Geometry::new(100.0, 100.0, 200.0, 100.0))
        .build();
    let id = editor.rectangles()[0].id;

    // Same local point, container shifted by (1000, 1000)
    assert_eq!(
        editor.hit_test(Point::new(1200.0, 1150.0), frame_at(1000.0, 1000.0)),
        Some(PointerTarget::Body(id))
    );
}

#[test]
fn test_topmost_rectangle_wins() {
    let (editor, _view) = TestEditorBuilder::new()
        .with_rect(Geometry::new(100.0, 100.0, 200.0, 200.0))
        .with_rect(Geometry::new(150.0, 150.0, 200.0, 200.0))
        .build();
    let top = editor.rectangles()[1].id;

    assert_eq!(
        editor.hit_test(Point::new(200.0, 200.0), frame_at(0.0, 0.0)),
        Some(PointerTarget::Body(top))
    );
}

#[test]
fn test_delete_affordance_outside_top_right() {
    let (editor, _view) = TestEditorBuilder::new()
        .with_rect(Geometry::new(100.0, 100.0, 200.0, 100.0))
        .build();
    let id = editor.rectangles()[0].id;

    // Defaults: 6px handle radius, 16px button starting at (306, 78)
    assert_eq!(
        editor.hit_test(Point::new(314.0, 86.0), frame_at(0.0, 0.0)),
        Some(PointerTarget::Delete(id))
    );
}
