//! Editor lifecycle: images, adding and deleting rectangles.

use crate::helpers::{RecordingView, TestEditorBuilder, down, labels, test_image};
use regionboard::image_source::ImageLayout;
use regionboard::input::PointerTarget;
use regionboard::{Direction, EditorError, Geometry, InteractionController, Size};

#[test]
fn test_add_then_delete_scenario() {
    let (mut editor, mut view) = TestEditorBuilder::new().build();

    let id = editor.add_rectangle(&mut view).unwrap();
    assert_eq!(labels(&editor), vec!["Area 1"]);
    assert_eq!(view.last_render(id).map(|r| r.label.as_str()), Some("Area 1"));

    editor
        .handle_pointer_down(&down(60.0, 60.0, PointerTarget::Body(id)), &mut view)
        .unwrap();
    let removed = editor.delete_rectangle(id, &mut view).unwrap();

    assert_eq!(removed.id, id);
    assert!(editor.rectangles().is_empty());
    assert!(editor.state().is_idle());
    assert_eq!(view.removed, vec![id]);
}

#[test]
fn test_deleting_other_rectangle_keeps_session() {
    let (mut editor, mut view) = TestEditorBuilder::new().build();
    let a = editor.add_rectangle(&mut view).unwrap();
    let b = editor.add_rectangle(&mut view).unwrap();

    editor
        .handle_pointer_down(&down(150.0, 110.0, PointerTarget::Handle(a, Direction::SE)), &mut view)
        .unwrap();
    editor.delete_rectangle(b, &mut view).unwrap();

    assert_eq!(editor.state().target_id(), Some(a));
}

#[test]
fn test_delete_affordance_pointer_down() {
    let (mut editor, mut view) = TestEditorBuilder::new().build();
    let id = editor.add_rectangle(&mut view).unwrap();

    editor
        .handle_pointer_down(&down(0.0, 0.0, PointerTarget::Delete(id)), &mut view)
        .unwrap();

    assert!(editor.rectangle(id).is_none());
    assert!(editor.state().is_idle());
}

#[test]
fn test_labels_follow_creation_order() {
    let (mut editor, mut view) = TestEditorBuilder::new().build();
    let _a = editor.add_rectangle(&mut view).unwrap();
    let b = editor.add_rectangle(&mut view).unwrap();
    let _c = editor.add_rectangle(&mut view).unwrap();

    editor.delete_rectangle(b, &mut view).unwrap();
    editor.add_rectangle(&mut view).unwrap();

    assert_eq!(labels(&editor), vec!["Area 1", "Area 3", "Area 4"]);
}

#[test]
fn test_ids_are_unique() {
    let (mut editor, mut view) = TestEditorBuilder::new().build();
    let a = editor.add_rectangle(&mut view).unwrap();
    editor.delete_rectangle(a, &mut view).unwrap();
    let b = editor.add_rectangle(&mut view).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_unknown_rectangle_is_rejected() {
    let (mut editor, mut view) = TestEditorBuilder::new().build();

    assert_eq!(
        editor.handle_pointer_down(&down(0.0, 0.0, PointerTarget::Body(42)), &mut view),
        Err(EditorError::UnknownRectangle(42))
    );
    assert!(editor.state().is_idle());
}

#[test]
fn test_new_image_starts_over() {
    let (mut editor, mut view) = TestEditorBuilder::new()
        .with_rect(Geometry::new(10.0, 10.0, 40.0, 40.0))
        .with_rect(Geometry::new(100.0, 10.0, 40.0, 40.0))
        .build();
    let first = editor.rectangles()[0].id;
    editor
        .handle_pointer_down(&down(20.0, 20.0, PointerTarget::Body(first)), &mut view)
        .unwrap();

    editor.load_image(
        test_image(Size::new(1024.0, 768.0)),
        ImageLayout::at_origin(Size::new(512.0, 384.0)),
        &mut view,
    );

    assert!(editor.rectangles().is_empty());
    assert!(editor.state().is_idle());
    assert_eq!(view.removed.len(), 2);
    assert_eq!(editor.image().map(|i| i.source.natural), Some(Size::new(1024.0, 768.0)));

    editor.add_rectangle(&mut view).unwrap();
    assert_eq!(labels(&editor), vec!["Area 1"]);
}

#[test]
fn test_add_requires_image() {
    let mut editor = InteractionController::new();
    let mut view = RecordingView::default();

    assert_eq!(editor.add_rectangle(&mut view), Err(EditorError::NoImageLoaded));
    assert!(view.rendered.is_empty());
}

#[test]
fn test_reset() {
    let (mut editor, mut view) = TestEditorBuilder::new()
        .with_rect(Geometry::new(10.0, 10.0, 40.0, 40.0))
        .build();

    editor.reset(&mut view);

    assert!(editor.image().is_none());
    assert!(editor.rectangles().is_empty());
    assert_eq!(editor.add_rectangle(&mut view), Err(EditorError::NoImageLoaded));
}

#[test]
fn test_layout_update() {
    let (mut editor, _view) = TestEditorBuilder::new().build();
    let layout = ImageLayout::at_origin(Size::new(400.0, 300.0));

    editor.set_image_layout(layout).unwrap();
    assert_eq!(editor.image().map(|i| i.layout), Some(layout));
}
