//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `RecordingView` - an `EditorView` that records every call
//! - `TestEditorBuilder` - builder for controllers with an image and rectangles
//! - Small pointer-event shorthands

use regionboard::image_source::{ImageLayout, ImageSource};
use regionboard::input::{PointerDownEvent, PointerMoveEvent, PointerTarget};
use regionboard::{
    Container, ContainerFrame, EditorView, Geometry, InteractionController, Point, RectId,
    Rectangle, Size,
};

// ============================================================================
// RecordingView
// ============================================================================

/// View that remembers what the controller asked it to do.
pub struct RecordingView {
    pub frame: ContainerFrame,
    pub rendered: Vec<Rectangle>,
    pub removed: Vec<RectId>,
    pub messages: Vec<String>,
}

impl RecordingView {
    pub fn new(origin: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            frame: ContainerFrame::new(
                Point::new(origin.0, origin.1),
                Container::new(size.0, size.1),
            ),
            rendered: Vec::new(),
            removed: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Last rendered state of `id`
    pub fn last_render(&self, id: RectId) -> Option<&Rectangle> {
        self.rendered.iter().rev().find(|r| r.id == id)
    }

    /// Move the container, as scrolling the host view would.
    pub fn move_origin(&mut self, x: f32, y: f32) {
        self.frame.origin = Point::new(x, y);
    }
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new((0.0, 0.0), (800.0, 600.0))
    }
}

impl EditorView for RecordingView {
    fn container_frame(&self) -> ContainerFrame {
        self.frame
    }

    fn render_rectangle(&mut self, rect: &Rectangle) {
        self.rendered.push(rect.clone());
    }

    fn remove_rectangle(&mut self, id: RectId) {
        self.removed.push(id);
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

// ============================================================================
// TestEditorBuilder
// ============================================================================

/// Builder for a controller with a loaded image and some rectangles.
///
/// # Example
/// ```ignore
/// let (mut editor, mut view) = TestEditorBuilder::new()
///     .with_rect(Geometry::new(50.0, 50.0, 100.0, 60.0))
///     .build();
/// ```
pub struct TestEditorBuilder {
    natural: Size,
    layout: ImageLayout,
    view: RecordingView,
    rects: Vec<Geometry>,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    pub fn new() -> Self {
        Self {
            natural: Size::new(800.0, 600.0),
            layout: ImageLayout::at_origin(Size::new(800.0, 600.0)),
            view: RecordingView::default(),
            rects: Vec::new(),
        }
    }

    pub fn with_natural_size(mut self, width: f32, height: f32) -> Self {
        self.natural = Size::new(width, height);
        self
    }

    pub fn with_view(mut self, view: RecordingView) -> Self {
        self.view = view;
        self
    }

    pub fn with_rect(mut self, geometry: Geometry) -> Self {
        self.rects.push(geometry);
        self
    }

    pub fn build(self) -> (InteractionController, RecordingView) {
        let mut controller = InteractionController::new();
        let mut view = self.view;
        controller.load_image(test_image(self.natural), self.layout, &mut view);

        for geometry in self.rects {
            let id = controller
                .add_rectangle(&mut view)
                .expect("image is loaded");
            place(&mut controller, &mut view, id, geometry);
        }

        view.rendered.clear();
        (controller, view)
    }
}

/// Small fake PNG payload; never decoded.
pub fn test_image(natural: Size) -> ImageSource {
    ImageSource::new(vec![0x89, b'P', b'N', b'G', 1, 2, 3], "image/png", natural)
}

/// Move and size a freshly added rectangle (at the default geometry) by
/// driving a drag then a SE resize, so tests only go through public API.
fn place(controller: &mut InteractionController, view: &mut RecordingView, id: RectId, target: Geometry) {
    let origin = view.frame.origin;
    let start = controller.rectangle(id).expect("just added").geometry;

    // Drag top-left to target position
    let grab = Point::new(origin.x + start.x, origin.y + start.y);
    controller
        .handle_pointer_down(&PointerDownEvent::new(grab, PointerTarget::Body(id)), view)
        .expect("idle");
    controller.handle_pointer_move(
        &PointerMoveEvent::new(Point::new(origin.x + target.x, origin.y + target.y)),
        view,
    );
    controller.handle_pointer_up();

    // Resize from SE by the size difference
    let moved = controller.rectangle(id).expect("still there").geometry;
    let anchor = Point::new(origin.x + moved.right(), origin.y + moved.bottom());
    controller
        .handle_pointer_down(
            &PointerDownEvent::new(anchor, PointerTarget::Handle(id, regionboard::Direction::SE)),
            view,
        )
        .expect("idle");
    controller.handle_pointer_move(
        &PointerMoveEvent::new(Point::new(
            anchor.x + target.width - moved.width,
            anchor.y + target.height - moved.height,
        )),
        view,
    );
    controller.handle_pointer_up();
}

// ============================================================================
// Pointer shorthands
// ============================================================================

pub fn down(x: f32, y: f32, target: PointerTarget) -> PointerDownEvent {
    PointerDownEvent::new(Point::new(x, y), target)
}

pub fn pointer_move(x: f32, y: f32) -> PointerMoveEvent {
    PointerMoveEvent::new(Point::new(x, y))
}

pub fn geometry_of(controller: &InteractionController, id: RectId) -> Geometry {
    controller
        .rectangle(id)
        .map(|r| r.geometry)
        .expect("rectangle exists")
}

pub fn labels(controller: &InteractionController) -> Vec<String> {
    controller.rectangles().iter().map(|r| r.label.clone()).collect()
}
