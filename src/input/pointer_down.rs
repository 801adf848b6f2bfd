//! Pointer down handling - session start.
//!
//! Handles win over the body: a pointer-down classified as a handle opens a
//! resize session and never a drag. The delete affordance deletes and opens
//! nothing.

use crate::controller::InteractionController;
use crate::error::{EditorError, EditorResult};
use crate::input::{CoordinateMapper, PointerDownEvent, PointerTarget};
use crate::profile_scope;
use crate::render::EditorView;
use crate::types::Point;
use tracing::{debug, warn};

impl InteractionController {
    /// Handle a pointer-down that the view has already classified.
    ///
    /// Rejected with [`EditorError::SessionActive`] while another session is
    /// open; the open session is left untouched.
    pub fn handle_pointer_down(
        &mut self,
        event: &PointerDownEvent,
        view: &mut dyn EditorView,
    ) -> EditorResult<()> {
        profile_scope!("handle_pointer_down");

        if let Some(active) = self.state.target_id() {
            warn!(
                active_rect = active,
                target = ?event.target,
                "Pointer down ignored: interaction already in progress"
            );
            return Err(EditorError::SessionActive(active));
        }

        let id = event.target.rect_id();
        let Some(original) = self.store.get(id).map(|r| r.geometry) else {
            warn!(rect_id = id, "Pointer down on unknown rectangle");
            return Err(EditorError::UnknownRectangle(id));
        };

        match event.target {
            PointerTarget::Delete(id) => {
                self.delete_rectangle(id, view)?;
            }
            PointerTarget::Handle(id, direction) => {
                let frame = view.container_frame();
                self.state
                    .start_resizing(id, direction, event.position, original, frame);
                debug!(rect_id = id, %direction, "Resize started");
            }
            PointerTarget::Body(id) => {
                let frame = view.container_frame();
                let local = CoordinateMapper::to_container_local(event.position, frame.origin);
                let anchor = local - original.position();
                self.state.start_dragging(id, anchor, original, frame);
                debug!(rect_id = id, ?anchor, "Drag started");
            }
        }

        Ok(())
    }

    /// Hit test a global pointer position with the built-in tester and
    /// dispatch the result. Returns the resolved target, or `None` when the
    /// pointer missed every rectangle.
    pub fn handle_pointer_down_at(
        &mut self,
        position: Point,
        view: &mut dyn EditorView,
    ) -> EditorResult<Option<PointerTarget>> {
        let Some(target) = self.hit_test(position, view.container_frame()) else {
            return Ok(None);
        };
        self.handle_pointer_down(&PointerDownEvent::new(position, target), view)?;
        Ok(Some(target))
    }
}
