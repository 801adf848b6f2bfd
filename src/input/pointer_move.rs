//! Pointer move handling - applying drag and resize.
//!
//! ## Performance Notes
//!
//! Pointer move fires for every input sample while a button is held.
//! Each move is computed from the session snapshot alone (no accumulation),
//! costs one store update and one render call, and is timed into the
//! controller's `PointerTimings`.

use crate::controller::InteractionController;
use crate::geometry::{self, Operation};
use crate::input::{CoordinateMapper, PointerMoveEvent, Session};
use crate::profile_scope;
use crate::render::EditorView;
use crate::types::{Geometry, Point};
use tracing::{trace, warn};

impl InteractionController {
    /// Apply a pointer move to the open session's target and render it.
    ///
    /// Returns the new geometry, or `None` when no session is open (a
    /// no-op).
    pub fn handle_pointer_move(
        &mut self,
        event: &PointerMoveEvent,
        view: &mut dyn EditorView,
    ) -> Option<Geometry> {
        profile_scope!("handle_pointer_move");

        let session = *self.state.session()?;
        let min_size = self.settings.min_size;

        let next = self
            .timings
            .time_move(|| next_geometry(&session, event.position, min_size));

        let Some(rect) = self.store.set_geometry(session.target, next) else {
            warn!(rect_id = session.target, "Session target vanished, returning to idle");
            self.finish_session("target vanished");
            return None;
        };

        trace!(rect_id = rect.id, geometry = ?next, "Geometry updated");
        view.render_rectangle(rect);
        Some(next)
    }
}

/// Geometry of the session's target for a pointer at `position` (global).
fn next_geometry(session: &Session, position: Point, min_size: f32) -> Geometry {
    let delta = match session.kind {
        Operation::Drag => {
            // Keep the grab point under the pointer
            let local = CoordinateMapper::to_container_local(position, session.frame.origin);
            local - session.pointer_anchor - session.original.position()
        }
        Operation::Resize(_) => position - session.pointer_anchor,
    };
    geometry::compute(
        &session.original,
        session.kind,
        delta,
        min_size,
        session.frame.container,
    )
}
