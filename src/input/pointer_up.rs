//! Pointer up / cancel handling - session end.
//!
//! Geometry is applied on every move, so ending a session commits nothing
//! and rolls nothing back.

use crate::controller::InteractionController;
use tracing::debug;

impl InteractionController {
    /// Close the open session. Returns `false` when none was open.
    pub fn handle_pointer_up(&mut self) -> bool {
        self.finish_session("pointer up")
    }

    /// Abort the open session, keeping the last applied geometry.
    pub fn handle_pointer_cancel(&mut self) -> bool {
        self.finish_session("pointer cancel")
    }

    /// Explicit host request to end the current interaction.
    pub fn end_session(&mut self) -> bool {
        self.finish_session("end session")
    }

    /// Close the open session and log its move timings.
    pub(crate) fn finish_session(&mut self, reason: &'static str) -> bool {
        let Some(target) = self.state.target_id() else {
            return false;
        };
        self.state.reset();
        self.timings.end_session(target);
        debug!(rect_id = target, reason, "Session ended");
        true
    }
}
