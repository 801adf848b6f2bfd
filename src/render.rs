//! The view seam between the controller and whatever draws the rectangles.
//!
//! Data flows one way: the controller mutates a rectangle, then hands the
//! result to the view. The view never writes geometry back.

use crate::types::{ContainerFrame, RectId, Rectangle};

pub trait EditorView {
    /// Current origin (global pointer space) and extents of the container.
    /// Queried once at the start of every interaction.
    fn container_frame(&self) -> ContainerFrame;

    /// Draw or redraw a rectangle with its label, delete affordance and
    /// eight handles.
    fn render_rectangle(&mut self, rect: &Rectangle);

    /// Remove a rectangle's visuals.
    fn remove_rectangle(&mut self, id: RectId);

    /// Show a user-visible status message (detection summary or error).
    fn show_message(&mut self, _message: &str) {}
}
