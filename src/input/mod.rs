//! Pointer input handling for the editing surface.
//!
//! This module turns raw pointer events into rectangle geometry.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current interaction. At most one session is open at a time and
//! it is owned by the `InteractionController`.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine and the session snapshot
//! - `events` - Pointer events and pointer-down targets
//! - `coords` - Global / container-local / image-pixel conversion
//! - `pointer_down` - Session start (drag, resize, delete affordance)
//! - `pointer_move` - Applying drag and resize moves
//! - `pointer_up` - Session end (up, cancel)

pub mod coords;
mod events;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use coords::CoordinateMapper;
pub use events::{PointerDownEvent, PointerMoveEvent, PointerTarget};
pub use state::{InteractionState, Session};
