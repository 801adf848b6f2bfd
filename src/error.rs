//! Errors for editor commands.

use crate::types::RectId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Rectangles can only be added once an image is loaded
    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Unknown rectangle: {0}")]
    UnknownRectangle(RectId),

    /// A pointer-down arrived while another session was open
    #[error("Interaction already in progress on rectangle {0}")]
    SessionActive(RectId),
}

/// Result type alias for editor commands
pub type EditorResult<T> = Result<T, EditorError>;
