//! Error types for the detection round trip.

use thiserror::Error;

/// Errors that can occur while building, sending or decoding a detection
/// request.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Nothing to crop from
    #[error("No image loaded")]
    NoImageLoaded,

    /// The store holds no rectangles
    #[error("No rectangles to submit")]
    NothingToSubmit,

    /// Rendered image size is zero, so container units cannot be scaled
    #[error("Image has no rendered size")]
    ImageNotRendered,

    /// Endpoint URL could not be used
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status}")]
    Http { status: u16 },

    /// Response was not valid HTTP
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for submission operations
pub type SubmissionResult<T> = Result<T, SubmissionError>;
