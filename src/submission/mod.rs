//! Detection submission: mapping rectangles to image-pixel crop areas,
//! sending them to the backend and applying the returned labels.
//!
//! ## Wire Format
//!
//! The request is `multipart/form-data` with an `image` file part and a
//! `crop_areas` text part holding a JSON array of `{x1,y1,x2,y2}` in image
//! pixels, in store order. The reply is JSON with a `results` array of
//! strings matched to rectangles by index.
//!
//! ## Error Handling
//!
//! Fallible steps return `SubmissionResult<T>`. `InteractionController::submit`
//! catches every error and reports the generic "Error processing image".

mod error;
mod http;
mod multipart;
mod wire;
mod workflow;

pub use error::{SubmissionError, SubmissionResult};
pub use http::{DetectionBackend, Endpoint, HttpDetectionBackend};
pub use multipart::{content_type, generate_boundary};
pub use wire::{ApplyOutcome, DetectionRequest, DetectionResponse, apply_response, build_request};
pub use workflow::SubmissionReport;
