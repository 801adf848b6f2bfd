//! Editor-wide constants.
//!
//! Centralizes magic numbers for rectangle geometry, hit testing and the
//! detection exchange so defaults live in one place.

// ============================================================================
// Rectangle Geometry
// ============================================================================

/// Minimum width and height of any rectangle after a resize
pub const MIN_SIZE: f32 = 20.0;

/// Default position of a newly added rectangle (container-local)
pub const DEFAULT_RECT_POSITION: (f32, f32) = (50.0, 50.0);

/// Default size of a newly added rectangle
pub const DEFAULT_RECT_SIZE: (f32, f32) = (100.0, 60.0);

/// Prefix of the initial rectangle label ("Area 1", "Area 2", ...)
pub const AREA_LABEL_PREFIX: &str = "Area";

/// Prefix written onto a rectangle's label by a detection result
pub const DETECTED_LABEL_PREFIX: &str = "Detected: ";

// ============================================================================
// Hit Testing
// ============================================================================

/// Half-extent of the square grab area around each resize handle
pub const HANDLE_HIT_RADIUS: f32 = 6.0;

/// Size of the square delete affordance at the top-right corner
pub const DELETE_BUTTON_SIZE: f32 = 16.0;

// ============================================================================
// Detection Backend
// ============================================================================

/// Default detection endpoint
pub const DEFAULT_BACKEND_ENDPOINT: &str = "http://127.0.0.1:5000/process";

/// Default network timeout for a detection round trip
pub const DEFAULT_BACKEND_TIMEOUT_MS: u64 = 30_000;

/// Multipart field carrying the image bytes
pub const IMAGE_FIELD: &str = "image";

/// Filename browsers attach to an anonymous blob part
pub const IMAGE_FILENAME: &str = "blob";

/// Multipart field carrying the JSON-encoded crop areas
pub const CROP_AREAS_FIELD: &str = "crop_areas";

/// Message shown to the user when a submission fails for any reason
pub const SUBMISSION_ERROR_MESSAGE: &str = "Error processing image";

/// Heading of the result summary shown after a successful submission
pub const RESULTS_HEADING: &str = "Detection Results:";

/// Largest response body accepted from the backend
pub const MAX_RESPONSE_BYTES: usize = 16 * 1024 * 1024;
