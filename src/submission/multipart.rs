//! `multipart/form-data` encoding of a detection request.
//!
//! Two parts, in this order:
//! - `image`: the encoded image bytes, filename `blob`, the image's mime
//! - `crop_areas`: the crop-area JSON as plain text

use super::error::SubmissionResult;
use super::wire::DetectionRequest;
use crate::constants::{CROP_AREAS_FIELD, IMAGE_FIELD, IMAGE_FILENAME};
use rand::Rng;
use rand::distributions::Alphanumeric;

const BOUNDARY_PREFIX: &str = "----regionboard";
const BOUNDARY_RANDOM_LEN: usize = 24;

/// Fresh random boundary. Alphanumeric, so it never needs quoting.
pub fn generate_boundary() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOUNDARY_RANDOM_LEN)
        .map(char::from)
        .collect();
    format!("{BOUNDARY_PREFIX}{suffix}")
}

/// `Content-Type` header value for a body encoded with `boundary`.
pub fn content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

impl DetectionRequest {
    /// Encode as a `multipart/form-data` body delimited by `boundary`.
    pub fn to_multipart(&self, boundary: &str) -> SubmissionResult<Vec<u8>> {
        let crop_areas = self.crop_areas_json()?;
        let mut body = Vec::with_capacity(self.image.len() + crop_areas.len() + 256);

        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{IMAGE_FIELD}\"; filename=\"{IMAGE_FILENAME}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", self.mime).as_bytes());
        body.extend_from_slice(&self.image);
        body.extend_from_slice(b"\r\n");

        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{CROP_AREAS_FIELD}\"\r\n\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(crop_areas.as_bytes());
        body.extend_from_slice(b"\r\n");

        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        Ok(body)
    }
}
