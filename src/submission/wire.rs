//! Wire types exchanged with the detection backend, and the two pure
//! halves of the round trip: building a request from the store and applying
//! a response back onto it.

use super::error::{SubmissionError, SubmissionResult};
use crate::constants::DETECTED_LABEL_PREFIX;
use crate::image_source::{ImageLayout, ImageSource};
use crate::input::CoordinateMapper;
use crate::store::RectangleStore;
use crate::types::{PixelRect, Rectangle};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Everything the backend needs: the encoded image and one crop area per
/// rectangle, in store order.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionRequest {
    pub image: Vec<u8>,
    pub mime: String,
    pub crop_areas: Vec<PixelRect>,
}

impl DetectionRequest {
    /// The `crop_areas` form field: a JSON array of `{x1,y1,x2,y2}`.
    pub fn crop_areas_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.crop_areas)
    }
}

/// Backend reply.
///
/// Successful replies carry `results`, one string per crop area. Error
/// replies carry `message` instead. Unknown fields are kept in `extra` so
/// the full reply can be shown to the user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DetectionResponse {
    /// Response carrying only a results list.
    pub fn with_results<I, S>(results: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            status: Some("success".to_string()),
            results: Some(results.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn from_slice(body: &[u8]) -> SubmissionResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// What happened when a response was applied to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Every rectangle was relabeled
    Applied(usize),
    /// Result count differed from rectangle count; no label changed
    CountMismatch { expected: usize, received: usize },
}

/// Map each rectangle to image pixels, preserving store order.
pub fn build_request(
    rects: &[Rectangle],
    image: &ImageSource,
    layout: &ImageLayout,
) -> SubmissionResult<DetectionRequest> {
    if rects.is_empty() {
        return Err(SubmissionError::NothingToSubmit);
    }

    let crop_areas = rects
        .iter()
        .map(|r| {
            CoordinateMapper::container_rect_to_image_pixels(&r.geometry, image.natural, layout)
                .ok_or(SubmissionError::ImageNotRendered)
        })
        .collect::<SubmissionResult<Vec<_>>>()?;

    debug!(count = crop_areas.len(), "detection request built");
    Ok(DetectionRequest {
        image: image.bytes.clone(),
        mime: image.mime.clone(),
        crop_areas,
    })
}

/// Relabel rectangles positionally with `"Detected: <result>"`.
///
/// All or nothing: a count mismatch (including a reply without results)
/// leaves every label untouched.
pub fn apply_response(store: &mut RectangleStore, response: &DetectionResponse) -> ApplyOutcome {
    let expected = store.len();
    let results = response.results.as_deref().unwrap_or_default();

    if results.len() != expected {
        warn!(
            expected,
            received = results.len(),
            "Result count mismatch, labels left unchanged"
        );
        return ApplyOutcome::CountMismatch {
            expected,
            received: results.len(),
        };
    }

    for (id, result) in store.ids().into_iter().zip(results) {
        store.set_label(id, format!("{}{}", DETECTED_LABEL_PREFIX, result));
    }
    ApplyOutcome::Applied(expected)
}
