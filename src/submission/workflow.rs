//! Controller-side detection round trip.
//!
//! Failures are caught here and turned into the generic user message; they
//! never touch rectangles or the interaction state.

use super::error::{SubmissionError, SubmissionResult};
use super::http::DetectionBackend;
use super::wire::{self, ApplyOutcome, DetectionRequest, DetectionResponse};
use crate::constants::{RESULTS_HEADING, SUBMISSION_ERROR_MESSAGE};
use crate::controller::InteractionController;
use crate::render::EditorView;
use tracing::{error, info};

/// Result of a full submission, ready to show to the user.
#[derive(Debug)]
pub enum SubmissionReport {
    Completed {
        response: DetectionResponse,
        outcome: ApplyOutcome,
    },
    Failed(SubmissionError),
}

impl SubmissionReport {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn outcome(&self) -> Option<ApplyOutcome> {
        match self {
            Self::Completed { outcome, .. } => Some(*outcome),
            Self::Failed(_) => None,
        }
    }

    /// User-visible text: the heading plus the pretty-printed reply, or the
    /// generic failure message.
    pub fn message(&self) -> String {
        match self {
            Self::Completed { response, .. } => match serde_json::to_string_pretty(response) {
                Ok(json) => format!("{RESULTS_HEADING}\n{json}"),
                Err(_) => SUBMISSION_ERROR_MESSAGE.to_string(),
            },
            Self::Failed(_) => SUBMISSION_ERROR_MESSAGE.to_string(),
        }
    }
}

impl InteractionController {
    /// Crop areas for the current image and rectangles, in store order.
    pub fn build_submission(&self) -> SubmissionResult<DetectionRequest> {
        let image = self.image.as_ref().ok_or(SubmissionError::NoImageLoaded)?;
        wire::build_request(self.store.as_slice(), &image.source, &image.layout)
    }

    /// Apply a backend reply and re-render relabeled rectangles.
    pub fn apply_detection(
        &mut self,
        response: &DetectionResponse,
        view: &mut dyn EditorView,
    ) -> ApplyOutcome {
        let outcome = wire::apply_response(&mut self.store, response);
        if let ApplyOutcome::Applied(count) = outcome {
            for rect in self.store.iter() {
                view.render_rectangle(rect);
            }
            info!(count, "Detection labels applied");
        }
        outcome
    }

    /// Build, send and apply a detection request, then show the outcome.
    pub fn submit(
        &mut self,
        backend: &dyn DetectionBackend,
        view: &mut dyn EditorView,
    ) -> SubmissionReport {
        let report = match self.build_submission().and_then(|req| backend.submit(&req)) {
            Ok(response) => {
                let outcome = self.apply_detection(&response, view);
                SubmissionReport::Completed { response, outcome }
            }
            Err(e) => {
                error!("Detection request failed: {}", e);
                SubmissionReport::Failed(e)
            }
        };
        view.show_message(&report.message());
        report
    }
}
