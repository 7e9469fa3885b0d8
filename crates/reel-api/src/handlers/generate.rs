//! Generation form handler.

use axum::extract::State;
use axum::{Form, Json};
use serde::Serialize;
use tracing::{error, info};
use validator::Validate;

use reel_gen::{generate_combined, generate_video};
use reel_models::GenerationRequest;

use crate::state::AppState;

/// Message shown to callers when the orchestrator fails. Internal error
/// detail is logged, never surfaced.
const GENERATION_FAILED: &str = "Failed to generate video. Please try again.";

/// Response body for the generation endpoint.
///
/// Exactly one of `error` or `video` is set. `audio` accompanies `video`
/// when narration is enabled; it is the empty string when the narration
/// pipeline failed while video succeeded.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub error: Option<String>,
    pub video: Option<String>,
    pub audio: Option<String>,
}

impl GenerateResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            video: None,
            audio: None,
        }
    }
}

/// Handle a generation form submission.
///
/// Validates the prompt before any remote call; failures come back in-band
/// as the `error` field with HTTP 200, mirroring the form-state contract.
pub async fn generate_media(
    State(state): State<AppState>,
    Form(request): Form<GenerationRequest>,
) -> Json<GenerateResponse> {
    if let Err(errors) = request.validate() {
        return Json(GenerateResponse::failure(prompt_error_message(&errors)));
    }

    info!(prompt_len = request.prompt.len(), "Accepted generation request");

    let result = if state.generator.config().narration {
        generate_combined(&state.generator, &request.prompt, None)
            .await
            .map(|combined| (combined.video_data_uri, Some(combined.audio_data_uri)))
    } else {
        generate_video(&state.generator, &request.prompt, None)
            .await
            .map(|asset| (asset.to_data_uri(), None))
    };

    match result {
        Ok((video, audio)) => Json(GenerateResponse {
            error: None,
            video: Some(video),
            audio,
        }),
        Err(e) => {
            error!(error = %e, "Generation failed");
            Json(GenerateResponse::failure(GENERATION_FAILED))
        }
    }
}

/// First validation message attached to the prompt field.
fn prompt_error_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .get("prompt")
        .and_then(|field| field.first())
        .and_then(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Invalid prompt.".to_string())
}
