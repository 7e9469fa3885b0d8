//! Retry wrapper around one submit → poll → fetch cycle.

use reel_media::{to_embeddable, DEFAULT_VIDEO_MIME};
use reel_models::{EmbeddableAsset, GenerationPhase, ProgressEvent, RunId};
use tracing::{info, warn};

use crate::client::GeminiClient;
use crate::error::{GenError, GenResult};
use crate::poll::await_completion;

/// Callback invoked with progress notifications; consumers may ignore them.
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;

fn notify(progress: Option<&ProgressCallback>, event: ProgressEvent) {
    if let Some(callback) = progress {
        callback(event);
    }
}

/// Generate a video with bounded retries.
///
/// Attempts are numbered `0..max_attempts`. Each attempt runs the full
/// submit → poll → locate media → fetch → transcode cycle; any failure is
/// recorded and the next attempt starts immediately (no backoff beyond the
/// poll loop's own delay). The first successful attempt's asset is
/// returned; after exhaustion the most recent error surfaces inside
/// [`GenError::ExhaustedRetries`].
pub async fn generate_video(
    client: &GeminiClient,
    prompt: &str,
    progress: Option<&ProgressCallback>,
) -> GenResult<EmbeddableAsset> {
    let run_id = RunId::new();
    let max_attempts = client.config().max_attempts;
    let mut last_error: Option<GenError> = None;

    for attempt in 0..max_attempts {
        notify(progress, ProgressEvent::new(attempt, GenerationPhase::Retry));

        match run_attempt(client, prompt, attempt, progress).await {
            Ok(asset) => {
                info!(run_id = %run_id, attempt, "Video generation succeeded");
                return Ok(asset);
            }
            Err(e) => {
                warn!(run_id = %run_id, attempt, error = %e, "Video generation attempt failed");
                last_error = Some(e);
            }
        }
    }

    Err(GenError::ExhaustedRetries {
        attempts: max_attempts,
        last: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempts were made".to_string()),
    })
}

/// One full submit → poll → fetch → transcode cycle.
async fn run_attempt(
    client: &GeminiClient,
    prompt: &str,
    attempt: u32,
    progress: Option<&ProgressCallback>,
) -> GenResult<EmbeddableAsset> {
    let operation = client.submit_video(prompt).await?;

    notify(
        progress,
        ProgressEvent::new(attempt, GenerationPhase::Polling),
    );
    let operation = await_completion(client, operation).await?;

    let media = operation.first_media().ok_or(GenError::MissingMedia)?;

    notify(
        progress,
        ProgressEvent::new(attempt, GenerationPhase::Downloading),
    );
    let bytes = client.fetch_media(media).await?;

    let mime_type = media.content_type.as_deref().unwrap_or(DEFAULT_VIDEO_MIME);
    Ok(to_embeddable(&bytes, mime_type))
}
