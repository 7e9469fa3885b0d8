//! Dual-pipeline coordinator for combined video + narration runs.

use reel_media::pcm_to_wav_asset;
use reel_models::{CombinedMedia, EmbeddableAsset, RunId};
use tracing::{info, warn};

use crate::client::GeminiClient;
use crate::error::GenResult;
use crate::retry::{generate_video, ProgressCallback};

/// Generate narration audio for a prompt.
///
/// Single attempt, no retry: one speech call, then the raw PCM is wrapped
/// in a WAV container and encoded.
pub async fn generate_narration(
    client: &GeminiClient,
    prompt: &str,
) -> GenResult<EmbeddableAsset> {
    let pcm = client.generate_speech(prompt).await?;
    Ok(pcm_to_wav_asset(&pcm, &client.config().pcm)?)
}

/// Run the video and narration pipelines concurrently and reconcile.
///
/// Both branches run to completion or failure independently; neither
/// cancels the other, and no decision is made until both have settled.
/// Video failure is fatal and the audio outcome is discarded. Narration
/// failure is logged and downgraded to an empty audio field — the video is
/// the primary deliverable.
pub async fn generate_combined(
    client: &GeminiClient,
    prompt: &str,
    progress: Option<&ProgressCallback>,
) -> GenResult<CombinedMedia> {
    let run_id = RunId::new();
    info!(run_id = %run_id, "Starting combined generation");

    let (video, audio) = tokio::join!(
        generate_video(client, prompt, progress),
        generate_narration(client, prompt),
    );

    let video = video?;

    let audio_data_uri = match audio {
        Ok(asset) => asset.to_data_uri(),
        Err(e) => {
            warn!(run_id = %run_id, error = %e, "Narration failed; returning video only");
            String::new()
        }
    };

    info!(
        run_id = %run_id,
        has_audio = !audio_data_uri.is_empty(),
        "Combined generation finished"
    );

    Ok(CombinedMedia {
        video_data_uri: video.to_data_uri(),
        audio_data_uri,
    })
}
