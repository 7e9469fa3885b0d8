//! Orchestrator configuration.

use std::time::Duration;

use reel_media::PcmFormat;

use crate::error::{GenError, GenResult};

/// Generation orchestrator configuration.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Base URL of the generative-media service
    pub base_url: String,
    /// API key appended to every request
    pub api_key: String,
    /// Video generation model
    pub video_model: String,
    /// Text-to-speech model
    pub tts_model: String,
    /// Prebuilt voice used for narration
    pub voice: String,
    /// Requested clip length in seconds
    pub duration_seconds: u32,
    /// Requested aspect ratio
    pub aspect_ratio: String,
    /// Fixed delay between successive operation polls
    pub poll_interval: Duration,
    /// Attempt ceiling for the video retry wrapper
    pub max_attempts: u32,
    /// Whether to run the narration pipeline alongside video
    pub narration: bool,
    /// Shape of the raw PCM returned by the speech service
    pub pcm: PcmFormat,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            video_model: "veo-2.0-generate-001".to_string(),
            tts_model: "gemini-2.5-flash-preview-tts".to_string(),
            voice: "Algenib".to_string(),
            duration_seconds: 5,
            aspect_ratio: "16:9".to_string(),
            poll_interval: Duration::from_secs(5),
            max_attempts: 3,
            narration: true,
            pcm: PcmFormat::default(),
        }
    }
}

impl GenConfig {
    /// Create config from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; everything else falls back to defaults.
    pub fn from_env() -> GenResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GenError::config("GEMINI_API_KEY not set"))?;

        let defaults = Self::default();
        Ok(Self {
            base_url: std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            api_key,
            video_model: std::env::var("VIDEO_MODEL").unwrap_or(defaults.video_model),
            tts_model: std::env::var("TTS_MODEL").unwrap_or(defaults.tts_model),
            voice: std::env::var("TTS_VOICE").unwrap_or(defaults.voice),
            duration_seconds: std::env::var("VIDEO_DURATION_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.duration_seconds),
            aspect_ratio: std::env::var("VIDEO_ASPECT_RATIO").unwrap_or(defaults.aspect_ratio),
            poll_interval: Duration::from_secs(
                std::env::var("GEN_POLL_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            max_attempts: std::env::var("GEN_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_attempts),
            narration: std::env::var("NARRATION_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.narration),
            pcm: defaults.pcm,
        })
    }
}
