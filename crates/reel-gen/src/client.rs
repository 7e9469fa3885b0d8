//! Remote generation service client.
//!
//! Raw REST client for the generative-media service. Video generation is a
//! long-running operation (submit returns a pollable handle); speech
//! generation is a single synchronous call returning inline PCM.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GenConfig;
use crate::error::{GenError, GenResult};

/// Client for the remote generation service.
pub struct GeminiClient {
    config: GenConfig,
    http: reqwest::Client,
}

//
// Request DTOs
//

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: VideoParameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
struct VideoParameters {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
    #[serde(rename = "durationSeconds")]
    duration_seconds: u32,
}

#[derive(Debug, Serialize)]
struct SpeechRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: SpeechGenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct SpeechGenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<String>,
    #[serde(rename = "speechConfig")]
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
struct SpeechConfig {
    #[serde(rename = "voiceConfig")]
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
struct VoiceConfig {
    #[serde(rename = "prebuiltVoiceConfig")]
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
struct PrebuiltVoiceConfig {
    #[serde(rename = "voiceName")]
    voice_name: String,
}

//
// Response DTOs
//

/// An in-flight or terminal remote operation.
///
/// Owned by the poll loop for the duration of one attempt and discarded
/// once terminal.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    /// Opaque operation name used for polling
    pub name: String,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
    /// Error payload, set only on terminal failure
    #[serde(default)]
    pub error: Option<OperationError>,
    /// Output payload, set only on terminal success
    #[serde(default)]
    pub response: Option<OperationResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationError {
    #[serde(default)]
    pub code: Option<i32>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationResponse {
    #[serde(default)]
    pub content: Vec<ContentEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    #[serde(default)]
    pub media: Option<MediaReference>,
}

/// Pointer to remotely-hosted binary content, valid only until fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaReference {
    pub url: String,
    #[serde(rename = "contentType", default)]
    pub content_type: Option<String>,
}

impl Operation {
    /// First content entry carrying a media payload, if any.
    pub fn first_media(&self) -> Option<&MediaReference> {
        self.response
            .as_ref()?
            .content
            .iter()
            .find_map(|entry| entry.media.as_ref())
    }
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(rename = "inlineData", default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

impl GeminiClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: GenConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from environment variables.
    pub fn from_env() -> GenResult<Self> {
        Ok(Self::new(GenConfig::from_env()?))
    }

    /// Access the client configuration.
    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Submit a video generation job and return its operation handle.
    pub async fn submit_video(&self, prompt: &str) -> GenResult<Operation> {
        let url = format!(
            "{}/v1beta/models/{}:predictLongRunning",
            self.config.base_url, self.config.video_model
        );

        let request = PredictRequest {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: VideoParameters {
                aspect_ratio: self.config.aspect_ratio.clone(),
                duration_seconds: self.config.duration_seconds,
            },
        };

        debug!(model = %self.config.video_model, "Submitting video generation job");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GenError::submission(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenError::submission(format!(
                "service returned {status}: {body}"
            )));
        }

        let operation: Operation = response
            .json()
            .await
            .map_err(|e| GenError::submission(format!("invalid operation payload: {e}")))?;

        if operation.name.is_empty() {
            return Err(GenError::submission("service returned no operation"));
        }

        Ok(operation)
    }

    /// Query the latest state of an operation handle.
    pub async fn check_operation(&self, operation: &Operation) -> GenResult<Operation> {
        let url = format!("{}/v1beta/{}", self.config.base_url, operation.name);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GenError::poll(format!("poll request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenError::poll(format!("service returned {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| GenError::poll(format!("invalid operation payload: {e}")))
    }

    /// Generate narration speech, returning decoded raw PCM bytes.
    pub async fn generate_speech(&self, prompt: &str) -> GenResult<Vec<u8>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.tts_model
        );

        let request = SpeechRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: SpeechGenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: self.config.voice.clone(),
                        },
                    },
                },
            },
        };

        debug!(model = %self.config.tts_model, voice = %self.config.voice, "Requesting narration");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GenError::submission(format!("speech request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenError::submission(format!(
                "speech service returned {status}: {body}"
            )));
        }

        let speech: SpeechResponse = response
            .json()
            .await
            .map_err(|e| GenError::submission(format!("invalid speech payload: {e}")))?;

        let inline = speech
            .candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.inline_data.as_ref()))
            .ok_or(GenError::MissingMedia)?;

        STANDARD
            .decode(&inline.data)
            .map_err(|e| GenError::submission(format!("invalid inline audio payload: {e}")))
    }

    /// Fetch raw asset bytes from a media reference.
    ///
    /// The API key is appended to the service-provided URL as a query
    /// parameter. Non-200 status or an empty body is a fetch failure.
    pub async fn fetch_media(&self, media: &MediaReference) -> GenResult<Vec<u8>> {
        let response = self
            .http
            .get(&media.url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GenError::fetch(format!("request failed: {e}")))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(GenError::fetch(format!(
                "service returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GenError::fetch(format!("failed to read body: {e}")))?;

        if bytes.is_empty() {
            return Err(GenError::fetch("empty response body"));
        }

        Ok(bytes.to_vec())
    }
}
