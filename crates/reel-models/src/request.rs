//! Inbound generation request.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single generation request, immutable for the lifetime of one run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerationRequest {
    /// Text prompt driving both the video and narration pipelines
    #[validate(length(min = 3, message = "Prompt must be at least 3 characters long."))]
    pub prompt: String,
}

impl GenerationRequest {
    /// Create a request from a prompt string.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}
