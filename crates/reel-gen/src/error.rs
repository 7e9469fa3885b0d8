//! Orchestrator error types.

use thiserror::Error;

pub type GenResult<T> = Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Operation failed: {0}")]
    Poll(String),

    #[error("No media content in completed operation")]
    MissingMedia,

    #[error("Asset download failed: {0}")]
    Fetch(String),

    #[error("Media error: {0}")]
    Media(#[from] reel_media::MediaError),

    #[error("Generation failed after {attempts} attempts. Last error: {last}")]
    ExhaustedRetries { attempts: u32, last: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenError {
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    pub fn poll(msg: impl Into<String>) -> Self {
        Self::Poll(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the retry wrapper may run another attempt after this error.
    ///
    /// Per-attempt failures (submission, polling, missing media, fetch) are
    /// retryable up to the attempt ceiling. Transcoding and configuration
    /// failures are deterministic and never retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenError::Submission(_)
                | GenError::Poll(_)
                | GenError::MissingMedia
                | GenError::Fetch(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_attempt_errors_are_retryable() {
        assert!(GenError::submission("503").is_retryable());
        assert!(GenError::poll("job failed").is_retryable());
        assert!(GenError::MissingMedia.is_retryable());
        assert!(GenError::fetch("404").is_retryable());
    }

    #[test]
    fn test_terminal_errors_are_not_retryable() {
        assert!(!GenError::config("GEMINI_API_KEY not set").is_retryable());
        let exhausted = GenError::ExhaustedRetries {
            attempts: 3,
            last: "boom".to_string(),
        };
        assert!(!exhausted.is_retryable());
    }
}
