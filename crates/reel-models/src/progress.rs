//! Progress notification events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-phase of one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationPhase {
    /// A new attempt is starting
    Retry,
    /// Waiting for the remote operation to complete
    Polling,
    /// Fetching the generated asset bytes
    Downloading,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Retry => "retry",
            GenerationPhase::Polling => "polling",
            GenerationPhase::Downloading => "downloading",
        }
    }
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One progress notification emitted by the retry wrapper.
///
/// Consumers may ignore these; emitting them never affects control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Zero-based attempt index
    pub attempt: u32,
    /// Sub-phase the attempt is entering
    pub phase: GenerationPhase,
}

impl ProgressEvent {
    pub fn new(attempt: u32, phase: GenerationPhase) -> Self {
        Self { attempt, phase }
    }
}
