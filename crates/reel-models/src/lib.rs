//! Shared data models for the ReelGen backend.
//!
//! This crate provides Serde-serializable types for:
//! - Generation requests and their validation rules
//! - Embeddable media assets (base64 data URIs)
//! - Combined video + narration results
//! - Progress notification events

pub mod asset;
pub mod progress;
pub mod request;
pub mod run;

// Re-export common types
pub use asset::{CombinedMedia, EmbeddableAsset};
pub use progress::{GenerationPhase, ProgressEvent};
pub use request::GenerationRequest;
pub use run::RunId;
