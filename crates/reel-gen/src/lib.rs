//! Asynchronous generation orchestrator.
//!
//! Drives one generation run end to end against the remote generative-media
//! service: submit a long-running job, poll until terminal, fetch the
//! resulting bytes, transcode them into an embeddable asset, and retry the
//! whole cycle on failure. The combined variant runs an independent
//! narration pipeline concurrently and reconciles partial success (video is
//! the primary deliverable; narration degrades gracefully).

pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod poll;
pub mod retry;

pub use client::{GeminiClient, MediaReference, Operation};
pub use config::GenConfig;
pub use error::{GenError, GenResult};
pub use pipeline::{generate_combined, generate_narration};
pub use poll::await_completion;
pub use retry::{generate_video, ProgressCallback};
