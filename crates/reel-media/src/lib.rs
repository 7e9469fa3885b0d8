//! In-memory media transcoding for the ReelGen backend.
//!
//! Converts raw binary payloads into self-contained, embeddable assets:
//! - Raw PCM audio is wrapped in a RIFF/WAVE container before encoding
//! - Downloaded video bytes are encoded as-is with their declared type
//!
//! All operations are pure and synchronous; nothing touches the filesystem.

pub mod error;
pub mod transcode;
pub mod wav;

pub use error::{MediaError, MediaResult};
pub use transcode::{pcm_to_wav_asset, to_embeddable, DEFAULT_VIDEO_MIME, WAV_MIME};
pub use wav::{pcm_to_wav, PcmFormat};
