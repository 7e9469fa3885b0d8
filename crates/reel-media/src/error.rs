//! Media transcoding error types.

use thiserror::Error;

pub type MediaResult<T> = Result<T, MediaError>;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("WAV encoding failed: {0}")]
    WavEncode(#[from] hound::Error),

    #[error("Unsupported sample width: {0} bits")]
    UnsupportedSampleWidth(u16),

    #[error("PCM payload length {len} is not a multiple of the {width}-bit sample size")]
    TruncatedSample { len: usize, width: u16 },
}
