//! Conversion of raw bytes into embeddable assets.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reel_models::EmbeddableAsset;
use tracing::debug;

use crate::error::MediaResult;
use crate::wav::{pcm_to_wav, PcmFormat};

/// Media type used for video assets when the service declares none.
pub const DEFAULT_VIDEO_MIME: &str = "video/mp4";

/// Media type of the WAV container produced for narration audio.
pub const WAV_MIME: &str = "audio/wav";

/// Encode raw bytes as an embeddable asset with the given media type.
pub fn to_embeddable(bytes: &[u8], mime_type: &str) -> EmbeddableAsset {
    debug!(mime_type, size = bytes.len(), "Encoding asset payload");
    EmbeddableAsset::new(mime_type, STANDARD.encode(bytes))
}

/// Wrap raw PCM audio in a WAV container and encode it as an asset.
///
/// The output media type is always `audio/wav` regardless of what the
/// speech service declared for the raw samples.
pub fn pcm_to_wav_asset(pcm: &[u8], format: &PcmFormat) -> MediaResult<EmbeddableAsset> {
    let wav = pcm_to_wav(pcm, format)?;
    Ok(to_embeddable(&wav, WAV_MIME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_bytes_encoded_as_is() {
        let asset = to_embeddable(b"not really mp4", DEFAULT_VIDEO_MIME);
        assert_eq!(asset.mime_type, "video/mp4");
        assert_eq!(
            STANDARD.decode(&asset.data).unwrap(),
            b"not really mp4".to_vec()
        );
        assert!(asset.to_data_uri().starts_with("data:video/mp4;base64,"));
    }

    #[test]
    fn test_pcm_asset_round_trip() {
        let pcm: Vec<u8> = vec![0x34, 0x12, 0xcc, 0xed];
        let asset = pcm_to_wav_asset(&pcm, &PcmFormat::default()).unwrap();
        assert_eq!(asset.mime_type, "audio/wav");

        // Decoding the payload yields a WAV container whose data chunk is
        // byte-identical to the original PCM.
        let wav = STANDARD.decode(&asset.data).unwrap();
        let tail = &wav[wav.len() - pcm.len()..];
        assert_eq!(tail, pcm.as_slice());
    }
}
