//! Embeddable media asset types.

use serde::{Deserialize, Serialize};

/// A self-contained, embeddable media asset.
///
/// Holds the base64 payload together with its declared media type. Once
/// constructed the asset is never mutated; callers render it with
/// [`EmbeddableAsset::to_data_uri`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddableAsset {
    /// Declared media type (e.g. `video/mp4`, `audio/wav`)
    pub mime_type: String,
    /// Base64-encoded payload
    pub data: String,
}

impl EmbeddableAsset {
    /// Create an asset from an already base64-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Render the asset as a `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Settled result of a combined video + narration run.
///
/// `video_data_uri` is always non-empty on success. `audio_data_uri` is the
/// empty string when the narration pipeline failed while video succeeded;
/// that state is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedMedia {
    /// Generated video as a `data:` URI
    pub video_data_uri: String,
    /// Generated narration as a `data:` URI, or empty when unavailable
    pub audio_data_uri: String,
}

impl CombinedMedia {
    /// Whether narration audio is present.
    pub fn has_audio(&self) -> bool {
        !self.audio_data_uri.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_format() {
        let asset = EmbeddableAsset::new("video/mp4", "AAAA");
        assert_eq!(asset.to_data_uri(), "data:video/mp4;base64,AAAA");
    }

    #[test]
    fn test_combined_media_audio_presence() {
        let with_audio = CombinedMedia {
            video_data_uri: "data:video/mp4;base64,AAAA".to_string(),
            audio_data_uri: "data:audio/wav;base64,BBBB".to_string(),
        };
        assert!(with_audio.has_audio());

        let without_audio = CombinedMedia {
            video_data_uri: "data:video/mp4;base64,AAAA".to_string(),
            audio_data_uri: String::new(),
        };
        assert!(!without_audio.has_audio());
    }
}
