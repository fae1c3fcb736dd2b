//! Agent media models.

use serde::{Deserialize, Serialize};

/// Whether a media file is a picture or a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Guess from a MIME type or, failing that, the file extension.
    pub fn detect(mime: &str, file_name: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            return Some(Self::Image);
        }
        if mime.starts_with("video/") {
            return Some(Self::Video);
        }
        let ext = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())?;
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" => Some(Self::Image),
            "mp4" | "webm" | "mov" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Media record stored for an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentMedia {
    #[serde(deserialize_with = "super::lenient::id")]
    pub id: String,
    pub agent_id: String,
    pub media_type: String,
    pub file_path: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One slide of a media carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    pub alt: Option<String>,
}

impl From<&AgentMedia> for MediaItem {
    fn from(media: &AgentMedia) -> Self {
        let kind = MediaKind::detect(&media.media_type, &media.file_path).unwrap_or(MediaKind::Image);
        Self { kind, src: media.file_path.clone(), alt: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(MediaKind::detect("image/png", "x"), Some(MediaKind::Image));
        assert_eq!(MediaKind::detect("", "demo.MP4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::detect("application/zip", "agent.zip"), None);
    }
}
