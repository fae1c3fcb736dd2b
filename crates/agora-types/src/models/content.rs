//! Community content: articles and discussion threads.

use serde::{Deserialize, Serialize};

/// Kind of content, derived from `content_type_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Article,
    Discussion,
    Other(i32),
}

impl ContentKind {
    pub const ARTICLE_TYPE_ID: i32 = 1;
    pub const DISCUSSION_TYPE_ID: i32 = 2;

    pub const fn from_type_id(id: i32) -> Self {
        match id {
            Self::ARTICLE_TYPE_ID => Self::Article,
            Self::DISCUSSION_TYPE_ID => Self::Discussion,
            other => Self::Other(other),
        }
    }

    pub const fn type_id(self) -> i32 {
        match self {
            Self::Article => Self::ARTICLE_TYPE_ID,
            Self::Discussion => Self::DISCUSSION_TYPE_ID,
            Self::Other(id) => id,
        }
    }
}

/// An article or discussion thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    #[serde(deserialize_with = "super::lenient::id")]
    pub id: String,
    #[serde(default)]
    pub content_type_id: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::string")]
    pub content: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, deserialize_with = "super::lenient::tags")]
    pub tags: Vec<String>,
}

impl Content {
    pub const fn kind(&self) -> ContentKind {
        ContentKind::from_type_id(self.content_type_id)
    }

    /// Title, or the opening of the body when untitled.
    pub fn display_title(&self) -> String {
        crate::view::title_or_excerpt(self.title.as_deref(), &self.content)
    }

    /// Card preview of the body.
    pub fn excerpt(&self) -> String {
        if self.content.trim().is_empty() {
            "No description".to_string()
        } else {
            crate::view::excerpt(&self.content, crate::view::EXCERPT_CHARS)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_discussion() {
        let content: Content = serde_json::from_value(serde_json::json!({
            "id": "c-1",
            "content_type_id": 2,
            "title": null,
            "content": "Which framework is best for building AI agents these days, and why?",
            "user_id": "u-1",
            "created_at": "2025-11-05T09:00:00"
        }))
        .unwrap();

        assert_eq!(content.kind(), ContentKind::Discussion);
        assert_eq!(content.display_title(), "Which framework is best for building AI agents the...");
        assert!(content.tags.is_empty());
    }

    #[test]
    fn test_kind_round_trip_for_unknown_type() {
        assert_eq!(ContentKind::from_type_id(9), ContentKind::Other(9));
        assert_eq!(ContentKind::Other(9).type_id(), 9);
    }
}
