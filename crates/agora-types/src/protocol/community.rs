//! Community payloads: content and content comments.

use serde::Serialize;

/// Body of `POST /contents/`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContentCreate {
    pub content_type_id: i32,
    pub title: Option<String>,
    pub content: String,
    pub agent_id: Option<String>,
}

/// Body of `POST /contents/{id}/comments`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContentCommentCreate {
    pub content_id: String,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
}

impl ContentCommentCreate {
    pub fn new(content_id: impl Into<String>, comment: impl Into<String>) -> Self {
        Self { content_id: content_id.into(), comment: comment.into(), rating: None, parent_comment_id: None }
    }

    /// Reply to an existing comment.
    pub fn reply_to(mut self, parent_comment_id: impl Into<String>) -> Self {
        self.parent_comment_id = Some(parent_comment_id.into());
        self
    }
}
