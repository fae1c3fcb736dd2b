//! Comment models for agents and content.

use serde::{Deserialize, Serialize};

/// Review left on an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentComment {
    #[serde(deserialize_with = "super::lenient::id")]
    pub id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default, deserialize_with = "super::lenient::string")]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub author_nickname: Option<String>,
}

/// Comment on an article or discussion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentComment {
    #[serde(deserialize_with = "super::lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "super::lenient::string")]
    pub comment: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub parent_comment_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Comment normalised for rendering, whatever it was attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: String,
    pub author: String,
    pub initials: String,
    pub text: String,
    pub created_at: String,
    pub rating: Option<i32>,
}

impl From<AgentComment> for CommentView {
    fn from(c: AgentComment) -> Self {
        let author = c
            .author_nickname
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| crate::view::user_label(&c.user_id));
        Self {
            initials: crate::view::initials(&author),
            id: c.id,
            author,
            text: c.content,
            created_at: c.created_at,
            rating: c.rating,
        }
    }
}

impl From<ContentComment> for CommentView {
    fn from(c: ContentComment) -> Self {
        let author = crate::view::user_label(c.user_id.as_deref().unwrap_or_default());
        Self {
            initials: crate::view::initials(&author),
            id: c.id,
            author,
            text: c.comment,
            created_at: c.created_at,
            rating: c.rating,
        }
    }
}
