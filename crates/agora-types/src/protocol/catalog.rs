//! Catalog payloads: agents, versions, reviews.

use serde::Serialize;

use crate::models::VersionStatus;

/// Body of `POST /agents/` (wizard step 1).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgentCreate {
    pub user_id: String,
    pub name: String,
    pub slug: String,
    pub agent_url: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub tags: Vec<String>,
    pub category_id: Option<String>,
    pub article_id: Option<String>,
    pub price: Option<f64>,
}

/// Body of `POST /agents/{id}/versions/` (wizard step 2).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VersionCreate {
    pub agent_id: String,
    pub version: String,
    pub changelog: Option<String>,
    pub status: VersionStatus,
    pub project_path: Option<String>,
}

/// Body of `POST /agents/{id}/comments`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AgentCommentCreate {
    pub agent_id: String,
    pub content: String,
    pub rating: i32,
}

impl AgentCommentCreate {
    pub const DEFAULT_RATING: i32 = 5;

    pub fn new(agent_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self { agent_id: agent_id.into(), content: content.into(), rating: Self::DEFAULT_RATING }
    }
}
