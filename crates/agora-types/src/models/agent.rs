//! Marketplace listing models.

use serde::{Deserialize, Serialize};

/// Developer summary embedded in an agent detail response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentDeveloper {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub support_phone: Option<String>,
    #[serde(default)]
    pub public_contact: Option<bool>,
}

impl AgentDeveloper {
    /// Nickname when known, else the full name.
    pub fn display_name(&self) -> Option<String> {
        if let Some(nick) = self.nickname.as_deref().filter(|n| !n.trim().is_empty()) {
            return Some(nick.to_string());
        }
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let full = full.trim();
        (!full.is_empty()).then(|| full.to_string())
    }
}

/// An AI agent listed on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    /// Unique identifier
    #[serde(deserialize_with = "super::lenient::id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug derived from the name
    #[serde(default)]
    pub slug: String,
    /// Repository or download link
    #[serde(default)]
    pub agent_url: Option<String>,
    /// Short description
    #[serde(default, deserialize_with = "super::lenient::string")]
    pub description: String,
    /// Installation / run requirements
    #[serde(default)]
    pub requirements: Option<String>,
    /// Free-form tags
    #[serde(default, deserialize_with = "super::lenient::tags")]
    pub tags: Vec<String>,
    /// Category reference
    #[serde(default)]
    pub category_id: Option<String>,
    /// Linked article
    #[serde(default)]
    pub article_id: Option<String>,
    /// Rental price; `None` means free
    #[serde(default)]
    pub price: Option<f64>,
    /// Average rating (the gateway spells the key `avg_raiting`)
    #[serde(default, rename = "avg_raiting", alias = "avg_rating")]
    pub avg_rating: Option<f64>,
    /// Number of reviews
    #[serde(default)]
    pub reviews_count: Option<u32>,
    /// Owning user
    #[serde(default)]
    pub user_id: String,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Publisher summary, only on detail responses
    #[serde(default)]
    pub developer: Option<AgentDeveloper>,
}

impl Agent {
    /// Tags to show on cards: explicit tags, else ones guessed from the description.
    pub fn display_tags(&self, limit: usize) -> Vec<String> {
        if self.tags.is_empty() {
            crate::view::extract_tags(&self.description, limit)
        } else {
            self.tags.iter().take(limit).cloned().collect()
        }
    }

    /// Case-insensitive match against name, description and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }

    /// Publisher label for the detail header.
    pub fn publisher_name(&self) -> String {
        self.developer
            .as_ref()
            .and_then(AgentDeveloper::display_name)
            .unwrap_or_else(|| "Unknown developer".to_string())
    }
}

/// Release channel of an agent version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    #[default]
    Stable,
    Latest,
    Published,
}

impl VersionStatus {
    pub const ALL: [VersionStatus; 3] = [Self::Stable, Self::Latest, Self::Published];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Latest => "latest",
            Self::Published => "published",
        }
    }

    /// Parse a `<select>` value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A published version of an agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentVersion {
    #[serde(deserialize_with = "super::lenient::id")]
    pub id: String,
    pub agent_id: String,
    pub version: String,
    #[serde(default)]
    pub changelog: Option<String>,
    #[serde(default)]
    pub status: VersionStatus,
    #[serde(default)]
    pub project_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_wire_quirks() {
        let agent: Agent = serde_json::from_value(serde_json::json!({
            "id": "a-1",
            "name": "CodeMaster Pro",
            "slug": "codemaster-pro",
            "description": "Reviews #rust and #python pull requests",
            "tags": "review, ci",
            "price": null,
            "avg_raiting": 4.5,
            "reviews_count": 12,
            "user_id": "u-1"
        }))
        .unwrap();

        assert_eq!(agent.avg_rating, Some(4.5));
        assert_eq!(agent.tags, vec!["review", "ci"]);
        assert!(agent.matches_query("CODEMASTER"));
        assert!(agent.matches_query("ci"));
        assert!(!agent.matches_query("marketing"));
        assert_eq!(agent.publisher_name(), "Unknown developer");

        let json = serde_json::to_value(&agent).unwrap();
        assert_eq!(json["avg_raiting"], 4.5);
    }

    #[test]
    fn test_display_tags_fall_back_to_description() {
        let agent: Agent = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Reviewer",
            "description": "Reviews #rust and #python pull requests",
            "tags": null
        }))
        .unwrap();
        assert_eq!(agent.id, "7");
        assert_eq!(agent.display_tags(5), vec!["rust", "python"]);
    }

    #[test]
    fn test_version_status_parse() {
        assert_eq!(VersionStatus::parse("latest"), Some(VersionStatus::Latest));
        assert_eq!(VersionStatus::parse("beta"), None);
    }
}
