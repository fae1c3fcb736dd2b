//! User and developer models.

use serde::{Deserialize, Serialize};

/// Account role as reported by the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular marketplace visitor
    #[default]
    User,
    /// Publishes agents and content
    Creator,
    /// Platform administrator
    Admin,
}

impl Role {
    /// Display label for profile pages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Creator => "Creator",
            Self::Admin => "Administrator",
        }
    }
}

/// Developer facet of a user.
///
/// Gateway versions disagree on which fields are present, so everything but the
/// names is optional and a missing key is the same as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Developer {
    /// Owning user id
    #[serde(default)]
    pub user_id: Option<String>,
    /// Given name
    #[serde(default, deserialize_with = "super::lenient::string")]
    pub first_name: String,
    /// Family name
    #[serde(default, deserialize_with = "super::lenient::string")]
    pub last_name: String,
    /// Link to the developer's GitHub profile
    #[serde(default)]
    pub github_profile: Option<String>,
    /// Public support address
    #[serde(default)]
    pub support_email: Option<String>,
    /// Public support phone (older gateways spelled it `suppor_phone`)
    #[serde(default, alias = "suppor_phone")]
    pub support_phone: Option<String>,
    /// Whether support contacts are shown publicly
    #[serde(default)]
    pub public_contact: Option<bool>,
    /// Whether the platform verified this developer
    #[serde(default)]
    pub verified: bool,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Developer {
    /// A facet without both names is an incomplete record, not a developer.
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_string()
    }
}

/// Authenticated user as returned by `GET /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier
    #[serde(deserialize_with = "super::lenient::id")]
    pub id: String,
    /// Login email
    pub email: String,
    /// Public nickname
    pub nickname: String,
    /// Account role
    #[serde(default)]
    pub role: Role,
    /// Whether the account is active
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Developer facet, present after "become a developer" succeeded
    #[serde(default)]
    pub developer: Option<Developer>,
}

const fn default_true() -> bool {
    true
}

impl User {
    /// Whether the user carries a complete developer facet.
    pub fn is_developer(&self) -> bool {
        self.developer.as_ref().is_some_and(Developer::is_complete)
    }

    /// Two-letter avatar placeholder.
    pub fn initials(&self) -> String {
        crate::view::initials(&self.nickname)
    }

    /// Apply a `PATCH /users/me` response, keeping local values for fields the
    /// gateway left out.
    pub fn merge_update(&self, patch: &serde_json::Value) -> User {
        let mut updated = self.clone();
        if let Some(nickname) = patch.get("nickname").and_then(|v| v.as_str()) {
            updated.nickname = nickname.to_string();
        }
        if let Some(email) = patch.get("email").and_then(|v| v.as_str()) {
            updated.email = email.to_string();
        }
        match patch.get("avatar_url") {
            Some(serde_json::Value::String(url)) => updated.avatar_url = Some(url.clone()),
            Some(serde_json::Value::Null) => updated.avatar_url = None,
            _ => {},
        }
        if let Some(developer) = patch
            .get("developer")
            .filter(|d| !d.is_null())
            .and_then(|d| serde_json::from_value::<Developer>(d.clone()).ok())
        {
            updated.developer = Some(developer);
        }
        if let Some(updated_at) = patch.get("updated_at").and_then(|v| v.as_str()) {
            updated.updated_at = updated_at.to_string();
        }
        updated
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base_json() -> serde_json::Value {
        serde_json::json!({
            "id": "0b8f6a52-7c1e-4a0e-9d7b-2f4c1f3e9a10",
            "email": "neo@example.com",
            "nickname": "neo",
            "role": "creator",
            "is_active": true,
            "created_at": "2025-11-01T10:00:00",
            "updated_at": "2025-11-02T10:00:00"
        })
    }

    #[test]
    fn test_missing_and_null_developer_are_equivalent() {
        let missing: User = serde_json::from_value(base_json()).unwrap();
        let mut with_null = base_json();
        with_null["developer"] = serde_json::Value::Null;
        with_null["avatar_url"] = serde_json::Value::Null;
        let null: User = serde_json::from_value(with_null).unwrap();

        assert_eq!(missing, null);
        assert!(!missing.is_developer());
        assert_eq!(missing.role, Role::Creator);
    }

    #[test]
    fn test_incomplete_developer_is_not_a_developer() {
        let mut json = base_json();
        json["developer"] = serde_json::json!({ "first_name": "Thomas", "last_name": null });
        let user: User = serde_json::from_value(json.clone()).unwrap();
        assert!(user.developer.is_some());
        assert!(!user.is_developer());

        json["developer"] = serde_json::json!({ "first_name": "Thomas", "last_name": "  " });
        let user: User = serde_json::from_value(json).unwrap();
        assert!(!user.is_developer());
    }

    #[test]
    fn test_legacy_phone_alias() {
        let mut json = base_json();
        json["developer"] = serde_json::json!({
            "first_name": "Thomas",
            "last_name": "Anderson",
            "suppor_phone": "+15550100"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert!(user.is_developer());
        assert_eq!(user.developer.unwrap().support_phone.as_deref(), Some("+15550100"));
    }

    #[test]
    fn test_merge_update_keeps_missing_fields() {
        let user: User = serde_json::from_value(base_json()).unwrap();
        let merged = user.merge_update(&serde_json::json!({ "nickname": "the-one", "avatar_url": null }));
        assert_eq!(merged.nickname, "the-one");
        assert_eq!(merged.email, "neo@example.com");
        assert_eq!(merged.avatar_url, None);
    }
}
