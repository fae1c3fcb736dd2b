//! Authentication and profile payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Role;

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Body of `POST /refresh`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Body of `POST /users/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3, max = 100))]
    pub nickname: String,
    #[validate(length(min = 8, max = 72))]
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    /// Credentials for the follow-up login.
    pub fn login(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Body of `POST /developers/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeveloperRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,
}

impl DeveloperRequest {
    /// The gateway requires a support address; default it to the account email.
    pub fn with_support_email_fallback(mut self, email: &str) -> Self {
        if self.support_email.as_deref().is_none_or(|e| e.trim().is_empty()) {
            self.support_email = Some(email.to_string());
        }
        self
    }
}

/// Body of `PATCH /users/me`.
///
/// `avatar_url` is always serialized so an empty field clears the avatar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub nickname: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_serializes_null_avatar() {
        let update = ProfileUpdate {
            nickname: "neo".to_string(),
            email: "neo@example.com".to_string(),
            avatar_url: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("avatar_url").unwrap().is_null());
    }

    #[test]
    fn test_developer_support_email_fallback() {
        let request = DeveloperRequest {
            first_name: "Thomas".to_string(),
            last_name: "Anderson".to_string(),
            ..Default::default()
        }
        .with_support_email_fallback("neo@example.com");
        assert_eq!(request.support_email.as_deref(), Some("neo@example.com"));

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("github_profile").is_none());
    }

    #[test]
    fn test_register_validation() {
        let request = RegisterRequest {
            email: "neo@example.com".to_string(),
            nickname: "neo".to_string(),
            password: "short".to_string(),
            role: Role::User,
        };
        assert!(request.validate().is_err());
    }
}
