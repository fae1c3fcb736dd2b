//! Session token model.

use serde::{Deserialize, Serialize};

/// Bearer credentials issued by `POST /login` (and `POST /refresh`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Access token sent as `Authorization: Bearer ...`
    pub access_token: String,
    /// Refresh token for renewing access, when the gateway issued one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Token type (usually "bearer")
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Create a session from an access token and optional refresh token.
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self { access_token: access_token.into(), refresh_token, token_type: default_token_type() }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Whether a refresh attempt is possible.
    pub fn can_refresh(&self) -> bool {
        self.refresh_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Merge a refreshed session, keeping the old refresh token when the
    /// gateway did not rotate it.
    pub fn rotated(self, fresh: Session) -> Session {
        Session {
            refresh_token: fresh.refresh_token.or(self.refresh_token),
            access_token: fresh.access_token,
            token_type: fresh.token_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_without_refresh() {
        let session: Session = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(session.bearer(), "Bearer abc");
        assert_eq!(session.token_type, "bearer");
        assert!(!session.can_refresh());
    }

    #[test]
    fn test_rotation_keeps_refresh_token() {
        let old = Session::new("a1", Some("r1".to_string()));
        let merged = old.clone().rotated(Session::new("a2", None));
        assert_eq!(merged.access_token, "a2");
        assert_eq!(merged.refresh_token.as_deref(), Some("r1"));

        let merged = old.rotated(Session::new("a3", Some("r2".to_string())));
        assert_eq!(merged.refresh_token.as_deref(), Some("r2"));
    }
}
