//! Form state and the checks each form runs before anything is sent.
//!
//! Every form converts into its request payload through a `validate` /
//! `into_request` method, so pages never build payloads from raw input.

mod account;
mod agent;

pub use account::{DeveloperForm, LoginForm, PasswordChangeForm, ProfileForm, RegisterForm};
pub use agent::{
    toggle_category, AgentBasicsForm, MediaFile, MediaSelection, VersionForm, CATEGORIES,
    MAX_CATEGORIES, VIDEO_MAX_BYTES, VIDEO_MAX_SECONDS,
};

/// Nickname length accepted by the gateway.
pub const NICKNAME_LEN: (usize, usize) = (3, 100);
/// Password length accepted by the gateway.
pub const PASSWORD_LEN: (usize, usize) = (8, 72);

/// `local@domain.tld` shape check, shared by every form with an email field.
pub fn is_valid_email(email: &str) -> bool {
    use validator::ValidateEmail;

    let email = email.trim();
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    domain.contains('.') && !domain.ends_with('.') && email.validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("neo@example.com"));
        assert!(is_valid_email("  neo@example.com "));
        assert!(!is_valid_email("neo@localhost"));
        assert!(!is_valid_email("neo.example.com"));
        assert!(!is_valid_email("neo@exa mple.com"));
    }
}
