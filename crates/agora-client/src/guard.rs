//! Route guard decisions.

use crate::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const PROFILE_ROUTE: &str = "/profile";

/// What a guarded route should do for the current auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth has not settled; show a neutral placeholder, never the children.
    Pending,
    Render,
    /// Navigate away and render nothing.
    Redirect(&'static str),
}

/// `guest_only` routes (login, register) are for anonymous visitors; the rest
/// require a signed-in user.
pub fn resolve(state: &AuthState, guest_only: bool) -> GuardDecision {
    match (state, guest_only) {
        (AuthState::Loading, _) => GuardDecision::Pending,
        (AuthState::Authenticated(_), true) => GuardDecision::Redirect(PROFILE_ROUTE),
        (AuthState::Anonymous, false) => GuardDecision::Redirect(LOGIN_ROUTE),
        _ => GuardDecision::Render,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use agora_types::User;

    fn user() -> User {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "email": "neo@example.com",
            "nickname": "neo"
        }))
        .unwrap()
    }

    #[test]
    fn test_loading_is_pending_either_way() {
        assert_eq!(resolve(&AuthState::Loading, false), GuardDecision::Pending);
        assert_eq!(resolve(&AuthState::Loading, true), GuardDecision::Pending);
    }

    #[test]
    fn test_protected_route() {
        assert_eq!(resolve(&AuthState::Anonymous, false), GuardDecision::Redirect("/login"));
        assert_eq!(resolve(&AuthState::Authenticated(user()), false), GuardDecision::Render);
    }

    #[test]
    fn test_guest_only_route_never_renders_for_users() {
        assert_eq!(resolve(&AuthState::Authenticated(user()), true), GuardDecision::Redirect("/profile"));
        assert_eq!(resolve(&AuthState::Anonymous, true), GuardDecision::Render);
    }
}
