//! Auth state for the component tree and the route guard.

use agora_client::{resolve, GuardDecision};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::app::AppState;

/// Mirrors [`agora_client::AuthService`] into `AppState::auth_state` and
/// restores the stored session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let state = expect_context::<AppState>();

    let auth_state = state.auth_state;
    let mut updates = state.auth.subscribe();
    spawn_local(async move {
        while updates.changed().await.is_ok() {
            let next = updates.borrow_and_update().clone();
            if auth_state.try_set(next).is_some() {
                break;
            }
        }
    });

    let auth = state.auth.clone();
    spawn_local(async move {
        let settled = auth.restore().await;
        log::debug!("Auth settled: authenticated={}", settled.is_authenticated());
    });

    children()
}

/// Renders its children only when the auth state allows it.
///
/// While auth is loading a placeholder is shown; a redirect renders nothing.
#[component]
pub fn ProtectedRoute(
    /// Login/register pages: signed-in users are sent to their profile.
    #[prop(optional)]
    guest_only: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth_state = expect_context::<AppState>().auth_state;
    let decision = Memo::new(move |_| auth_state.with(|s| resolve(s, guest_only)));

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(to, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="page-loading">"Loading..."</div> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
