//! Top navigation bar

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppState;
use crate::components::{Button, ButtonVariant, Modal, ModalType};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const NAV_ITEMS: [(&str, &str); 3] = [("Catalog", "/"), ("Articles", "/articles"), ("Community", "/discussions")];

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let auth_state = state.auth_state;
    let location = use_location();
    let navigate = use_navigate();
    let logout_confirm = RwSignal::new(false);

    let auth = state.auth.clone();
    let nav_after_logout = navigate.clone();
    let on_logout = Callback::new(move |_| {
        logout_confirm.set(false);
        auth.logout();
        nav_after_logout("/", Default::default());
    });

    let nav_to_login = navigate.clone();

    view! {
        <header class="main-header">
            <div class="header-container">
                <div class="header-left">
                    <a href="/" class="logo">
                        <span class="logo-title">"Agora"</span>
                        <span class="logo-subtitle">"AI agent marketplace"</span>
                        <span class="version">{format!("v{}", VERSION)}</span>
                    </a>
                    <nav class="main-nav">
                        {NAV_ITEMS.into_iter().map(|(label, path)| {
                            let current_path = location.pathname;
                            let is_active = move || {
                                let curr = current_path.get();
                                if path == "/" { curr == "/" || curr.starts_with("/agent/") } else { curr.starts_with(path) }
                            };
                            view! {
                                <a href=path class=move || format!("nav-item {}", if is_active() { "active" } else { "" })>
                                    {label}
                                </a>
                            }
                        }).collect_view()}
                    </nav>
                </div>

                <div class="header-right">
                    {move || {
                        let nav_to_login = nav_to_login.clone();
                        auth_state.with(|s| {
                            if s.is_loading() {
                                return ().into_any();
                            }
                            match s.user() {
                                Some(user) => {
                                    let initials = user.initials();
                                    let nickname = user.nickname.clone();
                                    let is_developer = user.is_developer();
                                    view! {
                                        <Show when=move || is_developer>
                                            <a href="/add_agents/agent" class="btn btn--secondary">"Add agent"</a>
                                        </Show>
                                        <a href="/profile" class="user-chip">
                                            <span class="avatar">{initials}</span>
                                            <span class="user-name">{nickname}</span>
                                        </a>
                                        <Button
                                            text="Log out"
                                            variant=ButtonVariant::Ghost
                                            on_click=move || logout_confirm.set(true)
                                        />
                                    }
                                    .into_any()
                                },
                                None => view! {
                                    <Button
                                        text="Sign in / Register"
                                        class="login-button"
                                        on_click=move || nav_to_login("/login", Default::default())
                                    />
                                }
                                .into_any(),
                            }
                        })
                    }}
                </div>
            </div>

            <Modal
                is_open=logout_confirm
                title="Log out"
                message="Do you really want to log out?".to_string()
                modal_type=ModalType::Danger
                confirm_text="Log out".to_string()
                on_confirm=on_logout
                on_cancel=Callback::new(move |_| logout_confirm.set(false))
            />
        </header>
    }
}
