//! Sign-in page

use agora_types::forms::LoginForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::app::AppState;
use crate::components::{Button, ErrorAlert};

#[component]
pub fn Login() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let do_submit = move || {
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            },
        };

        loading.set(true);
        error.set(None);

        let auth = state.auth.clone();
        let nav = navigate.clone();
        spawn_local(async move {
            match auth.login(&request).await {
                Ok(_) => nav("/profile", Default::default()),
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                    loading.try_set(false);
                },
            }
        });
    };

    let submit_for_keydown = do_submit.clone();
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit_for_keydown();
        }
    };

    view! {
        <Title text="Sign in - Agora" />
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <h1>"Welcome back"</h1>
                    <p class="login-subtitle">"Sign in to publish agents and join discussions"</p>
                </div>

                <ErrorAlert error=error />

                <div class="login-form" on:keydown=on_keydown>
                    <div class="form-group">
                        <label for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            class="form-input"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            autocomplete="current-password"
                            class="form-input"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>
                    <div class="login-links">
                        <a href="/forgot-password">"Forgot password?"</a>
                    </div>

                    <Button
                        text="Sign in"
                        loading_text="Signing in..."
                        loading=loading
                        large=true
                        class="btn--full-width"
                        on_click=do_submit
                    />
                </div>

                <p class="login-hint">
                    "No account yet? "<a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
