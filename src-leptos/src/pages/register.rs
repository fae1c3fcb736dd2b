//! Account registration

use agora_types::forms::RegisterForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::app::AppState;
use crate::components::ErrorAlert;
use crate::dom::event_target_checked;
use crate::storage::{session_set_json, PENDING_REGISTRATION_KEY};

#[component]
pub fn Register() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    let do_submit = move || {
        let current = form.get_untracked();
        let request = match current.validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            },
        };
        error.set(None);

        // Developers finish on the next page, which submits both parts.
        if current.as_developer {
            session_set_json(PENDING_REGISTRATION_KEY, &current);
            navigate("/register-developer", Default::default());
            return;
        }

        loading.set(true);
        let auth = state.auth.clone();
        let nav = navigate.clone();
        spawn_local(async move {
            match auth.register(&request, None).await {
                Ok(()) => {
                    let target = if auth.state().is_authenticated() { "/profile" } else { "/login" };
                    nav(target, Default::default());
                },
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                    loading.try_set(false);
                },
            }
        });
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           kind: &'static str,
                           get: fn(&RegisterForm) -> String,
                           set: fn(&mut RegisterForm, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    id=id
                    type=kind
                    class="form-input"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                    disabled=move || loading.get()
                />
            </div>
        }
    };

    view! {
        <Title text="Register - Agora" />
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <h1>"Create an account"</h1>
                    <p class="login-subtitle">"Join the community of agent builders"</p>
                </div>

                <ErrorAlert error=error />

                <div class="login-form">
                    {text_field("register-email", "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {text_field("register-nickname", "Nickname", "text", |f| f.nickname.clone(), |f, v| f.nickname = v)}
                    {text_field("register-password", "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {text_field(
                        "register-confirm",
                        "Confirm password",
                        "password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.as_developer)
                            on:change=move |ev| form.update(|f| f.as_developer = event_target_checked(&ev))
                        />
                        "I want to publish agents as a developer"
                    </label>

                    <button
                        type="button"
                        class="btn btn--primary btn--large btn--full-width"
                        disabled=move || loading.get()
                        on:click=move |_| do_submit()
                    >
                        {move || match (loading.get(), form.with(|f| f.as_developer)) {
                            (true, _) => "Creating account...",
                            (false, true) => "Continue",
                            (false, false) => "Register",
                        }}
                    </button>
                </div>

                <p class="login-hint">
                    "Already registered? "<a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
