//! Second registration page: developer facet for an account collected on
//! the register page.

use agora_client::AuthError;
use agora_types::forms::{DeveloperForm, RegisterForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::app::AppState;
use crate::components::ErrorAlert;
use crate::storage::{session_get_json, session_remove, PENDING_REGISTRATION_KEY};

fn pending_registration() -> Option<RegisterForm> {
    session_get_json::<RegisterForm>(PENDING_REGISTRATION_KEY)
}

#[component]
pub fn RegisterDeveloper() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let form = RwSignal::new(DeveloperForm::default());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);

    // Nothing to finish without the first page's data.
    if pending_registration().is_none() {
        let nav = navigate.clone();
        Effect::new(move |_| nav("/register", NavigateOptions { replace: true, ..Default::default() }));
    }

    let do_submit = move || {
        let Some(account) = pending_registration() else {
            navigate("/register", Default::default());
            return;
        };
        let (request, developer) = match (account.validate(), form.get_untracked().validate()) {
            (Ok(request), Ok(developer)) => (request, developer),
            (Err(e), _) | (_, Err(e)) => {
                error.set(Some(e.to_string()));
                return;
            },
        };

        loading.set(true);
        error.set(None);
        let auth = state.auth.clone();
        let nav = navigate.clone();
        spawn_local(async move {
            match auth.register(&request, Some(developer)).await {
                Ok(()) => {
                    session_remove(PENDING_REGISTRATION_KEY);
                    nav("/profile", Default::default());
                },
                Err(e) => {
                    // The account exists by now; retrying would register it twice.
                    if matches!(e, AuthError::DeveloperProfile(_)) {
                        session_remove(PENDING_REGISTRATION_KEY);
                    }
                    error.try_set(Some(e.to_string()));
                    loading.try_set(false);
                },
            }
        });
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           placeholder: &'static str,
                           get: fn(&DeveloperForm) -> String,
                           set: fn(&mut DeveloperForm, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    id=id
                    class="form-input"
                    placeholder=placeholder
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                    disabled=move || loading.get()
                />
            </div>
        }
    };

    view! {
        <Title text="Developer registration - Agora" />
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <h1>"Developer registration"</h1>
                    <p class="login-subtitle">"Tell users who builds the agents"</p>
                </div>

                <ErrorAlert error=error />

                <div class="login-form">
                    {text_field("dev-first-name", "First name", "", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {text_field("dev-last-name", "Last name", "", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {text_field(
                        "dev-github",
                        "GitHub profile",
                        "https://github.com/you",
                        |f| f.github_profile.clone(),
                        |f, v| f.github_profile = v,
                    )}
                    {text_field(
                        "dev-support-email",
                        "Support email",
                        "Defaults to your account email",
                        |f| f.support_email.clone(),
                        |f, v| f.support_email = v,
                    )}
                    {text_field(
                        "dev-support-phone",
                        "Support phone",
                        "+1 555 123 4567",
                        |f| f.support_phone.clone(),
                        |f, v| f.support_phone = v,
                    )}

                    <div class="form-actions">
                        <a href="/" class="btn btn--secondary">"Cancel"</a>
                        <button
                            type="button"
                            class="btn btn--primary"
                            disabled=move || loading.get()
                            on:click=move |_| do_submit()
                        >
                            {move || if loading.get() { "Registering..." } else { "Finish" }}
                        </button>
                    </div>
                </div>

                <p class="login-hint">
                    "No account yet? "<a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
