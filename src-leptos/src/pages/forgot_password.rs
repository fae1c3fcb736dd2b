//! Password reset request.
//!
//! The gateway has no reset endpoint yet; the page confirms after a short
//! delay without revealing whether the address is registered.

use agora_types::forms::is_valid_email;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::components::ErrorAlert;

const SIMULATED_DELAY_MS: u32 = 1500;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let message = RwSignal::new(Option::<String>::None);
    let sending = RwSignal::new(false);

    let do_submit = move || {
        let address = email.get_untracked().trim().to_string();
        if !is_valid_email(&address) {
            error.set(Some("Enter a valid email address".to_string()));
            return;
        }
        error.set(None);
        sending.set(true);
        log::info!("Password reset requested for {}", address);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SIMULATED_DELAY_MS).await;
            message.try_set(Some(
                "If an account with this email exists, a password reset link has been sent to it.".to_string(),
            ));
            email.try_set(String::new());
            sending.try_set(false);
        });
    };

    view! {
        <Title text="Reset password - Agora" />
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <h1>"Reset password"</h1>
                </div>

                {move || message.get().map(|m| view! { <div class="alert alert--success">{m}</div> })}
                <ErrorAlert error=error />

                <Show when=move || message.with(Option::is_none)>
                    <div class="login-form">
                        <div class="form-group">
                            <label for="reset-email">"Email"</label>
                            <input
                                id="reset-email"
                                type="email"
                                class="form-input"
                                placeholder="Enter your email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                disabled=move || sending.get()
                            />
                        </div>
                        <div class="form-actions">
                            <a href="/login" class="btn btn--secondary">"Cancel"</a>
                            <button
                                type="button"
                                class="btn btn--primary"
                                disabled=move || sending.get()
                                on:click=move |_| do_submit()
                            >
                                {move || if sending.get() { "Sending..." } else { "Send" }}
                            </button>
                        </div>
                    </div>
                </Show>

                <p class="login-hint"><a href="/login">"Back to sign in"</a></p>
            </div>
        </div>
    }
}
