//! Inline alert banners

use leptos::prelude::*;

/// Error banner; hidden while the signal is `None`.
#[component]
pub fn ErrorAlert(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|msg| {
            view! {
                <div class="alert alert--error" role="alert">
                    <span>{msg}</span>
                </div>
            }
        })
    }
}

/// Success or error banner driven by `(text, is_error)`.
#[component]
pub fn MessageBanner(message: RwSignal<Option<(String, bool)>>) -> impl IntoView {
    move || {
        message.get().map(|(msg, is_error)| {
            view! {
                <div class=format!("alert {}", if is_error { "alert--error" } else { "alert--success" })>
                    <span>{msg}</span>
                </div>
            }
        })
    }
}
