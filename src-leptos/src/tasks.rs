//! Async glue between gateway calls and component lifetimes.

use std::future::Future;

use agora_client::{cancellable, ClientError};
use leptos::prelude::*;
use leptos::task::spawn_local;

const FLASH_MS: u32 = 3000;

/// Run a gateway call owned by the current component.
///
/// The call is aborted when the owner is cleaned up, so `apply` never runs
/// against disposed signals.
pub fn spawn_fetch<T, F, A>(fut: F, apply: A)
where
    T: 'static,
    F: Future<Output = Result<T, ClientError>> + 'static,
    A: FnOnce(Result<T, ClientError>) + 'static,
{
    let (fut, handle) = cancellable(fut);
    on_cleanup(move || handle.abort());
    spawn_local(async move {
        match fut.await {
            Err(ClientError::Cancelled) => log::debug!("Request cancelled on unmount"),
            result => apply(result),
        }
    });
}

/// Show a banner message for a few seconds.
pub fn flash(message: RwSignal<Option<(String, bool)>>, text: impl Into<String>, is_error: bool) {
    message.set(Some((text.into(), is_error)));
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(FLASH_MS).await;
        message.try_set(None);
    });
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        drop(window.alert_with_message(message));
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
}
