//! Single discussion opened from the community list

use leptos::prelude::*;

use super::thread::ContentThread;
use crate::storage::{session_get, SELECTED_DISCUSSION_KEY};

#[component]
pub fn Discussion() -> impl IntoView {
    // Handed over by the list page through sessionStorage; a fresh tab has none.
    let selected = session_get(SELECTED_DISCUSSION_KEY).filter(|id| !id.is_empty());

    view! {
        <ContentThread
            content_id=Signal::derive(move || selected.clone())
            back_href="/discussions"
            back_label="‹ Back to discussions"
            missing_text="Discussion not found. Pick one from the community page."
        />
    }
}
