//! Comment thread with a posting form, shared by agents, articles and discussions

use agora_types::view::relative_date;
use agora_types::CommentView;
use leptos::prelude::*;

use crate::app::AppState;

#[component]
pub fn CommentSection(
    #[prop(into)] comments: Signal<Vec<CommentView>>,
    /// Called with the trimmed text; the caller clears `draft` on success.
    #[prop(into)]
    on_submit: Callback<String>,
    draft: RwSignal<String>,
    #[prop(into)] posting: Signal<bool>,
    #[prop(default = "Comments")] heading: &'static str,
    #[prop(default = "Write a comment or a question...")] placeholder: &'static str,
) -> impl IntoView {
    let auth_state = expect_context::<AppState>().auth_state;
    let signed_in = move || auth_state.with(|s| s.is_authenticated());

    let submit = move || {
        let text = draft.get_untracked().trim().to_string();
        if !text.is_empty() {
            on_submit.run(text);
        }
    };

    view! {
        <section class="comments-section">
            <h2>{move || format!("{} ({})", heading, comments.with(Vec::len))}</h2>

            <Show
                when=signed_in
                fallback=|| view! {
                    <p class="comments-signin"><a href="/login">"Sign in"</a>" to join the conversation."</p>
                }
            >
                <div class="comment-form">
                    <textarea
                        rows=4
                        placeholder=placeholder
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        disabled=move || posting.get()
                    />
                    <button
                        type="button"
                        class="btn btn--primary"
                        disabled=move || posting.get() || draft.with(|d| d.trim().is_empty())
                        on:click=move |_| submit()
                    >
                        {move || if posting.get() { "Sending..." } else { "Send" }}
                    </button>
                </div>
            </Show>

            <div class="comments-list">
                <Show when=move || comments.with(Vec::is_empty)>
                    <p class="empty-state">"No comments yet. Be the first!"</p>
                </Show>
                <For
                    each=move || comments.get()
                    key=|c| c.id.clone()
                    children=|c| {
                        let when = relative_date(&c.created_at, chrono::Utc::now());
                        view! {
                            <div class="comment-item">
                                <div class="comment-header">
                                    <span class="avatar">{c.initials}</span>
                                    <span class="comment-author">{c.author}</span>
                                    <span class="comment-date">{when}</span>
                                    {c.rating.map(|r| view! { <span class="comment-rating">{format!("★ {}", r)}</span> })}
                                </div>
                                <p class="comment-text">{c.text}</p>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
