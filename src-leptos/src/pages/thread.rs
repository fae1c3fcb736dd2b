//! Shared body of the article and discussion pages: the content itself plus
//! its comment thread.

use agora_types::protocol::ContentCommentCreate;
use agora_types::view::{format_date, initials, user_label};
use agora_types::{CommentView, Content};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::AppState;
use crate::components::{CommentSection, ErrorAlert};
use crate::tasks::{alert, spawn_fetch};

#[component]
pub(super) fn ContentThread(
    /// Content id; `None` shows `missing_text`.
    #[prop(into)]
    content_id: Signal<Option<String>>,
    back_href: &'static str,
    back_label: &'static str,
    missing_text: &'static str,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    let content = RwSignal::new(Option::<Content>::None);
    let comments = RwSignal::new(Vec::<CommentView>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let draft = RwSignal::new(String::new());
    let posting = RwSignal::new(false);

    let load_state = state.clone();
    Effect::new(move |_| {
        let Some(id) = content_id.get() else {
            error.set(Some(missing_text.to_string()));
            return;
        };
        loading.set(true);
        error.set(None);
        let client = load_state.client.clone();
        let report = load_state.clone();
        spawn_fetch(
            async move {
                let (content, comments) = futures::join!(client.content(&id), client.content_comments(&id));
                let comments = comments.unwrap_or_else(|e| {
                    log::warn!("Comments unavailable: {}", e);
                    Vec::new()
                });
                Ok((content?, comments))
            },
            move |result| {
                match result {
                    Ok((loaded, thread)) => {
                        comments.set(thread.into_iter().map(CommentView::from).collect());
                        content.set(Some(loaded));
                    },
                    Err(e) => error.set(Some(report.report(&e))),
                }
                loading.set(false);
            },
        );
    });

    let post_state = state.clone();
    let on_submit = Callback::new(move |text: String| {
        let Some(id) = content_id.get_untracked() else {
            return;
        };
        let client = post_state.client.clone();
        let report = post_state.clone();
        let request = ContentCommentCreate::new(id, text);
        posting.set(true);
        spawn_fetch(async move { client.post_content_comment(&request).await }, move |result| {
            match result {
                Ok(comment) => {
                    comments.update(|c| c.push(CommentView::from(comment)));
                    draft.set(String::new());
                },
                Err(e) => alert(&report.report(&e)),
            }
            posting.set(false);
        });
    });

    view! {
        <div class="back-to-catalog">
            <a href=back_href class="btn btn--secondary">{back_label}</a>
        </div>
        <ErrorAlert error=error />
        <Show when=move || loading.get()>
            <div class="page-loading">"Loading..."</div>
        </Show>
        {move || content.get().map(|c| {
            let author = user_label(&c.user_id);
            let title = c.display_title();
            view! {
                <Title text=format!("{} - Agora", title) />
                <article class="agent-card-detailed content-card">
                    <div class="content-header">
                        <span class="avatar">{initials(&author)}</span>
                        <div>
                            <span class="content-author">{author.clone()}</span>
                            <span class="content-date">{format_date(&c.created_at)}</span>
                        </div>
                    </div>
                    <h1 class="content-title">{title}</h1>
                    <div class="content-body preformatted">{c.content.clone()}</div>
                    <div class="tags-list">
                        {c.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                    </div>
                </article>
            }
        })}
        <Show when=move || content.with(Option::is_some)>
            <CommentSection comments=comments on_submit=on_submit draft=draft posting=posting />
        </Show>
    }
}
