//! Community discussions list with tabs and a "new discussion" dialog

use agora_client::{ClientError, GatewayClient};
use agora_types::protocol::ContentCreate;
use agora_types::view::{relative_date, user_label, DiscussionTab};
use agora_types::{Content, ContentKind};
use futures::future::join_all;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::app::AppState;
use crate::components::{Button, ErrorAlert, Modal};
use crate::storage::{session_set, SELECTED_DISCUSSION_KEY};
use crate::tasks::{alert, spawn_fetch};

/// A thread plus its reply count.
#[derive(Clone, PartialEq)]
struct Thread {
    content: Content,
    replies: usize,
}

/// Discussions with reply counts. A thread whose comments cannot be read
/// counts as unanswered.
async fn load_threads(client: GatewayClient) -> Result<Vec<Thread>, ClientError> {
    let discussions = client.contents_of(ContentKind::Discussion).await?;
    let counts = join_all(discussions.iter().map(|d| client.content_comments(&d.id))).await;
    Ok(discussions
        .into_iter()
        .zip(counts)
        .map(|(content, comments)| Thread { content, replies: comments.map(|c| c.len()).unwrap_or(0) })
        .collect())
}

#[component]
pub fn Discussions() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let threads = RwSignal::new(Vec::<Thread>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let tab = RwSignal::new(DiscussionTab::default());

    let modal_open = RwSignal::new(false);
    let new_title = RwSignal::new(String::new());
    let new_body = RwSignal::new(String::new());
    let creating = RwSignal::new(false);

    let client = state.client.clone();
    let report = state.clone();
    spawn_fetch(load_threads(client), move |result| {
        match result {
            Ok(list) => threads.set(list),
            Err(e) => error.set(Some(format!("Failed to load discussions: {}", report.report(&e)))),
        }
        loading.set(false);
    });

    let auth_state = state.auth_state;
    let visible = Memo::new(move |_| {
        let current = tab.get();
        let me = auth_state.with(|s| s.user().map(|u| u.id.clone()));
        threads.with(|list| {
            list.iter()
                .filter(|t| current.matches(t.replies, &t.content.user_id, me.as_deref()))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let close_modal = move || {
        modal_open.set(false);
        new_title.set(String::new());
        new_body.set(String::new());
    };

    let create_state = state.clone();
    let on_create = Callback::new(move |_| {
        let title = new_title.get_untracked().trim().to_string();
        let body = new_body.get_untracked().trim().to_string();
        if title.is_empty() || body.is_empty() {
            return;
        }
        let request = ContentCreate {
            content_type_id: ContentKind::Discussion.type_id(),
            title: Some(title),
            content: body,
            agent_id: None,
        };
        let client = create_state.client.clone();
        let report = create_state.clone();
        creating.set(true);
        spawn_fetch(async move { client.create_content(&request).await }, move |result| {
            match result {
                Ok(created) => {
                    alert(&format!("Discussion created!\n\n\"{}\"", created.display_title()));
                    threads.update(|list| list.insert(0, Thread { content: created, replies: 0 }));
                    close_modal();
                },
                Err(e) => alert(&report.report(&e)),
            }
            creating.set(false);
        });
    });

    let nav_to_login = navigate.clone();
    let open_modal = move || {
        if auth_state.with(|s| s.is_authenticated()) {
            modal_open.set(true);
        } else {
            nav_to_login("/login", Default::default());
        }
    };

    let open_thread = move |id: String| {
        session_set(SELECTED_DISCUSSION_KEY, &id);
        navigate("/discussion", Default::default());
    };
    // Wrap in a Copy handle so nested `<Show>` children stay `Fn`.
    let open_thread = {
        let cb = UnsyncCallback::new(open_thread);
        move |id: String| cb.run(id)
    };

    view! {
        <Title text="Community discussions - Agora" />
        <div class="page-header">
            <div>
                <h1>"Community"</h1>
                <p class="page-subtitle">"Ask questions, share experience and help other developers"</p>
            </div>
            <Button text="New discussion" on_click=open_modal />
        </div>

        <div class="discussion-tabs">
            {DiscussionTab::ALL.into_iter().map(|t| view! {
                <button
                    class=move || format!("tab-button {}", if tab.get() == t { "active" } else { "" })
                    on:click=move |_| tab.set(t)
                >
                    {t.label()}
                </button>
            }).collect_view()}
        </div>

        <ErrorAlert error=error />

        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="page-loading">"Loading discussions..."</div> }
        >
            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=|| view! { <p class="empty-state">"No discussions here yet."</p> }
            >
                <div class="discussions-list">
                    <For
                        each=move || visible.get()
                        key=|t| (t.content.id.clone(), t.replies)
                        children={
                            let open_thread = open_thread.clone();
                            move |t: Thread| {
                                let open = open_thread.clone();
                                let id = t.content.id.clone();
                                let when = relative_date(&t.content.created_at, chrono::Utc::now());
                                view! {
                                    <article class="discussion-card" on:click=move |_| open(id.clone())>
                                        <h3 class="discussion-title">{t.content.display_title()}</h3>
                                        <p class="discussion-excerpt">{t.content.excerpt()}</p>
                                        <div class="discussion-meta">
                                            <span class="discussion-author">{user_label(&t.content.user_id)}</span>
                                            <span class="discussion-date">{when}</span>
                                            <span class="discussion-replies">{format!("{} replies", t.replies)}</span>
                                        </div>
                                        <div class="tags-list">
                                            {t.content.tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                                        </div>
                                    </article>
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </Show>

        <Modal
            is_open=modal_open
            title="New discussion"
            confirm_text="Create".to_string()
            confirm_disabled=Signal::derive(move || {
                creating.get() || new_title.with(|t| t.trim().is_empty()) || new_body.with(|b| b.trim().is_empty())
            })
            on_confirm=on_create
            on_cancel=Callback::new(move |_| close_modal())
        >
            <div class="form-group">
                <label for="discussion-title">"Title"</label>
                <input
                    id="discussion-title"
                    class="form-input"
                    placeholder="What do you want to discuss?"
                    prop:value=move || new_title.get()
                    on:input=move |ev| new_title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="discussion-body">"Description"</label>
                <textarea
                    id="discussion-body"
                    class="form-input"
                    rows=6
                    placeholder="Describe your question in detail"
                    prop:value=move || new_body.get()
                    on:input=move |ev| new_body.set(event_target_value(&ev))
                />
            </div>
        </Modal>
    }
}
