//! Agent detail page: description, discussions, reviews

use agora_types::protocol::AgentCommentCreate;
use agora_types::view::{format_date, price_label, rating_label, reviews_label, title_or_excerpt};
use agora_types::{Agent, CommentView, Content};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::AppState;
use crate::components::{CommentSection, ErrorAlert};
use crate::storage::{session_set, SELECTED_DISCUSSION_KEY};
use crate::tasks::{alert, spawn_fetch};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AgentTab {
    Description,
    Guide,
    Discussions,
}

impl AgentTab {
    const ALL: [AgentTab; 3] = [Self::Description, Self::Guide, Self::Discussions];

    fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Guide => "Guide",
            Self::Discussions => "Discussions",
        }
    }
}

#[derive(Clone)]
struct AgentPage {
    agent: Agent,
    discussions: Vec<Content>,
}

#[component]
pub fn AgentDetail() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();
    let agent_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let page = RwSignal::new(Option::<AgentPage>::None);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let tab = RwSignal::new(AgentTab::Description);
    let comments = RwSignal::new(Vec::<CommentView>::new());
    let draft = RwSignal::new(String::new());
    let posting = RwSignal::new(false);

    let load_state = state.clone();
    Effect::new(move |_| {
        let id = agent_id.get();
        loading.set(true);
        error.set(None);
        let client = load_state.client.clone();
        let report = load_state.clone();
        spawn_fetch(
            async move {
                // Reviews and discussions are secondary: their failure leaves the lists empty.
                let (agent, comments, discussions) =
                    futures::join!(client.agent(&id), client.agent_comments(&id), client.agent_discussions(&id));
                let comments = comments.unwrap_or_else(|e| {
                    log::warn!("Comments unavailable: {}", e);
                    Vec::new()
                });
                let discussions = discussions.unwrap_or_else(|e| {
                    log::warn!("Discussions unavailable: {}", e);
                    Vec::new()
                });
                let page = AgentPage { agent: agent?, discussions };
                Ok((page, comments.into_iter().map(CommentView::from).collect::<Vec<_>>()))
            },
            move |result| {
                match result {
                    Ok((loaded, reviews)) => {
                        comments.set(reviews);
                        page.set(Some(loaded));
                    },
                    Err(e) => error.set(Some(report.report(&e))),
                }
                loading.set(false);
            },
        );
    });

    let post_state = state.clone();
    let on_submit = Callback::new(move |text: String| {
        let client = post_state.client.clone();
        let report = post_state.clone();
        let request = AgentCommentCreate::new(agent_id.get_untracked(), text);
        posting.set(true);
        spawn_fetch(async move { client.post_agent_comment(&request).await }, move |result| {
            match result {
                Ok(comment) => {
                    comments.update(|c| c.insert(0, CommentView::from(comment)));
                    draft.set(String::new());
                },
                Err(e) => alert(&report.report(&e)),
            }
            posting.set(false);
        });
    });

    view! {
        <div class="back-to-catalog">
            <a href="/" class="btn btn--secondary">"‹ Back to catalog"</a>
        </div>
        <ErrorAlert error=error />
        <Show when=move || loading.get()>
            <div class="page-loading">"Loading agent..."</div>
        </Show>
        {move || page.get().map(|p| view! {
            <Title text=format!("{} - Agora", p.agent.name) />
            <AgentBody page=p tab=tab />
        })}
        <Show when=move || page.with(Option::is_some)>
            <CommentSection
                comments=comments
                on_submit=on_submit
                draft=draft
                posting=posting
                heading="Comments and reviews"
            />
        </Show>
    }
}

#[component]
fn AgentBody(page: AgentPage, tab: RwSignal<AgentTab>) -> impl IntoView {
    let navigate = use_navigate();
    let AgentPage { agent, discussions } = page;

    let publisher = agent.publisher_name();
    let description = agent.description.clone();
    let requirements = agent.requirements.clone().filter(|r| !r.trim().is_empty());
    let tags = agent.display_tags(usize::MAX);
    let download = agent.agent_url.clone().filter(|u| !u.trim().is_empty());
    let published = agent.created_at.as_deref().map(format_date);
    let contact = agent
        .developer
        .as_ref()
        .filter(|d| d.public_contact.unwrap_or(false))
        .and_then(|d| d.support_email.clone());

    let open_discussion = move |id: String| {
        session_set(SELECTED_DISCUSSION_KEY, &id);
        navigate("/discussion", Default::default());
    };

    view! {
        <div class="agent-details-page">
            <div class="agent-details-main">
                <div class="agent-card-detailed">
                    <h1 class="agent-name">{agent.name.clone()}</h1>
                    <h2 class="agent-author">"by "{publisher}</h2>
                    <p class="agent-description">{agent.description.clone()}</p>
                    <div class="agent-stats">
                        <span class="stat">{format!("★ {}", rating_label(agent.avg_rating))}</span>
                        <span class="stat">{reviews_label(agent.reviews_count)}</span>
                        {published.map(|d| view! { <span class="stat">{format!("Published {}", d)}</span> })}
                    </div>
                </div>

                <div class="agent-tabs">
                    {AgentTab::ALL.into_iter().map(|t| view! {
                        <button
                            class=move || format!("tab-button {}", if tab.get() == t { "active" } else { "" })
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }).collect_view()}
                </div>

                <div class="tab-content">
                    {move || match tab.get() {
                        AgentTab::Description => view! {
                            <div class="tab-pane active">
                                <h2>"Description"</h2>
                                <p class="preformatted">{description.clone()}</p>
                            </div>
                        }.into_any(),
                        AgentTab::Guide => view! {
                            <div class="tab-pane active">
                                <h2>"Installation and usage"</h2>
                                {match requirements.clone() {
                                    Some(guide) => view! { <p class="preformatted">{guide}</p> }.into_any(),
                                    None => view! { <p>"The developer has not published a guide yet."</p> }.into_any(),
                                }}
                            </div>
                        }.into_any(),
                        AgentTab::Discussions => {
                            let open = open_discussion.clone();
                            view! {
                                <div class="tab-pane active">
                                    <h2>"Discussions"</h2>
                                    <Show when={
                                        let empty = discussions.is_empty();
                                        move || empty
                                    }>
                                        <p class="empty-state">"No discussions yet"</p>
                                    </Show>
                                    <div class="discussions-list">
                                        {discussions.iter().map(|d| {
                                            let id = d.id.clone();
                                            let open = open.clone();
                                            view! {
                                                <button class="discussion-item" on:click=move |_| open(id.clone())>
                                                    {title_or_excerpt(d.title.as_deref(), &d.content)}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            }.into_any()
                        },
                    }}
                </div>
            </div>

            <aside class="agent-details-sidebar">
                <div class="sidebar-widget">
                    <div class="agent-price">{price_label(agent.price)}</div>
                    {match download {
                        Some(url) => view! {
                            <a class="btn btn--primary btn--large" href=url target="_blank" rel="noopener">"Download"</a>
                        }.into_any(),
                        None => view! {
                            <button class="btn btn--primary btn--large" disabled=true>"Download"</button>
                        }.into_any(),
                    }}
                </div>
                <Show when={
                    let has_tags = !tags.is_empty();
                    move || has_tags
                }>
                    <div class="sidebar-widget">
                        <h3>"Tags"</h3>
                        <div class="tags-list">
                            {tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                        </div>
                    </div>
                </Show>
                {contact.map(|email| view! {
                    <div class="sidebar-widget">
                        <h3>"Support"</h3>
                        <a href=format!("mailto:{}", email)>{email.clone()}</a>
                    </div>
                })}
            </aside>
        </div>
    }
}
