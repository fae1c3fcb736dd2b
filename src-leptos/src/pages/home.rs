//! Catalog page: search and category filter over every listed agent

use agora_types::forms::CATEGORIES;
use agora_types::{Agent, MediaItem, MediaKind};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::AppState;
use crate::components::{AgentCard, ErrorAlert, MediaCarousel};
use crate::tasks::spawn_fetch;

const HERO_SLIDES: [&str; 3] = ["/images/hero/catalog.jpg", "/images/hero/developers.jpg", "/images/hero/community.jpg"];

fn hero_media() -> Vec<MediaItem> {
    HERO_SLIDES
        .into_iter()
        .map(|src| MediaItem { kind: MediaKind::Image, src: src.to_string(), alt: Some("Agora".to_string()) })
        .collect()
}

/// Categories are stored among the tags, so filtering is a tag match.
fn in_category(agent: &Agent, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(c) => agent.tags.iter().any(|t| t.eq_ignore_ascii_case(c)),
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let state = expect_context::<AppState>();

    let agents = RwSignal::new(Vec::<Agent>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);
    let search_query = RwSignal::new(String::new());
    let category = RwSignal::new(Option::<&'static str>::None);

    let client = state.client.clone();
    spawn_fetch(async move { client.agents().await }, move |result| {
        match result {
            Ok(list) => agents.set(list),
            Err(e) => error.set(Some(format!("Failed to load agents: {}", state.report(&e)))),
        }
        loading.set(false);
    });

    let filtered = Memo::new(move |_| {
        let query = search_query.get();
        let selected = category.get();
        agents.with(|list| {
            list.iter()
                .filter(|a| a.matches_query(&query) && in_category(a, selected))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Title text="Agora - AI agent catalog" />
        <section class="hero">
            <div class="hero-text">
                <h1>"Find the right AI agent"</h1>
                <p>"Browse agents built by the community, try them out and share your own."</p>
            </div>
            <MediaCarousel media=Signal::derive(hero_media) autoplay=true height="320px" />
        </section>

        <section class="catalog">
            <div class="catalog-toolbar">
                <input
                    type="search"
                    class="form-input search-input"
                    placeholder="Search by name, description or tag..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| search_query.set(event_target_value(&ev))
                />
                <div class="category-filter">
                    <button
                        class=move || format!("chip {}", if category.get().is_none() { "active" } else { "" })
                        on:click=move |_| category.set(None)
                    >
                        "All"
                    </button>
                    {CATEGORIES.into_iter().map(|c| view! {
                        <button
                            class=move || format!("chip {}", if category.get() == Some(c) { "active" } else { "" })
                            on:click=move |_| category.set(Some(c))
                        >
                            {c}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <ErrorAlert error=error />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page-loading">"Loading agents..."</div> }
            >
                <Show
                    when=move || !filtered.with(Vec::is_empty)
                    fallback=move || view! {
                        <p class="empty-state">
                            {move || if agents.with(Vec::is_empty) { "No agents published yet." } else { "Nothing matches your search." }}
                        </p>
                    }
                >
                    <div class="agents-grid">
                        <For
                            each=move || filtered.get()
                            key=|a| a.id.clone()
                            children=|agent| view! { <AgentCard agent=agent /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
