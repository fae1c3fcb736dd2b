//! Article list

use agora_types::view::{format_date_short, user_label};
use agora_types::{Content, ContentKind};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::AppState;
use crate::components::ErrorAlert;
use crate::tasks::spawn_fetch;

#[component]
pub fn Articles() -> impl IntoView {
    let state = expect_context::<AppState>();

    let articles = RwSignal::new(Vec::<Content>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let client = state.client.clone();
    spawn_fetch(async move { client.contents_of(ContentKind::Article).await }, move |result| {
        match result {
            Ok(list) => articles.set(list),
            Err(e) => error.set(Some(format!("Failed to load articles: {}", state.report(&e)))),
        }
        loading.set(false);
    });

    view! {
        <Title text="Articles - Agora" />
        <div class="page-header">
            <div>
                <h1>"Articles"</h1>
                <p class="page-subtitle">"Guides, announcements and stories from agent developers"</p>
            </div>
        </div>

        <ErrorAlert error=error />

        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="page-loading">"Loading articles..."</div> }
        >
            <Show
                when=move || !articles.with(Vec::is_empty)
                fallback=|| view! { <p class="empty-state">"No articles published yet."</p> }
            >
                <div class="articles-grid">
                    <For
                        each=move || articles.get()
                        key=|a| a.id.clone()
                        children=|a| view! {
                            <a class="article-card" href=format!("/article/{}", a.id)>
                                <h3 class="article-title">{a.display_title()}</h3>
                                <p class="article-excerpt">{a.excerpt()}</p>
                                <div class="article-meta">
                                    <span>{user_label(&a.user_id)}</span>
                                    <span>{format_date_short(&a.created_at)}</span>
                                </div>
                            </a>
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}
