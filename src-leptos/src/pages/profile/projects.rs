//! Agents published by the signed-in user

use agora_types::Agent;
use leptos::prelude::*;

use crate::app::AppState;
use crate::components::{AgentCard, ErrorAlert};
use crate::tasks::spawn_fetch;

#[component]
pub(super) fn ProjectsTab() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_developer = state.user().is_some_and(|u| u.is_developer());

    let agents = RwSignal::new(Vec::<Agent>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let client = state.client.clone();
    spawn_fetch(async move { client.my_agents().await }, move |result| {
        match result {
            Ok(list) => agents.set(list),
            Err(e) => error.set(Some(state.report(&e))),
        }
        loading.set(false);
    });

    view! {
        <div class="tab-content active">
            <div class="tab-header">
                <div>
                    <h2 class="tab-title">"My agents"</h2>
                    <p class="tab-subtitle">"Manage your AI agents on the marketplace"</p>
                </div>
                {if is_developer {
                    view! { <a href="/add_agents/agent" class="btn btn--primary">"+ New agent"</a> }.into_any()
                } else {
                    view! { <p class="tab-hint">"Become a developer on the Profile tab to publish agents."</p> }.into_any()
                }}
            </div>

            <ErrorAlert error=error />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page-loading">"Loading agents..."</div> }
            >
                <Show
                    when=move || !agents.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"You have not published any agents yet."</p> }
                >
                    <div class="agents-grid">
                        <For
                            each=move || agents.get()
                            key=|a| a.id.clone()
                            children=|agent| view! { <AgentCard agent=agent /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
