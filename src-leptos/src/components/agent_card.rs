//! Catalog card for a single agent

use agora_types::view::{excerpt, initials, price_label, rating_label, reviews_label, EXCERPT_CHARS};
use agora_types::Agent;
use leptos::prelude::*;

const CARD_TAGS: usize = 3;

#[component]
pub fn AgentCard(agent: Agent) -> impl IntoView {
    let href = format!("/agent/{}", agent.id);
    let tags = agent.display_tags(CARD_TAGS);
    let description = if agent.description.trim().is_empty() {
        "No description".to_string()
    } else {
        excerpt(&agent.description, EXCERPT_CHARS)
    };

    view! {
        <a href=href class="agent-card">
            <div class="agent-card-header">
                <span class="avatar avatar--large">{initials(&agent.name)}</span>
                <div>
                    <h3 class="agent-card-name">{agent.name.clone()}</h3>
                    <span class="agent-card-price">{price_label(agent.price)}</span>
                </div>
            </div>
            <p class="agent-card-description">{description}</p>
            <div class="agent-card-tags">
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
            <div class="agent-card-stats">
                <span class="stat">{format!("★ {}", rating_label(agent.avg_rating))}</span>
                <span class="stat">{reviews_label(agent.reviews_count)}</span>
            </div>
        </a>
    }
}
