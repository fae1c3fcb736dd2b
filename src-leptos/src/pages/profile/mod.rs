//! Profile page: account details, own agents and settings

mod account;
mod projects;
mod settings;

use account::AccountTab;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;
use projects::ProjectsTab;
use settings::SettingsTab;

use crate::app::AppState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Account,
    Projects,
    Settings,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [Self::Account, Self::Projects, Self::Settings];

    fn label(self) -> &'static str {
        match self {
            Self::Account => "Profile",
            Self::Projects => "My agents",
            Self::Settings => "Settings",
        }
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    let auth_state = expect_context::<AppState>().auth_state;
    let query = use_query_map();

    // The wizard lands here with `?agentCreated=true`.
    let agent_created = query.with_untracked(|q| q.get("agentCreated").is_some_and(|v| v == "true"));
    let tab = RwSignal::new(if agent_created { ProfileTab::Projects } else { ProfileTab::Account });
    let show_created = RwSignal::new(agent_created);

    view! {
        <Title text="Profile - Agora" />
        <div class="profile-page">
            <aside class="profile-sidebar">
                {move || auth_state.with(|s| s.user().map(|u| view! {
                    <div class="profile-card">
                        <span class="avatar avatar--large">{u.initials()}</span>
                        <h2 class="profile-name">{u.nickname.clone()}</h2>
                        <p class="profile-email">{u.email.clone()}</p>
                        <span class="profile-role">
                            {if u.is_developer() { "Developer".to_string() } else { u.role.label().to_string() }}
                        </span>
                    </div>
                }))}
                <nav class="profile-tabs">
                    {ProfileTab::ALL.into_iter().map(|t| view! {
                        <button
                            class=move || format!("tab-button {}", if tab.get() == t { "active" } else { "" })
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }).collect_view()}
                </nav>
            </aside>

            <section class="profile-main">
                <Show when=move || show_created.get()>
                    <div class="alert alert--success">
                        <span>"Your agent has been published."</span>
                        <button class="btn btn--ghost" on:click=move |_| show_created.set(false)>"×"</button>
                    </div>
                </Show>
                {move || match tab.get() {
                    ProfileTab::Account => view! { <AccountTab /> }.into_any(),
                    ProfileTab::Projects => view! { <ProjectsTab /> }.into_any(),
                    ProfileTab::Settings => view! { <SettingsTab /> }.into_any(),
                }}
            </section>
        </div>
    }
}
