//! Wizard step 1: name, descriptions, tags and categories

use agora_client::{AgentWizard, WizardStep};
use agora_types::forms::{toggle_category, AgentBasicsForm, CATEGORIES, MAX_CATEGORIES};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use super::StepLayout;
use crate::app::AppState;
use crate::components::{Button, ErrorAlert};
use crate::tasks::spawn_fetch;

const STEP: WizardStep = WizardStep::Basics;

#[component]
pub fn AgentBasicsStep() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let form = RwSignal::new(AgentBasicsForm::default());
    let dropdown_open = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_next = move || {
        let Some(user_id) = state.user_id() else {
            error.set(Some("You need to sign in first".to_string()));
            return;
        };
        let current = form.get_untracked();
        // Check locally first so a bad form never reaches the gateway.
        if let Err(e) = current.into_request(&user_id) {
            error.set(Some(e.to_string()));
            return;
        }

        saving.set(true);
        error.set(None);
        let wizard = AgentWizard::new(state.client.clone());
        let report = state.clone();
        let nav = navigate.clone();
        spawn_fetch(async move { wizard.submit_basics(&current, &user_id).await }, move |result| {
            match result {
                Ok(agent) => nav(&STEP.next_route(&agent.id), Default::default()),
                Err(e) => {
                    error.set(Some(report.report(&e)));
                    saving.set(false);
                },
            }
        });
    };

    let text_input = move |id: &'static str,
                           label: &'static str,
                           placeholder: &'static str,
                           get: fn(&AgentBasicsForm) -> String,
                           set: fn(&mut AgentBasicsForm, String)| {
        view! {
            <div class="form-group">
                <label for=id class="form-label">{label}</label>
                <input
                    id=id
                    class="form-input"
                    placeholder=placeholder
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    let text_area = move |id: &'static str,
                          label: &'static str,
                          placeholder: &'static str,
                          rows: u32,
                          get: fn(&AgentBasicsForm) -> String,
                          set: fn(&mut AgentBasicsForm, String)| {
        view! {
            <div class="form-group">
                <label for=id class="form-label">{label}</label>
                <textarea
                    id=id
                    class="form-input"
                    rows=rows
                    placeholder=placeholder
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <Title text="Add agent - Agora" />
        <StepLayout step=STEP back_href="/".to_string() back_label="‹ Back to catalog">
            <ErrorAlert error=error />
            <div class="agent-form">
                {text_input("agent-name", "Agent name *", "e.g. AI Copywriter", |f| f.name.clone(), |f, v| f.name = v)}
                <p class="form-hint">{move || form.with(|f| {
                    let slug = f.slug();
                    if slug.is_empty() { String::new() } else { format!("Address: /{}", slug) }
                })}</p>
                {text_area(
                    "agent-short",
                    "Short description *",
                    "One or two sentences about what the agent does",
                    3,
                    |f| f.short_description.clone(),
                    |f, v| f.short_description = v,
                )}
                {text_area(
                    "agent-long",
                    "Detailed description",
                    "Capabilities, technologies, advantages",
                    4,
                    |f| f.long_description.clone(),
                    |f, v| f.long_description = v,
                )}
                {text_input("agent-tags", "Tags (comma separated)", "react, python, automation", |f| f.tags.clone(), |f, v| f.tags = v)}

                <div class="form-group">
                    <label class="form-label">{format!("Categories * (up to {})", MAX_CATEGORIES)}</label>
                    <div class="dropdown">
                        <button type="button" class="form-input dropdown-toggle" on:click=move |_| dropdown_open.update(|o| *o = !*o)>
                            {move || form.with(|f| {
                                if f.categories.is_empty() { "Select categories".to_string() } else { f.categories.join(", ") }
                            })}
                            <span class="dropdown-arrow">"▼"</span>
                        </button>
                        <Show when=move || dropdown_open.get()>
                            <div class="dropdown-menu">
                                {CATEGORIES.into_iter().map(|c| view! {
                                    <label class="dropdown-item">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with(|f| f.categories.iter().any(|s| s == c))
                                            on:change=move |_| form.update(|f| toggle_category(&mut f.categories, c))
                                        />
                                        {c}
                                    </label>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>

                {text_area(
                    "agent-guide",
                    "Installation and usage guide",
                    "How to install and run the agent?",
                    4,
                    |f| f.install_guide.clone(),
                    |f, v| f.install_guide = v,
                )}
                {text_input("agent-repo", "Repository link", "https://github.com/your/repo", |f| f.repo_url.clone(), |f, v| f.repo_url = v)}
                {text_input("agent-demo", "Demo link (optional)", "https://...", |f| f.demo_url.clone(), |f, v| f.demo_url = v)}

                <div class="form-actions">
                    <a href="/profile" class="btn btn--secondary">"Cancel"</a>
                    <Button text="Next: Version" loading_text="Creating..." loading=saving on_click=on_next />
                </div>
            </div>
        </StepLayout>
    }
}
