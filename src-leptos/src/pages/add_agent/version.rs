//! Wizard step 2: first version of the new agent

use agora_client::{AgentWizard, WizardStep};
use agora_types::forms::VersionForm;
use agora_types::VersionStatus;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use super::{wizard_agent_id, StepLayout};
use crate::app::AppState;
use crate::components::{Button, ErrorAlert};
use crate::tasks::spawn_fetch;

const STEP: WizardStep = WizardStep::Version;

fn status_label(status: VersionStatus) -> &'static str {
    match status {
        VersionStatus::Stable => "Stable",
        VersionStatus::Latest => "Latest",
        VersionStatus::Published => "Published",
    }
}

#[component]
pub fn AgentVersionStep() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let agent_id = wizard_agent_id();

    let form = RwSignal::new(VersionForm::default());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_next = move || {
        let Some(id) = agent_id.get_untracked() else {
            return;
        };
        let current = form.get_untracked();
        if let Err(e) = current.into_request(&id) {
            error.set(Some(e.to_string()));
            return;
        }

        saving.set(true);
        error.set(None);
        let wizard = AgentWizard::new(state.client.clone());
        let report = state.clone();
        let nav = navigate.clone();
        spawn_fetch(async move { wizard.submit_version(&id, &current).await.map(|_| id) }, move |result| {
            match result {
                Ok(id) => nav(&STEP.next_route(&id), Default::default()),
                Err(e) => {
                    error.set(Some(report.report(&e)));
                    saving.set(false);
                },
            }
        });
    };

    let back_href = agent_id.get_untracked().map(|id| format!("/agent/{}", id)).unwrap_or_else(|| "/".to_string());

    view! {
        <Title text="Add agent: version - Agora" />
        <StepLayout step=STEP back_href=back_href back_label="‹ Back to agent">
            <ErrorAlert error=error />
            <div class="agent-form">
                <div class="form-group">
                    <label for="version-number" class="form-label">"Version number *"</label>
                    <input
                        id="version-number"
                        class="form-input"
                        placeholder="1.0.0"
                        prop:value=move || form.with(|f| f.version.clone())
                        on:input=move |ev| form.update(|f| f.version = event_target_value(&ev))
                    />
                    <p class="form-hint">"Use semantic versioning, e.g. 1.0.0 or 2.1.3"</p>
                </div>

                <div class="form-group">
                    <label for="version-status" class="form-label">"Status *"</label>
                    <select
                        id="version-status"
                        class="form-input"
                        prop:value=move || form.with(|f| f.status.as_str())
                        on:change=move |ev| {
                            if let Some(status) = VersionStatus::parse(&event_target_value(&ev)) {
                                form.update(|f| f.status = status);
                            }
                        }
                    >
                        {VersionStatus::ALL.into_iter().map(|s| view! {
                            <option value=s.as_str()>{status_label(s)}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="version-changelog" class="form-label">"Changelog"</label>
                    <textarea
                        id="version-changelog"
                        class="form-input"
                        rows=5
                        placeholder="What is new in this version?"
                        prop:value=move || form.with(|f| f.changelog.clone())
                        on:input=move |ev| form.update(|f| f.changelog = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="version-path" class="form-label">"Project link (optional)"</label>
                    <input
                        id="version-path"
                        type="url"
                        class="form-input"
                        placeholder="https://github.com/user/repo"
                        prop:value=move || form.with(|f| f.project_path.clone())
                        on:input=move |ev| form.update(|f| f.project_path = event_target_value(&ev))
                    />
                </div>

                <div class="form-actions">
                    <Button text="Next: Media" loading_text="Creating..." loading=saving on_click=on_next />
                </div>
            </div>
        </StepLayout>
    }
}
