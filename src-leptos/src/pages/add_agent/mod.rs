//! Add-agent wizard (basics -> version -> media) and the single-page
//! archive upload.

mod basics;
mod legacy;
mod media;
mod version;

pub use basics::AgentBasicsStep;
pub use legacy::AddAgentLegacy;
pub use media::AgentMediaStep;
pub use version::AgentVersionStep;

use agora_client::WizardStep;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::components::ProgressBar;

/// Agent id from the route of steps 2 and 3. Without one the wizard starts over.
fn wizard_agent_id() -> Memo<Option<String>> {
    let params = use_params_map();
    let agent_id = Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.trim().is_empty()));

    let navigate = use_navigate();
    Effect::new(move |_| {
        if agent_id.with(Option::is_none) {
            navigate(
                &WizardStep::Basics.route(""),
                NavigateOptions { replace: true, ..Default::default() },
            );
        }
    });
    agent_id
}

/// Frame shared by the three steps.
#[component]
fn StepLayout(step: WizardStep, back_href: String, back_label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="back-to-catalog">
            <a href=back_href class="btn btn--secondary">{back_label}</a>
        </div>
        <div class="wizard-card">
            <ProgressBar current=step />
            <h1 class="wizard-title">{format!("Step {}: {}", step.number(), step.title())}</h1>
            {children()}
        </div>
    }
}
