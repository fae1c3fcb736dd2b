//! Add-agent wizard progress indicator

use agora_client::wizard::StepState;
use agora_client::WizardStep;
use leptos::prelude::*;

#[component]
pub fn ProgressBar(current: WizardStep) -> impl IntoView {
    let percent = current.progress_percent();

    view! {
        <div class="progress-container">
            <div class="progress-steps">
                {WizardStep::ALL.into_iter().map(|step| {
                    let state_class = match current.state_of(step) {
                        StepState::Done => "step--done",
                        StepState::Current => "step--current",
                        StepState::Upcoming => "step--upcoming",
                    };
                    let marker = match current.state_of(step) {
                        StepState::Done => "✓".to_string(),
                        _ => step.number().to_string(),
                    };
                    view! {
                        <div class=format!("progress-step {}", state_class)>
                            <span class="step-circle">{marker}</span>
                            <span class="step-title">{step.title()}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=format!("width: {}%", percent)></div>
            </div>
            <p class="progress-label">
                {format!("Step {} of {}", current.number(), WizardStep::TOTAL)}
            </p>
        </div>
    }
}
