//! Account settings: password change and notification toggles.
//!
//! The gateway stores none of these yet, so the toggles live in the page and
//! the password form is only checked locally.

use agora_types::forms::PasswordChangeForm;
use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, MessageBanner};
use crate::dom::event_target_checked;
use crate::tasks::{confirm, flash};

#[component]
fn Toggle(title: &'static str, description: &'static str, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="setting-item">
            <div class="setting-info">
                <h4 class="setting-title">{title}</h4>
                <p class="setting-description">{description}</p>
            </div>
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=move || value.get()
                    on:change=move |ev| value.set(event_target_checked(&ev))
                />
                <span class="toggle-slider"></span>
            </label>
        </div>
    }
}

#[component]
pub(super) fn SettingsTab() -> impl IntoView {
    let two_factor = RwSignal::new(false);
    let email_notifications = RwSignal::new(true);
    let review_notifications = RwSignal::new(true);

    let show_password_form = RwSignal::new(false);
    let password_form = RwSignal::new(PasswordChangeForm::default());
    let message = RwSignal::new(Option::<(String, bool)>::None);

    let close_password_form = move || {
        show_password_form.set(false);
        password_form.set(PasswordChangeForm::default());
    };

    let on_change_password = move || match password_form.get_untracked().validate() {
        Ok(()) => {
            close_password_form();
            flash(message, "Password change requested", false);
        },
        Err(e) => flash(message, e.to_string(), true),
    };

    let on_delete_account = move || {
        if confirm("Delete your account? This cannot be undone.") {
            flash(message, "Account deletion is not available yet. Contact support.", true);
        }
    };

    let password_field = move |id: &'static str,
                               label: &'static str,
                               get: fn(&PasswordChangeForm) -> String,
                               set: fn(&mut PasswordChangeForm, String)| {
        view! {
            <div class="form-group">
                <label for=id class="form-label">{label}</label>
                <input
                    id=id
                    type="password"
                    class="form-input"
                    prop:value=move || password_form.with(get)
                    on:input=move |ev| password_form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="tab-content active">
            <div class="tab-header">
                <h2 class="tab-title">"Account settings"</h2>
                <p class="tab-subtitle">"Security and notification preferences"</p>
            </div>

            <MessageBanner message=message />

            <div class="settings-sections">
                <section class="settings-section">
                    <h3 class="section-title">"Security"</h3>
                    <div class="setting-item">
                        <div class="setting-info">
                            <h4 class="setting-title">"Change password"</h4>
                            <p class="setting-description">"Update the password you sign in with"</p>
                        </div>
                        <Show
                            when=move || show_password_form.get()
                            fallback=move || view! {
                                <Button
                                    text="Change password"
                                    variant=ButtonVariant::Secondary
                                    on_click=move || show_password_form.set(true)
                                />
                            }
                        >
                            <Button text="Cancel" variant=ButtonVariant::Danger on_click=close_password_form />
                        </Show>
                    </div>
                    <Show when=move || show_password_form.get()>
                        <div class="password-form">
                            {password_field(
                                "current-password",
                                "Current password",
                                |f| f.current_password.clone(),
                                |f, v| f.current_password = v,
                            )}
                            {password_field("new-password", "New password", |f| f.new_password.clone(), |f, v| f.new_password = v)}
                            {password_field(
                                "confirm-password",
                                "Confirm password",
                                |f| f.confirm_password.clone(),
                                |f, v| f.confirm_password = v,
                            )}
                            <div class="form-actions">
                                <Button text="Update password" on_click=on_change_password />
                            </div>
                        </div>
                    </Show>
                    <Toggle
                        title="Two-factor authentication"
                        description="Extra protection for your account"
                        value=two_factor
                    />
                </section>

                <section class="settings-section">
                    <h3 class="section-title">"Notifications"</h3>
                    <Toggle
                        title="Email notifications"
                        description="Receive notifications by email"
                        value=email_notifications
                    />
                    <Toggle
                        title="Review notifications"
                        description="When users review your agents"
                        value=review_notifications
                    />
                </section>

                <div class="danger-zone">
                    <h3 class="danger-zone-title">"Delete account"</h3>
                    <div class="setting-item">
                        <div class="setting-info">
                            <h4 class="setting-title">"A deleted account cannot be restored."</h4>
                            <p class="setting-description">"All data linked to your account will be lost."</p>
                        </div>
                        <Button text="Delete my account" variant=ButtonVariant::Danger on_click=on_delete_account />
                    </div>
                </div>
            </div>
        </div>
    }
}
