//! Profile tab: edit nickname, email and avatar; become a developer

use agora_types::forms::{DeveloperForm, ProfileForm};
use agora_types::view::format_date;
use agora_types::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppState;
use crate::components::{Button, ButtonVariant, ErrorAlert, MessageBanner};
use crate::tasks::flash;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    View,
    Edit,
    BecomeDeveloper,
}

#[component]
pub(super) fn AccountTab() -> impl IntoView {
    let state = expect_context::<AppState>();
    let auth_state = state.auth_state;

    let mode = RwSignal::new(Mode::View);
    let profile_form = RwSignal::new(ProfileForm::default());
    let developer_form = RwSignal::new(DeveloperForm::default());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let message = RwSignal::new(Option::<(String, bool)>::None);

    // Re-fill the form from the user whenever it changes and we are not editing.
    Effect::new(move |_| {
        let user = auth_state.with(|s| s.user().cloned());
        if let (Some(user), Mode::View) = (user, mode.get_untracked()) {
            profile_form.set(ProfileForm::from_user(&user));
        }
    });

    let switch_to = move |next: Mode| {
        error.set(None);
        if next != Mode::Edit {
            if let Some(user) = auth_state.with_untracked(|s| s.user().cloned()) {
                profile_form.set(ProfileForm::from_user(&user));
            }
        }
        if next != Mode::BecomeDeveloper {
            developer_form.set(DeveloperForm::default());
        }
        mode.set(next);
    };

    let save_state = state.clone();
    let on_save = move || {
        let update = match profile_form.get_untracked().validate() {
            Ok(update) => update,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            },
        };
        saving.set(true);
        error.set(None);
        let auth = save_state.auth.clone();
        spawn_local(async move {
            match auth.update_profile(&update).await {
                Ok(_) => {
                    mode.try_set(Mode::View);
                    flash(message, "Profile updated", false);
                },
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                },
            }
            saving.try_set(false);
        });
    };

    // Wrap in a Copy handle so nested `<Show>` children stay `Fn`.
    let on_save = {
        let cb = UnsyncCallback::new(move |()| on_save());
        move || cb.run(())
    };

    let dev_state = state.clone();
    let on_become_developer = move || {
        let request = match developer_form.get_untracked().validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            },
        };
        saving.set(true);
        error.set(None);
        let auth = dev_state.auth.clone();
        spawn_local(async move {
            match auth.become_developer(request).await {
                Ok(_) => {
                    developer_form.try_set(DeveloperForm::default());
                    mode.try_set(Mode::View);
                    flash(message, "You are now a developer!", false);
                },
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                },
            }
            saving.try_set(false);
        });
    };

    let is_developer = move || auth_state.with(|s| s.user().is_some_and(User::is_developer));

    view! {
        <div class="tab-content active">
            <div class="tab-header">
                <h2 class="tab-title">"Profile"</h2>
                <p class="tab-subtitle">
                    {move || if is_developer() { "Registered as a developer" } else { "Regular user" }}
                </p>
            </div>

            <ErrorAlert error=error />
            <MessageBanner message=message />

            <Show
                when=move || mode.get() != Mode::BecomeDeveloper
                fallback=move || view! {
                    <DeveloperFormCard form=developer_form saving=saving />
                    <div class="form-actions">
                        <Button
                            text="Cancel"
                            variant=ButtonVariant::Secondary
                            disabled=saving
                            on_click=move || switch_to(Mode::View)
                        />
                        <Button
                            text="Become a developer"
                            loading_text="Creating..."
                            loading=saving
                            on_click=on_become_developer.clone()
                        />
                    </div>
                }
            >
                <div class="form-grid">
                    <div class="form-group">
                        <label for="profile-nickname" class="form-label">"Nickname *"</label>
                        <input
                            id="profile-nickname"
                            class="form-input"
                            prop:value=move || profile_form.with(|f| f.nickname.clone())
                            on:input=move |ev| profile_form.update(|f| f.nickname = event_target_value(&ev))
                            readonly=move || mode.get() != Mode::Edit
                        />
                    </div>
                    <div class="form-group">
                        <label for="profile-email" class="form-label">"Email *"</label>
                        <input
                            id="profile-email"
                            type="email"
                            class="form-input"
                            prop:value=move || profile_form.with(|f| f.email.clone())
                            on:input=move |ev| profile_form.update(|f| f.email = event_target_value(&ev))
                            readonly=move || mode.get() != Mode::Edit
                        />
                    </div>
                    <div class="form-group full-width">
                        <label for="profile-avatar" class="form-label">"Avatar URL"</label>
                        <input
                            id="profile-avatar"
                            type="url"
                            class="form-input"
                            placeholder="https://..."
                            prop:value=move || profile_form.with(|f| f.avatar_url.clone())
                            on:input=move |ev| profile_form.update(|f| f.avatar_url = event_target_value(&ev))
                            readonly=move || mode.get() != Mode::Edit
                        />
                    </div>
                </div>

                {move || auth_state.with(|s| s.user().and_then(|u| u.developer.clone()).filter(|d| d.is_complete())).map(|d| view! {
                    <div class="developer-info">
                        <h3>"Developer profile"</h3>
                        <dl>
                            <dt>"Name"</dt>
                            <dd>{d.full_name()}</dd>
                            {d.github_profile.clone().map(|g| view! {
                                <dt>"GitHub"</dt>
                                <dd><a href=g.clone() target="_blank" rel="noopener noreferrer">{g.clone()}</a></dd>
                            })}
                            {d.support_email.clone().map(|e| view! { <dt>"Support email"</dt><dd>{e}</dd> })}
                            {d.support_phone.clone().map(|p| view! { <dt>"Support phone"</dt><dd>{p}</dd> })}
                            {d.created_at.as_deref().map(|c| view! { <dt>"Since"</dt><dd>{format_date(c)}</dd> })}
                        </dl>
                        {d.verified.then(|| view! { <span class="badge badge--verified">"Verified"</span> })}
                    </div>
                })}

                <div class="form-actions">
                    <Show
                        when=move || mode.get() == Mode::Edit
                        fallback=move || view! {
                            <Button text="Edit profile" on_click=move || switch_to(Mode::Edit) />
                            <Show when=move || !is_developer()>
                                <Button
                                    text="Become a developer"
                                    variant=ButtonVariant::Ghost
                                    on_click=move || switch_to(Mode::BecomeDeveloper)
                                />
                            </Show>
                        }
                    >
                        <Button
                            text="Cancel"
                            variant=ButtonVariant::Secondary
                            disabled=saving
                            on_click=move || switch_to(Mode::View)
                        />
                        <Button text="Save" loading_text="Saving..." loading=saving on_click=on_save.clone() />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DeveloperFormCard(form: RwSignal<DeveloperForm>, saving: RwSignal<bool>) -> impl IntoView {
    let field = move |id: &'static str,
                      label: &'static str,
                      placeholder: &'static str,
                      get: fn(&DeveloperForm) -> String,
                      set: fn(&mut DeveloperForm, String)| {
        view! {
            <div class="form-group">
                <label for=id class="form-label">{label}</label>
                <input
                    id=id
                    class="form-input"
                    placeholder=placeholder
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                    disabled=move || saving.get()
                />
            </div>
        }
    };

    view! {
        <div class="developer-form-card">
            <h3 class="form-title">"Create a developer profile"</h3>
            <p class="form-subtitle">"Fill in your details to publish agents on the marketplace."</p>
            <div class="form-grid">
                {field("dev-first", "First name *", "Jane", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                {field("dev-last", "Last name *", "Doe", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                {field(
                    "dev-github",
                    "GitHub (optional)",
                    "https://github.com/you",
                    |f| f.github_profile.clone(),
                    |f, v| f.github_profile = v,
                )}
                {field(
                    "dev-email",
                    "Support email (optional)",
                    "Defaults to your account email",
                    |f| f.support_email.clone(),
                    |f, v| f.support_email = v,
                )}
            </div>
        </div>
    }
}
