//! Action button with a busy state

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Secondary => "btn--secondary",
            Self::Danger => "btn--danger",
            Self::Ghost => "btn--ghost",
        }
    }
}

/// Clickable button; while `loading` is set it is disabled, marked
/// `aria-busy` and shows `loading_text`.
#[component]
pub fn Button(
    /// Label; may change reactively
    #[prop(into)]
    text: Signal<String>,
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional, into)]
    loading_text: Option<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    loading: Signal<bool>,
    /// Form-submit size
    #[prop(optional)]
    large: bool,
    #[prop(optional, into)]
    class: String,
    on_click: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let mut classes = vec!["btn", variant.class()];
    if large {
        classes.push("btn--large");
    }
    if !class.is_empty() {
        classes.push(&class);
    }
    let base_class = classes.join(" ");
    let loading_text = loading_text.unwrap_or_else(|| "Please wait...".to_string());

    let label = move || if loading.get() { loading_text.clone() } else { text.get() };

    view! {
        <button
            type="button"
            class=move || if loading.get() { format!("{} btn--loading", base_class) } else { base_class.clone() }
            aria-busy=move || loading.get().to_string()
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if !loading.get_untracked() {
                    on_click();
                }
            }
        >
            {label}
        </button>
    }
}
