//! Modal dialog component

use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalType {
    #[default]
    Confirm,
    Alert,
    Danger,
}

/// Overlay dialog. The backdrop, the close button and Escape all cancel.
///
/// `children` go below the message, e.g. for a small form.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] message: Option<String>,
    #[prop(default = ModalType::Confirm)] modal_type: ModalType,
    #[prop(optional, into)] confirm_text: Option<String>,
    #[prop(optional, into)] cancel_text: Option<String>,
    #[prop(optional, into)] confirm_disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let confirm_text = confirm_text.unwrap_or_else(|| match modal_type {
        ModalType::Alert => "OK".to_string(),
        _ => "Confirm".to_string(),
    });
    let cancel_text = cancel_text.unwrap_or_else(|| "Cancel".to_string());
    let show_cancel = modal_type != ModalType::Alert;

    let confirm_class = match modal_type {
        ModalType::Danger => "btn btn--danger",
        _ => "btn btn--primary",
    };

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && is_open.get_untracked() {
            on_cancel.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal" role="dialog" aria-modal="true" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{title.clone()}</h3>
                        <button class="modal-close" aria-label="Close" on:click=move |_| on_cancel.run(())>
                            "×"
                        </button>
                    </div>

                    <div class="modal-body">
                        {message.clone().map(|msg| view! { <p>{msg}</p> })}
                        {children.clone().map(|children| children())}
                    </div>

                    <div class="modal-footer">
                        {show_cancel.then(|| view! {
                            <button class="btn btn--secondary" on:click=move |_| on_cancel.run(())>
                                {cancel_text.clone()}
                            </button>
                        })}
                        <button
                            class=confirm_class
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {confirm_text.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
