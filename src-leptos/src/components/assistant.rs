//! Floating chat widget backed by the assistant endpoint

use agora_types::protocol::{ChatMessage, ChatRole};
use futures::StreamExt;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppState;
use crate::config::assistant_enabled;

const GREETING: &str = "Hi! I can help you with anything on this page. What are you looking for?";
const FAILURE: &str = "Sorry, something went wrong. Please try again.";

#[component]
pub fn Assistant() -> impl IntoView {
    if !assistant_enabled() {
        return ().into_any();
    }

    let state = expect_context::<AppState>();
    let is_open = RwSignal::new(false);
    let messages = RwSignal::new(vec![ChatMessage::assistant(GREETING)]);
    let input = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || pending.get_untracked() {
            return;
        }
        messages.update(|m| m.push(ChatMessage::user(text.trim())));
        input.set(String::new());
        pending.set(true);

        let history = messages.get_untracked();
        let client = state.client.clone();
        spawn_local(async move {
            match client.ask(&history).await {
                Ok(mut reply) => {
                    messages.update(|m| m.push(ChatMessage::assistant("")));
                    while let Some(chunk) = reply.next().await {
                        match chunk {
                            Ok(text) => messages.update(|m| {
                                if let Some(last) = m.last_mut() {
                                    last.content.push_str(&text);
                                }
                            }),
                            Err(e) => {
                                log::error!("Assistant stream broke: {}", e);
                                messages.update(|m| m.push(ChatMessage::assistant(FAILURE)));
                                break;
                            },
                        }
                    }
                },
                Err(e) => {
                    log::error!("Assistant request failed: {}", e);
                    messages.update(|m| m.push(ChatMessage::assistant(FAILURE)));
                },
            }
            pending.set(false);
        });
    };

    let send_on_enter = send.clone();
    view! {
        <div class="assistant">
            <button class="chat-toggle-button" on:click=move |_| is_open.update(|o| *o = !*o)>
                "💬"
            </button>
            <Show when=move || is_open.get()>
                <div class="chat-window">
                    <div class="chat-header">
                        <span>"Agora assistant"</span>
                        <button class="modal-close" on:click=move |_| is_open.set(false)>"×"</button>
                    </div>
                    <div class="chat-box">
                        <For
                            each=move || messages.get().into_iter().enumerate()
                            key=|(i, m)| (*i, m.content.len())
                            children=|(_, message)| {
                                let class = match message.role {
                                    ChatRole::User => "chat-message chat-message--user",
                                    ChatRole::Assistant => "chat-message chat-message--ai",
                                };
                                view! { <div class=class>{message.content}</div> }
                            }
                        />
                        <Show when=move || pending.get()>
                            <div class="chat-message chat-message--ai typing">"..."</div>
                        </Show>
                    </div>
                    <div class="chat-input">
                        <input
                            type="text"
                            placeholder="Ask a question..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown={
                                let send = send_on_enter.clone();
                                move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        send();
                                    }
                                }
                            }
                            disabled=move || pending.get()
                        />
                        <button class="btn btn--primary" on:click={
                            let send = send.clone();
                            move |_| send()
                        }>
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
    .into_any()
}
