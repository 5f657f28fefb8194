//! Chat card: message log, typing indicator and input row.

use leptos::*;

use crate::api;
use crate::dom;
use crate::state::chat::ChatPanel;

/// The chat card. The page owns the panel signal and passes it in.
#[component]
pub fn ChatCard(panel: RwSignal<ChatPanel>) -> impl IntoView {
    // Empty div after the last message, target of the auto-scroll.
    let chat_end = create_node_ref::<html::Div>();

    // Scroll whenever the log grows. Also tracks the anchor itself, so the
    // first render scrolls once the node exists.
    let count = message_count(panel);
    create_effect(move |_| {
        count.get();
        dom::scroll_to_end(chat_end);
    });

    // Shared by the Send button and the Enter key.
    let send = move || {
        let Some(message) = panel.try_update(|p| p.begin_send()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = api::send_chat(&message).await;
            if let Err(err) = &outcome {
                log::error!("Chat send failed: {}", err);
            }
            panel.update(|p| p.finish_send(outcome));
        });
    };

    // Rows never change once appended, so the position is a stable key.
    let messages = move || {
        panel.with(|p| p.messages().iter().cloned().enumerate().collect::<Vec<_>>())
    };
    let sending = move || panel.with(|p| p.sending());

    view! {
        <div class="card">
            <h2>"💬 Chatbot"</h2>
            <div class="chat-box">
                <For
                    each=messages
                    key=|(index, _)| *index
                    children=move |(_, msg)| {
                        view! {
                            <div class=format!("chat-msg {}", msg.sender.css_class())>
                                {msg.text}
                            </div>
                        }
                    }
                />
                <Show when=sending fallback=|| ()>
                    <div class="chat-msg bot typing">"Bot is typing..."</div>
                </Show>
                <div node_ref=chat_end></div>
            </div>
            <div class="input-row">
                <input
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || panel.with(|p| p.input.clone())
                    on:input=move |ev| panel.update(|p| p.input = event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            send();
                        }
                    }
                    disabled=sending
                />
                <button on:click=move |_| send() disabled=sending>
                    {move || if sending() { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}

// The input draft lives in the same signal as the log, so the scroll effect
// reads the count through a memo: keystrokes recompute it, but only an
// actual append notifies downstream.
fn message_count(panel: RwSignal<ChatPanel>) -> Memo<usize> {
    create_memo(move |_| panel.with(|p| p.messages().len()))
}
