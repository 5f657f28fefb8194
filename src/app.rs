//! Page root: theme toggle over the two feature cards.

use leptos::*;
use leptos_meta::*;

use crate::components::chat::ChatCard;
use crate::components::tweet::TweetCard;
use crate::state::chat::ChatPanel;
use crate::state::tweet::TweetPanel;

/// The root component of the application.
#[component]
pub fn App() -> impl IntoView {
    // Provides contexts for meta tags (like <Title>)
    provide_meta_context();

    // Presentation only; nothing persists across reloads.
    let dark = create_rw_signal(false);

    let chat = create_rw_signal(ChatPanel::new());
    let tweet = create_rw_signal(TweetPanel::new());

    view! {
        <Title text="Yupcha - Chatbot & Tweet Generator"/>
        <div class="container" class:dark=move || dark.get()>
            <div class="theme-toggle" on:click=move |_| dark.update(|on| *on = !*on)>
                {move || if dark.get() { "🌙 Dark" } else { "☀️ Light" }}
            </div>
            <div class="section">
                <ChatCard panel=chat/>
                <TweetCard panel=tweet/>
            </div>
        </div>
    }
}
