//! Tweet generator card: prompt and tone inputs, the latest result, and
//! the editable history list.

use leptos::*;

use crate::api;
use crate::dom;
use crate::state::tweet::TweetPanel;

/// The tweet generator card.
#[component]
pub fn TweetCard(panel: RwSignal<TweetPanel>) -> impl IntoView {
    let generate = move || {
        let Some((prompt, tone)) = panel.try_update(|p| p.begin_generate()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = api::generate_tweet(&prompt, &tone).await;
            if let Err(err) = &outcome {
                log::error!("Tweet generation failed: {}", err);
            }
            let refresh = outcome.is_ok();
            panel.update(|p| p.finish_generate(outcome));

            // The busy flag is already clear; a failed refresh only logs
            // and leaves the current list alone.
            if refresh {
                match api::tweet_history().await {
                    Ok(items) => panel.update(|p| p.replace_history(items)),
                    Err(err) => log::error!("History refresh failed: {}", err),
                }
            }
        });
    };

    let post = move |index: usize| {
        let Some(text) = panel.with(|p| p.draft_for(index)) else {
            return;
        };
        spawn_local(async move {
            match api::post_tweet(&text).await {
                Ok(Some(url)) => dom::open_in_new_tab(&url),
                Ok(None) => {}
                Err(err) => log::error!("Tweet post failed: {}", err),
            }
        });
    };

    let generating = move || panel.with(|p| p.generating());

    // Key includes the text: after a refresh replaces the list, a row whose
    // text changed is rebuilt instead of showing the old item.
    let history = move || {
        panel.with(|p| p.history().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <div class="card">
            <h2>"🐦 Tweet Generator"</h2>
            <input
                type="text"
                placeholder="Prompt"
                prop:value=move || panel.with(|p| p.prompt.clone())
                on:input=move |ev| panel.update(|p| p.prompt = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Tone (e.g. sarcastic, wise, funny)"
                prop:value=move || panel.with(|p| p.tone.clone())
                on:input=move |ev| panel.update(|p| p.tone = event_target_value(&ev))
            />
            <button on:click=move |_| generate() disabled=generating>
                {move || if generating() { "Generating..." } else { "Generate" }}
            </button>
            <div class="tweet-result">{move || panel.with(|p| p.result().to_string())}</div>

            <h3>"📜 History"</h3>
            <For
                each=history
                key=|(index, item)| format!("{}-{}", index, item.tweet)
                children=move |(index, item)| {
                    view! {
                        <div class="history-card">
                            <p>{item.tweet}</p>
                            <input
                                type="text"
                                prop:value=move || {
                                    panel.with(|p| p.draft_for(index).unwrap_or_default())
                                }
                                on:input=move |ev| {
                                    panel.update(|p| p.set_edit(index, event_target_value(&ev)))
                                }
                            />
                            <button on:click=move |_| post(index)>"Post"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
