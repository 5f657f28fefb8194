//! Small browser helpers shared by the views.

use leptos::html::Div;
use leptos::NodeRef;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the chat log so `anchor`, the empty div after the last
/// message, comes into view. Does nothing before the node is mounted.
pub fn scroll_to_end(anchor: NodeRef<Div>) {
    if let Some(el) = anchor.get() {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Opens `url` in a new tab. Blocked popups are logged, not surfaced.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => log::warn!("Popup blocked while opening {}", url),
        Err(err) => log::error!("Failed to open {}: {:?}", url, err),
    }
}
