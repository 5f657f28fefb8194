//! Tweet generator state.

use std::collections::HashMap;

use crate::api::{ApiError, TweetHistoryItem};

/// Shown in the result card while the backend is generating.
pub const GENERATING_PLACEHOLDER: &str = "Generating...";

/// Fixed result text when generation fails, whatever the cause.
pub const GENERATE_ERROR_TEXT: &str = "❌ Error generating tweet.";

/// How history edits are scoped.
///
/// `PerItem` gives every history row its own draft. `Single` keeps one
/// draft for the row edited last, so moving to another row drops the
/// previous draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditScope {
    #[default]
    PerItem,
    Single,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum EditBuffer {
    Single(Option<(usize, String)>),
    PerItem(HashMap<usize, String>),
}

impl EditBuffer {
    fn new(scope: EditScope) -> Self {
        match scope {
            EditScope::Single => EditBuffer::Single(None),
            EditScope::PerItem => EditBuffer::PerItem(HashMap::new()),
        }
    }

    fn get(&self, index: usize) -> Option<&str> {
        match self {
            EditBuffer::Single(slot) => slot
                .as_ref()
                .filter(|(at, _)| *at == index)
                .map(|(_, text)| text.as_str()),
            EditBuffer::PerItem(map) => map.get(&index).map(String::as_str),
        }
    }

    fn set(&mut self, index: usize, text: String) {
        match self {
            EditBuffer::Single(slot) => *slot = Some((index, text)),
            EditBuffer::PerItem(map) => {
                map.insert(index, text);
            }
        }
    }

    fn remove(&mut self, index: usize) {
        match self {
            EditBuffer::Single(slot) => {
                if slot.as_ref().is_some_and(|(at, _)| *at == index) {
                    *slot = None;
                }
            }
            EditBuffer::PerItem(map) => {
                map.remove(&index);
            }
        }
    }
}

/// State behind the tweet generator card.
///
/// Same single-flight shape as the chat panel, plus the history list and
/// its edit drafts. Drafts are keyed by row position; the server only
/// ever appends to its history, so positions stay stable across refreshes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TweetPanel {
    /// Draft prompt bound to the first input.
    pub prompt: String,
    /// Draft tone bound to the second input.
    pub tone: String,
    result: String,
    history: Vec<TweetHistoryItem>,
    edits: EditBuffer,
    generating: bool,
}

impl TweetPanel {
    pub fn new() -> Self {
        Self::with_edit_scope(EditScope::default())
    }

    /// A panel whose history edits follow `scope`.
    pub fn with_edit_scope(scope: EditScope) -> Self {
        Self {
            prompt: String::new(),
            tone: String::new(),
            result: String::new(),
            history: Vec::new(),
            edits: EditBuffer::new(scope),
            generating: false,
        }
    }

    /// Latest generation outcome, or the placeholder while one is running.
    /// Empty until the first generation starts.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Generated tweets as last reported by the server, oldest first.
    pub fn history(&self) -> &[TweetHistoryItem] {
        &self.history
    }

    /// True while a generation request is in flight.
    pub fn generating(&self) -> bool {
        self.generating
    }

    /// Starts a generation, returning the trimmed prompt and tone to send.
    /// `None` when either field is blank or a generation is already in
    /// flight; the panel is untouched in that case. The result card shows
    /// the placeholder until `finish_generate` lands.
    pub fn begin_generate(&mut self) -> Option<(String, String)> {
        let prompt = self.prompt.trim().to_string();
        let tone = self.tone.trim().to_string();
        if prompt.is_empty() || tone.is_empty() || self.generating {
            return None;
        }
        self.generating = true;
        self.result = GENERATING_PLACEHOLDER.to_string();
        Some((prompt, tone))
    }

    /// Lands the generation outcome in the result card.
    pub fn finish_generate(&mut self, outcome: Result<String, ApiError>) {
        self.result = match outcome {
            Ok(tweet) => tweet,
            Err(_) => GENERATE_ERROR_TEXT.to_string(),
        };
        self.generating = false;
    }

    /// Replaces the history with the server's list. Edits are kept; their
    /// positions still point at the same rows.
    pub fn replace_history(&mut self, items: Vec<TweetHistoryItem>) {
        self.history = items;
    }

    /// Stores the draft for the history row at `index`. Clearing a row's
    /// input stores an empty draft, which removes it so the row falls back
    /// to the original text.
    pub fn set_edit(&mut self, index: usize, text: String) {
        if text.is_empty() {
            self.edits.remove(index);
        } else {
            self.edits.set(index, text);
        }
    }

    /// The text the row at `index` displays and posts: its draft if one
    /// exists, the original tweet otherwise. `None` for rows that do not
    /// exist.
    pub fn draft_for(&self, index: usize) -> Option<String> {
        let original = self.history.get(index)?;
        Some(
            self.edits
                .get(index)
                .unwrap_or(original.tweet.as_str())
                .to_string(),
        )
    }
}

impl Default for TweetPanel {
    fn default() -> Self {
        Self::new()
    }
}
