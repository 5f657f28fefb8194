/// Tweet panel transition rules: the generate cycle, wholesale history
/// replacement, and the position-keyed edit drafts in both scopes.
use yupcha::api::{ApiError, TweetHistoryItem};
use yupcha::state::tweet::{
    EditScope, GENERATE_ERROR_TEXT, GENERATING_PLACEHOLDER, TweetPanel,
};

fn history(texts: &[&str]) -> Vec<TweetHistoryItem> {
    texts
        .iter()
        .map(|t| TweetHistoryItem {
            tweet: t.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Generate cycle
// ---------------------------------------------------------------------------

#[test]
fn generate_requires_prompt_and_tone() {
    let mut panel = TweetPanel::new();

    panel.prompt = "coffee".to_string();
    panel.tone = "   ".to_string();
    assert_eq!(panel.begin_generate(), None, "blank tone must not generate");

    panel.prompt = String::new();
    panel.tone = "wise".to_string();
    assert_eq!(panel.begin_generate(), None, "blank prompt must not generate");

    assert_eq!(panel.result(), "");
    assert!(!panel.generating());
}

#[test]
fn generate_trims_and_shows_placeholder() {
    let mut panel = TweetPanel::new();
    panel.prompt = " coffee ".to_string();
    panel.tone = " sarcastic ".to_string();

    let started = panel.begin_generate();

    assert_eq!(
        started,
        Some(("coffee".to_string(), "sarcastic".to_string()))
    );
    assert_eq!(panel.result(), GENERATING_PLACEHOLDER);
    assert!(panel.generating());
    // Inputs keep their text for the next run.
    assert_eq!(panel.prompt, " coffee ");
    assert_eq!(panel.tone, " sarcastic ");
}

#[test]
fn generate_while_generating_is_dropped() {
    let mut panel = TweetPanel::new();
    panel.prompt = "coffee".to_string();
    panel.tone = "wise".to_string();
    panel.begin_generate();

    assert_eq!(panel.begin_generate(), None, "re-entry must be dropped");
}

#[test]
fn success_shows_the_server_text() {
    let mut panel = TweetPanel::new();
    panel.prompt = "coffee".to_string();
    panel.tone = "sarcastic".to_string();
    panel.begin_generate();

    panel.finish_generate(Ok("Coffee is my love language.".to_string()));

    assert_eq!(panel.result(), "Coffee is my love language.");
    assert!(!panel.generating());
}

#[test]
fn failure_shows_the_fixed_error_text() {
    for failure in [
        ApiError::Request("TypeError: Failed to fetch".into()),
        ApiError::MissingField("tweet"),
    ] {
        let mut panel = TweetPanel::new();
        panel.prompt = "coffee".to_string();
        panel.tone = "wise".to_string();
        panel.begin_generate();

        panel.finish_generate(Err(failure));

        assert_eq!(panel.result(), GENERATE_ERROR_TEXT);
        assert!(!panel.generating(), "busy flag must clear after a failure");
    }
}

#[test]
fn generate_then_refresh_round_trip() {
    let mut panel = TweetPanel::new();
    panel.prompt = "coffee".to_string();
    panel.tone = "sarcastic".to_string();

    panel.begin_generate().expect("guards pass");
    panel.finish_generate(Ok("Coffee is my love language.".to_string()));
    panel.replace_history(history(&["Coffee is my love language."]));

    assert_eq!(panel.result(), "Coffee is my love language.");
    assert_eq!(panel.history().len(), 1);
    assert!(!panel.generating());
}

#[test]
fn history_is_replaced_wholesale() {
    let mut panel = TweetPanel::new();
    panel.replace_history(history(&["old one", "old two"]));

    panel.replace_history(history(&["new one"]));

    let texts: Vec<_> = panel.history().iter().map(|i| i.tweet.as_str()).collect();
    assert_eq!(texts, ["new one"], "old items must not survive a refresh");
}

// ---------------------------------------------------------------------------
// Edit drafts
// ---------------------------------------------------------------------------

#[test]
fn rows_show_original_text_until_edited() {
    let mut panel = TweetPanel::new();
    panel.replace_history(history(&["first", "second"]));

    assert_eq!(panel.draft_for(0).as_deref(), Some("first"));
    assert_eq!(panel.draft_for(1).as_deref(), Some("second"));
    assert_eq!(panel.draft_for(2), None, "no row, no text");
}

#[test]
fn editing_changes_what_the_row_posts() {
    let mut panel = TweetPanel::new();
    panel.replace_history(history(&["original", "untouched"]));

    panel.set_edit(0, "edited".to_string());

    assert_eq!(panel.draft_for(0).as_deref(), Some("edited"));
    assert_eq!(
        panel.draft_for(1).as_deref(),
        Some("untouched"),
        "other rows keep their own text"
    );
}

#[test]
fn clearing_an_edit_falls_back_to_the_original() {
    let mut panel = TweetPanel::new();
    panel.replace_history(history(&["original"]));
    panel.set_edit(0, "edited".to_string());

    panel.set_edit(0, String::new());

    assert_eq!(panel.draft_for(0).as_deref(), Some("original"));
}

#[test]
fn edits_survive_a_history_refresh() {
    // The server only appends, so position keys stay valid.
    let mut panel = TweetPanel::new();
    panel.replace_history(history(&["first"]));
    panel.set_edit(0, "first, edited".to_string());

    panel.replace_history(history(&["first", "second"]));

    assert_eq!(panel.draft_for(0).as_deref(), Some("first, edited"));
    assert_eq!(panel.draft_for(1).as_deref(), Some("second"));
}

#[test]
fn drafts_for_missing_rows_are_inert() {
    let mut panel = TweetPanel::new();
    panel.set_edit(3, "ghost".to_string());

    assert_eq!(panel.draft_for(3), None);
}

// ---------------------------------------------------------------------------
// Edit scopes
// ---------------------------------------------------------------------------

#[test]
fn default_scope_is_per_item() {
    assert_eq!(EditScope::default(), EditScope::PerItem);
}

#[test]
fn per_item_scope_keeps_one_draft_per_row() {
    let mut panel = TweetPanel::with_edit_scope(EditScope::PerItem);
    panel.replace_history(history(&["a", "b"]));

    panel.set_edit(0, "a2".to_string());
    panel.set_edit(1, "b2".to_string());

    assert_eq!(panel.draft_for(0).as_deref(), Some("a2"));
    assert_eq!(panel.draft_for(1).as_deref(), Some("b2"));
}

#[test]
fn single_scope_keeps_only_the_last_draft() {
    let mut panel = TweetPanel::with_edit_scope(EditScope::Single);
    panel.replace_history(history(&["a", "b"]));

    panel.set_edit(0, "a2".to_string());
    panel.set_edit(1, "b2".to_string());

    assert_eq!(
        panel.draft_for(0).as_deref(),
        Some("a"),
        "moving to another row drops the previous draft"
    );
    assert_eq!(panel.draft_for(1).as_deref(), Some("b2"));
}

#[test]
fn single_scope_clear_only_affects_the_matching_row() {
    let mut panel = TweetPanel::with_edit_scope(EditScope::Single);
    panel.replace_history(history(&["a", "b"]));
    panel.set_edit(0, "a2".to_string());

    panel.set_edit(1, String::new());

    assert_eq!(panel.draft_for(0).as_deref(), Some("a2"));
}

#[test]
fn single_scope_clearing_removes_the_draft() {
    let mut panel = TweetPanel::with_edit_scope(EditScope::Single);
    panel.replace_history(history(&["a"]));
    panel.set_edit(0, "a2".to_string());

    panel.set_edit(0, String::new());

    assert_eq!(panel.draft_for(0).as_deref(), Some("a"));
}
