//! Leptos views for the two feature cards.

pub mod chat;
pub mod tweet;
