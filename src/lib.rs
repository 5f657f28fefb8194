//! Yupcha: a chatbot and tweet generator front end.
//!
//! A client-side rendered Leptos app. Everything of substance happens in a
//! backend reached over HTTP; this crate renders state and issues requests.
//! The panel state machines live in [`state`] as plain structs so their
//! transition rules are testable off the browser; [`api`] holds the fetch
//! layer; [`components`] and [`app`] bind both to the DOM.

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod state;
