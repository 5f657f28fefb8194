//! Panel state machines.
//!
//! Each card on the page keeps its state in one of these plain structs,
//! wrapped in an `RwSignal` by its view. The transitions are synchronous
//! and framework-free, so the busy-flag and editing rules run under plain
//! `cargo test` with no browser in the loop.

pub mod chat;
pub mod tweet;
