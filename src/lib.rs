//! Incremental-search application launcher.
//!
//! The catalog is filtered on every edit of the query: substring hits first,
//! then BK-tree fuzzy hits within a small edit distance, reordered by how
//! often each item was launched before.

pub mod actions;
pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod cursor;
pub mod events;
pub mod launcher;
pub mod logging;
pub mod repeat;
pub mod search;
pub mod state;
pub mod ui;
pub mod usage;
pub mod viewport;
