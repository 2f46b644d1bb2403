//! munpul-core — core library for the munpul subject-search TUI.
//!
//! This crate holds everything with rule-based behaviour: query composition,
//! the search route, the result filter, the trending-keyword store, and the
//! file-upload policy. Presentation lives in `munpul-tui`; trending sources
//! live in `munpul-feeds`.
//!
//! # Architecture
//!
//! ```text
//! Feeds ──► KeywordStore ──► UI (trending chips)
//! Upload ─┐
//!         ├─► Composer ──► Route ──► Filter ──► UI (results)
//! Input ──┘
//! ```
//!
//! The keyword store is the only shared mutable state: a clonable handle
//! whose writers always replace the whole list.

pub mod catalog;
pub mod config;
pub mod query;
pub mod search;
pub mod store;
pub mod types;
pub mod upload;

pub use store::KeywordStore;
pub use types::{Subject, TrendingSnapshot};
