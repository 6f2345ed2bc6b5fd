// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory prefix search and ranking for destination-content sites.
//!
//! The crate is a pipeline with three stages:
//!
//! 1. [`build_documents`] flattens typed content collections
//!    (activities, lodging, dining, events, editorial, attractions,
//!    venues) into uniform [`SearchDocument`]s with a precomputed
//!    lowercase text blob and a display snippet.
//! 2. [`build_index`] tokenizes each document into three per-field
//!    posting maps (title, text, tags) keyed by normalized terms, so
//!    retrieval is a prefix scan over sorted terms.
//! 3. [`search`] retrieves candidates per field, scores each one on a
//!    first-match-wins ladder (exact title, title prefix, title
//!    substring, text, tags) and returns a ranked, deduplicated,
//!    truncated result list.
//!
//! The index is immutable once built. Refreshing content means
//! building a new index and swapping it in (behind an `Arc` if it is
//! shared across threads); queries never mutate anything.
//!
//! ```
//! use trailhead::{build_documents, build_index, search, SearchOptions};
//!
//! let content = trailhead::content::sample();
//! let index = build_index(build_documents(&content))?;
//! let hits = search(&index, "gold rush", &SearchOptions::default());
//! assert!(!hits.is_empty());
//! # Ok::<(), trailhead::BuildError>(())
//! ```

pub mod builder;
pub mod content;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;
pub mod utils;

pub use builder::{build_documents, build_search_text, clean_snippet};
pub use content::ContentSet;
pub use index::{build_index, IndexStats, SearchIndex};
pub use search::search;
pub use types::{
    BuildError, DocumentType, SearchDocument, SearchOptions, DEFAULT_LIMIT, MAX_LIMIT,
    MIN_QUERY_LEN, SNIPPET_MAX_LEN,
};
pub use utils::normalize;
