// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search pipeline.
//!
//! [`SearchDocument`] is both what the index stores and what `search`
//! returns: every field needed to render a result travels with the
//! document, so there is no second lookup. The serialized form is the
//! site's client contract - camelCase keys, the category tag under
//! `"type"`.
//!
//! # Invariants
//!
//! - `id` is non-empty and unique within one index build (`build_index`
//!   rejects violations with [`BuildError`]).
//! - `text` is fully lowercase; ranking lowercases the query and relies
//!   on this.
//! - `snippet` carries no `<`/`>` and never exceeds [`SNIPPET_MAX_LEN`]
//!   characters, ellipsis included.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum snippet length in characters, ellipsis included.
pub const SNIPPET_MAX_LEN: usize = 160;

/// Queries whose trimmed length falls below this return no results.
pub const MIN_QUERY_LEN: usize = 2;

/// Result limit applied when the caller does not pick one.
pub const DEFAULT_LIMIT: usize = 20;

/// Upper bound outward-facing callers (HTTP handlers, the CLI) clamp
/// `limit` to before passing it down.
pub const MAX_LIMIT: usize = 100;

/// Content category of a search document.
///
/// Closed set: the document builder maps every source collection onto one
/// of these, and the type filter compares against them. Meeting venues
/// fold into `Venue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Activity,
    Accommodation,
    Dining,
    Event,
    Editorial,
    Attraction,
    Venue,
}

impl DocumentType {
    /// Every variant, in builder output order.
    pub const ALL: [DocumentType; 7] = [
        DocumentType::Activity,
        DocumentType::Accommodation,
        DocumentType::Dining,
        DocumentType::Event,
        DocumentType::Editorial,
        DocumentType::Attraction,
        DocumentType::Venue,
    ];

    /// Lowercase tag used in serialized documents and CLI flags.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Activity => "activity",
            DocumentType::Accommodation => "accommodation",
            DocumentType::Dining => "dining",
            DocumentType::Event => "event",
            DocumentType::Editorial => "editorial",
            DocumentType::Attraction => "attraction",
            DocumentType::Venue => "venue",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activity" => Ok(DocumentType::Activity),
            "accommodation" => Ok(DocumentType::Accommodation),
            "dining" => Ok(DocumentType::Dining),
            "event" => Ok(DocumentType::Event),
            "editorial" => Ok(DocumentType::Editorial),
            "attraction" => Ok(DocumentType::Attraction),
            "venue" => Ok(DocumentType::Venue),
            other => Err(format!(
                "unknown document type '{}' (expected one of: activity, accommodation, dining, event, editorial, attraction, venue)",
                other
            )),
        }
    }
}

/// One indexed, displayable piece of site content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    /// Stable unique identifier. The source record's own id, or a
    /// synthesized one for sources that lack ids.
    pub id: String,
    /// Content category, serialized as `"type"`.
    #[serde(rename = "type")]
    pub kind: DocumentType,
    /// Display name.
    pub title: String,
    /// Link target for the full content page. Not validated for
    /// reachability.
    pub href: String,
    /// Lowercase concatenation of the searchable fields. Indexed, never
    /// displayed.
    pub text: String,
    /// Markup-free preview for result lists.
    pub snippet: String,
    /// Category/feature labels, matched case-insensitively. Empty means
    /// none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Free-text area or city label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Options accepted by [`search`](crate::search()).
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Restrict results to one document type. `None` means all types.
    pub kind: Option<DocumentType>,
    /// Maximum number of results. Zero is allowed and yields nothing.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            kind: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Document sets rejected at index construction.
///
/// Bad ids are programmer errors in the content pipeline; they fail the
/// build instead of surfacing as wrong answers at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A document arrived with an empty id.
    EmptyId { title: String },
    /// Two documents share an id within one build.
    DuplicateId { id: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyId { title } => {
                write!(f, "document '{}' has an empty id", title)
            }
            BuildError::DuplicateId { id } => {
                write!(f, "duplicate document id '{}'", id)
            }
        }
    }
}

impl std::error::Error for BuildError {}
