// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring for retrieved documents.
//!
//! Every candidate gets exactly one score from a fixed ladder. The
//! rungs are checked top to bottom and the first match wins, so a
//! document whose title equals the query never also collects credit
//! for a text or tag hit. Keeping the rungs far apart means a whole
//! tier of title matches always outranks every text match, which in
//! turn outranks every tag match.

use std::cmp::Ordering;

use crate::types::SearchDocument;

/// Title is exactly the query.
pub const SCORE_TITLE_EXACT: u32 = 1000;

/// Title starts with the query.
pub const SCORE_TITLE_PREFIX: u32 = 500;

/// Query appears somewhere in the title.
pub const SCORE_TITLE_SUBSTRING: u32 = 200;

/// Query appears in the searchable text blob.
pub const SCORE_TEXT_SUBSTRING: u32 = 100;

/// Query appears in at least one tag.
pub const SCORE_TAG_SUBSTRING: u32 = 50;

/// Retrieved by the index, but the raw query string no longer lines
/// up with any field (tokenization can be looser than substring
/// containment).
pub const SCORE_NO_MATCH: u32 = 0;

/// Scores one document against a query.
///
/// `query` must already be trimmed and lowercased; titles and tags
/// are lowercased here per comparison, while `document.text` is
/// stored lowercase at build time.
pub fn relevance_score(document: &SearchDocument, query: &str) -> u32 {
    let title = document.title.to_lowercase();

    if title == query {
        return SCORE_TITLE_EXACT;
    }
    if title.starts_with(query) {
        return SCORE_TITLE_PREFIX;
    }
    if title.contains(query) {
        return SCORE_TITLE_SUBSTRING;
    }
    if document.text.contains(query) {
        return SCORE_TEXT_SUBSTRING;
    }
    if document
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(query))
    {
        return SCORE_TAG_SUBSTRING;
    }
    SCORE_NO_MATCH
}

/// Orders two scored documents: higher score first, ties broken by
/// title ascending. Callers that need absolute determinism add their
/// own final tie-break on document identity.
pub fn compare_results(
    a: &SearchDocument,
    a_score: u32,
    b: &SearchDocument,
    b_score: u32,
) -> Ordering {
    b_score
        .cmp(&a_score)
        .then_with(|| a.title.cmp(&b.title))
}
