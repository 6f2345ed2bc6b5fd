// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! Query pipeline: tokenize, retrieve per field, score, rank.
//!
//! Retrieval and scoring deliberately see different views of the
//! query. The index is consulted with normalized tokens (so `Café`
//! finds `cafe`), while the score ladder compares the raw trimmed,
//! lowercased string (so a multi-word query like `old town` only
//! earns a title rung when the title really contains that phrase).

use std::collections::HashMap;

use crate::index::{tokenize, IndexField, SearchIndex};
use crate::scoring::{compare_results, relevance_score};
use crate::types::{SearchDocument, SearchOptions, MIN_QUERY_LEN};

/// Runs a query against the index and returns ranked documents.
///
/// Queries shorter than [`MIN_QUERY_LEN`] characters (after trimming)
/// return nothing, as does a limit of zero. Results are deduplicated
/// across fields, ordered by score descending, then title ascending,
/// then indexing order, and truncated to `options.limit`.
pub fn search(index: &SearchIndex, query: &str, options: &SearchOptions) -> Vec<SearchDocument> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let lowered = trimmed.to_lowercase();
    let tokens = tokenize(&lowered);
    if tokens.is_empty() {
        return Vec::new();
    }

    // Each field contributes up to twice the requested limit, so a
    // strong title match can still displace weaker text matches after
    // the fields merge.
    let max_candidates = options.limit.saturating_mul(2);

    let mut best: HashMap<u32, u32> = HashMap::new();
    for field in IndexField::ALL {
        for doc in index.field_candidates(field, &tokens, max_candidates) {
            let document = index.document(doc);
            if let Some(kind) = options.kind {
                if document.kind != kind {
                    continue;
                }
            }
            let score = relevance_score(document, &lowered);
            let entry = best.entry(doc).or_insert(score);
            if score > *entry {
                *entry = score;
            }
        }
    }

    let mut ranked: Vec<(u32, u32)> = best.into_iter().collect();
    ranked.sort_by(|a, b| {
        compare_results(index.document(a.0), a.1, index.document(b.0), b.1)
            .then(a.0.cmp(&b.0))
    });
    ranked.truncate(options.limit);

    ranked
        .into_iter()
        .map(|(doc, _)| index.document(doc).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::types::DocumentType;

    fn doc(id: &str, kind: DocumentType, title: &str, text: &str, tags: &[&str]) -> SearchDocument {
        SearchDocument {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            href: format!("/{}", id),
            text: text.to_lowercase(),
            snippet: String::new(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            location: None,
        }
    }

    fn town_index() -> SearchIndex {
        build_index(vec![
            doc(
                "ale-house",
                DocumentType::Dining,
                "Auburn Ale House",
                "auburn ale house brewpub in historic old town",
                &["Brewery"],
            ),
            doc(
                "sra",
                DocumentType::Attraction,
                "Auburn State Recreation Area",
                "auburn state recreation area canyon trails",
                &["Outdoors"],
            ),
            doc(
                "old-town",
                DocumentType::Activity,
                "Old Town Auburn",
                "old town auburn gold rush storefronts",
                &["Historic District"],
            ),
            doc(
                "hidden-falls",
                DocumentType::Activity,
                "Hidden Falls Regional Park",
                "waterfall loop north of auburn",
                &["Hiking"],
            ),
            doc(
                "foresthill",
                DocumentType::Attraction,
                "Foresthill Bridge",
                "tallest bridge in california",
                &["Bridge"],
            ),
        ])
        .unwrap()
    }

    fn titles(results: &[SearchDocument]) -> Vec<&str> {
        results.iter().map(|d| d.title.as_str()).collect()
    }

    #[test]
    fn prefix_beats_substring_beats_text() {
        let index = town_index();
        let results = search(&index, "auburn", &SearchOptions::default());
        assert_eq!(
            titles(&results),
            vec![
                "Auburn Ale House",
                "Auburn State Recreation Area",
                "Old Town Auburn",
                "Hidden Falls Regional Park",
            ],
        );
    }

    #[test]
    fn query_case_does_not_matter() {
        let index = town_index();
        let upper = search(&index, "AUBURN", &SearchOptions::default());
        let lower = search(&index, "auburn", &SearchOptions::default());
        assert_eq!(titles(&upper), titles(&lower));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let index = town_index();
        let padded = search(&index, "  auburn  ", &SearchOptions::default());
        assert_eq!(padded.len(), 4);
    }

    #[test]
    fn short_queries_return_nothing() {
        let index = town_index();
        assert!(search(&index, "", &SearchOptions::default()).is_empty());
        assert!(search(&index, "a", &SearchOptions::default()).is_empty());
        assert!(search(&index, "  a  ", &SearchOptions::default()).is_empty());
    }

    #[test]
    fn punctuation_only_queries_return_nothing() {
        let index = town_index();
        assert!(search(&index, "!?", &SearchOptions::default()).is_empty());
    }

    #[test]
    fn type_filter_narrows_results() {
        let index = town_index();
        let options = SearchOptions {
            kind: Some(DocumentType::Activity),
            ..SearchOptions::default()
        };
        let results = search(&index, "auburn", &options);
        assert_eq!(
            titles(&results),
            vec!["Old Town Auburn", "Hidden Falls Regional Park"],
        );
        assert!(results.iter().all(|d| d.kind == DocumentType::Activity));
    }

    #[test]
    fn limit_truncates_after_ranking() {
        let index = town_index();
        let options = SearchOptions {
            limit: 2,
            ..SearchOptions::default()
        };
        let results = search(&index, "auburn", &options);
        assert_eq!(
            titles(&results),
            vec!["Auburn Ale House", "Auburn State Recreation Area"],
        );
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let index = town_index();
        let options = SearchOptions {
            limit: 0,
            ..SearchOptions::default()
        };
        assert!(search(&index, "auburn", &options).is_empty());
    }

    #[test]
    fn multi_field_hits_collapse_to_one_result() {
        // Retrieved through both the title and tags fields; must
        // surface once, ranked by its best rung.
        let index = build_index(vec![
            doc(
                "trail",
                DocumentType::Activity,
                "Quarry Trail",
                "limestone quarry remnants",
                &["Quarry History"],
            ),
            doc(
                "museum",
                DocumentType::Attraction,
                "Mining Museum",
                "exhibits from the quarry era",
                &[],
            ),
        ])
        .unwrap();
        let results = search(&index, "quarry", &SearchOptions::default());
        assert_eq!(titles(&results), vec!["Quarry Trail", "Mining Museum"]);
    }

    #[test]
    fn phrase_queries_need_the_phrase_for_title_rungs() {
        let index = town_index();
        let results = search(&index, "old town", &SearchOptions::default());
        // "Old Town Auburn" carries the phrase in its title; the ale
        // house only mentions it in text.
        assert_eq!(
            titles(&results),
            vec!["Old Town Auburn", "Auburn Ale House"],
        );
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let index = town_index();
        assert!(search(&index, "snowboard", &SearchOptions::default()).is_empty());
    }

    #[test]
    fn results_are_stable_across_rebuilds() {
        let first = search(&town_index(), "auburn", &SearchOptions::default());
        for _ in 0..10 {
            let again = search(&town_index(), "auburn", &SearchOptions::default());
            assert_eq!(titles(&again), titles(&first));
        }
    }
}
