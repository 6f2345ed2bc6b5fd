// Copyright 2025-present the trailhead authors
// SPDX-License-Identifier: Apache-2.0

//! Forward-tokenized in-memory index.
//!
//! Three searchable fields (title, text, tags), each held as a
//! `BTreeMap` from term to posting list. Prefix matching is a range scan
//! from the query token through every stored term it prefixes; BTreeMap
//! keeps that scan in lexicographic order, so candidate enumeration is
//! deterministic without any post-hoc sorting of map iteration.
//!
//! The index stores the documents themselves. A match renders straight
//! from the stored document, no second lookup.
//!
//! # Invariants
//!
//! - Posting lists are sorted by (doc, position) by construction:
//!   documents are inserted in order and positions increase within one
//!   document.
//! - Document ids are non-empty and unique (checked in `build_index`).
//! - An index built from zero documents is valid and returns nothing.

use crate::types::{BuildError, SearchDocument};
use crate::utils::normalize;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::Bound;

/// Ordering slots for per-field candidate ranking. A match's earliest
/// token position is clamped into this many buckets; earlier positions
/// rank earlier.
pub const CONTEXT_RESOLUTION: usize = 9;

/// Maximum token distance at which two query tokens still count as
/// co-occurring, in either direction.
pub const CONTEXT_DEPTH: usize = 2;

/// The searchable fields, in the order the query engine walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexField {
    Title,
    Text,
    Tags,
}

impl IndexField {
    pub(crate) const ALL: [IndexField; 3] =
        [IndexField::Title, IndexField::Text, IndexField::Tags];
}

/// One term occurrence: which document, and where in the field's token
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Posting {
    doc: u32,
    position: u32,
}

type PostingMap = BTreeMap<String, Vec<Posting>>;

/// Counts describing a built index, for the stats surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub documents: usize,
    /// Document counts keyed by type tag.
    pub by_type: BTreeMap<String, usize>,
    pub title_terms: usize,
    pub text_terms: usize,
    pub tag_terms: usize,
}

/// An immutable, fully built search index.
///
/// Construction validates and consumes the document list; afterwards the
/// index only hands out references and clones. Rebuild by constructing a
/// new one.
#[derive(Debug)]
pub struct SearchIndex {
    documents: Vec<SearchDocument>,
    title_terms: PostingMap,
    text_terms: PostingMap,
    tag_terms: PostingMap,
}

/// Build an index over `documents`.
///
/// Deterministic for a given document list. Fails fast on empty or
/// duplicate ids - bad ids are content-pipeline bugs and should never
/// reach query time. Zero documents are fine.
pub fn build_index(documents: Vec<SearchDocument>) -> Result<SearchIndex, BuildError> {
    let mut seen = HashSet::with_capacity(documents.len());
    for document in &documents {
        if document.id.is_empty() {
            return Err(BuildError::EmptyId {
                title: document.title.clone(),
            });
        }
        if !seen.insert(document.id.as_str()) {
            return Err(BuildError::DuplicateId {
                id: document.id.clone(),
            });
        }
    }

    let mut title_terms = PostingMap::new();
    let mut text_terms = PostingMap::new();
    let mut tag_terms = PostingMap::new();

    for (ord, document) in documents.iter().enumerate() {
        let doc = ord as u32;
        insert_terms(&mut title_terms, doc, &tokenize(&document.title));
        insert_terms(&mut text_terms, doc, &tokenize(&document.text));

        // Tags index as one flat token stream so positions keep
        // increasing across tag boundaries.
        let mut tag_tokens = Vec::new();
        for tag in &document.tags {
            tag_tokens.extend(tokenize(tag));
        }
        insert_terms(&mut tag_terms, doc, &tag_tokens);
    }

    Ok(SearchIndex {
        documents,
        title_terms,
        text_terms,
        tag_terms,
    })
}

impl SearchIndex {
    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Counts for the stats surface.
    pub fn stats(&self) -> IndexStats {
        let mut by_type = BTreeMap::new();
        for document in &self.documents {
            *by_type
                .entry(document.kind.as_str().to_string())
                .or_insert(0) += 1;
        }
        IndexStats {
            documents: self.documents.len(),
            by_type,
            title_terms: self.title_terms.len(),
            text_terms: self.text_terms.len(),
            tag_terms: self.tag_terms.len(),
        }
    }

    pub(crate) fn document(&self, doc: u32) -> &SearchDocument {
        &self.documents[doc as usize]
    }

    /// Collect up to `max_candidates` documents whose field matches
    /// every query token as a prefix.
    ///
    /// Candidates come back ordered by context bucket, then insertion
    /// order. The ordering only decides which candidates survive the
    /// cap; final ranking is recomputed from scratch by the scoring
    /// rules.
    pub(crate) fn field_candidates(
        &self,
        field: IndexField,
        tokens: &[String],
        max_candidates: usize,
    ) -> Vec<u32> {
        if tokens.is_empty() || max_candidates == 0 {
            return Vec::new();
        }
        let map = self.field_map(field);

        // Positions per document, per query token, over every stored
        // term the token prefixes.
        let mut per_token: Vec<HashMap<u32, Vec<u32>>> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let mut matches: HashMap<u32, Vec<u32>> = HashMap::new();
            let range = map.range::<str, _>((Bound::Included(token.as_str()), Bound::Unbounded));
            for (term, postings) in range {
                if !term.starts_with(token.as_str()) {
                    break;
                }
                for posting in postings {
                    matches
                        .entry(posting.doc)
                        .or_default()
                        .push(posting.position);
                }
            }
            if matches.is_empty() {
                // Every token must match somewhere in this field.
                return Vec::new();
            }
            per_token.push(matches);
        }

        let mut candidates: Vec<(u32, u32)> = Vec::new();
        'docs: for &doc in per_token[0].keys() {
            for other in &per_token[1..] {
                if !other.contains_key(&doc) {
                    continue 'docs;
                }
            }
            candidates.push((context_bucket(doc, &per_token), doc));
        }

        candidates.sort_unstable();
        candidates.truncate(max_candidates);
        candidates.into_iter().map(|(_, doc)| doc).collect()
    }

    fn field_map(&self, field: IndexField) -> &PostingMap {
        match field {
            IndexField::Title => &self.title_terms,
            IndexField::Text => &self.text_terms,
            IndexField::Tags => &self.tag_terms,
        }
    }
}

/// Ordering bucket for one candidate: its earliest matching position,
/// clamped to [`CONTEXT_RESOLUTION`] slots. Multi-token queries split
/// each slot in two - candidates whose adjacent query-token pairs all
/// co-occur within [`CONTEXT_DEPTH`] positions (in either direction)
/// take the earlier half.
fn context_bucket(doc: u32, per_token: &[HashMap<u32, Vec<u32>>]) -> u32 {
    let first_position = per_token
        .iter()
        .filter_map(|matches| matches.get(&doc))
        .flat_map(|positions| positions.iter().copied())
        .min()
        .unwrap_or(0);
    let base = first_position.min(CONTEXT_RESOLUTION as u32 - 1);

    if per_token.len() < 2 {
        return base;
    }
    let adjacent = adjacent_tokens_in_window(doc, per_token);
    base * 2 + u32::from(!adjacent)
}

fn adjacent_tokens_in_window(doc: u32, per_token: &[HashMap<u32, Vec<u32>>]) -> bool {
    per_token
        .windows(2)
        .all(|pair| match (pair[0].get(&doc), pair[1].get(&doc)) {
            (Some(a), Some(b)) => a
                .iter()
                .any(|pa| b.iter().any(|pb| pa.abs_diff(*pb) <= CONTEXT_DEPTH as u32)),
            _ => false,
        })
}

fn insert_terms(map: &mut PostingMap, doc: u32, tokens: &[String]) {
    for (position, token) in tokens.iter().enumerate() {
        map.entry(token.clone()).or_default().push(Posting {
            doc,
            position: position as u32,
        });
    }
}

/// Split text into normalized tokens on non-alphanumeric boundaries.
///
/// A token's index in the returned list is its position in the field's
/// token stream. Tokens fold through [`normalize`], so "Café" indexes
/// as "cafe".
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() {
            word.push(c);
        } else if !word.is_empty() {
            push_token(&mut tokens, &word);
            word.clear();
        }
    }
    if !word.is_empty() {
        push_token(&mut tokens, &word);
    }

    tokens
}

fn push_token(tokens: &mut Vec<String>, word: &str) {
    let normalized = normalize(word);
    if !normalized.is_empty() {
        tokens.push(normalized);
    }
}
