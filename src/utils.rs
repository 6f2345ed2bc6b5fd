//! String normalization shared by the tokenizer and the query pipeline.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for indexing: lowercase, strip diacritics, collapse
/// whitespace.
///
/// Folds accented and plain spellings together so "Café Delicias" is
/// findable as "cafe":
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out the combining marks
/// 3. Lowercase
/// 4. Collapse whitespace runs to single spaces
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Covers the combining ranges that show up after NFD decomposition of
/// Latin text: acute, grave, macron, tilde, cedilla and friends.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
