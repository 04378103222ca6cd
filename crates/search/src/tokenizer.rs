//! Basic tokenizer for linedex
//!
//! This module provides simple text tokenization for indexing.
//! No stemming, no stopwords — those are deliberately out of scope.

/// Tokenize text into searchable terms
///
/// - Lowercase
/// - Every character outside `[a-z0-9]` and whitespace becomes a space
/// - Split on whitespace runs, discarding empty fragments
///
/// Pure and deterministic; the same input always produces the same tokens.
///
/// # Example
///
/// ```
/// use linedex_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Foo is the bar!");
/// assert_eq!(tokens, vec!["foo", "is", "the", "bar"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(String::from)
        .collect()
}
