//! Inverted index for linedex
//!
//! This module provides:
//! - InvertedIndex with per-token posting lists
//! - One-shot construction from a stream of document lines
//! - Read-only lookup; a missing token is an empty posting slice, not an error
//!
//! The index is built once at startup and never mutated afterward. All query
//! paths take `&self`, so sharing it by reference is safe without locking.

use crate::tokenizer::tokenize;
use linedex_core::{DocLine, IndexStats, Posting};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Inverted index mapping tokens to their posting lists.
///
/// Postings within a token's list follow document/line scan order. Every
/// occurrence gets its own posting: a token appearing twice on one line is
/// recorded twice. No key ever maps to an empty list — absence of a key means
/// the token was never indexed.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
    stats: IndexStats,
}

impl InvertedIndex {
    /// Build an index from a stream of document lines.
    ///
    /// The caller (normally the directory walker) is responsible for reading
    /// files and skipping unreadable ones; the builder indexes whatever lines
    /// it is handed.
    pub fn build(docs: impl IntoIterator<Item = DocLine>) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut files: HashSet<(String, String)> = HashSet::new();
        let mut lines = 0usize;
        let mut total_postings = 0usize;

        for doc in docs {
            lines += 1;
            files.insert((doc.directory.clone(), doc.filename.clone()));

            let trimmed = doc.text.trim();
            for token in tokenize(&doc.text) {
                postings.entry(token).or_default().push(Posting {
                    directory: doc.directory.clone(),
                    filename: doc.filename.clone(),
                    line_number: doc.line_number,
                    line: trimmed.to_string(),
                });
                total_postings += 1;
            }
        }

        let stats = IndexStats {
            files: files.len(),
            lines,
            tokens: postings.len(),
            postings: total_postings,
        };

        debug!(
            target: "linedex::index",
            files = stats.files,
            lines = stats.lines,
            tokens = stats.tokens,
            postings = stats.postings,
            "Inverted index built"
        );

        InvertedIndex { postings, stats }
    }

    /// Posting list for a token.
    ///
    /// Returns an empty slice if the token is not indexed.
    pub fn postings(&self, token: &str) -> &[Posting] {
        self.postings.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over every posting in the index, across all tokens.
    ///
    /// The same physical line occurrence appears once per token it contains;
    /// callers that need each location once must dedup by posting identity.
    pub fn all_postings(&self) -> impl Iterator<Item = &Posting> {
        self.postings.values().flatten()
    }

    /// Number of distinct tokens in the index.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index contains no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Counters collected during the build.
    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(file: &str, line_number: usize, text: &str) -> DocLine {
        DocLine {
            directory: "data".to_string(),
            filename: file.to_string(),
            line_number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_build_single_line() {
        let index = InvertedIndex::build([doc("a.txt", 1, "hello world")]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.postings("hello").len(), 1);
        assert_eq!(index.postings("world").len(), 1);
        assert_eq!(index.postings("hello")[0].line, "hello world");
    }

    #[test]
    fn test_missing_token_is_empty_slice() {
        let index = InvertedIndex::build([doc("a.txt", 1, "hello")]);
        assert!(index.postings("absent").is_empty());
    }

    #[test]
    fn test_no_empty_posting_lists() {
        let index = InvertedIndex::build([doc("a.txt", 1, "one two three")]);
        assert!(index.all_postings().count() > 0);
        for token in ["one", "two", "three"] {
            assert!(!index.postings(token).is_empty());
        }
    }

    #[test]
    fn test_repeated_token_on_line_recorded_per_occurrence() {
        let index = InvertedIndex::build([doc("a.txt", 1, "echo echo echo")]);
        assert_eq!(index.postings("echo").len(), 3);
        // All three postings name the same location
        let postings = index.postings("echo");
        assert_eq!(postings[0], postings[1]);
        assert_eq!(postings[1], postings[2]);
    }

    #[test]
    fn test_posting_line_is_trimmed() {
        let index = InvertedIndex::build([doc("a.txt", 1, "  padded line  \n")]);
        assert_eq!(index.postings("padded")[0].line, "padded line");
    }

    #[test]
    fn test_scan_order_preserved_within_token() {
        let index = InvertedIndex::build([
            doc("a.txt", 1, "foo first"),
            doc("a.txt", 2, "foo second"),
            doc("b.txt", 1, "foo third"),
        ]);

        let lines: Vec<&str> = index
            .postings("foo")
            .iter()
            .map(|p| p.line.as_str())
            .collect();
        assert_eq!(lines, vec!["foo first", "foo second", "foo third"]);
    }

    #[test]
    fn test_stats_counters() {
        let index = InvertedIndex::build([
            doc("a.txt", 1, "foo bar"),
            doc("a.txt", 2, "foo"),
            doc("b.txt", 1, "baz!"),
        ]);

        let stats = index.stats();
        assert_eq!(stats.files, 2);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.tokens, 3); // foo, bar, baz
        assert_eq!(stats.postings, 4);
    }

    #[test]
    fn test_empty_input() {
        let index = InvertedIndex::build(Vec::<DocLine>::new());
        assert!(index.is_empty());
        assert_eq!(index.stats(), IndexStats::default());
    }
}
