//! Core data types for linedex
//!
//! This module defines the types shared between the search engine and its
//! collaborators:
//! - DocLine: one raw line handed to the index builder by the document source
//! - Posting: one token occurrence at a specific document/line location
//! - SearchResult: a scored hit, an ephemeral view derived per query
//! - IndexStats: counters reported after an index build

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One raw line of input supplied by the document source.
///
/// The directory walk and file reading live outside the search core; the
/// builder only sees a flat sequence of these. `text` is the raw, untrimmed
/// line — the builder trims it when constructing postings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    /// Directory containing the source file
    pub directory: String,
    /// File name within `directory`
    pub filename: String,
    /// 1-based line number within the file
    pub line_number: usize,
    /// Raw line text as read from the file
    pub text: String,
}

/// One recorded occurrence of a token at a document/line location.
///
/// Postings are owned by the inverted index and immutable once created.
/// Identity is all four fields: two postings are equal iff they name the same
/// directory, file, line number, and line text. Set operations in the
/// evaluator (intersection, union, dedup) rely on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posting {
    /// Directory containing the source file
    pub directory: String,
    /// File name within `directory`
    pub filename: String,
    /// 1-based line number within the file
    pub line_number: usize,
    /// Trimmed line text
    pub line: String,
}

impl Posting {
    /// Path of the source file, `directory` joined with `filename`.
    pub fn path(&self) -> String {
        Path::new(&self.directory)
            .join(&self.filename)
            .display()
            .to_string()
    }
}

/// A scored hit returned by the query evaluator.
///
/// Ephemeral view computed per query, discarded after being returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Directory containing the source file
    pub directory: String,
    /// File name within `directory`
    pub filename: String,
    /// 1-based line number within the file
    pub line_number: usize,
    /// Trimmed line text
    pub line_content: String,
    /// Relevance score (mandatory constraints + matched optional terms)
    pub match_count: usize,
}

impl SearchResult {
    /// Build a result from a posting and its computed score.
    pub fn from_posting(posting: &Posting, match_count: usize) -> Self {
        SearchResult {
            directory: posting.directory.clone(),
            filename: posting.filename.clone(),
            line_number: posting.line_number,
            line_content: posting.line.clone(),
            match_count,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            Path::new(&self.directory).join(&self.filename).display(),
            self.line_number,
            self.line_content
        )
    }
}

/// Corpus-level counters collected during an index build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Distinct files scanned
    pub files: usize,
    /// Lines scanned
    pub lines: usize,
    /// Distinct tokens in the index
    pub tokens: usize,
    /// Total postings across all tokens
    pub postings: usize,
}
