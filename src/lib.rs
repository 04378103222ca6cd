//! linedex — in-memory full-text line search
//!
//! linedex builds an inverted index over the lines of a directory of
//! plain-text documents and answers boolean queries with required (`+term`),
//! grouped-OR (`+(a b c)`), and optional bare terms, ranking matches by a
//! simple relevance score.
//!
//! # Quick Start
//!
//! ```
//! use linedex::{search, DocLine, InvertedIndex, Query};
//!
//! let index = InvertedIndex::build([DocLine {
//!     directory: "notes".to_string(),
//!     filename: "todo.txt".to_string(),
//!     line_number: 1,
//!     text: "Call foo about the bar meeting".to_string(),
//! }]);
//!
//! let results = search(&Query::parse("+foo +bar"), &index);
//! assert_eq!(results[0].match_count, 2);
//! ```
//!
//! # Architecture
//!
//! The engine is split into a tokenizer, an index builder, a query parser,
//! and a query evaluator; directory traversal and the interactive loop live
//! in the `linedex` binary and only feed `DocLine`s in and print
//! [`SearchResult`]s out.

// Re-export the public API from the library crates
pub use linedex_core::{DocLine, Error, IndexStats, Posting, Result, SearchResult};
pub use linedex_search::{search, tokenize, InvertedIndex, Query, QueryTerm};
