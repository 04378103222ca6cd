//! Search engine for linedex
//!
//! This crate provides:
//! - Basic tokenizer (lowercase, alphanumeric runs)
//! - InvertedIndex mapping tokens to posting lists
//! - Query parser for the `+term` / `+(a b c)` / bare-term micro-grammar
//! - Query evaluator producing score-ranked results
//!
//! # Usage
//!
//! ```
//! use linedex_core::DocLine;
//! use linedex_search::{search, InvertedIndex, Query};
//!
//! let index = InvertedIndex::build([DocLine {
//!     directory: "notes".to_string(),
//!     filename: "a.txt".to_string(),
//!     line_number: 1,
//!     text: "Foo and bar".to_string(),
//! }]);
//!
//! let results = search(&Query::parse("+foo +bar"), &index);
//! assert_eq!(results.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod evaluator;
pub mod index;
pub mod query;
pub mod tokenizer;

pub use evaluator::search;
pub use index::InvertedIndex;
pub use query::{Query, QueryTerm};
pub use tokenizer::tokenize;
