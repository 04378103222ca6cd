//! Core types for linedex
//!
//! This crate defines the foundational types used throughout the system:
//! - DocLine: One raw line of input from the document source
//! - Posting: One recorded token occurrence at a document/line location
//! - SearchResult: A scored hit returned by the evaluator
//! - IndexStats: Corpus-level counters reported after an index build
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{DocLine, IndexStats, Posting, SearchResult};
