//! Query evaluator for linedex
//!
//! Filters the inverted index down to postings satisfying every mandatory
//! constraint, then ranks survivors by score:
//!
//! 1. Candidate set = intersection of the required terms' posting sets, by
//!    posting identity. No required terms means every posting is eligible.
//! 2. Each OR-group intersects the candidates with the union of its members.
//! 3. Score = number of mandatory constraints (constant across survivors)
//!    plus one per optional term whose posting list contains the posting.
//! 4. Results sort descending by score; ties are unordered by contract.
//!
//! Per-term frequency is deliberately not weighted: mandatory constraints
//! contribute a flat base score and only optional terms differentiate ranking.

use crate::index::InvertedIndex;
use crate::query::Query;
use linedex_core::{Posting, SearchResult};
use std::collections::HashSet;

/// Evaluate a parsed query against an index.
///
/// Never fails: a query nothing satisfies yields an empty vector. Evaluation
/// is read-only, so the same query against an unmodified index returns the
/// same result multiset every time.
pub fn search(query: &Query, index: &InvertedIndex) -> Vec<SearchResult> {
    let mut required = query.required.iter();

    // Candidate postings matching every required term. An empty required set
    // means "everything is eligible", not "nothing": start from the
    // deduplicated union of the whole index.
    let mut candidates: HashSet<&Posting> = match required.next() {
        Some(first) => {
            let mut set: HashSet<_> = index.postings(first).iter().collect();
            for term in required {
                let other: HashSet<_> = index.postings(term).iter().collect();
                set.retain(|posting| other.contains(posting));
            }
            set
        }
        None => index.all_postings().collect(),
    };

    // Each OR-group keeps only candidates matching at least one member.
    // A group whose members are all unindexed has an empty union and
    // collapses the candidate set.
    for group in &query.or_groups {
        let union: HashSet<_> = group.iter().flat_map(|term| index.postings(term)).collect();
        candidates.retain(|posting| union.contains(posting));
    }

    let base_score = query.required.len() + query.or_groups.len();

    let mut results: Vec<SearchResult> = candidates
        .into_iter()
        .map(|posting| {
            let mut score = base_score;
            for term in &query.optional {
                if index.postings(term).contains(posting) {
                    score += 1;
                }
            }
            SearchResult::from_posting(posting, score)
        })
        .collect();

    results.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    results
}
