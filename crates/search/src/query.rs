//! Query parser for linedex
//!
//! This module parses the search micro-grammar into a tagged structure:
//! - `+term` — required term, must be present in a matching line
//! - `+(a b c)` — OR-group, at least one member must be present
//! - `term` — optional term, contributes to ranking only
//!
//! Parsing never fails: malformed input degrades rather than erroring.
//! A lone `+` becomes the empty required term (which matches nothing), and a
//! group opened but never closed is closed at end-of-input with whatever was
//! collected.

use std::collections::BTreeSet;

/// One lexed query term, tagged by its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTerm {
    /// `+term` — must be present
    Required(String),
    /// `+(a b c)` — at least one member must be present
    OrGroup(BTreeSet<String>),
    /// bare term — ranking signal only
    Optional(String),
}

/// A parsed query: required terms, OR-groups, and optional terms.
///
/// Term order within `required` and `optional` carries no meaning, so both are
/// sets; OR-groups keep their group boundaries but not inter-group order.
/// Parsed fresh per query string, with no ties to any index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Terms that must all be present
    pub required: BTreeSet<String>,
    /// Groups of alternatives; each group must be satisfied by one member
    pub or_groups: Vec<BTreeSet<String>>,
    /// Terms that only contribute to ranking
    pub optional: BTreeSet<String>,
}

impl Query {
    /// Parse a raw query string.
    ///
    /// The raw string is split on whitespace, not run through the tokenizer:
    /// query terms keep their literal characters apart from case-folding.
    pub fn parse(raw: &str) -> Self {
        let mut query = Query::default();
        for term in lex(raw) {
            match term {
                QueryTerm::Required(t) => {
                    query.required.insert(t);
                }
                QueryTerm::OrGroup(group) => query.or_groups.push(group),
                QueryTerm::Optional(t) => {
                    query.optional.insert(t);
                }
            }
        }
        query
    }

    /// Whether the query carries no terms at all.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.or_groups.is_empty() && self.optional.is_empty()
    }
}

/// Lex a raw query into tagged terms, scanning left to right.
///
/// A term starting with `+(` opens an OR-group. The opener itself contributes
/// no member; members are the subsequent whitespace-separated terms, up to and
/// including the first one ending with `)` (its trailing `)` stripped). If no
/// terminator appears before end-of-input the group closes there anyway.
pub fn lex(raw: &str) -> Vec<QueryTerm> {
    let terms: Vec<&str> = raw.split_whitespace().collect();
    let mut out = Vec::new();

    let mut i = 0;
    while i < terms.len() {
        let term = terms[i];
        if term.starts_with("+(") {
            let mut group = BTreeSet::new();
            i += 1;
            while i < terms.len() && !terms[i].ends_with(')') {
                group.insert(terms[i].to_lowercase());
                i += 1;
            }
            if i < terms.len() {
                let closing = &terms[i][..terms[i].len() - 1];
                group.insert(closing.to_lowercase());
            }
            out.push(QueryTerm::OrGroup(group));
        } else if let Some(required) = term.strip_prefix('+') {
            out.push(QueryTerm::Required(required.to_lowercase()));
        } else {
            out.push(QueryTerm::Optional(term.to_lowercase()));
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> BTreeSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_parse_required_terms() {
        let query = Query::parse("+foo +bar");
        assert_eq!(query.required, set(&["foo", "bar"]));
        assert!(query.or_groups.is_empty());
        assert!(query.optional.is_empty());
    }

    #[test]
    fn test_parse_optional_terms() {
        let query = Query::parse("foo bar");
        assert!(query.required.is_empty());
        assert_eq!(query.optional, set(&["foo", "bar"]));
    }

    #[test]
    fn test_parse_mixed() {
        let query = Query::parse("biz +foo +bar bop");
        assert_eq!(query.required, set(&["foo", "bar"]));
        assert_eq!(query.optional, set(&["biz", "bop"]));
    }

    #[test]
    fn test_parse_case_folds() {
        let query = Query::parse("+FOO Bar");
        assert_eq!(query.required, set(&["foo"]));
        assert_eq!(query.optional, set(&["bar"]));
    }

    #[test]
    fn test_parse_or_group() {
        let query = Query::parse("+( bat baz )");
        assert_eq!(query.or_groups.len(), 1);
        assert!(query.or_groups[0].contains("bat"));
        assert!(query.or_groups[0].contains("baz"));
    }

    #[test]
    fn test_or_group_opener_content_discarded() {
        // "+(bat" opens the group but its own text is not a member; only the
        // later terms join, with the closing paren stripped.
        let query = Query::parse("+(bat baz)");
        assert_eq!(query.or_groups.len(), 1);
        assert!(query.or_groups[0].contains("baz"));
        assert!(!query.or_groups[0].contains("bat"));
    }

    #[test]
    fn test_or_group_closing_paren_stripped() {
        let query = Query::parse("+( x y z)");
        assert_eq!(query.or_groups[0], set(&["x", "y", "z"]));
    }

    #[test]
    fn test_unterminated_group_closes_at_end_of_input() {
        let query = Query::parse("+( a b c");
        assert_eq!(query.or_groups.len(), 1);
        assert_eq!(query.or_groups[0], set(&["a", "b", "c"]));
    }

    #[test]
    fn test_lone_plus_is_empty_required() {
        let query = Query::parse("+");
        assert_eq!(query.required, set(&[""]));
    }

    #[test]
    fn test_bare_close_paren_adds_empty_member() {
        // "+( a )" — the lone ")" closes the group and its stripped remainder
        // is the empty string, an inert member.
        let query = Query::parse("+( a )");
        assert_eq!(query.or_groups[0], set(&["a", ""]));
    }

    #[test]
    fn test_terms_after_group_resume_normal_parsing() {
        let query = Query::parse("+( a b ) +req opt");
        assert_eq!(query.or_groups.len(), 1);
        assert_eq!(query.required, set(&["req"]));
        assert_eq!(query.optional, set(&["opt"]));
    }

    #[test]
    fn test_multiple_groups() {
        let query = Query::parse("+( a b ) +( c d )");
        assert_eq!(query.or_groups.len(), 2);
    }

    #[test]
    fn test_empty_query() {
        let query = Query::parse("   ");
        assert!(query.is_empty());
    }

    #[test]
    fn test_query_terms_not_tokenized() {
        // The tokenizer would split "foo-bar"; the query parser keeps it
        // literal, so it can never match an indexed token.
        let query = Query::parse("foo-bar");
        assert_eq!(query.optional, set(&["foo-bar"]));
    }

    #[test]
    fn test_lex_tags_in_scan_order() {
        let terms = lex("opt +req +( a )");
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0], QueryTerm::Optional("opt".to_string()));
        assert_eq!(terms[1], QueryTerm::Required("req".to_string()));
        assert!(matches!(terms[2], QueryTerm::OrGroup(_)));
    }
}
