use crate::index::InvertedIndex;
use crate::set_ops;
use crate::tokenizer::Tokenizer;
use std::collections::BTreeSet;

/// How a compound-query term transforms the running result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOp {
    /// Unmarked word: union its postings into the running set.
    Union,
    /// Leading `+`: keep only documents also containing this term.
    Intersect,
    /// Leading `-`: drop documents containing this term.
    Subtract,
}

/// One word of a compound query.
///
/// `token` is `None` when the word cleans to nothing (no alphabetic
/// character). Such a term still participates in evaluation as the empty
/// set, which matters for `Intersect`: intersecting with nothing empties
/// the running result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub op: TermOp,
    pub token: Option<String>,
}

/// A classified query.
///
/// Classification happens once, at parse time: a query containing a `+` or
/// `-` anywhere is compound, everything else is simple. Evaluation then
/// dispatches on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Whitespace-separated tokens combined by union of matches.
    Simple(Vec<String>),
    /// Ordered terms evaluated left to right over a running set.
    Compound(Vec<Term>),
}

impl Query {
    /// Classify and normalize a raw query string.
    pub fn parse(raw: &str, tokenizer: &Tokenizer) -> Self {
        if raw.chars().any(|c| c == '+' || c == '-') {
            let terms = raw
                .split_whitespace()
                .map(|word| {
                    let (op, rest) = match word.strip_prefix('+') {
                        Some(rest) => (TermOp::Intersect, rest),
                        None => match word.strip_prefix('-') {
                            Some(rest) => (TermOp::Subtract, rest),
                            None => (TermOp::Union, word),
                        },
                    };
                    Term {
                        op,
                        token: tokenizer.clean_token(rest),
                    }
                })
                .collect();
            Query::Compound(terms)
        } else {
            // Words that clean to nothing can never match; drop them here.
            let tokens = raw
                .split_whitespace()
                .filter_map(|word| tokenizer.clean_token(word))
                .collect();
            Query::Simple(tokens)
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Query::Compound(_))
    }
}

/// Evaluate a classified query against the index.
///
/// Identifiers come back in ascending lexicographic order. Tokens absent
/// from the index are not errors; they contribute the empty set to
/// whichever operation references them.
pub fn find_matches(index: &InvertedIndex, query: &Query) -> BTreeSet<String> {
    match query {
        Query::Simple(tokens) => find_simple(index, tokens),
        Query::Compound(terms) => find_compound(index, terms),
    }
}

fn find_simple(index: &InvertedIndex, tokens: &[String]) -> BTreeSet<String> {
    let mut result = BTreeSet::new();
    for token in tokens {
        if let Some(docs) = index.postings(token) {
            result.extend(docs.iter().cloned());
        }
    }
    result
}

/// Left-to-right running-set evaluation.
///
/// The running set starts empty, so a query opening with `+` or `-` yields
/// an empty result by construction. That is the contract, not an accident;
/// see the tests below.
fn find_compound(index: &InvertedIndex, terms: &[Term]) -> BTreeSet<String> {
    let empty = BTreeSet::new();
    let mut result_main = BTreeSet::new();

    for term in terms {
        let postings = term
            .token
            .as_deref()
            .and_then(|token| index.postings(token))
            .unwrap_or(&empty);

        match term.op {
            TermOp::Union => result_main.extend(postings.iter().cloned()),
            TermOp::Intersect => result_main = set_ops::intersection(&result_main, postings),
            TermOp::Subtract => result_main = set_ops::difference(&result_main, postings),
        }
    }

    result_main
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        let tokenizer = Tokenizer::new();
        index.add_document("u1", &tokenizer.gather_tokens("apple banana"));
        index.add_document("u2", &tokenizer.gather_tokens("banana cherry"));
        index
    }

    fn matches(index: &InvertedIndex, raw: &str) -> BTreeSet<String> {
        let query = Query::parse(raw, &Tokenizer::new());
        find_matches(index, &query)
    }

    fn ids(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classification() {
        let tokenizer = Tokenizer::new();
        assert!(!Query::parse("apple banana", &tokenizer).is_compound());
        assert!(Query::parse("apple +banana", &tokenizer).is_compound());
        assert!(Query::parse("apple -banana", &tokenizer).is_compound());
        // A modifier anywhere in the string makes the query compound, even
        // mid-word.
        assert!(Query::parse("well-known", &tokenizer).is_compound());
    }

    #[test]
    fn test_parse_compound_terms() {
        let tokenizer = Tokenizer::new();
        let query = Query::parse("Apple +Banana -CHERRY", &tokenizer);
        assert_eq!(
            query,
            Query::Compound(vec![
                Term {
                    op: TermOp::Union,
                    token: Some("apple".to_string())
                },
                Term {
                    op: TermOp::Intersect,
                    token: Some("banana".to_string())
                },
                Term {
                    op: TermOp::Subtract,
                    token: Some("cherry".to_string())
                },
            ])
        );
    }

    #[test]
    fn test_simple_single_token() {
        let index = sample_index();
        assert_eq!(matches(&index, "banana"), ids(&["u1", "u2"]));
    }

    #[test]
    fn test_simple_union_across_words() {
        let index = sample_index();
        assert_eq!(matches(&index, "apple cherry"), ids(&["u1", "u2"]));
    }

    #[test]
    fn test_simple_unknown_token_contributes_nothing() {
        let index = sample_index();
        assert_eq!(matches(&index, "apple durian"), ids(&["u1"]));
        assert!(matches(&index, "durian").is_empty());
    }

    #[test]
    fn test_simple_is_case_insensitive() {
        let index = sample_index();
        assert_eq!(matches(&index, "BANANA"), ids(&["u1", "u2"]));
    }

    #[test]
    fn test_compound_intersect() {
        let index = sample_index();
        assert_eq!(matches(&index, "banana +cherry"), ids(&["u2"]));
    }

    #[test]
    fn test_compound_subtract() {
        let index = sample_index();
        assert_eq!(matches(&index, "banana -apple"), ids(&["u2"]));
    }

    #[test]
    fn test_compound_order_matters() {
        let index = sample_index();
        // Subtract first, then the union re-adds u1.
        assert_eq!(matches(&index, "banana -apple apple"), ids(&["u1", "u2"]));
    }

    #[test]
    fn test_leading_modifier_yields_empty() {
        let index = sample_index();
        // The running set starts empty, so +/- as the first term operates
        // on nothing. This is the documented contract.
        assert!(matches(&index, "+apple").is_empty());
        assert!(matches(&index, "-apple").is_empty());
        // A later unmarked term still unions into the (emptied) set.
        assert_eq!(matches(&index, "+apple banana"), ids(&["u1", "u2"]));
    }

    #[test]
    fn test_intersect_unknown_token_collapses_result() {
        let index = sample_index();
        assert!(matches(&index, "banana +durian").is_empty());
        // A bare "+" cleans to nothing and behaves the same way.
        assert!(matches(&index, "banana +").is_empty());
    }

    #[test]
    fn test_subtract_unknown_token_is_noop() {
        let index = sample_index();
        assert_eq!(matches(&index, "banana -durian"), ids(&["u1", "u2"]));
    }

    #[test]
    fn test_empty_query() {
        let index = sample_index();
        assert!(matches(&index, "").is_empty());
        assert!(matches(&index, "   ").is_empty());
    }

    #[test]
    fn test_query_against_empty_index() {
        let index = InvertedIndex::new();
        assert!(matches(&index, "banana").is_empty());
        assert!(matches(&index, "banana +cherry").is_empty());
    }
}
