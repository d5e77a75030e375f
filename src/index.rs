use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Inverted index: token -> set of document identifiers.
///
/// Ordered maps keep iteration (and therefore all reported output)
/// deterministic. The index is append-only while a corpus is being built
/// and read-only afterward; there is deliberately no removal or re-indexing.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, BTreeSet<String>>,
    doc_count: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document's token set.
    ///
    /// Every token gains this document's identifier in its posting set; a
    /// token becomes an index key only when some document contributes it.
    /// An empty token set still counts the document.
    pub fn add_document(&mut self, id: &str, tokens: &BTreeSet<String>) {
        for token in tokens {
            self.postings
                .entry(token.clone())
                .or_default()
                .insert(id.to_string());
        }
        self.doc_count += 1;
    }

    /// Identifiers of documents containing `token`, if any document does.
    pub fn postings(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.postings.get(token)
    }

    /// Number of documents containing `token`.
    pub fn doc_frequency(&self, token: &str) -> usize {
        self.postings.get(token).map_or(0, BTreeSet::len)
    }

    /// Total number of indexed documents.
    pub fn total_documents(&self) -> usize {
        self.doc_count
    }

    /// Number of distinct tokens in the index.
    pub fn unique_terms(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_documents: self.doc_count,
            unique_terms: self.postings.len(),
            avg_docs_per_term: if self.postings.is_empty() {
                0.0
            } else {
                self.postings.values().map(BTreeSet::len).sum::<usize>() as f64
                    / self.postings.len() as f64
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub unique_terms: usize,
    pub avg_docs_per_term: f64,
}
