use crate::builder::{self, BuildReport};
use crate::error::Error;
use crate::index::{IndexStats, InvertedIndex};
use crate::query::{find_matches, Query};
use crate::stopwords::StopWords;
use crate::tokenizer::Tokenizer;
use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, warn};

/// Main search engine.
///
/// Built once from a corpus, then queried read-only for the rest of its
/// life. Nothing mutates after construction, so an engine can be shared
/// across concurrent readers without locking should a caller want to.
pub struct SearchEngine {
    index: InvertedIndex,
    tokenizer: Tokenizer,
    report: BuildReport,
}

impl SearchEngine {
    /// Build an engine from any corpus reader.
    pub fn from_corpus<R: BufRead>(
        corpus: R,
        stopwords: Option<&StopWords>,
    ) -> Result<Self, Error> {
        let tokenizer = Tokenizer::new();
        let mut index = InvertedIndex::new();
        let report = builder::build_index(corpus, &mut index, &tokenizer, stopwords)?;

        info!(
            documents = report.documents,
            unique_terms = report.unique_terms,
            "index built"
        );

        Ok(Self {
            index,
            tokenizer,
            report,
        })
    }

    /// Build an engine from files on disk, degrading instead of failing.
    ///
    /// An unreadable corpus is reported and yields an empty index with a
    /// zero document count; an unreadable stop-word file is reported and
    /// disables filtering for the run. Neither condition is fatal.
    pub fn open<P: AsRef<Path>>(corpus_path: P, stopwords_path: Option<&Path>) -> Self {
        let tokenizer = Tokenizer::new();

        let stopwords = stopwords_path.and_then(|path| match StopWords::load(path) {
            Ok(stop) => {
                info!(words = stop.len(), path = %path.display(), "loaded stop words");
                Some(stop)
            }
            Err(err) => {
                warn!(%err, "skipping stop-word filtering");
                None
            }
        });

        let mut index = InvertedIndex::new();
        let report = match builder::build_from_path(
            &corpus_path,
            &mut index,
            &tokenizer,
            stopwords.as_ref(),
        ) {
            Ok(report) => {
                info!(
                    documents = report.documents,
                    unique_terms = report.unique_terms,
                    "index built"
                );
                report
            }
            Err(err) => {
                warn!(%err, "starting with an empty index");
                index = InvertedIndex::new();
                BuildReport::default()
            }
        };

        Self {
            index,
            tokenizer,
            report,
        }
    }

    /// Create an engine over an empty corpus (for testing).
    pub fn empty() -> Self {
        Self {
            index: InvertedIndex::new(),
            tokenizer: Tokenizer::new(),
            report: BuildReport::default(),
        }
    }

    /// Answer a raw query string with the matching identifiers, in
    /// ascending order.
    pub fn search(&self, raw: &str) -> BTreeSet<String> {
        let query = Query::parse(raw, &self.tokenizer);
        let result = find_matches(&self.index, &query);
        debug!(
            compound = query.is_compound(),
            matches = result.len(),
            "query evaluated"
        );
        result
    }

    /// Number of documents processed at build time.
    pub fn document_count(&self) -> usize {
        self.report.documents
    }

    pub fn build_report(&self) -> BuildReport {
        self.report
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
