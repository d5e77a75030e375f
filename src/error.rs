use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while building an index.
///
/// An unreadable corpus or stop-word file is recoverable: callers that want
/// the degraded behavior (empty index, no filtering) catch these and report
/// them instead of failing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't read the corpus file {path}")]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't read the stop-word file {path}")]
    StopwordsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus read failed")]
    Io(#[from] std::io::Error),
}
