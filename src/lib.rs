// Re-export main components
pub mod builder;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod set_ops;
pub mod stopwords;
pub mod tokenizer;

// Re-export commonly used types
pub use builder::{build_from_path, build_index, BuildReport};
pub use engine::SearchEngine;
pub use error::Error;
pub use index::{IndexStats, InvertedIndex};
pub use query::{find_matches, Query, Term, TermOp};
pub use stopwords::StopWords;
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
