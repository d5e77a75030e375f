use crate::error::Error;
use std::collections::HashSet;
use std::path::Path;

/// Stop words excluded from indexing.
///
/// Loaded once from a side file before the first document is indexed and
/// never mutated afterward. Matching is exact: the file is expected to hold
/// already-lowercase single words, whitespace-separated, any number per
/// line.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Load a stop-word file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            Error::StopwordsUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::from_text(&text))
    }

    /// Parse stop words out of raw text.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
