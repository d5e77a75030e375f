use crate::error::Error;
use crate::index::InvertedIndex;
use crate::stopwords::StopWords;
use crate::tokenizer::Tokenizer;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of one build pass over a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Documents processed in this pass.
    pub documents: usize,
    /// Distinct tokens in the index after the pass.
    pub unique_terms: usize,
}

/// Populate `index` from a line-oriented corpus.
///
/// The corpus is a sequence of line pairs: an identifier line followed by
/// the document's text line. A trailing identifier with no text line is
/// benign truncation: it contributes no tokens and is not counted.
///
/// When a stop-word set is supplied, tokens found in it are dropped before
/// insertion; the filter applies to the whole pass.
pub fn build_index<R: BufRead>(
    reader: R,
    index: &mut InvertedIndex,
    tokenizer: &Tokenizer,
    stopwords: Option<&StopWords>,
) -> Result<BuildReport, Error> {
    let mut lines = reader.lines();
    let mut documents = 0;

    while let Some(id_line) = lines.next() {
        let id = id_line?;
        let Some(text_line) = lines.next() else {
            break;
        };
        let text = text_line?;
        documents += 1;

        let mut tokens = tokenizer.gather_tokens(&text);
        if let Some(stop) = stopwords {
            tokens.retain(|token| !stop.contains(token));
        }
        index.add_document(&id, &tokens);
    }

    Ok(BuildReport {
        documents,
        unique_terms: index.unique_terms(),
    })
}

/// Build from a corpus file on disk.
pub fn build_from_path<P: AsRef<Path>>(
    path: P,
    index: &mut InvertedIndex,
    tokenizer: &Tokenizer,
    stopwords: Option<&StopWords>,
) -> Result<BuildReport, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::CorpusUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    build_index(BufReader::new(file), index, tokenizer, stopwords)
}
