use std::collections::BTreeSet;

/// Normalizes raw corpus words into canonical index keys.
///
/// A word is eligible only if it contains at least one ASCII alphabetic
/// character; everything else (numbers, bare punctuation) never reaches the
/// index. Eligible words are stripped of leading and trailing punctuation
/// and lowercased. Internal punctuation is kept, so "don't" stays "don't".
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Clean a single whitespace-delimited word into an index token.
    ///
    /// Returns `None` when the word has no alphabetic character. The
    /// alphabetic guard also guarantees the punctuation stripping below
    /// cannot consume the whole string.
    pub fn clean_token(&self, word: &str) -> Option<String> {
        if !word.chars().any(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let stripped = word
            .trim_start_matches(|c: char| c.is_ascii_punctuation())
            .trim_end_matches(|c: char| c.is_ascii_punctuation());

        Some(stripped.to_ascii_lowercase())
    }

    /// Split a text blob into its deduplicated set of cleaned tokens.
    ///
    /// A document containing a word twice (or in different cases)
    /// contributes a single entry.
    pub fn gather_tokens(&self, text: &str) -> BTreeSet<String> {
        text.split_whitespace()
            .filter_map(|word| self.clean_token(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_trailing_punctuation() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.clean_token("Hello,"), Some("hello".to_string()));
    }

    #[test]
    fn test_clean_strips_all_edge_punctuation() {
        let tokenizer = Tokenizer::new();
        // Both trailing '+' are removed, not just one.
        assert_eq!(tokenizer.clean_token("C++"), Some("c".to_string()));
        assert_eq!(tokenizer.clean_token("((wow))!"), Some("wow".to_string()));
    }

    #[test]
    fn test_clean_rejects_words_without_letters() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.clean_token("###"), None);
        assert_eq!(tokenizer.clean_token("2048"), None);
        assert_eq!(tokenizer.clean_token(""), None);
    }

    #[test]
    fn test_clean_keeps_internal_punctuation() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.clean_token("don't"), Some("don't".to_string()));
    }

    #[test]
    fn test_clean_keeps_digits_mixed_with_letters() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.clean_token("Mp3"), Some("mp3".to_string()));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let tokenizer = Tokenizer::new();
        for word in ["Hello,", "C++", "don't", "...mixed-Case..."] {
            let once = tokenizer.clean_token(word).unwrap();
            let twice = tokenizer.clean_token(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_gather_dedups_and_folds_case() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.gather_tokens("the cat the CAT");
        let expected: BTreeSet<String> =
            ["the", "cat"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_gather_drops_ineligible_words() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.gather_tokens("42 +++ fish &chips!");
        let expected: BTreeSet<String> =
            ["fish", "chips"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_gather_empty_text() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.gather_tokens("").is_empty());
        assert!(tokenizer.gather_tokens("   \t  ").is_empty());
    }
}
