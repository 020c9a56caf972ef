//! Word and sentence segmentation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use stop_words::{LANGUAGE, get};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::AnalysisError;

/// Trailing clitics split off their host word, e.g. `don't` -> `do` + `n't`.
const CLITICS: [&str; 7] = ["n't", "'s", "'ll", "'re", "'ve", "'d", "'m"];

/// Read-only stopword set, built once and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Built-in English list (NLTK's, built with the `nltk` feature of `stop-words`).
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Stopwords { words }
    }

    /// Adds the words of a file, one per line.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<(), AnalysisError> {
        let content = fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
        self.words.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

///Splits text into lowercase alphabetic words. Numerals and punctuation are dropped.
///Pass a stopword set to filter it out as well.
/// # Example
/// ```
/// use distant_reading::{tokenize_words, Stopwords};
/// let stop = Stopwords::from_words(["the"]);
/// let words = tokenize_words("The cat's 3 hats!", Some(&stop));
/// assert_eq!(words, vec!["cat".to_string(), "hats".to_string()]);
/// ```
pub fn tokenize_words(text: &str, stopwords: Option<&Stopwords>) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .unicode_words()
        .map(strip_clitic)
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
        .filter(|w| stopwords.is_none_or(|s| !s.contains(w)))
        .map(String::from)
        .collect()
}

/// Splits text into sentences. Segments without any alphanumeric content are skipped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

fn strip_clitic(word: &str) -> &str {
    let normalized = word.replace('\u{2019}', "'");
    for clitic in CLITICS {
        if normalized.len() > clitic.len() && normalized.ends_with(clitic) {
            // Curly and straight apostrophes differ in byte length.
            let tail_chars = clitic.chars().count();
            let cut = word
                .char_indices()
                .rev()
                .nth(tail_chars - 1)
                .map(|(i, _)| i)
                .unwrap_or(0);
            return &word[..cut];
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_alphabetic_lowercase() {
        let words = tokenize_words("Hello, World! 42 times -- x2 ok.", None);
        assert_eq!(words, vec!["hello", "world", "times", "ok"]);
    }

    #[test]
    fn splits_clitics() {
        let words = tokenize_words("Don't touch Juliet's rose; we'll see.", None);
        assert_eq!(words, vec!["do", "touch", "juliet", "rose", "we", "see"]);
    }

    #[test]
    fn curly_apostrophe_clitic() {
        let words = tokenize_words("Romeo\u{2019}s love", None);
        assert_eq!(words, vec!["romeo", "love"]);
    }

    #[test]
    fn filters_stopwords() {
        let stop = Stopwords::from_words(["The", "and"]);
        let words = tokenize_words("The cat and the dog", Some(&stop));
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn counts_sentences() {
        let s = split_sentences("First one. Second one? Third! ...");
        assert_eq!(s.len(), 3);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn english_stopwords_cover_articles() {
        let stop = Stopwords::english();
        assert!(!stop.is_empty());
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
    }

    #[test]
    fn english_stopwords_keep_content_words() {
        let stop = Stopwords::english();
        for w in ["man", "men", "good", "great", "world", "home", "old", "thought", "place"] {
            assert!(!stop.contains(w), "{w} should not be a stopword");
        }
        for w in ["i", "me", "ourselves", "whom", "because", "very", "don", "shouldn"] {
            assert!(stop.contains(w), "{w} should be a stopword");
        }
        assert!((170..=180).contains(&stop.len()), "got {} stopwords", stop.len());
    }

    #[test]
    fn extend_from_file_adds_lowercased_lines() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("stop.txt");
        std::fs::write(&p, "Thou\n\n  Thee \n").unwrap();
        let mut stop = Stopwords::default();
        stop.extend_from_file(&p).unwrap();
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("thou"));
        assert!(stop.contains("thee"));
    }
}
