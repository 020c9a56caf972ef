//! Style metrics: counts, vocabulary richness, average lengths and the
//! Flesch Reading Ease, Flesch-Kincaid Grade and Gunning Fog indices.
//!
//! The readability indices count words, sentences and syllables on their own
//! terms over the cleaned text (not over the alphabetic token stream), as the
//! published formulas do:
//!
//! - words: whitespace-separated after removing everything but letters, digits and `'`
//! - sentences: runs ending in `.`, `!` or `?` with more than two words (at least one)
//! - syllables: vowel groups, adjusted for silent `e` and `-le` endings
//! - difficult words (Gunning Fog): distinct lowercase words of three or more
//!   syllables that are not Dale-Chall familiar words
//!
//! Ratios are computed at full precision and rounded only when the
//! [`StyleMetrics`] record is assembled.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::round_to;
use crate::tokenize::split_sentences;
use crate::word_lists::EASY_WORDS;

/// Syllables at which a word stops being easy for Gunning Fog.
const FOG_SYLLABLE_THRESHOLD: usize = 3;

static SENTENCE_SPAN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b[^.!?]+[.!?]*").ok());

/// Derived style scalars for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleMetrics {
    pub total_words: usize,
    pub total_sentences: usize,
    pub unique_words: usize,
    pub vocabulary_richness: f64,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
}

/// Raw readability scores before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readability {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
}

/// Computes [`StyleMetrics`] from the cleaned text and its token sequences.
///
/// `words` is the token sequence with stopwords. The stopword-free sequence
/// is accepted for symmetry with the rest of the pipeline but no metric
/// currently depends on it.
pub fn calculate_style_metrics(
    text: &str,
    words: &[String],
    _words_no_stop: &[String],
) -> StyleMetrics {
    let total_words = words.len();
    let total_sentences = split_sentences(text).len();
    let unique_words = words.iter().map(String::as_str).collect::<HashSet<&str>>().len();

    let vocabulary_richness = ratio(unique_words as f64, total_words);
    let char_total: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = ratio(char_total as f64, total_words);
    let avg_sentence_length = ratio(total_words as f64, total_sentences);

    let r = readability(text);

    StyleMetrics {
        total_words,
        total_sentences,
        unique_words,
        vocabulary_richness: round_to(vocabulary_richness, 4),
        avg_word_length: round_to(avg_word_length, 2),
        avg_sentence_length: round_to(avg_sentence_length, 2),
        flesch_reading_ease: round_to(r.flesch_reading_ease, 2),
        flesch_kincaid_grade: round_to(r.flesch_kincaid_grade, 2),
        gunning_fog: round_to(r.gunning_fog, 2),
    }
}

/// Readability indices of a text. All zero when the text has no words.
pub fn readability(text: &str) -> Readability {
    let words = lexicon(text);
    if words.is_empty() {
        return Readability {
            flesch_reading_ease: 0.0,
            flesch_kincaid_grade: 0.0,
            gunning_fog: 0.0,
        };
    }
    let n_words = words.len() as f64;
    let n_sentences = sentence_count(text) as f64;
    let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let difficult = difficult_words(text) as f64;

    let asl = n_words / n_sentences;
    let asw = total_syllables as f64 / n_words;

    Readability {
        flesch_reading_ease: 206.835 - 1.015 * asl - 84.6 * asw,
        flesch_kincaid_grade: 0.39 * asl + 11.8 * asw - 15.59,
        gunning_fog: 0.4 * (asl + 100.0 * difficult / n_words),
    }
}

///Counts syllables in a single word with a vowel-group heuristic.
/// # Example
/// ```
/// use distant_reading::count_syllables;
/// assert_eq!(count_syllables("cat"), 1);
/// assert_eq!(count_syllables("table"), 2);
/// assert_eq!(count_syllables("reading"), 2);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let w: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if w.is_empty() {
        return 0;
    }
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &w {
        let v = is_vowel(c);
        if v && !prev_vowel {
            count += 1;
        }
        prev_vowel = v;
    }

    let n = w.len();
    // silent final e ("make"), but not "-le" after a consonant ("table")
    if n > 2 && w[n - 1] == 'e' && !is_vowel(w[n - 2]) {
        let le_ending = w[n - 2] == 'l' && !is_vowel(w[n - 3]);
        if !le_ending {
            count -= 1;
        }
    }
    // "-es"/"-ed" after most consonants are silent ("hopes", "loved")
    if n > 3
        && w[n - 2] == 'e'
        && matches!(w[n - 1], 's' | 'd')
        && !is_vowel(w[n - 3])
        && !matches!(w[n - 3], 't' | 'd' | 's' | 'z' | 'x' | 'c' | 'g')
    {
        count -= 1;
    }
    count.max(1)
}

// ---- Internal helpers ----

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

fn lexicon(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric() || matches!(*c, '\'' | '_'))
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Distinct words that count as difficult, each counted once however often it occurs.
fn difficult_words(text: &str) -> usize {
    let lower = text.to_lowercase();
    let distinct: HashSet<&str> = lower
        .split(|c: char| {
            !(c.is_alphanumeric() || matches!(c, '_' | '=' | '\'' | '\u{2018}' | '\u{2019}'))
        })
        .filter(|w| !w.is_empty())
        .collect();
    distinct
        .into_iter()
        .filter(|w| !EASY_WORDS.contains(w) && count_syllables(w) >= FOG_SYLLABLE_THRESHOLD)
        .count()
}

fn lexicon_count(text: &str) -> usize {
    lexicon(text).len()
}

fn sentence_count(text: &str) -> usize {
    let Some(re) = SENTENCE_SPAN.as_ref() else {
        return 1;
    };
    let spans: Vec<&str> = re.find_iter(text).map(|m| m.as_str()).collect();
    let ignored = spans.iter().filter(|s| lexicon_count(s) <= 2).count();
    (spans.len() - ignored).max(1)
}
