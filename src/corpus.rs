//! Per-text analysis: strip, tokenize, count, score.

use std::collections::BTreeSet;

use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::AnalysisOptions;
use crate::frequency::{FrequencyTable, RankedWords};
use crate::gutenberg::{BoundaryDetector, GutenbergMarkers, strip_with};
use crate::sentiment::{PolarityModel, SentimentScore};
use crate::style::{StyleMetrics, calculate_style_metrics};
use crate::tokenize::{Stopwords, tokenize_words};

const UNKNOWN: &str = "Unknown";

/// Number of leading characters handed to language detection.
const LANG_SAMPLE_CHARS: usize = 5_000;

/// One input text: source file name plus its raw contents.
#[derive(Debug, Clone)]
pub struct RawText {
    pub filename: String,
    pub content: String,
}

/// Exported analysis of one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub filename: String,
    pub title: String,
    pub author: String,
    pub bag_of_words: FrequencyTable,
    #[serde(rename = "top_200_words")]
    pub top_words: RankedWords,
    pub sentiment: SentimentScore,
    pub style_metrics: StyleMetrics,
}

/// A [`TextAnalysis`] paired with its stopword-free vocabulary. Only used for
/// the comparison pass; [`AnalysisWithVocabulary::into_analysis`] drops the
/// vocabulary before export.
#[derive(Debug, Clone)]
pub struct AnalysisWithVocabulary {
    pub analysis: TextAnalysis,
    pub vocabulary: BTreeSet<String>,
}

impl AnalysisWithVocabulary {
    pub fn into_analysis(self) -> TextAnalysis {
        self.analysis
    }
}

/// Runs the per-text pipeline with injected stopwords and sentiment model.
pub struct CorpusAnalyzer<'a> {
    stopwords: &'a Stopwords,
    sentiment: &'a dyn PolarityModel,
    boundaries: &'a dyn BoundaryDetector,
    options: &'a AnalysisOptions,
}

impl<'a> CorpusAnalyzer<'a> {
    pub fn new(
        stopwords: &'a Stopwords,
        sentiment: &'a dyn PolarityModel,
        options: &'a AnalysisOptions,
    ) -> Self {
        CorpusAnalyzer {
            stopwords,
            sentiment,
            boundaries: &GutenbergMarkers,
            options,
        }
    }

    /// Replaces the Gutenberg marker search with another boundary heuristic.
    pub fn with_boundaries(mut self, boundaries: &'a dyn BoundaryDetector) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Analyzes one text.
    pub fn analyze_text(&self, filename: &str, raw: &str) -> AnalysisWithVocabulary {
        let clean = strip_with(self.boundaries, raw);
        let (title, author) = extract_title_author(raw, self.options.title_scan_lines);
        warn_if_not_english(filename, &clean);

        let words_all = tokenize_words(&clean, None);
        let words_no_stop = tokenize_words(&clean, Some(self.stopwords));

        let bag_of_words = FrequencyTable::from_tokens(&words_no_stop);
        let top_words = bag_of_words.top_n(self.options.top_n);
        let sentiment = self.sentiment.score(&clean);
        let style_metrics = calculate_style_metrics(&clean, &words_all, &words_no_stop);
        debug!(
            "{filename}: {} words, {} distinct non-stopwords",
            style_metrics.total_words,
            bag_of_words.len()
        );

        AnalysisWithVocabulary {
            vocabulary: words_no_stop.into_iter().collect(),
            analysis: TextAnalysis {
                filename: filename.to_owned(),
                title,
                author,
                bag_of_words,
                top_words,
                sentiment,
                style_metrics,
            },
        }
    }

    /// Analyzes a corpus in parallel. The output order equals the input order.
    pub fn analyze_corpus(&self, texts: &[RawText]) -> Vec<AnalysisWithVocabulary> {
        texts
            .par_iter()
            .map(|t| self.analyze_text(&t.filename, &t.content))
            .collect()
    }
}

///Reads `Title:` and `Author:` from the first `max_lines` lines of the raw text.
///The first matching line per field wins; missing fields are "Unknown".
/// # Example
/// ```
/// use distant_reading::extract_title_author;
/// let raw = "Title: Hamlet\nAuthor: William Shakespeare\n\nbody";
/// let (title, author) = extract_title_author(raw, 30);
/// assert_eq!(title, "Hamlet");
/// assert_eq!(author, "William Shakespeare");
/// ```
pub fn extract_title_author(raw: &str, max_lines: usize) -> (String, String) {
    let mut title: Option<String> = None;
    let mut author: Option<String> = None;
    for line in raw.split('\n').take(max_lines) {
        if title.is_none() {
            if let Some(rest) = line.strip_prefix("Title:") {
                title = Some(rest.trim().to_string());
                continue;
            }
        }
        if author.is_none() {
            if let Some(rest) = line.strip_prefix("Author:") {
                author = Some(rest.trim().to_string());
            }
        }
    }
    (
        title.unwrap_or_else(|| UNKNOWN.to_string()),
        author.unwrap_or_else(|| UNKNOWN.to_string()),
    )
}

fn warn_if_not_english(filename: &str, clean: &str) {
    let sample: String = clean.chars().take(LANG_SAMPLE_CHARS).collect();
    if let Some(info) = whatlang::detect(&sample) {
        if info.is_reliable() && info.lang() != whatlang::Lang::Eng {
            warn!(
                "{filename} looks like {} text; stopwords and sentiment lexicon are English",
                info.lang().eng_name()
            );
        }
    }
}

#[cfg(test)]
impl TextAnalysis {
    pub(crate) fn placeholder(title: &str) -> Self {
        TextAnalysis {
            filename: format!("{title}.txt"),
            title: title.to_string(),
            author: UNKNOWN.to_string(),
            bag_of_words: FrequencyTable::default(),
            top_words: RankedWords::default(),
            sentiment: SentimentScore::normalized(0.0, 0.0, 1.0, 0.0),
            style_metrics: calculate_style_metrics("", &[], &[]),
        }
    }
}
