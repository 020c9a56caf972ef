#![forbid(unsafe_code)]
//! # distant_reading
//!
//! Batch "distant reading" of a literary corpus. Every text is stripped of its
//! Project Gutenberg boilerplate, tokenized, counted and scored (style metrics,
//! readability, VADER sentiment); afterwards every pair of texts is compared by
//! vocabulary overlap. Everything ends up in one JSON report.
//!
//! ## Example
//! ```no_run
//! use std::path::Path;
//! use distant_reading::{AnalysisOptions, Stopwords, VaderScorer, analyze_path, save_report};
//!
//! let stop = Stopwords::english();
//! let vader = VaderScorer::new();
//! let opts = AnalysisOptions::default();
//! let outcome = analyze_path(Path::new("corpus"), &stop, &vader, &opts).unwrap();
//! save_report(&outcome.report, Path::new("analysis_data.json")).unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

pub mod compare;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod gutenberg;
pub mod report;
pub mod sentiment;
pub mod style;
pub mod tokenize;
mod word_lists;

pub use compare::{
    ComparisonRecord, ComparisonTable, PAIR_DELIMITER, compare_texts, compare_vocabularies,
    pair_key,
};
pub use corpus::{
    AnalysisWithVocabulary, CorpusAnalyzer, RawText, TextAnalysis, extract_title_author,
};
pub use error::AnalysisError;
pub use frequency::{FrequencyTable, RankedWords};
pub use gutenberg::{
    Boundaries, BoundaryDetector, GutenbergMarkers, detect_boundaries, strip_metadata,
};
pub use report::{Report, ReportMetadata, file_size_kb, save_report};
pub use sentiment::{PolarityModel, SentimentScore, VaderScorer};
pub use style::{
    Readability, StyleMetrics, calculate_style_metrics, count_syllables, readability,
};
pub use tokenize::{Stopwords, split_sentences, tokenize_words};

/// Tunables of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Size of the ranked top-words projection.
    pub top_n: usize,
    /// Maximum number of overlap words listed per comparison.
    pub overlap_sample: usize,
    /// Raw lines scanned for `Title:`/`Author:`.
    pub title_scan_lines: usize,
    /// File-name prefix of corpus files inside a directory.
    pub file_prefix: String,
    /// Extension of corpus files inside a directory.
    pub extension: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            top_n: 200,
            overlap_sample: 100,
            title_scan_lines: 30,
            file_prefix: "pg".to_string(),
            extension: "txt".to_string(),
        }
    }
}

/// Result of [`analyze_path`]: the report plus inputs that had to be skipped.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub report: Report,
    pub failed_files: Vec<(String, String)>,
}

///Collects corpus files. A file path is returned as is; a directory yields its
///direct children matching `{prefix}*.{extension}`, sorted by file name.
pub fn collect_files(path: &Path, options: &AnalysisOptions) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_corpus_file(p, options))
        .collect()
}

fn is_corpus_file(p: &Path, options: &AnalysisOptions) -> bool {
    let name_ok = p
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(&options.file_prefix));
    let ext_ok = p
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(&options.extension));
    name_ok && ext_ok
}

/// Reads one corpus file as UTF-8.
pub fn read_text(path: &Path) -> Result<RawText, AnalysisError> {
    let bytes = fs::read(path).map_err(|e| AnalysisError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|_| AnalysisError::Encoding {
        path: path.to_path_buf(),
    })?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(RawText { filename, content })
}

/// Reads all files, separating readable texts from failures.
pub fn read_corpus(files: &[PathBuf]) -> (Vec<RawText>, Vec<(String, String)>) {
    let mut texts = Vec::with_capacity(files.len());
    let mut failed_files = Vec::new();
    for file in files {
        match read_text(file) {
            Ok(t) => texts.push(t),
            Err(e) => {
                warn!("Skipping {}: {}", file.display(), e);
                failed_files.push((file.display().to_string(), e.to_string()));
            }
        }
    }
    (texts, failed_files)
}

/// Analyzes already loaded texts and compares them pairwise.
pub fn analyze_texts(
    texts: &[RawText],
    stopwords: &Stopwords,
    sentiment: &dyn PolarityModel,
    options: &AnalysisOptions,
) -> Report {
    let analyzer = CorpusAnalyzer::new(stopwords, sentiment, options);
    let analyses = analyzer.analyze_corpus(texts);
    let comparisons = compare_texts(&analyses, options.overlap_sample);
    let texts: Vec<TextAnalysis> = analyses
        .into_iter()
        .map(AnalysisWithVocabulary::into_analysis)
        .collect();
    Report::new(texts, comparisons, options.top_n)
}

///Discovers, reads, analyzes and compares the corpus at `path`.
///
///Unreadable files are skipped and reported in `failed_files`; only
///successfully read texts take part in the comparison. Fails with
///[`AnalysisError::NoInput`] when no file matches and with
///[`AnalysisError::NoReadableInput`] when none of the matches could be read.
pub fn analyze_path(
    path: &Path,
    stopwords: &Stopwords,
    sentiment: &dyn PolarityModel,
    options: &AnalysisOptions,
) -> Result<AnalysisOutcome, AnalysisError> {
    let files = collect_files(path, options);
    if files.is_empty() {
        return Err(AnalysisError::NoInput {
            path: path.to_path_buf(),
        });
    }
    info!("Found {} text files in {}", files.len(), path.display());

    let (texts, failed_files) = read_corpus(&files);
    if texts.is_empty() {
        return Err(AnalysisError::NoReadableInput {
            path: path.to_path_buf(),
            failed: failed_files.len(),
        });
    }

    let report = analyze_texts(&texts, stopwords, sentiment, options);
    Ok(AnalysisOutcome {
        report,
        failed_files,
    })
}

/// Prints skipped inputs to stderr.
pub fn print_failed_files(failed: &[(String, String)]) {
    eprintln!("\nSkipped {} file(s):", failed.len());
    for (file, reason) in failed {
        eprintln!("  - {file}: {reason}");
    }
}

/// Rounds to a fixed number of decimal places, ties to even (`2.5` -> `2`).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}
