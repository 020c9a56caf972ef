//! The corpus report and its atomic JSON export.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::compare::ComparisonTable;
use crate::corpus::TextAnalysis;
use crate::error::AnalysisError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub total_texts: usize,
    pub analysis_date: String,
    pub stopwords_removed: bool,
    pub top_words_count: usize,
}

/// Whole-corpus output: per-text records, pairwise comparisons, metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub texts: Vec<TextAnalysis>,
    pub comparisons: ComparisonTable,
    pub metadata: ReportMetadata,
}

impl Report {
    /// Assembles the report, stamping today's local date.
    pub fn new(texts: Vec<TextAnalysis>, comparisons: ComparisonTable, top_n: usize) -> Self {
        let local: DateTime<Local> = Local::now();
        let metadata = ReportMetadata {
            total_texts: texts.len(),
            analysis_date: local.format("%Y-%m-%d").to_string(),
            stopwords_removed: true,
            top_words_count: top_n,
        };
        Report {
            texts,
            comparisons,
            metadata,
        }
    }

    /// Pretty-printed JSON (two-space indent, non-ASCII left unescaped).
    pub fn to_json(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

///Writes the report to `path`, replacing any previous file. The JSON goes to a
///temporary file next to the target first and is renamed into place, so a
///failed run never leaves a half-written report.
pub fn save_report(report: &Report, path: &Path) -> Result<PathBuf, AnalysisError> {
    let json = report.to_json()?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = NamedTempFile::new_in(&dir).map_err(|e| AnalysisError::io(&dir, e))?;
    file.write_all(json.as_bytes())
        .map_err(|e| AnalysisError::io(file.path(), e))?;
    file.flush().map_err(|e| AnalysisError::io(path, e))?;
    file.persist(path)
        .map_err(|e| AnalysisError::io(path, e.error))?;

    Ok(path.to_path_buf())
}

/// Size of a written file in KiB.
pub fn file_size_kb(path: &Path) -> Result<f64, AnalysisError> {
    let meta = fs::metadata(path).map_err(|e| AnalysisError::io(path, e))?;
    Ok(meta.len() as f64 / 1024.0)
}
