use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by corpus discovery, reading and report export.
#[derive(Debug)]
pub enum AnalysisError {
    /// No corpus file was discovered.
    NoInput { path: PathBuf },
    /// Corpus files were discovered but every one of them failed to read.
    NoReadableInput { path: PathBuf, failed: usize },
    /// Reading an input or writing the report failed.
    Io { path: PathBuf, source: io::Error },
    /// An input file is not valid UTF-8.
    Encoding { path: PathBuf },
    /// The report could not be serialized.
    Serialize(serde_json::Error),
}

impl AnalysisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalysisError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::NoInput { path } => {
                write!(f, "No text files found in {}", path.display())
            }
            AnalysisError::NoReadableInput { path, failed } => write!(
                f,
                "No readable text files in {} ({failed} found, all failed to read)",
                path.display()
            ),
            AnalysisError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            AnalysisError::Encoding { path } => {
                write!(f, "{} is not valid UTF-8", path.display())
            }
            AnalysisError::Serialize(e) => write!(f, "Report serialization failed: {e}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Io { source, .. } => Some(source),
            AnalysisError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::Serialize(e)
    }
}
