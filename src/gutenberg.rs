//! Removal of Project Gutenberg header and footer boilerplate.
//!
//! The literary body of a Gutenberg transcription sits between a
//! `*** START OF THIS PROJECT GUTENBERG EBOOK ... ***` line and the matching
//! `*** END OF ... ***` line. Marker phrasing changed over the years, so each
//! boundary is searched with a short list of patterns tried in order.
//!
//! Missing markers are not errors: the text is kept from the beginning (or to
//! the end) and an informational message is logged.

use std::sync::LazyLock;

use log::info;
use regex::Regex;

static START_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?is)\*\*\*\s*START OF TH(IS|E) PROJECT GUTENBERG EBOOK.*?\*\*\*",
        r"(?is)\*\*\* START OF THIS PROJECT GUTENBERG EBOOK.*?\*\*\*",
    ])
});

static END_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?is)\*\*\*\s*END OF TH(IS|E) PROJECT GUTENBERG EBOOK.*?\*\*\*",
        r"(?is)\*\*\* END OF THIS PROJECT GUTENBERG EBOOK.*?\*\*\*",
    ])
});

/// Byte range of the literary body inside a raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    pub start: usize,
    pub end: usize,
    pub start_found: bool,
    pub end_found: bool,
}

/// Locates the body of a raw text. Implement this to swap in another
/// boundary heuristic without touching [`strip_with`] callers.
pub trait BoundaryDetector: Send + Sync {
    fn detect_boundaries(&self, text: &str) -> Boundaries;
}

/// Regex marker search for Gutenberg `START OF`/`END OF` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct GutenbergMarkers;

impl BoundaryDetector for GutenbergMarkers {
    fn detect_boundaries(&self, text: &str) -> Boundaries {
        let (start, start_found) = match first_match(&START_MARKERS, text) {
            Some((_, end)) => (end, true),
            None => (0, false),
        };
        // The end marker is only looked for after the start cut.
        let (end, end_found) = match first_match(&END_MARKERS, &text[start..]) {
            Some((begin, _)) => (start + begin, true),
            None => (text.len(), false),
        };
        Boundaries {
            start,
            end,
            start_found,
            end_found,
        }
    }
}

/// Returns `(start, end)` byte offsets of the body using the Gutenberg markers.
pub fn detect_boundaries(text: &str) -> (usize, usize) {
    let b = GutenbergMarkers.detect_boundaries(text);
    (b.start, b.end)
}

/// Strips Gutenberg boilerplate and collapses all whitespace runs to one space.
/// # Example
/// ```
/// use distant_reading::strip_metadata;
/// let raw = "header\n*** START OF THIS PROJECT GUTENBERG EBOOK X ***\nBODY\n*** END OF THIS PROJECT GUTENBERG EBOOK X ***\nfooter";
/// assert_eq!(strip_metadata(raw), "BODY");
/// ```
pub fn strip_metadata(text: &str) -> String {
    strip_with(&GutenbergMarkers, text)
}

/// Strips boilerplate using an arbitrary [`BoundaryDetector`].
pub fn strip_with(detector: &dyn BoundaryDetector, text: &str) -> String {
    let b = detector.detect_boundaries(text);
    if !b.start_found {
        info!("No start marker found; keeping text from the beginning");
    }
    if !b.end_found {
        info!("No end marker found; keeping text to the end");
    }
    normalize_whitespace(&text[b.start..b.end])
}

// ---- Internal helpers ----

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
}

fn first_match(patterns: &[Regex], text: &str) -> Option<(usize, usize)> {
    patterns
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| (m.start(), m.end()))
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<&str>>().join(" ")
}
