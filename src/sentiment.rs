//! Lexicon-based sentiment scoring.
//!
//! The default model is VADER, applied to a whole cleaned text as a single
//! unit. Other models can be injected through [`PolarityModel`], e.g. a fixed
//! lexicon in tests.

use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::round_to;

/// Four-component polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

impl SentimentScore {
    /// Clamps the components into range and rounds them for export.
    /// A score without any polarity mass becomes fully neutral.
    pub fn normalized(positive: f64, negative: f64, neutral: f64, compound: f64) -> Self {
        let unit = |x: f64| if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 };
        let (positive, negative, neutral) = (unit(positive), unit(negative), unit(neutral));
        let compound = if compound.is_finite() {
            compound.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        if positive + negative + neutral == 0.0 {
            return SentimentScore {
                positive: 0.0,
                negative: 0.0,
                neutral: 1.0,
                compound: 0.0,
            };
        }
        SentimentScore {
            positive: round_to(positive, 3),
            negative: round_to(negative, 3),
            neutral: round_to(neutral, 3),
            compound: round_to(compound, 4),
        }
    }
}

/// A fixed (non-adaptive) polarity model. Shared read-only across workers.
pub trait PolarityModel: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// VADER lexicon-and-rule model.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        VaderScorer {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for VaderScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        SentimentScore::normalized(get("pos"), get("neg"), get("neu"), get("compound"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bounded(s: &SentimentScore) {
        for x in [s.positive, s.negative, s.neutral] {
            assert!((0.0..=1.0).contains(&x), "component out of range: {x}");
        }
        assert!((-1.0..=1.0).contains(&s.compound));
        let sum = s.positive + s.negative + s.neutral;
        assert!((sum - 1.0).abs() <= 0.01, "sum was {sum}");
    }

    #[test]
    fn positive_text_scores_positive() {
        let s = VaderScorer::new().score("What a wonderful, happy and lovely day. I love it!");
        assert!(s.compound > 0.5);
        assert!(s.positive > s.negative);
        assert_bounded(&s);
    }

    #[test]
    fn negative_text_scores_negative() {
        let s = VaderScorer::new().score("This is a horrible, hateful and miserable tragedy.");
        assert!(s.compound < -0.5);
        assert!(s.negative > s.positive);
        assert_bounded(&s);
    }

    #[test]
    fn empty_text_is_neutral() {
        let s = VaderScorer::new().score("");
        assert_eq!(s.neutral, 1.0);
        assert_eq!(s.compound, 0.0);
        assert_bounded(&s);
    }

    #[test]
    fn deterministic() {
        let scorer = VaderScorer::new();
        let text = "To be, or not to be, that is the question.";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn normalized_clamps_out_of_range() {
        let s = SentimentScore::normalized(1.4, -0.2, f64::NAN, -3.0);
        assert_eq!(s.positive, 1.0);
        assert_eq!(s.negative, 0.0);
        assert_eq!(s.neutral, 0.0);
        assert_eq!(s.compound, -1.0);
    }
}
