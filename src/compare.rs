//! Pairwise vocabulary comparison across a corpus.

use std::collections::{BTreeSet, HashMap};

use log::{info, warn};
use serde::{Serialize, Serializer};

use crate::corpus::AnalysisWithVocabulary;

/// Separator between the two titles of a comparison key.
pub const PAIR_DELIMITER: &str = "__vs__";

/// Vocabulary overlap between two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRecord {
    pub text1: String,
    pub text2: String,
    pub overlap_count: usize,
    pub unique_to_text1: usize,
    pub unique_to_text2: usize,
    /// Sorted sample of the overlap, bounded by the engine's sample size.
    pub overlap_words: Vec<String>,
}

/// Comparison records keyed by `"{title1}__vs__{title2}"`, in pair order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonTable {
    records: Vec<(String, ComparisonRecord)>,
    index: HashMap<String, usize>,
}

impl ComparisonTable {
    /// Inserts a record. A key already present is replaced in place and the
    /// previous record is returned.
    pub fn insert(&mut self, key: String, record: ComparisonRecord) -> Option<ComparisonRecord> {
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.records[i].1, record)),
            None => {
                self.index.insert(key.clone(), self.records.len());
                self.records.push((key, record));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ComparisonRecord> {
        self.index.get(key).map(|&i| &self.records[i].1)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComparisonRecord)> {
        self.records.iter().map(|(k, r)| (k.as_str(), r))
    }
}

impl Serialize for ComparisonTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.records.iter().map(|(k, r)| (k, r)))
    }
}

/// Key for the ordered pair `(title1, title2)`.
pub fn pair_key(title1: &str, title2: &str) -> String {
    format!("{title1}{PAIR_DELIMITER}{title2}")
}

///Compares two vocabularies. Counts are exact; the word sample is the sorted
///overlap cut to `sample` entries.
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use distant_reading::compare_vocabularies;
/// let a: BTreeSet<String> = ["cat", "sat"].iter().map(|s| s.to_string()).collect();
/// let b: BTreeSet<String> = ["dog", "sat"].iter().map(|s| s.to_string()).collect();
/// let r = compare_vocabularies("A", &a, "B", &b, 100);
/// assert_eq!(r.overlap_count, 1);
/// assert_eq!(r.overlap_words, vec!["sat".to_string()]);
/// ```
pub fn compare_vocabularies(
    title1: &str,
    words1: &BTreeSet<String>,
    title2: &str,
    words2: &BTreeSet<String>,
    sample: usize,
) -> ComparisonRecord {
    let overlap: Vec<&String> = words1.intersection(words2).collect();
    let overlap_count = overlap.len();
    ComparisonRecord {
        text1: title1.to_owned(),
        text2: title2.to_owned(),
        overlap_count,
        unique_to_text1: words1.len() - overlap_count,
        unique_to_text2: words2.len() - overlap_count,
        // BTreeSet intersection already yields lexicographic order
        overlap_words: overlap.into_iter().take(sample).cloned().collect(),
    }
}

/// Compares every pair `i < j` of the corpus exactly once, in corpus order.
///
/// Keys are built from titles. Two texts with the same title (or a title
/// containing `__vs__`) can produce the same key; the later pair then replaces
/// the earlier record and a warning is logged.
pub fn compare_texts(analyses: &[AnalysisWithVocabulary], sample: usize) -> ComparisonTable {
    info!("Comparing {} texts pairwise", analyses.len());
    let mut comparisons = ComparisonTable::default();
    for (i, first) in analyses.iter().enumerate() {
        for second in &analyses[i + 1..] {
            let (t1, t2) = (&first.analysis.title, &second.analysis.title);
            let record =
                compare_vocabularies(t1, &first.vocabulary, t2, &second.vocabulary, sample);
            let key = pair_key(t1, t2);
            if comparisons.insert(key.clone(), record).is_some() {
                warn!("Comparison key {key:?} is not unique; keeping the later pair");
            }
        }
    }
    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::TextAnalysis;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn entry(title: &str, words: &[&str]) -> AnalysisWithVocabulary {
        AnalysisWithVocabulary {
            analysis: TextAnalysis::placeholder(title),
            vocabulary: set(words),
        }
    }

    #[test]
    fn cat_and_dog_overlap() {
        let r = compare_vocabularies("A", &set(&["cat", "sat"]), "B", &set(&["dog", "sat"]), 100);
        assert_eq!(r.overlap_count, 1);
        assert_eq!(r.unique_to_text1, 1);
        assert_eq!(r.unique_to_text2, 1);
        assert_eq!(r.overlap_words, vec!["sat"]);
    }

    #[test]
    fn symmetric_counts() {
        let a = set(&["alpha", "beta", "gamma", "delta"]);
        let b = set(&["beta", "delta", "epsilon"]);
        let ab = compare_vocabularies("A", &a, "B", &b, 100);
        let ba = compare_vocabularies("B", &b, "A", &a, 100);
        assert_eq!(ab.overlap_count, ba.overlap_count);
        assert_eq!(ab.unique_to_text1, ba.unique_to_text2);
        assert_eq!(ab.unique_to_text2, ba.unique_to_text1);
        assert_eq!(ab.overlap_words, ba.overlap_words);
    }

    #[test]
    fn sample_is_sorted_and_bounded_but_counts_are_exact() {
        let words: Vec<String> = (0..150).map(|i| format!("w{i:03}")).collect();
        let a: BTreeSet<String> = words.iter().cloned().collect();
        let r = compare_vocabularies("A", &a, "B", &a, 100);
        assert_eq!(r.overlap_count, 150);
        assert_eq!(r.overlap_words.len(), 100);
        assert_eq!(r.overlap_words[0], "w000");
        assert!(r.overlap_words.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn pair_count_and_order() {
        let corpus = vec![
            entry("A", &["x"]),
            entry("B", &["x", "y"]),
            entry("C", &["y"]),
            entry("D", &[]),
        ];
        let table = compare_texts(&corpus, 100);
        assert_eq!(table.len(), 4 * 3 / 2);
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["A__vs__B", "A__vs__C", "A__vs__D", "B__vs__C", "B__vs__D", "C__vs__D"]
        );
        for (k, _) in table.iter() {
            let mut parts = k.split(PAIR_DELIMITER);
            let (x, y) = (parts.next().unwrap(), parts.next().unwrap());
            assert!(table.get(&pair_key(y, x)).is_none());
        }
    }

    #[test]
    fn single_text_has_no_pairs() {
        assert!(compare_texts(&[entry("Solo", &["a"])], 100).is_empty());
        assert!(compare_texts(&[], 100).is_empty());
    }

    #[test]
    fn duplicate_titles_collide() {
        let corpus = vec![entry("Same", &["a"]), entry("Same", &["b"]), entry("Other", &["a"])];
        let table = compare_texts(&corpus, 100);
        // three pairs, two of them keyed "Same__vs__Other"
        assert_eq!(table.len(), 2);
        let r = table.get("Same__vs__Other").unwrap();
        assert_eq!(r.overlap_count, 0);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let corpus = vec![entry("B", &["w"]), entry("A", &["w"])];
        let json = serde_json::to_value(compare_texts(&corpus, 100)).unwrap();
        let rec = &json["B__vs__A"];
        assert_eq!(rec["text1"], "B");
        assert_eq!(rec["overlap_words"][0], "w");
    }
}
