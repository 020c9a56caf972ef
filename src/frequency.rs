use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Word counts in first-occurrence order.
///
/// Serializes as a JSON object whose keys follow the order in which words
/// first appeared, so repeated runs produce identical output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    ///Counts each word of a token sequence.
    /// # Example
    /// ```
    /// use distant_reading::FrequencyTable;
    /// let words: Vec<String> = ["one", "two", "two"].iter().map(|s| s.to_string()).collect();
    /// let table = FrequencyTable::from_tokens(&words);
    /// assert_eq!(table.get("two"), 2);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_tokens(words: &[String]) -> Self {
        let mut table = FrequencyTable::default();
        for word in words {
            table.add(word);
        }
        table
    }

    fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push((word.to_owned(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    ///The `n` most frequent words, highest count first. Equal counts keep first-occurrence order.
    /// # Example
    /// ```
    /// use distant_reading::FrequencyTable;
    /// let words: Vec<String> = ["b", "a", "a", "c", "b"].iter().map(|s| s.to_string()).collect();
    /// let top = FrequencyTable::from_tokens(&words).top_n(2);
    /// let expected = vec![("b".to_string(), 2), ("a".to_string(), 2)];
    /// assert_eq!(top.entries(), &expected[..]);
    /// ```
    pub fn top_n(&self, n: usize) -> RankedWords {
        let mut vec_sorted = self.entries.clone();
        // sort_by is stable, so ties stay in insertion order
        vec_sorted.sort_by(|a, b| b.1.cmp(&a.1));
        vec_sorted.truncate(n);
        RankedWords(vec_sorted)
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(w, c)| (w, c)))
    }
}

/// Rank-ordered `(word, count)` pairs, serialized as an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedWords(Vec<(String, usize)>);

impl RankedWords {
    pub fn entries(&self) -> &[(String, usize)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RankedWords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(w, c)| (w, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_count() {
        let table = FrequencyTable::from_tokens(&words("one two two three three three"));
        let mut words_map = HashMap::new();
        for (w, c) in table.iter() {
            words_map.insert(w.to_string(), c);
        }
        let mut expected = HashMap::new();
        expected.insert("one".to_string(), 1_usize);
        expected.insert("two".to_string(), 2_usize);
        expected.insert("three".to_string(), 3_usize);
        assert_eq!(words_map, expected);
        assert_eq!(table.get("missing"), 0);
    }

    #[test]
    fn iteration_follows_first_occurrence() {
        let table = FrequencyTable::from_tokens(&words("zeta alpha zeta mid"));
        let order: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn top_n_is_bounded_and_non_increasing() {
        // 260 distinct words, word k appearing (k % 7) + 1 times
        let mut tokens = Vec::new();
        for k in 0..260 {
            for _ in 0..=(k % 7) {
                tokens.push(format!("w{k}"));
            }
        }
        let table = FrequencyTable::from_tokens(&tokens);
        assert_eq!(table.len(), 260);
        for n in [0, 1, 5, 200, 10_000] {
            let top = table.top_n(n);
            assert_eq!(top.len(), n.min(table.len()));
            assert!(top.entries().windows(2).all(|w| w[0].1 >= w[1].1));
        }
    }

    #[test]
    fn ties_keep_first_occurrence() {
        let table = FrequencyTable::from_tokens(&words("c b a a b c d"));
        let top = table.top_n(4);
        let order: Vec<&str> = top.entries().iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(order, vec!["c", "b", "a", "d"]);
    }

    #[test]
    fn serializes_in_order() {
        let table = FrequencyTable::from_tokens(&words("b a b"));
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"b":2,"a":1}"#);
        let top = serde_json::to_string(&table.top_n(1)).unwrap();
        assert_eq!(top, r#"{"b":2}"#);
    }
}
