//! Fixed word lists used by the readability indices.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Dale-Chall familiar words of three or more syllables (lowercase).
///
/// Only words that reach the Gunning Fog syllable threshold can change a
/// difficult-word count, so shorter familiar words are left out.
pub(crate) static EASY_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| EASY_POLYSYLLABLES.iter().copied().collect());

const EASY_POLYSYLLABLES: &[&str] = &[
    // a
    "accident", "afternoon", "alphabet", "already", "altogether", "america",
    "american", "animal", "animals", "another", "anybody", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "apartment", "arithmetic", "automobile",
    "avenue",
    // b
    "bakery", "banana", "basement", "beautiful", "beautifully", "beautify",
    "bicycle", "blueberry", "bumblebee", "buttercup", "butterfly",
    // c
    "calendar", "camera", "careful", "carefully", "carpenter", "celebrate",
    "cereal", "chocolate", "cigarette", "citizen", "company", "continue",
    "cucumber",
    // d
    "december", "delicious", "department", "difference", "different", "difficult",
    "direction", "discover",
    // e
    "easily", "eleven", "elephant", "elevator", "enemy", "engineer", "envelope",
    "evening", "everybody", "everyday", "everyone", "everything", "everywhere",
    "exactly", "exercise",
    // f
    "factory", "family", "favorite", "february", "fisherman", "forever",
    "forgotten", "furniture",
    // g
    "gasoline", "gentleman", "gentlemen", "geography", "government",
    "grandfather", "grandmother", "grasshopper", "grocery",
    // h
    "hamburger", "handkerchief", "happily", "happiness", "holiday",
    "hopeful", "hospital", "however",
    // i
    "idea", "important", "indian", "insect", "interest", "interesting",
    "invitation",
    // j
    "january",
    // k
    "kangaroo", "kindergarten",
    // l
    "ladies", "lemonade", "library", "lonely", "lovely",
    // m
    "magazine", "medicine", "memory", "motorcycle", "mosquito",
    "molasses",
    // n
    "nobody", "november",
    // o
    "october", "officer", "opposite", "orchestra", "ourselves",
    // p
    "passenger", "peppermint", "photograph", "piano", "pineapple", "policeman",
    "policemen", "potato", "potatoes", "president", "principal",
    // r
    "radio", "raspberry", "really", "remember",
    // s
    "safety", "saturday", "september", "seventeen", "seventy", "somebody",
    "someone", "something", "sometimes", "somewhere", "strawberry", "suddenly",
    // t
    "telephone", "television", "terrible", "tomato", "tomatoes", "tomorrow",
    "together",
    // u
    "umbrella", "understand", "understood", "uniform", "useful", "usually",
    // v
    "vacation", "vegetable", "vegetables", "violin",
    // w
    "watermelon", "wonderful", "woodpecker",
    // y
    "yesterday",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_words_are_lowercase_and_unique() {
        assert_eq!(EASY_WORDS.len(), EASY_POLYSYLLABLES.len());
        assert!(EASY_WORDS.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
        assert!(EASY_WORDS.contains("beautiful"));
        assert!(!EASY_WORDS.contains("tremendous"));
    }
}
