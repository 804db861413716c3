//! Dictionary membership oracle
//!
//! Answers whether a string is a real word. Gameplay never depends on the answer:
//! drivers only log and report it.

use crate::core::SecretWord;
use crate::wordlists::WORDS;
use rustc_hash::FxHashSet;

/// Something that can tell whether a word exists
pub trait Dictionary {
    fn is_valid_word(&self, word: &str) -> bool;
}

/// A fixed set of known words, matched case-insensitively
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// The embedded English word list
    #[must_use]
    pub fn builtin() -> Self {
        WORDS.iter().copied().collect()
    }

    /// Build from already validated words
    #[must_use]
    pub fn from_words(words: &[SecretWord]) -> Self {
        words.iter().map(SecretWord::text).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(str::to_lowercase).collect(),
        }
    }
}

impl Dictionary for WordSet {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// Accepts everything; used when no dictionary is wanted
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn is_valid_word(&self, _word: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_knows_common_words() {
        let dict = WordSet::builtin();
        assert!(dict.is_valid_word("cat"));
        assert!(dict.is_valid_word("Hangman"));
        assert!(!dict.is_valid_word("qwzx"));
        assert!(!dict.is_empty());
    }

    #[test]
    fn from_words_uses_validated_text() {
        let words = vec![SecretWord::new("Apple").unwrap()];
        let dict = WordSet::from_words(&words);
        assert_eq!(dict.len(), 1);
        assert!(dict.is_valid_word("apple"));
        assert!(dict.is_valid_word("APPLE"));
    }

    #[test]
    fn accept_all_accepts_anything() {
        assert!(AcceptAll.is_valid_word("xyzzy"));
    }
}
