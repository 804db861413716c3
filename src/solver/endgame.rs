//! Endgame refinement
//!
//! Once only a letter or two remain hidden, stop exploring and pick the most
//! common letter that is actually still missing from the word.

use super::scorer::LetterScorer;
use crate::core::{GuessedLetters, SecretWord};
use tracing::debug;

/// Exhaustive pick among the word's unrevealed letters
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EndgameSolver {
    scorer: LetterScorer,
}

impl EndgameSolver {
    #[must_use]
    pub const fn new(scorer: LetterScorer) -> Self {
        Self { scorer }
    }

    /// Distinct letters of `word` not yet guessed, in order of first occurrence
    #[must_use]
    pub fn remaining_letters(word: &SecretWord, guessed: &GuessedLetters) -> Vec<u8> {
        word.distinct_letters()
            .into_iter()
            .filter(|&letter| !guessed.contains(letter))
            .collect()
    }

    /// Highest-frequency letter still hidden in `word`
    ///
    /// The result is always present in the word, so this never costs an attempt.
    /// Returns `None` only when the word is already fully revealed.
    #[must_use]
    pub fn solve(&self, word: &SecretWord, guessed: &GuessedLetters) -> Option<u8> {
        let remaining = Self::remaining_letters(word, guessed);
        let pick = self.scorer.best_letter(&remaining);
        debug!(
            remaining = %String::from_utf8_lossy(&remaining),
            pick = ?pick.map(char::from),
            "endgame"
        );
        pick
    }
}
