//! Adaptive strategy
//!
//! Picks a letter-selection tactic based on how much of the word is still unknown.

use super::{
    FrequencyTable, endgame::EndgameSolver, positional::positional_search, scorer::LetterScorer,
    strategy::Strategy,
};
use crate::core::{GuessedLetters, SecretWord};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::debug;

/// Adaptive strategy with a configurable endgame threshold
///
/// Tiers are evaluated in order:
/// ```text
/// no guesses yet                          → Opening    (uniform random letter)
/// else if unknown <= endgame_threshold    → Endgame    (most common hidden letter)
/// else                                    → Positional (bisection-shaped scan)
/// ```
/// where `unknown` is the word length minus the number of distinct word letters
/// already guessed. If the chosen tactic yields nothing, the most frequent
/// remaining candidate is used instead.
#[derive(Debug, Clone)]
pub struct AdaptiveStrategy {
    /// Unknown letters <= this use `Endgame` (default: 2)
    pub endgame_threshold: usize,

    scorer: LetterScorer,
}

/// Tactic used for a single decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Opening,
    Positional,
    Endgame,
}

impl Tier {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Positional => "positional",
            Self::Endgame => "endgame",
        }
    }
}

impl AdaptiveStrategy {
    /// Create a new adaptive strategy with a custom endgame threshold
    #[must_use]
    pub const fn new(endgame_threshold: usize) -> Self {
        Self {
            endgame_threshold,
            scorer: LetterScorer::new(FrequencyTable::ENGLISH),
        }
    }

    /// Word length minus the distinct word letters already guessed
    ///
    /// Repeated letters count once on the guessed side, so this over-estimates
    /// the hidden positions for words like "banana".
    #[must_use]
    pub fn remaining_unknown(word: &SecretWord, guessed: &GuessedLetters) -> usize {
        let known = word
            .distinct_letters()
            .into_iter()
            .filter(|&letter| guessed.contains(letter))
            .count();
        word.len().saturating_sub(known)
    }

    /// Get the tier for the current state
    #[must_use]
    pub fn tier(&self, word: &SecretWord, guessed: &GuessedLetters) -> Tier {
        if guessed.is_empty() {
            Tier::Opening
        } else if Self::remaining_unknown(word, guessed) <= self.endgame_threshold {
            Tier::Endgame
        } else {
            Tier::Positional
        }
    }
}

impl Default for AdaptiveStrategy {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Strategy for AdaptiveStrategy {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        word: &SecretWord,
        guessed: &GuessedLetters,
        rng: &mut R,
    ) -> Option<u8> {
        if guessed.is_exhausted() {
            return None;
        }
        let candidates = guessed.candidates();

        let tier = self.tier(word, guessed);
        let pick = match tier {
            Tier::Opening => candidates.choose(rng).copied(),
            Tier::Endgame => EndgameSolver::new(self.scorer).solve(word, guessed),
            Tier::Positional => positional_search(word, guessed, &candidates),
        };

        let letter = pick.or_else(|| {
            debug!(tier = tier.name(), "no pick, falling back to frequency");
            self.scorer.best_letter(&candidates)
        })?;

        debug!(tier = tier.name(), letter = %char::from(letter), "adaptive pick");
        Some(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state(word: &str, guessed: &str) -> (SecretWord, GuessedLetters) {
        (
            SecretWord::new(word).unwrap(),
            GuessedLetters::parse(guessed).unwrap(),
        )
    }

    #[test]
    fn empty_history_is_opening() {
        let (word, guessed) = state("cat", "");
        assert_eq!(AdaptiveStrategy::default().tier(&word, &guessed), Tier::Opening);
    }

    #[test]
    fn opening_picks_any_letter_and_is_seed_deterministic() {
        let (word, guessed) = state("cat", "");
        let strategy = AdaptiveStrategy::default();

        let first = strategy.select_letter(&word, &guessed, &mut StdRng::seed_from_u64(7));
        let second = strategy.select_letter(&word, &guessed, &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
        assert!(first.unwrap().is_ascii_lowercase());
    }

    #[test]
    fn remaining_unknown_counts_distinct_guessed_letters() {
        let (word, guessed) = state("cat", "caq");
        assert_eq!(AdaptiveStrategy::remaining_unknown(&word, &guessed), 1);

        let (word, guessed) = state("banana", "a");
        assert_eq!(AdaptiveStrategy::remaining_unknown(&word, &guessed), 5);
    }

    #[test]
    fn tiers_follow_threshold() {
        let strategy = AdaptiveStrategy::default();

        let (word, guessed) = state("hangman", "e");
        assert_eq!(strategy.tier(&word, &guessed), Tier::Positional);

        let (word, guessed) = state("cat", "c");
        assert_eq!(strategy.tier(&word, &guessed), Tier::Endgame);

        let strict = AdaptiveStrategy::new(0);
        assert_eq!(strict.tier(&word, &guessed), Tier::Positional);
    }

    #[test]
    fn endgame_returns_missing_letter() {
        let (word, guessed) = state("cat", "ca");
        let mut rng = StdRng::seed_from_u64(1);
        let pick = AdaptiveStrategy::default().select_letter(&word, &guessed, &mut rng);
        assert_eq!(pick, Some(b't'));
    }

    #[test]
    fn positional_tier_uses_search() {
        // 'c' already tried: probes n, g, d, a miss before landing on 'b'
        let (word, guessed) = state("cowboy", "c");
        let mut rng = StdRng::seed_from_u64(1);
        let pick = AdaptiveStrategy::default().select_letter(&word, &guessed, &mut rng);
        assert_eq!(pick, Some(b'b'));
    }

    #[test]
    fn exhausted_alphabet_yields_none() {
        let (word, guessed) = state("cat", "abcdefghijklmnopqrstuvwxyz");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            AdaptiveStrategy::default().select_letter(&word, &guessed, &mut rng),
            None
        );
    }

    #[test]
    fn never_repeats_a_guess() {
        let strategy = AdaptiveStrategy::default();
        let mut rng = StdRng::seed_from_u64(42);
        let word = SecretWord::new("mississippi").unwrap();
        let mut guessed = GuessedLetters::new();

        for _ in 0..10 {
            let letter = strategy.select_letter(&word, &guessed, &mut rng).unwrap();
            assert!(!guessed.contains(letter));
            guessed.push(letter).unwrap();
        }
    }
}
