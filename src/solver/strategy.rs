//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::{AdaptiveStrategy, LetterScorer};
use crate::core::{GuessedLetters, SecretWord};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select a letter that has not been guessed yet
    ///
    /// Returns `None` only when every letter of the alphabet has been guessed.
    fn select_letter<R: Rng + ?Sized>(
        &self,
        word: &SecretWord,
        guessed: &GuessedLetters,
        rng: &mut R,
    ) -> Option<u8>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Adaptive strategy (default)
    Adaptive(AdaptiveStrategy),
    /// Most frequent remaining letter every turn
    Frequency(FrequencyStrategy),
    /// Uniform random remaining letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        word: &SecretWord,
        guessed: &GuessedLetters,
        rng: &mut R,
    ) -> Option<u8> {
        match self {
            Self::Adaptive(s) => s.select_letter(word, guessed, rng),
            Self::Frequency(s) => s.select_letter(word, guessed, rng),
            Self::Random(s) => s.select_letter(word, guessed, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "adaptive", "frequency", "random".
    /// Defaults to adaptive if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency(FrequencyStrategy::default()),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Adaptive(AdaptiveStrategy::default()),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Adaptive(_) => "adaptive",
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Adaptive(AdaptiveStrategy::default())
    }
}

/// Pure frequency strategy
///
/// Always guesses the most common letter not yet tried, ignoring the word.
#[derive(Debug, Clone, Default)]
pub struct FrequencyStrategy {
    scorer: LetterScorer,
}

impl Strategy for FrequencyStrategy {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        _word: &SecretWord,
        guessed: &GuessedLetters,
        _rng: &mut R,
    ) -> Option<u8> {
        self.scorer.best_letter(&guessed.candidates())
    }
}

/// Random strategy
///
/// Picks uniformly among letters not yet tried. A baseline for benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter<R: Rng + ?Sized>(
        &self,
        _word: &SecretWord,
        guessed: &GuessedLetters,
        rng: &mut R,
    ) -> Option<u8> {
        guessed.candidates().choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(word: &str, guessed: &str) -> (SecretWord, GuessedLetters, StdRng) {
        (
            SecretWord::new(word).unwrap(),
            GuessedLetters::parse(guessed).unwrap(),
            StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn frequency_strategy_follows_etaoin() {
        let (word, guessed, mut rng) = setup("cat", "");
        let strategy = FrequencyStrategy::default();
        assert_eq!(strategy.select_letter(&word, &guessed, &mut rng), Some(b'e'));

        let (word, guessed, mut rng) = setup("cat", "e");
        assert_eq!(strategy.select_letter(&word, &guessed, &mut rng), Some(b't'));
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let (word, guessed, mut rng) = setup("cat", "abcdefghijklmnopqrstuvwxy");
        assert_eq!(RandomStrategy.select_letter(&word, &guessed, &mut rng), Some(b'z'));
    }

    #[test]
    fn random_strategy_exhausted() {
        let (word, guessed, mut rng) = setup("cat", "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(RandomStrategy.select_letter(&word, &guessed, &mut rng), None);
    }

    #[test]
    fn from_name_parses_known_names() {
        assert_eq!(StrategyType::from_name("frequency").name(), "frequency");
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("adaptive").name(), "adaptive");
    }

    #[test]
    fn from_name_defaults_to_adaptive() {
        assert_eq!(StrategyType::from_name("entropy").name(), "adaptive");
    }

    #[test]
    fn enum_dispatch_matches_inner_strategy() {
        let (word, guessed, mut rng) = setup("cat", "ca");
        let strategy = StrategyType::from_name("adaptive");
        assert_eq!(strategy.select_letter(&word, &guessed, &mut rng), Some(b't'));
    }
}
