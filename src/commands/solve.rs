//! Word solving command
//!
//! Lets the AI play one secret word to the end and returns every turn.

use crate::dictionary::Dictionary;
use crate::game::{GameOutcome, GameSession, TurnReport};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Fixes the random source; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Pause between turns
    pub delay: Duration,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            seed: None,
            delay: Duration::ZERO,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub turns: Vec<TurnReport>,
    pub outcome: GameOutcome,
    pub attempts_used: usize,
    pub in_dictionary: bool,
}

/// Solve a specific word using the given strategy
///
/// `on_turn` is called after every turn, before any pacing delay.
///
/// # Errors
///
/// Returns an error if the target word is empty or not purely alphabetic.
pub fn solve_word<S, D, F>(
    config: &SolveConfig,
    strategy: S,
    dictionary: &D,
    mut on_turn: F,
) -> Result<SolveResult>
where
    S: Strategy,
    D: Dictionary + ?Sized,
    F: FnMut(&TurnReport),
{
    let mut session = GameSession::from_input(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    let in_dictionary = dictionary.is_valid_word(session.word().text());
    if !in_dictionary {
        warn!(word = %session.word(), "word not found in dictionary, playing anyway");
    }

    let mut solver = match config.seed {
        Some(seed) => Solver::seeded(strategy, seed),
        None => Solver::from_os_rng(strategy),
    };

    info!(word = %session.word(), len = session.word().len(), "game started");

    let mut turns = Vec::new();
    while !session.outcome().is_terminal() {
        if !turns.is_empty() && !config.delay.is_zero() {
            thread::sleep(config.delay);
        }

        let (next, report) = solver.take_turn(session)?;
        on_turn(&report);
        turns.push(report);
        session = next;
    }

    let outcome = session.outcome();
    info!(%outcome, turns = turns.len(), attempts = session.attempts(), "game finished");

    Ok(SolveResult {
        target: session.word().text().to_string(),
        turns,
        outcome,
        attempts_used: session.attempts(),
        in_dictionary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{AcceptAll, WordSet};
    use crate::game::MAX_ATTEMPTS;
    use crate::solver::{AdaptiveStrategy, FrequencyStrategy};

    fn seeded(target: &str, seed: u64) -> SolveConfig {
        let mut config = SolveConfig::new(target.to_string());
        config.seed = Some(seed);
        config
    }

    #[test]
    fn solve_word_finishes() {
        let result =
            solve_word(&seeded("hangman", 1), AdaptiveStrategy::default(), &AcceptAll, |_| {})
                .unwrap();

        assert!(result.outcome.is_terminal());
        assert!(!result.turns.is_empty());
        assert!(result.attempts_used <= MAX_ATTEMPTS);
        assert_eq!(result.target, "hangman");
    }

    #[test]
    fn solve_records_every_turn() {
        let mut seen = 0;
        let result = solve_word(
            &seeded("zebra", 4),
            AdaptiveStrategy::default(),
            &AcceptAll,
            |_| seen += 1,
        )
        .unwrap();

        assert_eq!(seen, result.turns.len());
        for (i, turn) in result.turns.iter().enumerate() {
            assert_eq!(turn.turn, i + 1);
        }
        assert_eq!(result.turns.last().unwrap().outcome, result.outcome);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let result = solve_word(&seeded("c4t", 0), AdaptiveStrategy::default(), &AcceptAll, |_| {});
        assert!(result.is_err());

        let result = solve_word(&seeded("", 0), AdaptiveStrategy::default(), &AcceptAll, |_| {});
        assert!(result.is_err());
    }

    #[test]
    fn unknown_word_still_played() {
        let dictionary = WordSet::builtin();
        let result =
            solve_word(&seeded("qwzx", 2), AdaptiveStrategy::default(), &dictionary, |_| {})
                .unwrap();

        assert!(!result.in_dictionary);
        assert!(result.outcome.is_terminal());
    }

    #[test]
    fn solve_is_reproducible_with_seed() {
        let letters = |seed| {
            solve_word(&seeded("oxygen", seed), AdaptiveStrategy::default(), &AcceptAll, |_| {})
                .unwrap()
                .turns
                .iter()
                .map(|t| t.letter)
                .collect::<Vec<_>>()
        };
        assert_eq!(letters(21), letters(21));
    }

    #[test]
    fn frequency_strategy_wins_common_word() {
        // e, s and r all land within the first nine guesses, after six misses
        let result =
            solve_word(&seeded("seer", 0), FrequencyStrategy::default(), &AcceptAll, |_| {})
                .unwrap();
        assert_eq!(result.outcome, GameOutcome::Won);
    }
}
