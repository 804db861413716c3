//! Per-turn report handed to the presentation layer

use super::{GameOutcome, GameSession};
use crate::core::RevealedDisplay;

/// What happened on one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: usize,
    pub letter: u8,
    pub correct: bool,
    pub display: RevealedDisplay,
    pub attempts_used: usize,
    pub attempts_remaining: usize,
    pub outcome: GameOutcome,
}

impl TurnReport {
    /// Snapshot a session right after `letter` was applied
    #[must_use]
    pub fn capture(session: &GameSession, letter: u8, correct: bool) -> Self {
        Self {
            turn: session.guessed().len(),
            letter,
            correct,
            display: session.display(),
            attempts_used: session.attempts(),
            attempts_remaining: session.attempts_remaining(),
            outcome: session.outcome(),
        }
    }

    #[must_use]
    pub fn letter_char(&self) -> char {
        char::from(self.letter)
    }
}
