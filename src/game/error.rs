//! Game-level errors

use super::GameOutcome;
use crate::core::GuessError;
use std::fmt;

/// Error type for operations on a [`GameSession`](super::GameSession)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The letter was not a lowercase letter or was already tried
    InvalidGuess(GuessError),
    /// The session already ended; terminal states accept no further guesses
    GameOver(GameOutcome),
    /// Every letter of the alphabet has been guessed
    ExhaustedCandidates,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::GameOver(outcome) => write!(f, "Game is already over ({outcome})"),
            Self::ExhaustedCandidates => write!(f, "No letters left to guess"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GuessError> for GameError {
    fn from(e: GuessError) -> Self {
        Self::InvalidGuess(e)
    }
}
