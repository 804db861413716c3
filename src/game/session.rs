//! Game session state machine
//!
//! Holds the secret word, the guess history and the attempt counter. Outcome and
//! display are derived from that state on demand, never stored.

use super::GameError;
use crate::core::{GuessedLetters, RevealedDisplay, SecretWord, WordError};
use std::fmt;

/// Incorrect guesses allowed before the game is lost
pub const MAX_ATTEMPTS: usize = 8;

/// Status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One game against one secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    word: SecretWord,
    guessed: GuessedLetters,
    attempts: usize,
}

impl GameSession {
    /// Start a session for a validated word
    #[must_use]
    pub fn new(word: SecretWord) -> Self {
        Self {
            word,
            guessed: GuessedLetters::new(),
            attempts: 0,
        }
    }

    /// Validate raw input and start a session
    ///
    /// # Errors
    /// Returns `WordError` for an empty or non-alphabetic word; no session is created.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::game::{GameOutcome, GameSession};
    ///
    /// let mut session = GameSession::from_input("go").unwrap();
    /// session.apply_guess(b'g').unwrap();
    /// session.apply_guess(b'o').unwrap();
    /// assert_eq!(session.outcome(), GameOutcome::Won);
    /// assert!(GameSession::from_input("g0").is_err());
    /// assert!(GameSession::from_input(" go").is_err());
    /// ```
    pub fn from_input(text: &str) -> Result<Self, WordError> {
        SecretWord::new(text).map(Self::new)
    }

    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Incorrect guesses so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    /// The masked word for the current history
    #[must_use]
    pub fn display(&self) -> RevealedDisplay {
        RevealedDisplay::new(&self.word, &self.guessed)
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        if self.display().is_complete() {
            GameOutcome::Won
        } else if self.attempts >= MAX_ATTEMPTS {
            GameOutcome::Lost
        } else {
            GameOutcome::InProgress
        }
    }

    /// Apply one guess
    ///
    /// Returns whether the letter is in the word. A miss costs one attempt.
    ///
    /// # Errors
    /// - `GameError::GameOver` once the session is won or lost
    /// - `GameError::InvalidGuess` for a non-letter or a repeated letter
    pub fn apply_guess(&mut self, letter: u8) -> Result<bool, GameError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver(outcome));
        }

        self.guessed.push(letter)?;

        let correct = self.word.has_letter(letter);
        if !correct {
            self.attempts += 1;
        }
        Ok(correct)
    }
}
