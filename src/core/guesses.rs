//! Guess history
//!
//! Letters attempted so far, in turn order, with a bitmask for constant-time lookups.

use super::alphabet::{ALPHABET, ALPHABET_LEN, letter_index};
use std::fmt;

/// Ordered, duplicate-free record of guessed letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<u8>,
    mask: u32,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    NotALetter(char),
    AlreadyGuessed(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALetter(c) => write!(f, "'{c}' is not a lowercase letter"),
            Self::AlreadyGuessed(c) => write!(f, "'{c}' has already been guessed"),
        }
    }
}

impl std::error::Error for GuessError {}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from a string of letters, in order
    ///
    /// # Errors
    /// Returns `GuessError` on a non-letter or a repeated letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::GuessedLetters;
    ///
    /// let guessed = GuessedLetters::parse("ca").unwrap();
    /// assert!(guessed.contains(b'c'));
    /// assert!(GuessedLetters::parse("cc").is_err());
    /// ```
    pub fn parse(letters: &str) -> Result<Self, GuessError> {
        let mut guessed = Self::new();
        for c in letters.chars() {
            let lower = c.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(GuessError::NotALetter(c));
            }
            guessed.push(lower as u8)?;
        }
        Ok(guessed)
    }

    /// Record a new guess
    ///
    /// # Errors
    /// Returns `GuessError::NotALetter` for anything outside the alphabet and
    /// `GuessError::AlreadyGuessed` for a repeat.
    pub fn push(&mut self, letter: u8) -> Result<(), GuessError> {
        let index = letter_index(letter).ok_or(GuessError::NotALetter(char::from(letter)))?;
        let bit = 1u32 << index;
        if self.mask & bit != 0 {
            return Err(GuessError::AlreadyGuessed(char::from(letter)));
        }
        self.mask |= bit;
        self.letters.push(letter);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        letter_index(letter).is_some_and(|index| self.mask & (1u32 << index) != 0)
    }

    /// Letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True once every letter of the alphabet has been tried
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.letters.len() == ALPHABET_LEN
    }

    /// Letters not yet guessed, in alphabetical order
    #[must_use]
    pub fn candidates(&self) -> Vec<u8> {
        ALPHABET
            .iter()
            .copied()
            .filter(|&letter| !self.contains(letter))
            .collect()
    }
}

impl fmt::Display for GuessedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
