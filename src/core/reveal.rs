//! Masked view of the secret word

use super::{GuessedLetters, SecretWord};
use std::fmt;

/// Placeholder shown for letters that are still hidden
pub const HIDDEN: char = '_';

/// The secret word with every unguessed position masked
///
/// A pure function of the word and the guesses; rebuilt rather than mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedDisplay {
    cells: Vec<Option<u8>>,
}

impl RevealedDisplay {
    /// Build the display for a word and a guess history
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::core::{GuessedLetters, RevealedDisplay, SecretWord};
    ///
    /// let word = SecretWord::new("cat").unwrap();
    /// let guessed = GuessedLetters::parse("a").unwrap();
    /// assert_eq!(RevealedDisplay::new(&word, &guessed).to_string(), "_ a _");
    /// ```
    #[must_use]
    pub fn new(word: &SecretWord, guessed: &GuessedLetters) -> Self {
        let mut cells = vec![None; word.len()];
        for &letter in guessed.as_slice() {
            for &i in word.positions_of(letter) {
                cells[i] = Some(letter);
            }
        }
        Self { cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    /// Number of positions still masked
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// True when every position is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl fmt::Display for RevealedDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match cell {
                Some(ch) => write!(f, "{}", char::from(*ch))?,
                None => write!(f, "{HIDDEN}")?,
            }
        }
        Ok(())
    }
}
