//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types: the alphabet, the secret word,
//! the guess history and the masked display derived from them.
//! All types here are pure and free of game rules.

pub mod alphabet;
mod guesses;
mod reveal;
mod word;

pub use alphabet::{ALPHABET, ALPHABET_LEN};
pub use guesses::{GuessError, GuessedLetters};
pub use reveal::{HIDDEN, RevealedDisplay};
pub use word::{SecretWord, WordError};
