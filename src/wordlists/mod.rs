//! Word lists for Hangman
//!
//! Provides an embedded English word list compiled into the binary, used as the
//! built-in dictionary and as the benchmark corpus.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
