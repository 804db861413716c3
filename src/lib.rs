//! Hangman AI
//!
//! An automated guesser that deduces a secret word one letter at a time, combining a
//! random opening, a bisection-shaped positional scan and a frequency-driven endgame.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_ai::game::GameSession;
//! use hangman_ai::solver::{AdaptiveStrategy, Solver};
//!
//! let session = GameSession::from_input("hangman").unwrap();
//! let mut solver = Solver::seeded(AdaptiveStrategy::default(), 42);
//!
//! let (session, turn) = solver.take_turn(session).unwrap();
//! println!("guessed '{}' -> {}", turn.letter_char(), turn.display);
//! assert_eq!(session.guessed().len(), 1);
//! ```

// Core domain types
pub mod core;

// Game rules and session state
pub mod game;

// Letter selection algorithms
pub mod solver;

// Dictionary membership oracle
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
