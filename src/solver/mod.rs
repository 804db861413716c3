//! Letter selection algorithms
//!
//! This module contains the frequency model, the three selection tactics and
//! the strategies that combine them.

pub mod adaptive;
pub mod endgame;
mod engine;
pub mod frequency;
pub mod positional;
pub mod scorer;
pub mod strategy;

pub use adaptive::{AdaptiveStrategy, Tier};
pub use endgame::EndgameSolver;
pub use engine::Solver;
pub use frequency::FrequencyTable;
pub use positional::positional_search;
pub use scorer::LetterScorer;
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
