//! Terminal output formatting
//!
//! The presentation sink: renders turns and command results for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_game_intro, print_solve_result,
    print_turn,
};
