//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_state};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use solve::{SolveConfig, SolveResult, solve_word};
