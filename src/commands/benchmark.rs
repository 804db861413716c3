//! Benchmark command
//!
//! Plays the AI against many words in parallel and aggregates the results.

use crate::core::SecretWord;
use crate::game::{GameError, GameOutcome, GameSession};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Only the first `limit` words are played
    pub limit: Option<usize>,
    /// Game `i` is seeded with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            seed: 0,
            show_progress: false,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    /// Mean incorrect guesses per game
    pub average_attempts: f64,
    /// Incorrect guesses used → number of games
    pub distribution: HashMap<usize, usize>,
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

struct GameRecord {
    word: String,
    outcome: GameOutcome,
    attempts: usize,
}

/// Run benchmark on a set of target words
///
/// # Errors
///
/// Returns `GameError` if a strategy fails to produce a letter mid-game.
pub fn run_benchmark<S>(
    strategy: &S,
    target_words: &[SecretWord],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, GameError>
where
    S: Strategy + Clone + Sync,
{
    let count = config
        .limit
        .map_or(target_words.len(), |limit| limit.min(target_words.len()));
    let words = &target_words[..count];

    let pb = if config.show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records = words
        .par_iter()
        .enumerate()
        .map(|(i, word)| -> Result<GameRecord, GameError> {
            let mut solver = Solver::seeded(strategy.clone(), config.seed.wrapping_add(i as u64));
            let finished = solver.play(GameSession::new(word.clone()), |_| {})?;
            pb.inc(1);
            Ok(GameRecord {
                word: word.text().to_string(),
                outcome: finished.outcome(),
                attempts: finished.attempts(),
            })
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_words = records.len();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut lost_words = Vec::new();
    let mut total_attempts = 0;

    for record in &records {
        total_attempts += record.attempts;
        *distribution.entry(record.attempts).or_insert(0) += 1;
        if record.outcome == GameOutcome::Lost {
            lost_words.push(record.word.clone());
        }
    }

    let lost = lost_words.len();
    let won = total_words - lost;
    let ratio = |n: usize| {
        if total_words == 0 {
            0.0
        } else {
            n as f64 / total_words as f64
        }
    };

    info!(total_words, won, lost, "benchmark finished");

    Ok(BenchmarkResult {
        total_words,
        won,
        lost,
        win_rate: ratio(won),
        average_attempts: ratio(total_attempts),
        distribution,
        lost_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ATTEMPTS;
    use crate::solver::{AdaptiveStrategy, RandomStrategy, StrategyType};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(&WORDS[..20]);
        let result =
            run_benchmark(&AdaptiveStrategy::default(), &words, &BenchmarkConfig::new()).unwrap();

        assert_eq!(result.total_words, 20);
        assert_eq!(result.won + result.lost, 20);
        assert_eq!(result.lost_words.len(), result.lost);
        assert!((0.0..=1.0).contains(&result.win_rate));
        assert!(result.average_attempts <= MAX_ATTEMPTS as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let words = words_from_slice(&WORDS[..30]);
        let result = run_benchmark(&StrategyType::default(), &words, &BenchmarkConfig::new())
            .unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        assert!(result.distribution.keys().all(|&k| k <= MAX_ATTEMPTS));
    }

    #[test]
    fn benchmark_respects_limit() {
        let words = words_from_slice(&WORDS[..30]);
        let mut config = BenchmarkConfig::new();
        config.limit = Some(5);

        let result = run_benchmark(&RandomStrategy, &words, &config).unwrap();
        assert_eq!(result.total_words, 5);
    }

    #[test]
    fn benchmark_is_deterministic_per_seed() {
        let words = words_from_slice(&WORDS[..40]);
        let mut config = BenchmarkConfig::new();
        config.seed = 1234;

        let a = run_benchmark(&AdaptiveStrategy::default(), &words, &config).unwrap();
        let b = run_benchmark(&AdaptiveStrategy::default(), &words, &config).unwrap();

        assert_eq!(a.lost_words, b.lost_words);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result =
            run_benchmark(&AdaptiveStrategy::default(), &[], &BenchmarkConfig::new()).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.won, 0);
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }
}
