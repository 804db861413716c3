//! Hangman AI - CLI
//!
//! Give the AI a secret word and watch it guess, benchmark it over a word list,
//! or inspect a single decision.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_ai::{
    commands::{BenchmarkConfig, SolveConfig, analyze_state, run_benchmark, solve_word},
    core::SecretWord,
    dictionary::{AcceptAll, Dictionary, WordSet},
    output::{
        print_analysis_result, print_benchmark_result, print_game_intro, print_solve_result,
        print_turn,
    },
    solver::StrategyType,
    wordlists::{WORDS, loader::words_from_slice},
};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman_ai",
    about = "Hangman AI that deduces your word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: adaptive (default), frequency, random
    #[arg(short, long, global = true, default_value = "adaptive")]
    strategy: String,

    /// Wordlist: 'builtin' (default), 'none' to accept any word, or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for the random opening guess (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show debug logs and extra detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the AI guess a secret word
    Solve {
        /// The secret word
        word: String,

        /// Pause between guesses in milliseconds
        #[arg(short, long, default_value = "0")]
        delay_ms: u64,
    },

    /// Play the AI against every word in the word list
    Benchmark {
        /// Number of words to play (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Explain the AI's decision for a word and guess history
    ///
    /// The tier breakdown follows the adaptive strategy; the final choice uses --strategy.
    Analyze {
        /// The secret word
        word: String,

        /// Letters already guessed, in order
        #[arg(short, long, default_value = "")]
        guessed: String,
    },
}

/// Load the word list named by the -w flag
///
/// Returns `None` for 'none'.
fn load_wordlist(wordlist_mode: &str) -> Result<Option<Vec<SecretWord>>> {
    use hangman_ai::wordlists::loader::load_from_file;

    match wordlist_mode {
        "builtin" => Ok(Some(words_from_slice(WORDS))),
        "none" => Ok(None),
        path => load_from_file(path)
            .with_context(|| format!("Failed to read word list '{path}'"))
            .map(Some),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let words = load_wordlist(&cli.wordlist)?;
    if let Some(words) = &words {
        info!(count = words.len(), source = %cli.wordlist, "word list loaded");
    }

    match cli.command {
        Commands::Solve { word, delay_ms } => {
            let strategy = StrategyType::from_name(&cli.strategy);
            let dictionary: Box<dyn Dictionary> = match &words {
                Some(words) => Box::new(WordSet::from_words(words)),
                None => Box::new(AcceptAll),
            };
            run_solve_command(
                word,
                strategy,
                dictionary.as_ref(),
                cli.seed,
                delay_ms,
                cli.verbose,
            )
        }
        Commands::Benchmark { count } => {
            let words = words.unwrap_or_else(|| words_from_slice(WORDS));
            run_benchmark_command(&cli.strategy, &words, count, cli.seed)
        }
        Commands::Analyze { word, guessed } => {
            run_analyze_command(&cli.strategy, &word, &guessed, cli.seed.unwrap_or(0))
        }
    }
}

fn run_solve_command(
    word: String,
    strategy: StrategyType,
    dictionary: &dyn Dictionary,
    seed: Option<u64>,
    delay_ms: u64,
    verbose: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(word);
    config.seed = seed;
    config.delay = Duration::from_millis(delay_ms);

    let result = solve_word(&config, strategy, dictionary, |report| {
        if report.turn == 1 {
            print_game_intro(report.display.cells().len());
        }
        print_turn(report);
    })?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    words: &[SecretWord],
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);

    let mut config = BenchmarkConfig::new();
    config.limit = count;
    config.seed = seed.unwrap_or(0);
    config.show_progress = true;

    println!(
        "Running {} strategy on {} words...",
        strategy.name(),
        count.map_or(words.len(), |n| n.min(words.len()))
    );

    let result = run_benchmark(&strategy, words, &config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_analyze_command(strategy_name: &str, word: &str, guessed: &str, seed: u64) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let result = analyze_state(word, guessed, &strategy, seed)?;
    print_analysis_result(&result);
    Ok(())
}
