//! Display functions for command results

use super::formatters::{attempts_meter, create_progress_bar, letter_list};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::game::{GameOutcome, MAX_ATTEMPTS, TurnReport};
use colored::Colorize;

/// Print the header shown before the AI starts guessing
pub fn print_game_intro(word_len: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        "HANGMAN".bright_yellow().bold(),
        format!("· {word_len} letters · {MAX_ATTEMPTS} lives").bright_black()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print one turn as it happens
pub fn print_turn(report: &TurnReport) {
    let verdict = if report.correct {
        "found a correct letter!".green()
    } else {
        "found a wrong letter!".red()
    };
    println!(
        "Turn {:>2}: AI guessed '{}' and {}",
        report.turn,
        report.letter_char().to_string().bright_white().bold(),
        verdict
    );
    println!(
        "         {}   {}   {}",
        report.display.to_string().bright_yellow(),
        attempts_meter(report.attempts_remaining),
        format!("{} hidden", report.display.hidden_count()).bright_black()
    );
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!();
    if !result.in_dictionary {
        println!("{}", "(not a dictionary word, played anyway)".bright_black());
    }
    if verbose {
        let letters: Vec<u8> = result.turns.iter().map(|t| t.letter).collect();
        println!("Guesses: {}", letter_list(&letters));
    }

    let summary = format!(
        "{} in {} turns, {} wrong",
        result.target.to_uppercase(),
        result.turns.len(),
        result.attempts_used
    );

    match result.outcome {
        GameOutcome::Won => println!(
            "{}",
            format!("✅ Victory is mine! {summary}").green().bold()
        ),
        GameOutcome::Lost => println!(
            "{}",
            format!("❌ You're a worthy opponent. {summary}").red().bold()
        ),
        GameOutcome::InProgress => println!("{summary}"),
    }
}

/// Print the result of a state analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DECISION ANALYSIS:".bright_cyan().bold(),
        result.display.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let pick = |letter: Option<u8>| {
        letter.map_or_else(|| "-".to_string(), |l| char::from(l).to_string())
    };

    println!("\n   Word:              {}", result.word);
    println!(
        "   Guessed:           {}",
        if result.guessed.is_empty() { "-" } else { result.guessed.as_str() }
    );
    println!(
        "   Wrong guesses:     {} ({})",
        result.attempts_used,
        attempts_meter(MAX_ATTEMPTS.saturating_sub(result.attempts_used))
    );
    println!("   Outcome:           {}", result.outcome);
    println!("   Unknown letters:   {}", result.remaining_unknown);
    println!("   Tier:              {}", result.tier.name().bright_yellow());

    println!("\n🔎 {}", "Tactics:".bright_cyan().bold());
    println!("   Positional search: {}", pick(result.positional_pick));
    println!("   Endgame solver:    {}", pick(result.endgame_pick));
    println!(
        "   Choice:            {} {}",
        pick(result.choice).bright_green().bold(),
        format!("({})", result.strategy).bright_black()
    );

    println!("\n📊 {}", "Most frequent candidates:".bright_cyan().bold());
    let top = result.ranked.first().map_or(1.0, |(_, score)| *score);
    for (letter, score) in &result.ranked {
        let bar = create_progress_bar(*score, top, 20);
        println!(
            "   {}  {} {:.5}",
            char::from(*letter),
            bar.green(),
            score
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Won / lost:       {} / {}", result.won, result.lost);
    println!("   Avg wrong:        {:.2}", result.average_attempts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    for attempts in 0..=MAX_ATTEMPTS {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {attempts}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Lost words:".bright_cyan().bold());
        for word in result.lost_words.iter().take(20) {
            println!("   • {}", word.to_uppercase());
        }
        if result.lost_words.len() > 20 {
            println!("   … and {} more", result.lost_words.len() - 20);
        }
    }
}
