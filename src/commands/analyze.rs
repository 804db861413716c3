//! State analysis command
//!
//! Explains what each tactic would pick for a given word and guess history.

use crate::core::{GuessedLetters, SecretWord};
use crate::game::{GameOutcome, GameSession};
use crate::solver::{
    AdaptiveStrategy, EndgameSolver, LetterScorer, Strategy, StrategyType, Tier,
    positional_search,
};
use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How many candidates the frequency ranking keeps
const TOP_CANDIDATES: usize = 8;

/// Result of analyzing a game state
pub struct AnalysisResult {
    pub word: String,
    pub guessed: String,
    pub display: String,
    pub attempts_used: usize,
    pub outcome: GameOutcome,
    pub remaining_unknown: usize,
    pub tier: Tier,
    pub positional_pick: Option<u8>,
    pub endgame_pick: Option<u8>,
    /// Best candidates by frequency, most frequent first
    pub ranked: Vec<(u8, f64)>,
    /// Name of the strategy that made `choice`
    pub strategy: &'static str,
    /// What the selected strategy actually plays
    pub choice: Option<u8>,
}

/// Analyze the decision for `word` after the letters in `guessed`
///
/// The letters are replayed in order through a real session, so a history that
/// repeats a letter or runs past the end of the game is rejected. The tier and
/// tactic breakdown always come from the adaptive tiers; `choice` comes from
/// `strategy`.
///
/// # Errors
///
/// Returns an error if:
/// - The word is empty or not purely alphabetic
/// - `guessed` contains a non-letter or a repeated letter
/// - The game is already over before the last guessed letter
pub fn analyze_state(
    word: &str,
    guessed: &str,
    strategy: &StrategyType,
    seed: u64,
) -> Result<AnalysisResult> {
    let secret = SecretWord::new(word).with_context(|| format!("Invalid word '{word}'"))?;
    let history =
        GuessedLetters::parse(guessed).with_context(|| format!("Invalid guesses '{guessed}'"))?;

    let mut session = GameSession::new(secret);
    for &letter in history.as_slice() {
        if session.outcome().is_terminal() {
            bail!(
                "Game already {} before '{}' was guessed",
                session.outcome(),
                char::from(letter)
            );
        }
        session.apply_guess(letter)?;
    }

    let secret = session.word();
    let candidates = history.candidates();
    let scorer = LetterScorer::default();

    let mut ranked = scorer.rank(&candidates);
    ranked.truncate(TOP_CANDIDATES);

    let default_tiers = AdaptiveStrategy::default();
    let tiers = match strategy {
        StrategyType::Adaptive(adaptive) => adaptive,
        _ => &default_tiers,
    };
    let mut rng = StdRng::seed_from_u64(seed);

    Ok(AnalysisResult {
        word: secret.text().to_string(),
        guessed: history.to_string(),
        display: session.display().to_string(),
        attempts_used: session.attempts(),
        outcome: session.outcome(),
        remaining_unknown: AdaptiveStrategy::remaining_unknown(secret, &history),
        tier: tiers.tier(secret, &history),
        positional_pick: positional_search(secret, &history, &candidates),
        endgame_pick: EndgameSolver::new(scorer).solve(secret, &history),
        ranked,
        strategy: strategy.name(),
        choice: strategy.select_letter(secret, &history, &mut rng),
    })
}
