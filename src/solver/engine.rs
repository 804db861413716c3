//! Main Hangman solver interface

use super::strategy::Strategy;
use crate::game::{GameError, GameSession, TurnReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Main Hangman solver
///
/// Couples a strategy with the random source it draws from. The session is
/// passed in and handed back on every turn; the solver holds no game state.
pub struct Solver<S: Strategy, R: Rng> {
    strategy: S,
    rng: R,
}

impl<S: Strategy> Solver<S, StdRng> {
    /// Create a solver with a fixed seed, for reproducible games
    #[must_use]
    pub fn seeded(strategy: S, seed: u64) -> Self {
        Self::new(strategy, StdRng::seed_from_u64(seed))
    }

    /// Create a solver seeded from the operating system
    #[must_use]
    pub fn from_os_rng(strategy: S) -> Self {
        Self::new(strategy, StdRng::from_os_rng())
    }
}

impl<S: Strategy, R: Rng> Solver<S, R> {
    /// Create a new solver with the given strategy and random source
    #[must_use]
    pub const fn new(strategy: S, rng: R) -> Self {
        Self { strategy, rng }
    }

    /// Choose the next letter for a session without applying it
    ///
    /// # Errors
    /// - `GameError::GameOver` if the session already ended
    /// - `GameError::ExhaustedCandidates` if the strategy has no letter left to offer
    pub fn next_letter(&mut self, session: &GameSession) -> Result<u8, GameError> {
        let outcome = session.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver(outcome));
        }

        self.strategy
            .select_letter(session.word(), session.guessed(), &mut self.rng)
            .ok_or(GameError::ExhaustedCandidates)
    }

    /// Play exactly one turn
    ///
    /// Takes the session by value and returns the updated session with a report
    /// of the turn, so callers can pace turns however they like.
    ///
    /// # Errors
    /// Same as [`Solver::next_letter`]; the session is dropped in that case, which
    /// only happens when it was already over.
    #[instrument(level = "debug", skip_all, fields(turn = session.guessed().len() + 1))]
    pub fn take_turn(
        &mut self,
        mut session: GameSession,
    ) -> Result<(GameSession, TurnReport), GameError> {
        let letter = self.next_letter(&session)?;
        let correct = session.apply_guess(letter)?;
        let report = TurnReport::capture(&session, letter, correct);

        debug!(
            letter = %report.letter_char(),
            correct,
            display = %report.display,
            attempts = report.attempts_used,
            "turn played"
        );

        Ok((session, report))
    }

    /// Play turns until the session is won or lost
    ///
    /// `sink` receives every turn report as it happens.
    ///
    /// # Errors
    /// Returns `GameError` if the session was already over on entry.
    ///
    /// # Examples
    /// ```
    /// use hangman_ai::game::{GameOutcome, GameSession};
    /// use hangman_ai::solver::{AdaptiveStrategy, Solver};
    ///
    /// let mut solver = Solver::seeded(AdaptiveStrategy::default(), 7);
    /// let session = GameSession::from_input("cat").unwrap();
    ///
    /// let mut turns = 0;
    /// let finished = solver.play(session, |_| turns += 1).unwrap();
    ///
    /// assert_ne!(finished.outcome(), GameOutcome::InProgress);
    /// assert_eq!(turns, finished.guessed().len());
    /// ```
    pub fn play<F>(&mut self, mut session: GameSession, mut sink: F) -> Result<GameSession, GameError>
    where
        F: FnMut(&TurnReport),
    {
        loop {
            let (next, report) = self.take_turn(session)?;
            sink(&report);
            session = next;
            if report.outcome.is_terminal() {
                return Ok(session);
            }
        }
    }
}
