//! Game rules
//!
//! The session state machine, the per-turn report and game errors.

mod error;
mod session;
mod turn;

pub use error::GameError;
pub use session::{GameOutcome, GameSession, MAX_ATTEMPTS};
pub use turn::TurnReport;
