//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreReport, ScoreStep, score_guesses};
pub use simple::run_simple;
pub use simulate::{RoundOutcome, SimulateConfig, SimulationResult, play_round, run_simulation};
