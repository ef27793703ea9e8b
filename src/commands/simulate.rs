//! Simulate command
//!
//! Plays many rounds with an automated player, in parallel, and aggregates the
//! outcomes.

use crate::bot::{Player, PlayerType, Turn};
use crate::config::GameConfig;
use crate::engine::Source;
use crate::round::{Dictionary, RandomPicker, RoundController, RoundError, RoundState};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Options for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub rounds: usize,
    /// Player name, see [`PlayerType::from_name`]
    pub player: String,
    /// Round `i` uses `seed + i` for both secret and guesses
    pub seed: u64,
    pub show_progress: bool,
}

/// Outcome of one simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    pub guesses: usize,
    pub deductions: FxHashMap<Source, usize>,
    pub contradictions: usize,
}

/// Aggregate over every simulated round
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub player: &'static str,
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    /// Guesses per won round
    pub average_guesses: f64,
    pub distribution: FxHashMap<usize, usize>,
    pub deductions: FxHashMap<Source, usize>,
    pub contradictions: usize,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64
        }
    }
}

/// Play a single round to completion
///
/// The player gives up when it runs out of typeable words.
///
/// # Errors
///
/// Returns a `RoundError` if the round cannot start.
pub fn play_round(
    config: &GameConfig,
    dictionary: &Dictionary,
    player: &mut impl Player,
    seed: u64,
) -> Result<RoundOutcome, RoundError> {
    let mut round = RoundController::new(config.clone(), dictionary, RandomPicker::seeded(seed))?;
    let mut deductions: FxHashMap<Source, usize> = FxHashMap::default();

    while !round.state().is_finished() {
        let guess = player
            .choose(dictionary.guessable(), &Turn::of(&round))
            .cloned();
        let Some(guess) = guess else {
            round.give_up();
            break;
        };

        match round.submit(guess.text()) {
            Ok(submission) => {
                for event in &submission.events {
                    *deductions.entry(event.source).or_insert(0) += 1;
                }
            }
            Err(error) => {
                tracing::warn!(guess = %guess, %error, "player guess rejected");
                round.give_up();
            }
        }
    }

    Ok(RoundOutcome {
        won: round.state() == RoundState::Won,
        guesses: round.guess_count(),
        deductions,
        contradictions: round.board().contradictions(),
    })
}

/// Run the configured number of rounds across the rayon pool
///
/// # Errors
///
/// Returns an error if any round cannot start or the progress template is invalid.
pub fn run_simulation(
    config: &GameConfig,
    dictionary: &Dictionary,
    options: &SimulateConfig,
) -> Result<SimulationResult> {
    let pb = if options.show_progress {
        let pb = ProgressBar::new(options.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes = (0..options.rounds)
        .into_par_iter()
        .map(|i| {
            let seed = options.seed.wrapping_add(i as u64);
            let mut player = PlayerType::from_name(&options.player, seed);
            let outcome = play_round(config, dictionary, &mut player, seed);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    let player = PlayerType::from_name(&options.player, 0).name();
    Ok(aggregate(player, &outcomes, start.elapsed()))
}

fn aggregate(
    player: &'static str,
    outcomes: &[RoundOutcome],
    duration: Duration,
) -> SimulationResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut deductions: FxHashMap<Source, usize> = FxHashMap::default();

    for outcome in outcomes {
        if outcome.won {
            *distribution.entry(outcome.guesses).or_insert(0) += 1;
        }
        for (&source, &count) in &outcome.deductions {
            *deductions.entry(source).or_insert(0) += count;
        }
    }

    let won = outcomes.iter().filter(|o| o.won).count();
    let won_guesses: usize = outcomes.iter().filter(|o| o.won).map(|o| o.guesses).sum();
    let average_guesses = if won > 0 {
        won_guesses as f64 / won as f64
    } else {
        0.0
    };

    SimulationResult {
        player,
        rounds: outcomes.len(),
        won,
        lost: outcomes.len() - won,
        average_guesses,
        distribution,
        deductions,
        contradictions: outcomes.iter().map(|o| o.contradictions).sum(),
        duration,
    }
}
