//! Letterlock - CLI
//!
//! Letter-deduction word game with TUI and line modes, plus scoring and
//! simulation tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letterlock::{
    commands::{SimulateConfig, run_simple, run_simulation, score_guesses},
    config::GameConfig,
    core::Word,
    interactive::{App, run_tui},
    logging,
    output::{print_score_report, print_simulation_result},
    round::{Dictionary, RandomPicker, RoundController},
    wordlists::{
        ACCEPTED, SECRETS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "letterlock",
    about = "Letter-deduction word game: scores count shared letters, the board works out which",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,

    /// Guesses before the round is lost
    #[arg(short, long, global = true, default_value_t = 10)]
    max_guesses: usize,

    /// Secret word list file, one word per line (default: embedded)
    #[arg(long, global = true)]
    secrets: Option<PathBuf>,

    /// Accepted guess list file, one word per line (default: embedded)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Seed for reproducible secret picking
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Score guesses against a known secret and show what is deduced
    Score {
        /// The secret word
        secret: String,

        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Play many rounds with an automated player
    Simulate {
        /// Number of rounds
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,

        /// Player: informed (default) or random
        #[arg(short, long, default_value = "informed")]
        player: String,
    },
}

/// Load the secret and accepted lists from files or the embedded defaults
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let load = |path: Option<&PathBuf>, embedded: &[&str]| -> Result<Vec<Word>> {
        match path {
            Some(path) => load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display())),
            None => Ok(words_from_slice(embedded)),
        }
    };

    let secrets = load(cli.secrets.as_ref(), SECRETS)?;
    let accepted = load(cli.words.as_ref(), ACCEPTED)?;
    let dictionary = Dictionary::new(cli.length, secrets, accepted);

    tracing::debug!(
        secrets = dictionary.secrets().len(),
        accepted = dictionary.accepted_count(),
        "dictionary loaded"
    );
    Ok(dictionary)
}

fn game_config(cli: &Cli) -> GameConfig {
    GameConfig {
        word_length: cli.length,
        max_guesses: cli.max_guesses,
        ..GameConfig::default()
    }
}

fn picker(seed: Option<u64>) -> RandomPicker {
    seed.map_or_else(RandomPicker::new, RandomPicker::seeded)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);
    logging::init(&cli.log_level, cli.log_file.as_deref(), tui)?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { secret, guesses } => run_score_command(&secret, &guesses),
        Commands::Simulate { count, player } => run_simulate_command(&cli, count, player),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    let round = RoundController::new(game_config(cli), &dictionary, picker(cli.seed))?;
    run_tui(App::new(round))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    let round = RoundController::new(game_config(cli), &dictionary, picker(cli.seed))?;
    run_simple(round)
}

fn run_score_command(secret: &str, guesses: &[String]) -> Result<()> {
    let report = score_guesses(secret, guesses)?;
    print_score_report(&report);
    Ok(())
}

fn run_simulate_command(cli: &Cli, count: usize, player: String) -> Result<()> {
    let dictionary = load_dictionary(cli)?;
    let config = game_config(cli);
    config.validate()?;

    let options = SimulateConfig {
        rounds: count,
        player,
        seed: cli.seed.unwrap_or_else(rand::random),
        show_progress: true,
    };

    println!(
        "🎲 Simulating {count} rounds over {} secrets (seed {})...",
        dictionary.secrets().len(),
        options.seed
    );
    let result = run_simulation(&config, &dictionary, &options)?;
    print_simulation_result(&result);
    Ok(())
}
