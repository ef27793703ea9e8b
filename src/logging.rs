//! Tracing subscriber setup for the binary

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// `RUST_LOG` overrides `level`, which must still parse. The terminal UI owns
/// the screen, so with `tui` set and no `log_file` nothing is installed.
///
/// # Errors
///
/// Fails on an unparsable level, an unwritable log file, or when a subscriber
/// is already installed.
pub fn init(level: &str, log_file: Option<&Path>, tui: bool) -> Result<()> {
    if tui && log_file.is_none() {
        return Ok(());
    }

    let fallback = EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level '{level}'"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(fallback);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_without_file_is_silent() {
        assert!(init("debug", None, true).is_ok());
    }

    #[test]
    fn bad_level_is_rejected() {
        let error = init("letterlock=loud", None, false).unwrap_err();
        assert!(error.to_string().contains("letterlock=loud"));
    }
}
