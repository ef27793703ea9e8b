//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI. Each line is typed through the same input
//! boundary as the on-screen keyboard.

use crate::output::{print_events, print_guess_row, print_keyboard, print_status};
use crate::round::{RoundController, SecretPicker};
use crate::session::{Command, InputOutcome, Session};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<P: SecretPicker>(round: RoundController<'_, P>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Letterlock - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word. Each guess scores how many of its letters",
        round.word_length()
    );
    println!("appear in the secret; the board works out which letters those are.\n");
    println!("Commands: 'give up' to reveal the word, 'new' for a new word, 'quit' to exit\n");

    let mut session = Session::new(round);
    let mut played = 0_usize;
    let mut won = 0_usize;

    loop {
        draw(&session);

        if session.round().state().is_finished() {
            played += 1;
            if session.round().status().state == crate::round::RoundState::Won {
                won += 1;
            }
            println!("  {}", format!("Won {won} of {played}").bright_black());

            let answer = get_user_input("Play again? (yes/no)")?;
            if !(wants_another(&answer) && start_next(&mut session)) {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            continue;
        }

        let input = get_user_input("Guess")?.to_lowercase();
        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "give up" | "giveup" => {
                session.handle(Command::GiveUp, Instant::now());
            }
            "new" => {
                session.handle(Command::GiveUp, Instant::now());
                draw(&session);
                played += 1;
                if !start_next(&mut session) {
                    return Ok(());
                }
            }
            _ => type_line(&mut session, &input),
        }
    }
}

fn draw<P: SecretPicker>(session: &Session<'_, P>) {
    let round = session.round();
    println!("{}", "─".repeat(60).cyan());
    for record in round.records() {
        print_guess_row(
            record.index() + 1,
            &record.tiles(round.knowledge()),
            record.score(),
        );
    }
    println!();
    print_keyboard(&round.keyboard(), round.knowledge());
    print_status(&round.status());
}

fn start_next<P: SecretPicker>(session: &mut Session<'_, P>) -> bool {
    match session.handle(Command::Continue, Instant::now()) {
        InputOutcome::ContinueFailed(error) => {
            println!("{}", format!("❌ {error}").red());
            false
        }
        _ => {
            println!("\n🔄 New word chosen!\n");
            true
        }
    }
}

fn type_line<P: SecretPicker>(session: &mut Session<'_, P>, line: &str) {
    let now = Instant::now();

    for c in line.trim().chars() {
        if let InputOutcome::LetterRejected(reason) = session.handle(Command::Letter(c), now) {
            let shown = c.to_ascii_uppercase();
            println!("{}", format!("❌ '{shown}': {reason}").red());
            session.clear_input();
            return;
        }
    }

    if !session.buffer().is_full() {
        let message = &session.round().config().messages.incomplete_word;
        println!("{}", format!("❌ {message}").red());
        session.clear_input();
        return;
    }

    match session.handle(Command::Submit, now) {
        InputOutcome::Played(submission) => {
            if !submission.is_win() {
                println!(
                    "\n  {} scores {}",
                    submission.word.text().bright_white().bold(),
                    submission.score.to_string().bright_yellow().bold()
                );
            }
            print_events(&submission.events);
        }
        InputOutcome::Rejected(_) => {
            if let Some(message) = session.notice().current(now) {
                println!("{}", format!("❌ {message}").red());
            }
            session.clear_input();
        }
        _ => {}
    }
}

/// Whether an answer to "Play again?" means yes
fn wants_another(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "yes" | "y" | "new")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_again_answers() {
        for yes in ["yes", "Y", "new"] {
            assert!(wants_another(yes), "{yes}");
        }
        for no in ["no", "n", "N", "quit", ""] {
            assert!(!wants_another(no), "{no}");
        }
    }
}
