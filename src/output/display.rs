//! Display functions for command results and line-mode play

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, spaced, tiles_to_emoji};
use crate::commands::{ScoreReport, SimulationResult};
use crate::core::{Classification, letters_of};
use crate::engine::{ClassificationEvent, KeyboardView, LetterKnowledge, Source, TileView};
use crate::round::{RoundState, RoundStatus};
use colored::{ColoredString, Colorize};

/// Color one tile by its classification
#[must_use]
pub fn colored_tile(tile: TileView) -> ColoredString {
    let text = format!(" {} ", char::from(tile.letter));
    match tile.classification {
        Classification::Right => text.black().on_green().bold(),
        Classification::Wrong => text.bright_black().on_black(),
        Classification::Unknown => text.white().on_bright_black(),
    }
}

/// Print one guess row with its score
pub fn print_guess_row(turn: usize, tiles: &[TileView], score: usize) {
    let row: String = tiles.iter().map(|&t| colored_tile(t).to_string()).collect();
    println!(
        "  {:>2}. {row}  {}",
        turn.to_string().bright_black(),
        format!("{score} letters").bright_yellow()
    );
}

/// Print the keyboard, dimming letters that can no longer be typed
pub fn print_keyboard(keyboard: &KeyboardView, knowledge: &LetterKnowledge) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| {
                let key = char::from(letter).to_string();
                if !keyboard.is_selectable(letter) {
                    key.bright_black().strikethrough().to_string()
                } else if knowledge.get(letter) == Classification::Right {
                    key.green().bold().to_string()
                } else {
                    key.white().to_string()
                }
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print newly learned letters
pub fn print_events(events: &[ClassificationEvent]) {
    for event in events {
        let letter = char::from(event.letter).to_string();
        let letter = match event.classification {
            Classification::Right => letter.green().bold(),
            _ => letter.bright_black().bold(),
        };
        println!(
            "     {} {letter} is {} ({})",
            "→".cyan(),
            event.classification,
            event.source
        );
    }
}

/// Print the guess counter, or the result once the round is over
pub fn print_status(status: &RoundStatus<'_>) {
    match (status.state, status.secret) {
        (RoundState::Won, Some(secret)) => {
            let guesses = status.guesses;
            let text = format!("🎉 Solved in {guesses} guesses! The word was {secret}");
            println!("\n{}", text.green().bold());
        }
        (_, Some(secret)) => {
            let text = format!("❌ Round lost. The word was {secret}");
            println!("\n{}", text.red().bold());
        }
        _ => println!(
            "\nGuess {} of {}",
            (status.guesses + 1).to_string().bright_cyan().bold(),
            status.max_guesses
        ),
    }
}

/// Print the outcome of the score command
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}", report.secret.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let knowledge = report.board.knowledge();
    for (i, step) in report.steps.iter().enumerate() {
        let tiles = TileView::row(&step.guess, knowledge);
        println!();
        print_guess_row(i + 1, &tiles, step.score);
        print_events(&step.events);
    }

    let right = spaced(letters_of(knowledge.set_of(Classification::Right)));
    let wrong = spaced(letters_of(knowledge.set_of(Classification::Wrong)));
    println!("\n  Right: {}", right.green().bold());
    println!("  Wrong: {}", wrong.bright_black());

    if report.solved {
        let text = format!("✅ Solved in {} guesses", report.steps.len());
        println!("\n{}", text.green().bold());
    } else {
        let emoji: Vec<String> = report
            .steps
            .iter()
            .map(|s| tiles_to_emoji(&TileView::row(&s.guess, knowledge)))
            .collect();
        println!("\n  {}", emoji.join(" "));
    }
    let ignored = report.board.contradictions();
    if ignored > 0 {
        let text = format!("⚠ {ignored} contradictory deductions ignored");
        println!("{}", text.yellow());
    }
}

/// Print the outcome of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Player:           {}", result.player);
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow().bold()
    );
    println!("   Lost:             {}", result.lost.to_string().red());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n🔎 {}", "Deductions:".bright_cyan().bold());
    for source in [Source::Saturation, Source::CrossGuess, Source::Solved] {
        let count = result.deductions.get(&source).copied().unwrap_or(0);
        println!("   {:<12} {count}", source.to_string());
    }
    if result.contradictions > 0 {
        println!("   {:<12} {}", "conflicts", result.contradictions.to_string().yellow());
    }

    let mut counts: Vec<usize> = result.distribution.keys().copied().collect();
    counts.sort_unstable();
    if counts.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guesses in counts {
        let count = result.distribution[&guesses];
        let pct = (count as f64 / result.rounds as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
