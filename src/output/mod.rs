//! Terminal output formatting
//!
//! Display utilities for CLI results and line-mode play.

pub mod display;
pub mod formatters;

pub use display::{
    print_events, print_guess_row, print_keyboard, print_score_report, print_simulation_result,
    print_status,
};
