//! Letterlock
//!
//! A letter-deduction word game. Each guess is scored by how many of its letters
//! appear in a hidden word; the engine works out which letters those are from the
//! scores alone and locks the keyboard accordingly.
//!
//! # Quick Start
//!
//! ```rust
//! use letterlock::core::{Classification, Word, score};
//! use letterlock::engine::Board;
//!
//! let secret = Word::new("taro").unwrap();
//! let mut board = Board::new(4);
//!
//! for text in ["rant", "rans"] {
//!     let guess = Word::new(text).unwrap();
//!     let guess_score = score(&guess, &secret);
//!     board.record_guess(guess, guess_score);
//! }
//!
//! assert_eq!(board.knowledge().get(b'T'), Classification::Right);
//! assert_eq!(board.knowledge().get(b'S'), Classification::Wrong);
//! ```

// Core domain types
pub mod core;

// Letter inference
pub mod engine;

// Round state machine
pub mod round;

// Input boundary
pub mod session;

pub mod config;
pub mod logging;

// Word lists
pub mod wordlists;

// Automated players
pub mod bot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
