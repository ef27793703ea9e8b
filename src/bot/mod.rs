//! Automated players for simulations

mod player;

pub use player::{InformedPlayer, Player, PlayerType, RandomPlayer, Turn};
