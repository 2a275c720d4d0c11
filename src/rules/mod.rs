//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Line-end lookup and move legality
//! - Legal move enumeration
//! - Disc flipping
//! - End of game and scoring

pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use moves::{any_valid_move, apply_move, find_line_ending, find_valid_moves, is_valid_move};
pub use outcome::{disc_counts, is_game_over, outcome, Outcome};
