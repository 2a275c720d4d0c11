//! Evaluation module for Othello positions
//!
//! This module provides the static heuristics used at search leaves.
//! The evaluation considers:
//! - Positional weights (corners high, X-squares penalized)
//! - Disc parity
//! - Mobility (legal-move counts)
//! - Permanent discs

pub mod heuristic;
pub mod stability;
pub mod weights;

pub use heuristic::{evaluate, parity, weighted_difference, Heuristic};
pub use stability::{count_permanent, is_permanent};
pub use weights::{position_weight, POSITION_WEIGHTS, SMALL_POSITION_WEIGHTS};
