//! End-of-game detection and scoring

use crate::board::{Board, Player};

use super::moves::any_valid_move;

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// The game is over once neither side can move.
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    !any_valid_move(board, Player::Black) && !any_valid_move(board, Player::White)
}

/// Disc counts as `(black, white)`
#[inline]
pub fn disc_counts(board: &Board) -> (u32, u32) {
    (board.count(Player::Black), board.count(Player::White))
}

/// Outcome by disc majority. Only meaningful once [`is_game_over`] holds,
/// but computed for any board.
pub fn outcome(board: &Board) -> Outcome {
    let (black, white) = disc_counts(board);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
        std::cmp::Ordering::Less => Outcome::Winner(Player::White),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
