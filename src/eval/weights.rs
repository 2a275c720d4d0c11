//! Positional weight tables for Othello evaluation
//!
//! Both tables share the same shape: corners are the most valuable squares,
//! the X-squares diagonally adjacent to corners carry the heaviest penalty,
//! and the edges are worth more than the centre.

use crate::board::{Board, Cell, Pos, TOTAL_CELLS};

/// Main table, used by the raw weighted sum, the weighted ratio and move
/// ordering.
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [i32; TOTAL_CELLS] = [
    120, -20,  20,   5,   5,  20, -20, 120,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
     20,  -5,  15,   3,   3,  15,  -5,  20,
      5,  -5,   3,   3,   3,   3,  -5,   5,
      5,  -5,   3,   3,   3,   3,  -5,   5,
     20,  -5,  15,   3,   3,  15,  -5,  20,
    -20, -40,  -5,  -5,  -5,  -5, -40, -20,
    120, -20,  20,   5,   5,  20, -20, 120,
];

/// Smaller-magnitude variant used by the combined heuristics.
#[rustfmt::skip]
pub const SMALL_POSITION_WEIGHTS: [i32; TOTAL_CELLS] = [
     4, -3,  2,  2,  2,  2, -3,  4,
    -3, -4, -1, -1, -1, -1, -4, -3,
     2, -1,  1,  0,  0,  1, -1,  2,
     2, -1,  0,  1,  1,  0, -1,  2,
     2, -1,  0,  1,  1,  0, -1,  2,
     2, -1,  1,  0,  0,  1, -1,  2,
    -3, -4, -1, -1, -1, -1, -4, -3,
     4, -3,  2,  2,  2,  2, -3,  4,
];

/// Weight of a single square in the main table.
#[inline]
pub fn position_weight(pos: Pos) -> i32 {
    POSITION_WEIGHTS[pos.to_index()]
}

/// Sum of `weights` over every cell holding `cell`.
#[inline]
pub fn weighted_sum(board: &Board, cell: Cell, weights: &[i32; TOTAL_CELLS]) -> i32 {
    board
        .cells()
        .iter()
        .zip(weights.iter())
        .filter(|(&c, _)| c == cell)
        .map(|(_, &w)| w)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn assert_symmetric(table: &[i32; TOTAL_CELLS]) {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let w = table[x + y * BOARD_SIZE];
                assert_eq!(w, table[(BOARD_SIZE - 1 - x) + y * BOARD_SIZE]);
                assert_eq!(w, table[x + (BOARD_SIZE - 1 - y) * BOARD_SIZE]);
                assert_eq!(w, table[y + x * BOARD_SIZE]);
            }
        }
    }

    #[test]
    fn test_tables_are_symmetric() {
        assert_symmetric(&POSITION_WEIGHTS);
        assert_symmetric(&SMALL_POSITION_WEIGHTS);
    }

    #[test]
    fn test_corner_high_x_square_low() {
        for table in [&POSITION_WEIGHTS, &SMALL_POSITION_WEIGHTS] {
            let max = *table.iter().max().unwrap();
            let min = *table.iter().min().unwrap();
            assert_eq!(table[0], max);
            assert_eq!(table[9], min);
        }
        assert_eq!(position_weight(Pos::new(7, 7)), 120);
        assert_eq!(position_weight(Pos::new(1, 1)), -40);
    }

    #[test]
    fn test_weighted_sum() {
        let board = Board::initial();
        assert_eq!(weighted_sum(&board, Cell::Black, &POSITION_WEIGHTS), 6);
        assert_eq!(weighted_sum(&board, Cell::White, &SMALL_POSITION_WEIGHTS), 2);
        assert_eq!(weighted_sum(&Board::new(), Cell::Black, &POSITION_WEIGHTS), 0);
    }
}
