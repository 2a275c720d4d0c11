//! Permanent-disc estimation
//!
//! A disc is counted as permanent when, on each of the 4 axes, at least one
//! of its two rays reaches the board edge through discs of its own color
//! only. This is a conservative approximation: every disc it reports can
//! never be flipped, but some unflippable discs are missed.

use crate::board::{Board, Cell, Direction, Player, Pos};

/// Axis pairs: vertical, horizontal and both diagonals
const AXES: [(Direction, Direction); 4] = [
    (Direction::Up, Direction::Down),
    (Direction::Left, Direction::Right),
    (Direction::UpLeft, Direction::DownRight),
    (Direction::UpRight, Direction::DownLeft),
];

/// Whether the ray from `pos` in `dir` reaches the edge over `cell` only.
#[inline]
fn ray_is_solid(board: &Board, pos: Pos, dir: Direction, cell: Cell) -> bool {
    let mut cur = pos.step(dir);
    while let Some(p) = cur {
        if board.get(p) != cell {
            return false;
        }
        cur = p.step(dir);
    }
    true
}

/// Whether the disc at `pos` is anchored on all four axes.
pub fn is_permanent(board: &Board, pos: Pos) -> bool {
    let cell = board.get(pos);
    if cell == Cell::Empty {
        return false;
    }
    AXES.iter()
        .all(|&(a, b)| ray_is_solid(board, pos, a, cell) || ray_is_solid(board, pos, b, cell))
}

/// Number of `player` discs considered permanent.
pub fn count_permanent(board: &Board, player: Player) -> u32 {
    let cell = player.cell();
    Pos::all()
        .filter(|&pos| board.get(pos) == cell && is_permanent(board, pos))
        .count() as u32
}
