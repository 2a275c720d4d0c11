//! Move legality and disc flipping
//!
//! A placement is legal when, in at least one of the 8 directions, it
//! brackets a contiguous run of opponent discs against one of the mover's
//! own discs (the "line end").

use crate::board::{Board, Direction, Player, Pos};

/// Find the line end for `player` placing at `pos` in direction `dir`.
///
/// The adjacent cell must hold an opponent disc; the walk then continues
/// over opponent discs until it reaches one of the player's own discs
/// (returned), an empty cell or the edge (no result). The query position is
/// assumed empty; a non-empty query yields `None`.
pub fn find_line_ending(board: &Board, player: Player, pos: Pos, dir: Direction) -> Option<Pos> {
    if !board.is_empty(pos) {
        return None;
    }

    let own = player.cell();
    let opponent = player.opponent().cell();

    let mut cur = pos.step(dir)?;
    if board.get(cur) != opponent {
        return None;
    }

    loop {
        cur = cur.step(dir)?;
        let cell = board.get(cur);
        if cell == own {
            return Some(cur);
        }
        if cell != opponent {
            return None;
        }
    }
}

/// Check if `pos` is a legal move for `player`.
#[inline]
pub fn is_valid_move(board: &Board, player: Player, pos: Pos) -> bool {
    board.is_empty(pos)
        && Direction::ALL
            .iter()
            .any(|&dir| find_line_ending(board, player, pos, dir).is_some())
}

/// All legal moves for `player` in row-major scan order.
pub fn find_valid_moves(board: &Board, player: Player) -> Vec<Pos> {
    Pos::all()
        .filter(|&pos| is_valid_move(board, player, pos))
        .collect()
}

/// Whether `player` has any legal move. Stops at the first one found.
#[inline]
pub fn any_valid_move(board: &Board, player: Player) -> bool {
    Pos::all().any(|pos| is_valid_move(board, player, pos))
}

/// Place a disc for `player` at `pos` and flip every bracketed run.
///
/// Legality is not re-checked. If no direction brackets anything the board
/// is left untouched, including the target cell, and 0 is returned.
///
/// # Returns
/// Number of discs flipped
pub fn apply_move(board: &mut Board, player: Player, pos: Pos) -> u32 {
    // Line ends are probed against the untouched board: the probe needs the
    // target cell empty, so it is only filled after flipping.
    let mut ends = [None; 8];
    for (slot, &dir) in ends.iter_mut().zip(Direction::ALL.iter()) {
        *slot = find_line_ending(board, player, pos, dir).map(|end| (dir, end));
    }

    let own = player.cell();
    let mut flipped = 0;
    let mut flipped_any = false;

    for (dir, end) in ends.into_iter().flatten() {
        flipped_any = true;
        let mut cur = pos.step(dir);
        while let Some(p) = cur {
            if p == end {
                break;
            }
            board.set(p, own);
            flipped += 1;
            cur = p.step(dir);
        }
    }

    if flipped_any {
        board.set(pos, own);
    }

    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, TOTAL_CELLS};

    const MIDGAME: &str = "..................WBBW....WBWB....WBB.....WWWW.....BW.....WB.W..";

    fn midgame() -> Board {
        MIDGAME.parse().unwrap()
    }

    #[test]
    fn test_invalid_move_on_sparse_board() {
        let board: Board = "..........W.......W.BW....WWBB....WWW.....WB.W.................."
            .parse()
            .unwrap();
        assert!(!is_valid_move(&board, Player::Black, Pos::new(1, 0)));
    }

    #[test]
    fn test_line_ending_requires_adjacent_opponent() {
        let board = Board::initial();
        // (2,3) -> right: W at (3,3), then B at (4,3)
        assert_eq!(
            find_line_ending(&board, Player::Black, Pos::new(2, 3), Direction::Right),
            Some(Pos::new(4, 3))
        );
        // Adjacent cell is empty
        assert_eq!(
            find_line_ending(&board, Player::Black, Pos::new(2, 3), Direction::Left),
            None
        );
        // Adjacent cell is own disc
        assert_eq!(
            find_line_ending(&board, Player::Black, Pos::new(5, 3), Direction::Left),
            None
        );
    }

    #[test]
    fn test_line_ending_stops_at_empty_and_edge() {
        let mut board = Board::new();
        board.set(Pos::new(1, 0), Cell::White);
        board.set(Pos::new(2, 0), Cell::White);
        // Run reaches the edge without a black disc
        assert_eq!(
            find_line_ending(&board, Player::Black, Pos::new(0, 0), Direction::Right),
            None
        );
        board.set(Pos::new(4, 0), Cell::Black);
        // Gap at (3,0)
        assert_eq!(
            find_line_ending(&board, Player::Black, Pos::new(0, 0), Direction::Right),
            None
        );
        board.set(Pos::new(3, 0), Cell::White);
        assert_eq!(
            find_line_ending(&board, Player::Black, Pos::new(0, 0), Direction::Right),
            Some(Pos::new(4, 0))
        );
    }

    #[test]
    fn test_line_ending_on_occupied_query() {
        let board = Board::initial();
        assert_eq!(
            find_line_ending(&board, Player::White, Pos::new(3, 3), Direction::Right),
            None
        );
    }

    #[test]
    fn test_opening_moves() {
        let board = Board::initial();
        let moves = find_valid_moves(&board, Player::Black);
        assert_eq!(
            moves,
            vec![
                Pos::new(3, 2),
                Pos::new(2, 3),
                Pos::new(5, 4),
                Pos::new(4, 5)
            ]
        );
        assert!(any_valid_move(&board, Player::White));
    }

    #[test]
    fn test_midgame_move_list() {
        let moves = find_valid_moves(&midgame(), Player::Black);
        assert_eq!(moves.len(), 16);
        assert_eq!(moves[0], Pos::new(1, 1));
        assert_eq!(moves[15], Pos::new(4, 7));
        assert!(moves.contains(&Pos::new(1, 4)));
        assert!(moves.contains(&Pos::new(2, 6)));
    }

    #[test]
    fn test_valid_moves_match_line_probes() {
        for board in [Board::initial(), midgame()] {
            for player in [Player::Black, Player::White] {
                let moves = find_valid_moves(&board, player);
                for pos in Pos::all() {
                    let probed = board.is_empty(pos)
                        && Direction::ALL
                            .iter()
                            .any(|&d| find_line_ending(&board, player, pos, d).is_some());
                    assert_eq!(moves.contains(&pos), probed, "{player} at {pos}");
                    assert_eq!(is_valid_move(&board, player, pos), probed);
                }
                assert_eq!(any_valid_move(&board, player), !moves.is_empty());
            }
        }
    }

    #[test]
    fn test_apply_move_flip() {
        let mut board = midgame();
        let flipped = apply_move(&mut board, Player::Black, Pos::new(2, 6));
        assert_eq!(flipped, 1);
        assert_eq!(board.get(Pos::new(2, 6)), Cell::Black);
        assert_eq!(board.get(Pos::new(2, 5)), Cell::White);
        assert_eq!(board.get(Pos::new(3, 5)), Cell::Black);
        assert_eq!(board.get(Pos::new(4, 4)), Cell::Black);
        assert_eq!(board.get(Pos::new(3, 6)), Cell::Black);
        assert_eq!(board.get(Pos::new(2, 7)), Cell::White);
    }

    #[test]
    fn test_apply_move_disc_accounting() {
        let before = midgame();
        for pos in find_valid_moves(&before, Player::Black) {
            let mut after = before;
            let flipped = apply_move(&mut after, Player::Black, pos);
            assert!(flipped > 0);
            assert_eq!(after.disc_count(), before.disc_count() + 1);
            assert_eq!(
                after.count(Player::Black),
                before.count(Player::Black) + 1 + flipped
            );

            // Every changed cell other than the target was an opponent disc
            // lying strictly between the target and some line end.
            for idx in 0..TOTAL_CELLS {
                let p = Pos::from_index(idx);
                if p == pos || before.get(p) == after.get(p) {
                    continue;
                }
                assert_eq!(before.get(p), Cell::White);
                assert_eq!(after.get(p), Cell::Black);
                let bracketed = Direction::ALL.iter().any(|&d| {
                    let Some(end) = find_line_ending(&before, Player::Black, pos, d) else {
                        return false;
                    };
                    let mut cur = pos.step(d);
                    while let Some(c) = cur {
                        if c == end {
                            return false;
                        }
                        if c == p {
                            return true;
                        }
                        cur = c.step(d);
                    }
                    false
                });
                assert!(bracketed, "{p} flipped by {pos} but not bracketed");
            }
        }
    }

    #[test]
    fn test_apply_illegal_move_is_noop() {
        let before = midgame();
        let mut after = before;
        let flipped = apply_move(&mut after, Player::Black, Pos::new(0, 0));
        assert_eq!(flipped, 0);
        assert_eq!(after, before);
        assert_eq!(after.get(Pos::new(0, 0)), Cell::Empty);
        assert_eq!(after.key(), before.key());
    }

    #[test]
    fn test_apply_move_multiple_directions() {
        let mut board = Board::new();
        // B W . W B on row 0, plus W below the target and B under it
        board.set(Pos::new(0, 0), Cell::Black);
        board.set(Pos::new(1, 0), Cell::White);
        board.set(Pos::new(3, 0), Cell::White);
        board.set(Pos::new(4, 0), Cell::Black);
        board.set(Pos::new(2, 1), Cell::White);
        board.set(Pos::new(2, 2), Cell::White);
        board.set(Pos::new(2, 3), Cell::Black);

        let flipped = apply_move(&mut board, Player::Black, Pos::new(2, 0));
        assert_eq!(flipped, 4);
        for x in 0..5 {
            assert_eq!(board.get(Pos::new(x, 0)), Cell::Black);
        }
        assert_eq!(board.get(Pos::new(2, 1)), Cell::Black);
        assert_eq!(board.get(Pos::new(2, 2)), Cell::Black);
    }
}
