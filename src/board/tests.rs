use super::*;
use crate::error::{BoardError, PosError};

const MIDGAME: &str = "..................WBBW....WBWB....WBB.....WWWW.....BW.....WB.W..";

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
    assert_eq!(Player::Black.opponent().opponent(), Player::Black);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 6);
    assert_eq!(pos.to_index(), 2 + 6 * 8);
    assert_eq!(pos.to_index(), 50);

    let pos2 = Pos::from_index(50);
    assert_eq!(pos2.x, 2);
    assert_eq!(pos2.y, 6);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
    assert_eq!(Pos::try_new(8, 1), Err(PosError::OutOfRange { x: 8, y: 1 }));
}

#[test]
fn test_pos_step_stops_at_edge() {
    assert_eq!(Pos::new(0, 0).step(Direction::Up), None);
    assert_eq!(Pos::new(0, 0).step(Direction::Left), None);
    assert_eq!(Pos::new(0, 0).step(Direction::DownRight), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(7, 7).step(Direction::UpLeft), Some(Pos::new(6, 6)));
    assert_eq!(Pos::new(7, 3).step(Direction::Right), None);
}

#[test]
fn test_directions_are_distinct_unit_steps() {
    for (i, a) in Direction::ALL.iter().enumerate() {
        let (dx, dy) = a.delta();
        assert!((dx, dy) != (0, 0));
        assert!(dx.abs() <= 1 && dy.abs() <= 1);
        let (rx, ry) = a.reverse().delta();
        assert_eq!((rx, ry), (-dx, -dy));
        for b in &Direction::ALL[i + 1..] {
            assert_ne!(a.delta(), b.delta());
        }
    }
}

#[test]
fn test_pos_parse() {
    assert_eq!("3, 4".parse::<Pos>(), Ok(Pos::new(3, 4)));
    assert_eq!("(1,7)".parse::<Pos>(), Ok(Pos::new(1, 7)));
    assert_eq!(" 0 0 ".parse::<Pos>(), Ok(Pos::new(0, 0)));
    assert_eq!("9, 0".parse::<Pos>(), Err(PosError::OutOfRange { x: 9, y: 0 }));
    assert!(matches!("a, b".parse::<Pos>(), Err(PosError::Malformed(_))));
    assert!(matches!("1".parse::<Pos>(), Err(PosError::Malformed(_))));
    assert!(matches!("1, 2, 3".parse::<Pos>(), Err(PosError::Malformed(_))));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(7, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 0) < Pos::new(1, 0));
}

#[test]
fn test_board_parse_and_display() {
    let board: Board = MIDGAME.parse().unwrap();
    assert_eq!(board.get(Pos::new(2, 2)), Cell::White);
    assert_eq!(board.get(Pos::new(3, 2)), Cell::Black);
    assert_eq!(board.get(Pos::new(0, 0)), Cell::Empty);
    assert_eq!(board.to_string(), MIDGAME);
}

#[test]
fn test_board_rejects_bad_input() {
    let bad = MIDGAME.replacen('W', "x", 1);
    assert_eq!(
        bad.parse::<Board>(),
        Err(BoardError::InvalidCell {
            index: 18,
            found: 'x'
        })
    );
    assert_eq!(
        "...".parse::<Board>(),
        Err(BoardError::WrongLength { len: 3 })
    );
    // Lowercase letters and the rendering glyphs are not part of the format.
    let lower = MIDGAME.replace('B', "b");
    assert!(matches!(lower.parse::<Board>(), Err(BoardError::InvalidCell { .. })));
}

#[test]
fn test_initial_board() {
    let board = Board::initial();
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 2);
    assert_eq!(board.get(Pos::new(3, 3)), Cell::White);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::Black);
    assert_eq!(
        board.to_string(),
        "...........................WB......BW..........................."
    );
}

#[test]
fn test_board_counts() {
    let board: Board = MIDGAME.parse().unwrap();
    assert_eq!(board.count(Player::Black), 8);
    assert_eq!(board.count(Player::White), 12);
    assert_eq!(board.disc_count(), 20);
}

#[test]
fn test_board_key_is_row_major_bytes() {
    let board = Board::initial();
    let key = board.key();
    assert_eq!(key.len(), TOTAL_CELLS);
    assert_eq!(key[27], 2);
    assert_eq!(key[28], 1);
    assert_eq!(key[0], 0);
}

#[test]
fn test_board_pretty() {
    let pretty = Board::initial().pretty();
    let lines: Vec<&str> = pretty.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[3], "...O@...");
    assert_eq!(lines[4], "...@O...");
}

#[test]
fn test_board_copy_is_independent() {
    let original = Board::initial();
    let mut copy = original;
    copy.set(Pos::new(0, 0), Cell::Black);
    assert_eq!(original.get(Pos::new(0, 0)), Cell::Empty);
    assert_ne!(original, copy);
}
