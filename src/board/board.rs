//! Fixed 64-cell board with string conversion

use std::fmt;
use std::str::FromStr;

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardError;

/// Game board, row-major (`index = x + y * 8`).
///
/// The board is a plain value: cloning copies 64 bytes and never shares
/// state, so every search node can own its board outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Standard opening position
    pub fn initial() -> Self {
        let mut board = Self::new();
        board.set(Pos::new(3, 3), Cell::White);
        board.set(Pos::new(4, 4), Cell::White);
        board.set(Pos::new(4, 3), Cell::Black);
        board.set(Pos::new(3, 4), Cell::Black);
        board
    }

    /// Build a board from raw cells
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Number of discs owned by `player`
    pub fn count(&self, player: Player) -> u32 {
        let target = player.cell();
        self.cells.iter().filter(|&&c| c == target).count() as u32
    }

    /// Total discs on the board
    pub fn disc_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count() as u32
    }

    /// Raw 64-byte row-major encoding, one byte per cell.
    pub fn key(&self) -> [u8; TOTAL_CELLS] {
        let mut key = [0u8; TOTAL_CELLS];
        for (byte, cell) in key.iter_mut().zip(self.cells.iter()) {
            *byte = cell.to_byte();
        }
        key
    }

    /// Multi-line rendering with `@` for Black and `O` for White.
    pub fn pretty(&self) -> String {
        let mut out = String::with_capacity(TOTAL_CELLS + BOARD_SIZE);
        for row in self.cells.chunks(BOARD_SIZE) {
            for cell in row {
                out.push(match cell {
                    Cell::Empty => '.',
                    Cell::Black => '@',
                    Cell::White => 'O',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the 64-character external format (`.`, `B`, `W`).
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != TOTAL_CELLS {
            return Err(BoardError::WrongLength { len });
        }

        let mut cells = [Cell::Empty; TOTAL_CELLS];
        for (index, c) in s.chars().enumerate() {
            cells[index] = Cell::from_char(c).ok_or(BoardError::InvalidCell { index, found: c })?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}
