//! Transposition Table for caching search results
//!
//! The table maps a board encoding to a previously computed value, the kind
//! of bound that value represents, and the depth it was searched to.
//!
//! By default the key is the raw 64-byte board encoding and does **not**
//! include the side to move, so the same physical position reached with
//! different movers shares one entry even though stored values are relative
//! to the mover. [`KeyScheme::BoardAndMover`] appends the mover and keeps the
//! two apart.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player};
//! use othello::search::{EntryType, KeyScheme, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(KeyScheme::BoardOnly);
//! let board = Board::initial();
//!
//! // Store a search result
//! tt.store(&board, Player::Black, 3, 12.0, EntryType::Exact);
//!
//! // Probe for the result
//! if let Some(entry) = tt.probe(&board, Player::Black) {
//!     println!("Found cached result: value={}, depth={}", entry.value, entry.depth);
//! }
//! ```

use std::collections::HashMap;

use crate::board::{Board, Player, TOTAL_CELLS};

/// Entry type for value interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact value - the search completed inside the window
    Exact,
    /// Lower bound - value >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - value <= stored value (alpha fail-low)
    UpperBound,
}

impl EntryType {
    /// Classify a finished node value against the window it was searched with.
    ///
    /// `original_alpha` is the alpha the node was entered with, before any
    /// table bound tightened it.
    #[inline]
    #[must_use]
    pub fn classify(value: f64, original_alpha: f64, beta: f64) -> Self {
        if value <= original_alpha {
            EntryType::UpperBound
        } else if value >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTEntry {
    /// Value from the perspective of the mover at store time
    pub value: f64,
    /// Type of value (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Remaining depth the value was searched to
    pub depth: i32,
}

/// How a position is turned into a table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyScheme {
    /// Board bytes only. Positions reached with different movers collide.
    #[default]
    BoardOnly,
    /// Board bytes plus one byte for the side to move.
    BoardAndMover,
}

/// Table key: 64 board bytes, plus a mover byte under
/// [`KeyScheme::BoardAndMover`] (`0` otherwise).
type Key = ([u8; TOTAL_CELLS], u8);

/// Transposition table for one search tree.
///
/// Entries are always overwritten on store; there is no replacement policy
/// and no size bound, since a table lives only as long as one root candidate.
#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<Key, TTEntry>,
    scheme: KeyScheme,
    probes: u64,
    hits: u64,
}

impl TranspositionTable {
    /// Create an empty table using the given key scheme.
    #[must_use]
    pub fn new(scheme: KeyScheme) -> Self {
        Self {
            entries: HashMap::new(),
            scheme,
            probes: 0,
            hits: 0,
        }
    }

    /// Key scheme this table was built with.
    #[inline]
    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    #[inline]
    fn key(&self, board: &Board, player: Player) -> Key {
        let mover = match self.scheme {
            KeyScheme::BoardOnly => 0,
            KeyScheme::BoardAndMover => player.cell().to_byte(),
        };
        (board.key(), mover)
    }

    /// Look up the entry for a position, if any.
    ///
    /// Depth and bound checks are left to the caller.
    pub fn probe(&mut self, board: &Board, player: Player) -> Option<TTEntry> {
        self.probes += 1;
        let entry = self.entries.get(&self.key(board, player)).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// Store a result, overwriting any existing entry for the position.
    pub fn store(
        &mut self,
        board: &Board,
        player: Player,
        depth: i32,
        value: f64,
        entry_type: EntryType,
    ) {
        let key = self.key(board, player);
        self.entries.insert(
            key,
            TTEntry {
                value,
                entry_type,
                depth,
            },
        );
    }

    /// Number of stored positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries and counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.probes = 0;
        self.hits = 0;
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        TTStats {
            entries: self.entries.len(),
            probes: self.probes,
            hits: self.hits,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TTStats {
    /// Number of stored positions
    pub entries: usize,
    /// Lookups performed
    pub probes: u64,
    /// Lookups that found an entry
    pub hits: u64,
}
