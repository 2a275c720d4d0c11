//! Negamax search in three flavours
//!
//! Every value is reported from the point of view of the player to move at
//! that node; a child's value is negated before it is combined at the parent.
//!
//! - [`Searcher::negamax`]: full-width, no pruning
//! - [`Searcher::alpha_beta`]: window pruning with static move ordering
//! - [`Searcher::alpha_beta_tt`]: alpha-beta plus a [`TranspositionTable`]
//!
//! All three share the same leaf and terminal rules, so with an open window
//! and a fresh table they return the same value; pruning only changes how
//! many nodes are visited.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player};
//! use othello::eval::Heuristic;
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new(Heuristic::WeightedSum);
//! let board = Board::initial();
//!
//! let plain = searcher.negamax(&board, Player::Black, 3);
//! let pruned = searcher.alpha_beta(&board, Player::Black, 3, f64::NEG_INFINITY, f64::INFINITY);
//! assert_eq!(plain, pruned);
//! ```

use std::cmp::Reverse;

use tracing::trace;

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate, parity, position_weight, Heuristic};
use crate::rules::{any_valid_move, apply_move, find_valid_moves};

use super::tt::{EntryType, TranspositionTable};

/// Value of a finished game for a player ahead on discs.
pub const WIN_VALUE: f64 = 10_000.0;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Heuristic evaluations at depth 0
    pub leaves: u64,
    /// Positions where neither side could move
    pub terminals: u64,
    /// Single passes (mover stuck, opponent not)
    pub passes: u64,
    /// Window cutoffs
    pub cutoffs: u64,
    /// Table lookups
    pub tt_probes: u64,
    /// Table lookups that ended the node without searching it
    pub tt_cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining root candidates)
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.terminals += other.terminals;
        self.passes += other.passes;
        self.cutoffs += other.cutoffs;
        self.tt_probes += other.tt_probes;
        self.tt_cutoffs += other.tt_cutoffs;
    }

    /// Share of table lookups that short-circuited the node, in percent
    pub fn tt_cutoff_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_cutoffs as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// What a node turned out to be before any child is searched.
enum Node {
    /// Leaf or finished game: the value is known
    Resolved(f64),
    /// Interior node; an empty list means the mover must pass
    Moves(Vec<Pos>),
}

/// Negamax searcher bound to one evaluation heuristic.
///
/// The searcher holds no board state between calls; it only accumulates
/// [`SearchStats`] until [`Searcher::take_stats`] is called.
#[derive(Debug, Clone)]
pub struct Searcher {
    heuristic: Heuristic,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that scores leaves with `heuristic`.
    #[must_use]
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            stats: SearchStats::default(),
        }
    }

    /// Heuristic used at leaves.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Statistics accumulated since creation or the last [`Searcher::take_stats`].
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Return accumulated statistics and reset them.
    pub fn take_stats(&mut self) -> SearchStats {
        std::mem::take(&mut self.stats)
    }

    /// Leaf and terminal checks shared by all variants.
    fn expand(&mut self, board: &Board, player: Player, depth: i32) -> Node {
        self.stats.nodes += 1;

        if depth <= 0 {
            self.stats.leaves += 1;
            return Node::Resolved(evaluate(board, player, self.heuristic));
        }

        let moves = find_valid_moves(board, player);
        if moves.is_empty() {
            if !any_valid_move(board, player.opponent()) {
                self.stats.terminals += 1;
                let value = terminal_value(board, player);
                trace!(%player, depth, value, "no moves for either side");
                return Node::Resolved(value);
            }
            self.stats.passes += 1;
            trace!(%player, depth, "pass");
        }
        Node::Moves(moves)
    }

    /// Plain negamax, no pruning.
    pub fn negamax(&mut self, board: &Board, player: Player, depth: i32) -> f64 {
        let moves = match self.expand(board, player, depth) {
            Node::Resolved(value) => return value,
            Node::Moves(moves) => moves,
        };

        let opponent = player.opponent();
        let mut best = f64::NEG_INFINITY;
        for &pos in &moves {
            let mut child = *board;
            apply_move(&mut child, player, pos);
            best = best.max(-self.negamax(&child, opponent, depth - 1));
        }

        if moves.is_empty() {
            best = -self.negamax(board, opponent, depth - 1);
        }
        best
    }

    /// Negamax with alpha-beta pruning.
    ///
    /// Call with `(f64::NEG_INFINITY, f64::INFINITY)` for an exact value.
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        player: Player,
        depth: i32,
        mut alpha: f64,
        beta: f64,
    ) -> f64 {
        let mut moves = match self.expand(board, player, depth) {
            Node::Resolved(value) => return value,
            Node::Moves(moves) => moves,
        };
        order_moves(&mut moves);

        let opponent = player.opponent();
        let mut best = f64::NEG_INFINITY;
        for &pos in &moves {
            let mut child = *board;
            apply_move(&mut child, player, pos);
            best = best.max(-self.alpha_beta(&child, opponent, depth - 1, -beta, -alpha));
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if moves.is_empty() {
            best = -self.alpha_beta(board, opponent, depth - 1, -beta, -alpha);
        }
        best
    }

    /// Alpha-beta with a transposition table.
    ///
    /// The table is consulted after the leaf and terminal checks. A stored
    /// entry is used only if it was searched at least as deep as `depth`.
    pub fn alpha_beta_tt(
        &mut self,
        board: &Board,
        player: Player,
        depth: i32,
        mut alpha: f64,
        mut beta: f64,
        tt: &mut TranspositionTable,
    ) -> f64 {
        let mut moves = match self.expand(board, player, depth) {
            Node::Resolved(value) => return value,
            Node::Moves(moves) => moves,
        };

        let original_alpha = alpha;
        self.stats.tt_probes += 1;
        if let Some(entry) = tt.probe(board, player) {
            if entry.depth >= depth {
                match entry.entry_type {
                    EntryType::Exact => {
                        self.stats.tt_cutoffs += 1;
                        return entry.value;
                    }
                    EntryType::LowerBound => alpha = alpha.max(entry.value),
                    EntryType::UpperBound => beta = beta.min(entry.value),
                }
                if alpha >= beta {
                    self.stats.tt_cutoffs += 1;
                    return entry.value;
                }
            }
        }

        order_moves(&mut moves);

        let opponent = player.opponent();
        let mut best = f64::NEG_INFINITY;
        for &pos in &moves {
            let mut child = *board;
            apply_move(&mut child, player, pos);
            best = best.max(-self.alpha_beta_tt(&child, opponent, depth - 1, -beta, -alpha, tt));
            alpha = alpha.max(best);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if moves.is_empty() {
            best = -self.alpha_beta_tt(board, opponent, depth - 1, -beta, -alpha, tt);
        }

        let entry_type = EntryType::classify(best, original_alpha, beta);
        tt.store(board, player, depth, best, entry_type);
        best
    }
}

/// Score of a position where neither side can move.
#[inline]
pub fn terminal_value(board: &Board, player: Player) -> f64 {
    if parity(board, player) > 0 {
        WIN_VALUE
    } else {
        -WIN_VALUE
    }
}

/// Sort moves by descending positional weight. Stable, so equal weights
/// keep row-major order.
#[inline]
pub fn order_moves(moves: &mut [Pos]) {
    moves.sort_by_key(|&pos| Reverse(position_weight(pos)));
}
