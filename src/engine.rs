//! Move engine: root move selection
//!
//! Every legal root move is applied to a copy of the board and the chosen
//! [`Strategy`] scores the reply position for the opponent one ply shallower;
//! the negated value is the move's value for the root mover. The engine then
//! picks uniformly among the moves sharing the maximum value, using its own
//! seeded generator so a fixed seed gives a reproducible choice.
//!
//! Root candidates are independent, so they are evaluated on the rayon pool
//! when [`EngineConfig::parallel`] is set. The maximum is reduced after all
//! candidates have finished; sequential evaluation gives identical values.
//!
//! # Example
//!
//! ```
//! use othello::{Board, Engine, EngineConfig, Player};
//!
//! let mut engine = Engine::with_config(EngineConfig::for_testing().with_depth(2));
//! let board = Board::initial();
//!
//! let result = engine.best_move_with_stats(&board, Player::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Ties: {}", result.ties);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::error::BoardError;
use crate::eval::Heuristic;
use crate::rules::{apply_move, find_valid_moves};
use crate::search::SearchStats;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen move, `None` when the mover has no legal move
    pub best_move: Option<Pos>,
    /// Value of the chosen move for the mover (`-inf` when there is none)
    pub score: f64,
    /// Every legal root move with its value, in row-major order
    pub candidates: Vec<(Pos, f64)>,
    /// Number of moves sharing the best value
    pub ties: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search counters summed over all candidates
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: f64::NEG_INFINITY,
            candidates: Vec::new(),
            ties: 0,
            time_ms,
            stats: SearchStats::default(),
        }
    }

    /// Number of nodes searched
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.stats.nodes
    }
}

/// Value of playing `pos` for `player`, with the counters it produced.
fn evaluate_candidate(
    board: &Board,
    player: Player,
    pos: Pos,
    config: &EngineConfig,
) -> (Pos, f64, SearchStats) {
    let mut child = *board;
    apply_move(&mut child, player, pos);

    let mut stats = SearchStats::default();
    let value = -config.strategy.search(
        &child,
        player.opponent(),
        i32::from(config.depth) - 1,
        config.heuristic,
        config.key_scheme,
        &mut stats,
    );
    (pos, value, stats)
}

/// Evaluate every legal move for `player` and pick one of the best.
///
/// `rng` is consulted once, after all candidates are scored, and only to
/// break ties. Values are compared exactly.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    config: &EngineConfig,
    rng: &mut R,
) -> MoveResult {
    let start = Instant::now();

    let moves = find_valid_moves(board, player);
    if moves.is_empty() {
        debug!(%player, "no legal move");
        return MoveResult::no_move(start.elapsed().as_millis() as u64);
    }

    let evaluated: Vec<(Pos, f64, SearchStats)> = if config.parallel {
        moves
            .par_iter()
            .map(|&pos| evaluate_candidate(board, player, pos, config))
            .collect()
    } else {
        moves
            .iter()
            .map(|&pos| evaluate_candidate(board, player, pos, config))
            .collect()
    };

    let mut stats = SearchStats::default();
    let mut best = f64::NEG_INFINITY;
    let mut candidates = Vec::with_capacity(evaluated.len());
    for (pos, value, candidate_stats) in evaluated {
        trace!(%pos, value, nodes = candidate_stats.nodes, "root candidate");
        stats.merge(&candidate_stats);
        if value > best {
            best = value;
        }
        candidates.push((pos, value));
    }

    let tied: Vec<Pos> = candidates
        .iter()
        .filter(|&&(_, value)| value == best)
        .map(|&(pos, _)| pos)
        .collect();
    let best_move = tied.choose(rng).copied();

    MoveResult {
        best_move,
        score: best,
        ties: tied.len(),
        candidates,
        time_ms: start.elapsed().as_millis() as u64,
        stats,
    }
}

/// Othello move engine.
///
/// Owns its configuration and the tie-break generator. A seeded engine
/// replays the same sequence of choices for the same sequence of positions.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    rng: ChaCha8Rng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with a custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use othello::{Engine, EngineConfig, Strategy};
    ///
    /// let engine = Engine::with_config(
    ///     EngineConfig::default()
    ///         .with_strategy(Strategy::AlphaBeta)
    ///         .with_depth(4)
    ///         .with_seed(7),
    /// );
    /// assert_eq!(engine.config().depth, 4);
    /// ```
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { config, rng }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Restart the tie-break generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Get the best move for the given position, or `None` if `player` has
    /// no legal move.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.best_move_with_stats(board, player).best_move
    }

    /// Get the best move with its value, the full candidate list and
    /// search counters.
    #[instrument(
        level = "debug",
        skip(self, board),
        fields(strategy = %self.config.strategy, heuristic = %self.config.heuristic, depth = self.config.depth)
    )]
    pub fn best_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let result = select_move(board, player, &self.config, &mut self.rng);
        if let Some(pos) = result.best_move {
            debug!(
                %pos,
                score = result.score,
                ties = result.ties,
                nodes = result.nodes(),
                time_ms = result.time_ms,
                "selected move"
            );
        }
        result
    }
}

/// Best move for a board given in the 64-character external format.
///
/// Uses the default strategy with parallel root evaluation and an
/// entropy-seeded tie-break. A malformed board is rejected before any
/// search; `Ok(None)` means `player` has no legal move.
///
/// # Example
///
/// ```
/// use othello::{best_move, Player, Pos};
///
/// let board = "..................WBBW....WBWB....WBB.....WWWW.....BW.....WB.W..";
/// assert_eq!(best_move(board, Player::Black, 0, 1), Ok(Some(Pos::new(1, 4))));
/// assert!(best_move("not a board", Player::Black, 0, 1).is_err());
/// ```
pub fn best_move(
    board: &str,
    player: Player,
    heuristic_tag: u8,
    depth: u8,
) -> Result<Option<Pos>, BoardError> {
    let board: Board = board.parse()?;
    let config = EngineConfig::default()
        .with_heuristic(Heuristic::from_tag(heuristic_tag))
        .with_depth(depth);
    Ok(Engine::with_config(config).best_move(&board, player))
}
