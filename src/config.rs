//! Engine configuration parameters.

use crate::eval::Heuristic;
use crate::search::{KeyScheme, Strategy};

/// Configuration for the move engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search strategy used below the root.
    pub strategy: Strategy,

    /// Heuristic applied at depth 0.
    pub heuristic: Heuristic,

    /// Search depth in plies, counted from the root move.
    /// 0 scores each root move with the heuristic from the opponent's side.
    pub depth: u8,

    /// Evaluate root candidates on the rayon pool.
    /// Sequential evaluation gives identical values.
    pub parallel: bool,

    /// Seed for the tie-break generator. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// How the transposition table keys positions.
    pub key_scheme: KeyScheme,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AlphaBetaWithTable,
            heuristic: Heuristic::WeightedSum,
            depth: 5,
            parallel: true,
            seed: None,
            key_scheme: KeyScheme::BoardOnly,
        }
    }
}

impl EngineConfig {
    /// Create a fast, reproducible config for testing.
    pub fn for_testing() -> Self {
        Self {
            depth: 3,
            parallel: false,
            seed: Some(0),
            ..Self::default()
        }
    }

    /// Builder pattern: set search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder pattern: set leaf heuristic.
    pub fn with_heuristic(mut self, heuristic: impl Into<Heuristic>) -> Self {
        self.heuristic = heuristic.into();
        self
    }

    /// Builder pattern: set search depth.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Builder pattern: enable or disable parallel root evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder pattern: fix the tie-break seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder pattern: set table key scheme.
    pub fn with_key_scheme(mut self, key_scheme: KeyScheme) -> Self {
        self.key_scheme = key_scheme;
        self
    }
}
