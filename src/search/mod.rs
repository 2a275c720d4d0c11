//! Search module for the Othello engine
//!
//! Contains:
//! - Transposition table for caching search results
//! - Negamax searchers (plain, alpha-beta, alpha-beta with table)
//! - [`Strategy`], the closed set of searchers selectable by name or tag

pub mod negamax;
pub mod tt;

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Player};
use crate::error::ConfigError;
use crate::eval::Heuristic;

pub use negamax::{order_moves, terminal_value, SearchStats, Searcher, WIN_VALUE};
pub use tt::{EntryType, KeyScheme, TTEntry, TTStats, TranspositionTable};

/// Search strategy used below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Full-width negamax
    Plain,
    /// Negamax with alpha-beta pruning and move ordering
    AlphaBeta,
    /// Alpha-beta with a fresh transposition table per call
    #[default]
    AlphaBetaWithTable,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Plain,
        Strategy::AlphaBeta,
        Strategy::AlphaBetaWithTable,
    ];

    /// Strategy for integer tag 0, 1 or 2.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Strategy::Plain),
            1 => Some(Strategy::AlphaBeta),
            2 => Some(Strategy::AlphaBetaWithTable),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Strategy::Plain => 0,
            Strategy::AlphaBeta => 1,
            Strategy::AlphaBetaWithTable => 2,
        }
    }

    /// Canonical name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Plain => "negamax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::AlphaBetaWithTable => "alphabeta-tt",
        }
    }

    /// Value of `board` for `player` searched `depth` plies deep.
    ///
    /// Runs with an open window. The table strategy starts from an empty
    /// table on every call, so separate calls never share entries.
    pub fn search(
        self,
        board: &Board,
        player: Player,
        depth: i32,
        heuristic: Heuristic,
        key_scheme: KeyScheme,
        stats: &mut SearchStats,
    ) -> f64 {
        let mut searcher = Searcher::new(heuristic);
        let value = match self {
            Strategy::Plain => searcher.negamax(board, player, depth),
            Strategy::AlphaBeta => {
                searcher.alpha_beta(board, player, depth, f64::NEG_INFINITY, f64::INFINITY)
            }
            Strategy::AlphaBetaWithTable => {
                let mut tt = TranspositionTable::new(key_scheme);
                searcher.alpha_beta_tt(
                    board,
                    player,
                    depth,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    &mut tt,
                )
            }
        };
        stats.merge(searcher.stats());
        value
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "negamax" | "plain" | "0" => Ok(Strategy::Plain),
            "alphabeta" | "alpha-beta" | "1" => Ok(Strategy::AlphaBeta),
            "alphabeta-tt" | "all" | "2" => Ok(Strategy::AlphaBetaWithTable),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!("minimax".parse::<Strategy>(), Ok(Strategy::Plain));
        assert_eq!("Negamax".parse::<Strategy>(), Ok(Strategy::Plain));
        assert_eq!("alphabeta".parse::<Strategy>(), Ok(Strategy::AlphaBeta));
        assert_eq!(" all ".parse::<Strategy>(), Ok(Strategy::AlphaBetaWithTable));
        assert_eq!("2".parse::<Strategy>(), Ok(Strategy::AlphaBetaWithTable));
        assert_eq!(
            "mcts".parse::<Strategy>(),
            Err(ConfigError::UnknownStrategy("mcts".to_string()))
        );
    }

    #[test]
    fn test_strategy_tags_and_names() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_tag(strategy.tag()), Some(strategy));
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!(Strategy::from_tag(3), None);
        assert_eq!(Strategy::default(), Strategy::AlphaBetaWithTable);
    }

    #[test]
    fn test_strategies_agree_from_initial_position() {
        let board = Board::initial();
        for depth in 0..=3 {
            let values: Vec<f64> = Strategy::ALL
                .iter()
                .map(|s| {
                    let mut stats = SearchStats::default();
                    s.search(
                        &board,
                        Player::White,
                        depth,
                        Heuristic::WeightedSum,
                        KeyScheme::BoardOnly,
                        &mut stats,
                    )
                })
                .collect();
            assert_eq!(values[0], values[1], "depth {depth}");
            assert_eq!(values[0], values[2], "depth {depth}");
        }
    }

    #[test]
    fn test_key_schemes_agree_without_passes() {
        let board = Board::initial();
        let mut stats = SearchStats::default();
        let a = Strategy::AlphaBetaWithTable.search(
            &board,
            Player::Black,
            3,
            Heuristic::Mobility,
            KeyScheme::BoardOnly,
            &mut stats,
        );
        let b = Strategy::AlphaBetaWithTable.search(
            &board,
            Player::Black,
            3,
            Heuristic::Mobility,
            KeyScheme::BoardAndMover,
            &mut stats,
        );
        assert_eq!(a, b);
        assert!(stats.tt_probes > 0);
    }

    #[test]
    fn test_search_accumulates_stats() {
        let board = Board::initial();
        let mut stats = SearchStats::default();
        let _ = Strategy::Plain.search(
            &board,
            Player::Black,
            1,
            Heuristic::WeightedSum,
            KeyScheme::BoardOnly,
            &mut stats,
        );
        // Root plus four replies
        assert_eq!(stats.nodes, 5);
        assert_eq!(stats.leaves, 4);
    }
}
