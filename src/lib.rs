//! Othello best-move engine
//!
//! Given a board and the side to move, the engine searches a fixed number
//! of plies and returns the best legal move:
//! - Standard 8x8 board, Black and White discs
//! - A move must bracket at least one line of opponent discs
//! - A side with no legal move passes; the game ends when neither side can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and coordinates
//! - [`rules`]: Move legality, disc flipping, game end
//! - [`eval`]: Static evaluation heuristics (tags 0-8)
//! - [`search`]: Negamax, alpha-beta, alpha-beta with transposition table
//! - [`engine`]: Root move selection with parallel candidate evaluation
//! - [`game`]: Engine-vs-engine games
//!
//! # Quick Start
//!
//! ```
//! use othello::{Board, Engine, EngineConfig, Player};
//!
//! let mut board = Board::initial();
//! let mut engine = Engine::with_config(EngineConfig::for_testing());
//!
//! if let Some(pos) = engine.best_move(&board, Player::Black) {
//!     othello::rules::apply_move(&mut board, Player::Black, pos);
//!     println!("Engine plays at {pos}");
//! }
//! println!("{}", board.pretty());
//! ```
//!
//! Boards also travel as 64-character strings (`.`, `B`, `W`, row-major):
//!
//! ```
//! use othello::{best_move, Player};
//!
//! let board = "...........................WB......BW...........................";
//! let pos = best_move(board, Player::Black, 0, 3).unwrap();
//! assert!(pos.is_some());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{best_move, select_move, Engine, MoveResult};
pub use error::{BoardError, ConfigError, PosError};
pub use eval::Heuristic;
pub use game::{play_game, GameRecord, MatchSummary};
pub use rules::Outcome;
pub use search::{KeyScheme, SearchStats, Strategy};
