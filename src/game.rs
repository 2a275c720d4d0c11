//! Engine-vs-engine games
//!
//! [`play_game`] runs two engines against each other until neither side can
//! move. A side with no legal move passes. [`MatchSummary`] tallies the
//! outcomes of a series of games.

use tracing::{debug, info};

use crate::board::{Board, Player, Pos};
use crate::engine::Engine;
use crate::rules::{apply_move, disc_counts, is_game_over, outcome, Outcome};

/// One turn of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    pub player: Player,
    /// `None` for a pass
    pub pos: Option<Pos>,
}

/// Full record of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Turns in order, passes included
    pub plies: Vec<Ply>,
    /// Final position
    pub board: Board,
    pub outcome: Outcome,
}

impl GameRecord {
    /// Number of discs placed.
    pub fn moves_played(&self) -> usize {
        self.plies.iter().filter(|ply| ply.pos.is_some()).count()
    }

    /// Number of passes.
    pub fn passes(&self) -> usize {
        self.plies.len() - self.moves_played()
    }

    /// Final `(black, white)` disc counts.
    pub fn score(&self) -> (u32, u32) {
        disc_counts(&self.board)
    }
}

/// Play `start` to completion with Black to move first.
pub fn play_game(black: &mut Engine, white: &mut Engine, start: Board) -> GameRecord {
    let mut board = start;
    let mut player = Player::Black;
    let mut plies = Vec::new();

    while !is_game_over(&board) {
        let engine = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };
        let pos = engine.best_move(&board, player);
        match pos {
            Some(pos) => {
                let flipped = apply_move(&mut board, player, pos);
                debug!(ply = plies.len(), %player, %pos, flipped, "move");
            }
            None => debug!(ply = plies.len(), %player, "pass"),
        }
        plies.push(Ply { player, pos });
        player = player.opponent();
    }

    let outcome = outcome(&board);
    let (black_discs, white_discs) = disc_counts(&board);
    info!(?outcome, black_discs, white_discs, plies = plies.len(), "game over");

    GameRecord {
        plies,
        board,
        outcome,
    }
}

/// Tally of game outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::Black) => self.black_wins += 1,
            Outcome::Winner(Player::White) => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.black_wins + self.white_wins + self.draws
    }

    /// Share of games won by `player`, draws counted as games. 0 with no games.
    pub fn win_rate(&self, player: Player) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::Black => self.black_wins,
            Player::White => self.white_wins,
        };
        f64::from(wins) / f64::from(games)
    }
}

impl FromIterator<Outcome> for MatchSummary {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut summary = MatchSummary::default();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}
