//! Static evaluation heuristics for Othello positions
//!
//! Every heuristic scores a board from one player's point of view: larger is
//! better for that player. Heuristics are selected by an integer tag; any tag
//! outside 0..=8 evaluates to a constant 0.

use std::fmt;

use crate::board::{Board, Player, TOTAL_CELLS};
use crate::rules::find_valid_moves;

use super::stability::count_permanent;
use super::weights::{weighted_sum, POSITION_WEIGHTS, SMALL_POSITION_WEIGHTS};

/// Evaluation heuristic, identified by its integer tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// 0: weighted sum of own squares minus opponent squares
    #[default]
    WeightedSum,
    /// 1: `(Sp - So + 1) / (|Sp| + |So| + 1)` over the main table
    WeightedRatio,
    /// 2: same ratio over the small table
    SmallWeightedRatio,
    /// 3: disc-count difference
    Parity,
    /// 4: `(Mp - Mo + 1) / (Mp + Mo + 1)` over legal-move counts
    Mobility,
    /// 5: permanent-disc ratio
    Stability,
    /// 6: small ratio + mobility
    RatioMobility,
    /// 7: small ratio + half mobility
    RatioHalfMobility,
    /// 8: 4 * small ratio + 5 * mobility + 6 * stability
    Blend,
    /// Any other tag
    Zero,
}

impl Heuristic {
    /// Map an integer tag to a heuristic. Unknown tags map to [`Heuristic::Zero`].
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Heuristic::WeightedSum,
            1 => Heuristic::WeightedRatio,
            2 => Heuristic::SmallWeightedRatio,
            3 => Heuristic::Parity,
            4 => Heuristic::Mobility,
            5 => Heuristic::Stability,
            6 => Heuristic::RatioMobility,
            7 => Heuristic::RatioHalfMobility,
            8 => Heuristic::Blend,
            _ => Heuristic::Zero,
        }
    }

    /// Integer tag, `None` for [`Heuristic::Zero`].
    pub fn tag(self) -> Option<u8> {
        match self {
            Heuristic::WeightedSum => Some(0),
            Heuristic::WeightedRatio => Some(1),
            Heuristic::SmallWeightedRatio => Some(2),
            Heuristic::Parity => Some(3),
            Heuristic::Mobility => Some(4),
            Heuristic::Stability => Some(5),
            Heuristic::RatioMobility => Some(6),
            Heuristic::RatioHalfMobility => Some(7),
            Heuristic::Blend => Some(8),
            Heuristic::Zero => None,
        }
    }
}

impl From<u8> for Heuristic {
    fn from(tag: u8) -> Self {
        Heuristic::from_tag(tag)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag() {
            Some(tag) => write!(f, "{self:?}({tag})"),
            None => f.write_str("Zero"),
        }
    }
}

/// Evaluate `board` for `player` with the given heuristic.
#[must_use]
pub fn evaluate(board: &Board, player: Player, heuristic: Heuristic) -> f64 {
    match heuristic {
        Heuristic::WeightedSum => f64::from(weighted_difference(board, player)),
        Heuristic::WeightedRatio => weighted_ratio(board, player, &POSITION_WEIGHTS),
        Heuristic::SmallWeightedRatio => weighted_ratio(board, player, &SMALL_POSITION_WEIGHTS),
        Heuristic::Parity => f64::from(parity(board, player)),
        Heuristic::Mobility => mobility(board, player),
        Heuristic::Stability => stability(board, player),
        Heuristic::RatioMobility => {
            weighted_ratio(board, player, &SMALL_POSITION_WEIGHTS) + mobility(board, player)
        }
        Heuristic::RatioHalfMobility => {
            weighted_ratio(board, player, &SMALL_POSITION_WEIGHTS) + 0.5 * mobility(board, player)
        }
        Heuristic::Blend => {
            4.0 * weighted_ratio(board, player, &SMALL_POSITION_WEIGHTS)
                + 5.0 * mobility(board, player)
                + 6.0 * stability(board, player)
        }
        Heuristic::Zero => 0.0,
    }
}

/// Main-table weighted sum of `player`'s squares minus the opponent's.
#[inline]
pub fn weighted_difference(board: &Board, player: Player) -> i32 {
    weighted_sum(board, player.cell(), &POSITION_WEIGHTS)
        - weighted_sum(board, player.opponent().cell(), &POSITION_WEIGHTS)
}

/// Disc-count difference. Also decides terminal scores during search.
#[inline]
pub fn parity(board: &Board, player: Player) -> i32 {
    board.count(player) as i32 - board.count(player.opponent()) as i32
}

/// Normalized weighted ratio. The `+ 1` terms keep an empty board finite.
fn weighted_ratio(board: &Board, player: Player, weights: &[i32; TOTAL_CELLS]) -> f64 {
    let own = weighted_sum(board, player.cell(), weights);
    let opp = weighted_sum(board, player.opponent().cell(), weights);
    f64::from(own - opp + 1) / f64::from(own.abs() + opp.abs() + 1)
}

fn mobility(board: &Board, player: Player) -> f64 {
    let own = find_valid_moves(board, player).len() as f64;
    let opp = find_valid_moves(board, player.opponent()).len() as f64;
    (own - opp + 1.0) / (own + opp + 1.0)
}

/// Permanent-disc ratio.
///
/// The denominator is `Pp + Pp + 1`, not `Pp + Po + 1`. Kept as is so
/// scores stay comparable with existing results; see DESIGN.md.
fn stability(board: &Board, player: Player) -> f64 {
    let own = f64::from(count_permanent(board, player));
    let opp = f64::from(count_permanent(board, player.opponent()));
    (own - opp + 1.0) / (own + own + 1.0)
}
