use tracing::debug;

use crate::board::Board;
use crate::movegen::has_moves;
use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win(Side),
    Undecided,
}

impl Outcome {
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Win(side) => Some(side),
            Self::Undecided => None,
        }
    }

    pub const fn is_decided(self) -> bool {
        matches!(self, Self::Win(_))
    }
}

/// Den entry wins outright, side A's checked first. Otherwise a side with no
/// moves loses, side A's stalemate checked first.
pub fn outcome(board: &Board) -> Outcome {
    for side in Side::BOTH {
        if den_invaded_by(board, side) {
            debug!(?side, "den entered");
            return Outcome::Win(side);
        }
    }
    for side in Side::BOTH {
        if !has_moves(board, side) {
            let winner = side.opponent();
            debug!(stalemated = ?side, ?winner, "no moves left");
            return Outcome::Win(winner);
        }
    }
    Outcome::Undecided
}

pub fn winner(board: &Board) -> Option<Side> {
    outcome(board).winner()
}

pub fn is_game_over(board: &Board) -> bool {
    outcome(board).is_decided()
}

/// Whether a piece of `side` stands on the opponent's den.
pub fn den_invaded_by(board: &Board, side: Side) -> bool {
    board
        .get(side.opponent().den())
        .is_some_and(|piece| piece.side == side)
}
