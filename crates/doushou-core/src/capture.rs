use crate::constants::trap_owner;
use crate::types::{Piece, Point, Side, Species};

/// Rank of a defender standing on an opposing trap. Below every species.
pub const TRAPPED_RANK: u8 = 0;

/// The defender's rank as seen by an attacker of `attacker_side`. A piece on
/// a trap belonging to the attacking side is neutralized to
/// [`TRAPPED_RANK`]; a piece on its own side's trap keeps its rank.
pub fn effective_rank(defender: Piece, square: Point, attacker_side: Side) -> u8 {
    if defender.side != attacker_side && trap_owner(square) == Some(attacker_side) {
        TRAPPED_RANK
    } else {
        defender.species.rank()
    }
}

/// Rank dominance with the single weakest-beats-strongest override.
pub fn can_take(attacker: Species, defender: Species, defender_rank: u8) -> bool {
    if attacker == Species::WEAKEST && defender == Species::STRONGEST {
        return true;
    }
    attacker.rank() >= defender_rank
}

/// Whether `attacker` may land on `square` given its occupant. Same-side
/// occupants are the move generator's concern and are not checked here.
pub fn can_capture(attacker: Piece, occupant: Option<Piece>, square: Point) -> bool {
    match occupant {
        None => true,
        Some(defender) => can_take(
            attacker.species,
            defender.species,
            effective_rank(defender, square, attacker.side),
        ),
    }
}
