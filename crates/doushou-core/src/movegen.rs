use tracing::trace;

use crate::board::Board;
use crate::capture::can_capture;
use crate::constants::POINTS;
use crate::topology::{topology, Movement};
use crate::types::{Move, MoveList, Piece, Point, Side};

/// Every pseudo-legal move on the board for both sides, in scan order
/// (files outer, ranks inner) then neighbour-table order. Turn filtering is
/// left to the caller; see [`generate_moves_for_side`].
pub fn generate_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    for from in POINTS {
        if let Some(piece) = board.get(from) {
            push_moves_for_piece(board, from, piece, &mut moves);
        }
    }
    trace!(count = moves.len(), "generated moves");
    moves
}

pub fn generate_moves_for_side(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    for from in POINTS {
        match board.get(from) {
            Some(piece) if piece.side == side => {
                push_moves_for_piece(board, from, piece, &mut moves);
            }
            _ => {}
        }
    }
    moves
}

/// Moves of whatever stands on `from`; empty for an empty square.
pub fn generate_moves_for_square(board: &Board, from: Point) -> MoveList {
    let mut moves = MoveList::new();
    if let Some(piece) = board.get(from) {
        push_moves_for_piece(board, from, piece, &mut moves);
    }
    moves
}

/// Whether `side` has at least one move, without materializing the list.
pub fn has_moves(board: &Board, side: Side) -> bool {
    POINTS.iter().any(|&from| match board.get(from) {
        Some(piece) if piece.side == side => destinations(board, from, piece).next().is_some(),
        _ => false,
    })
}

fn push_moves_for_piece(board: &Board, from: Point, piece: Piece, moves: &mut MoveList) {
    for to in destinations(board, from, piece) {
        moves.push(Move::new(from, to));
    }
}

fn destinations(board: &Board, from: Point, piece: Piece) -> impl Iterator<Item = Point> + '_ {
    let movement = Movement::for_species(piece.species);
    topology()
        .neighbours(movement, from)
        .iter()
        .copied()
        .filter(move |&to| is_reachable(board, from, to, piece, movement))
}

fn is_reachable(board: &Board, from: Point, to: Point, piece: Piece, movement: Movement) -> bool {
    if to == piece.side.den() {
        return false;
    }

    // Anything in the river on the jump line blocks it.
    if movement == Movement::Jumping {
        if let Some(path) = topology().jump_path(from, to) {
            if path.iter().any(|&square| board.get(square).is_some()) {
                return false;
            }
        }
    }

    let occupant = board.get(to);
    if occupant.is_some_and(|defender| defender.side == piece.side) {
        return false;
    }
    can_capture(piece, occupant, to)
}
