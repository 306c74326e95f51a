//! Rules engine for animal chess on a 7x9 board with river, traps and dens.
//!
//! The crate covers board state, move generation and terminal detection.
//! It never tracks whose turn it is: [`generate_moves`] returns moves for
//! both sides and callers filter by side.

pub mod board;
pub mod capture;
pub mod constants;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod topology;
pub mod types;

pub use board::Board;
pub use capture::{can_capture, can_take, effective_rank, TRAPPED_RANK};
pub use constants::{A_DEN, A_TRAPS, B_DEN, B_TRAPS, FILES, NUM_POINTS, POINTS, RANKS};
pub use game::{den_invaded_by, is_game_over, outcome, winner, Outcome};
pub use movegen::{
    generate_moves, generate_moves_for_side, generate_moves_for_square, has_moves,
};
pub use notation::{
    encode_board, parse_board, validate_board, DecodeError, EMPTY_POSITION, STARTING_POSITION,
};
pub use topology::{topology, Movement, Topology};
pub use types::{Move, MoveList, Piece, Point, Side, Species, MAX_MOVES};
