//! Compact text form of a board.
//!
//! Nine rows joined by `/`, side A's home row (rank 0) first. Within a row,
//! files run 0 to 6; a digit is a run of empty squares and a letter is a
//! piece, uppercase for side A and lowercase for side B.

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::board::Board;
use crate::constants::{FILES, RANKS};
use crate::types::{Piece, Point};

pub const STARTING_POSITION: &str = "L5T/1D3C1/M1H1W1E/7/7/7/e1w1h1m/1c3d1/t5l";
pub const EMPTY_POSITION: &str = "7/7/7/7/7/7/7/7/7";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid board notation")]
    Invalid,
    #[error("{0}")]
    Validation(String),
    #[error("invalid piece '{0}'")]
    InvalidPiece(char),
}

pub fn validate_board(text: &str) -> Result<(), DecodeError> {
    let rows: Vec<&str> = text.split('/').collect();
    if rows.len() != RANKS {
        return Err(DecodeError::Validation(format!(
            "expected {RANKS} rows, received {}",
            rows.len()
        )));
    }

    for (rank, row) in rows.iter().enumerate() {
        let mut count = 0usize;
        for ch in row.chars() {
            match ch.to_digit(10) {
                Some(run @ 1..=7) => count += run as usize,
                Some(_) => {
                    return Err(DecodeError::Validation(format!(
                        "row {rank} has an empty run of {ch}"
                    )));
                }
                None if Piece::from_code(ch).is_some() => count += 1,
                None => return Err(DecodeError::InvalidPiece(ch)),
            }
        }
        if count != FILES {
            return Err(DecodeError::Validation(format!(
                "row {rank} is invalid [expected {FILES} squares, received {count}]"
            )));
        }
    }

    Ok(())
}

/// Decodes a full board or fails without producing one.
pub fn parse_board(text: &str) -> Result<Board, DecodeError> {
    validate_board(text).inspect_err(|err| debug!(%err, text, "rejected board notation"))?;

    let mut board = Board::empty();
    for (rank, row) in text.split('/').enumerate() {
        let mut file = 0u8;
        for ch in row.chars() {
            if let Some(run) = ch.to_digit(10) {
                file += run as u8;
                continue;
            }
            let piece = Piece::from_code(ch).ok_or(DecodeError::InvalidPiece(ch))?;
            let point = Point::new(file, rank as u8).ok_or(DecodeError::Invalid)?;
            board.put(point, Some(piece));
            file += 1;
        }
    }
    Ok(board)
}

pub fn encode_board(board: &Board) -> String {
    let mut out = String::with_capacity(RANKS * (FILES + 1));
    for rank in 0..RANKS as u8 {
        if rank > 0 {
            out.push('/');
        }
        let mut empties = 0u32;
        for file in 0..FILES as u8 {
            match board.get(Point::new_unchecked(file, rank)) {
                Some(piece) => {
                    if empties > 0 {
                        out.push(char::from_digit(empties, 10).unwrap_or('1'));
                        empties = 0;
                    }
                    out.push(piece.code());
                }
                None => empties += 1,
            }
        }
        if empties > 0 {
            out.push(char::from_digit(empties, 10).unwrap_or('1'));
        }
    }
    out
}

impl FromStr for Board {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        encode_board(&board)
    }
}

impl TryFrom<String> for Board {
    type Error = DecodeError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        parse_board(&text)
    }
}
