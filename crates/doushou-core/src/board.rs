use std::fmt;

use crate::constants::{FILES, HOME_LAYOUT, POINTS, RANKS};
use crate::types::{Move, Piece, Point, Side};

/// The 7x9 grid. Every square holds exactly one occupant value, `None`
/// being the empty occupant. Dens, traps and river are geometry constants
/// and are not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Board {
    squares: [[Option<Piece>; FILES]; RANKS],
}

impl Board {
    /// The canonical starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (species, point) in HOME_LAYOUT {
            board.put(point, Some(Piece::new(species, Side::A)));
            board.put(point.rotate(), Some(Piece::new(species, Side::B)));
        }
        board
    }

    pub const fn empty() -> Self {
        Self {
            squares: [[None; FILES]; RANKS],
        }
    }

    #[inline]
    pub fn get(&self, point: Point) -> Option<Piece> {
        self.squares[usize::from(point.rank())][usize::from(point.file())]
    }

    /// Writes `piece` into `point` and hands back whatever was there.
    #[inline]
    pub fn put(&mut self, point: Point, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[usize::from(point.rank())][usize::from(point.file())],
            piece,
        )
    }

    /// Relocates the occupant of `mv.from` onto `mv.to`, leaving the origin
    /// empty. Returns the displaced occupant of `mv.to`. No legality checks.
    #[inline]
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let mover = self.put(mv.from, None);
        self.put(mv.to, mover)
    }

    /// Exact inverse of [`Board::make_move`] given the piece it returned.
    #[inline]
    pub fn unmake_move(&mut self, mv: Move, displaced: Option<Piece>) {
        let mover = self.put(mv.to, displaced);
        self.put(mv.from, mover);
    }

    /// Fixture builder: the same board with `piece` placed on `point`.
    pub fn with(mut self, point: Point, piece: Piece) -> Self {
        self.put(point, Some(piece));
        self
    }

    /// All 63 squares in generator scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<Piece>)> + '_ {
        POINTS.iter().map(|&point| (point, self.get(point)))
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Point, Piece)> + '_ {
        self.iter()
            .filter_map(|(point, piece)| piece.map(|piece| (point, piece)))
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Point, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.side == side)
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

const BORDER: &str = "+--+--+--+--+--+--+--+";

/// Bordered grid, side A's home row first, two characters per cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        for rank in 0..RANKS as u8 {
            for file in 0..FILES as u8 {
                match self.get(Point::new_unchecked(file, rank)) {
                    Some(piece) => write!(f, "|{piece}")?,
                    None => write!(f, "|  ")?,
                }
            }
            writeln!(f, "|")?;
            writeln!(f, "{BORDER}")?;
        }
        Ok(())
    }
}
