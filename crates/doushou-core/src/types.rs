use std::fmt;

use arrayvec::ArrayVec;

use crate::constants::{A_DEN, A_TRAPS, B_DEN, B_TRAPS, FILES, NUM_POINTS, RANKS};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A = 0,
    B = 1,
}

impl Side {
    pub const BOTH: [Self; 2] = [Self::A, Self::B];

    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// The side's own den; its pieces may never move onto it.
    pub const fn den(self) -> Point {
        match self {
            Self::A => A_DEN,
            Self::B => B_DEN,
        }
    }

    pub const fn traps(self) -> [Point; 3] {
        match self {
            Self::A => A_TRAPS,
            Self::B => B_TRAPS,
        }
    }

    pub const fn to_code(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Mouse = 0,
    Cat = 1,
    Dog = 2,
    Wolf = 3,
    Hyena = 4,
    Tiger = 5,
    Lion = 6,
    Elephant = 7,
}

impl Species {
    pub const ALL: [Self; 8] = [
        Self::Mouse,
        Self::Cat,
        Self::Dog,
        Self::Wolf,
        Self::Hyena,
        Self::Tiger,
        Self::Lion,
        Self::Elephant,
    ];

    pub const WEAKEST: Self = Self::Mouse;
    pub const STRONGEST: Self = Self::Elephant;

    /// Capture rank, 1 (Mouse) through 8 (Elephant). Rank 0 is reserved for
    /// a defender neutralized by an opposing trap.
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    pub const fn can_swim(self) -> bool {
        matches!(self, Self::Mouse)
    }

    pub const fn can_jump(self) -> bool {
        matches!(self, Self::Tiger | Self::Lion)
    }

    pub const fn code(self) -> char {
        match self {
            Self::Mouse => 'm',
            Self::Cat => 'c',
            Self::Dog => 'd',
            Self::Wolf => 'w',
            Self::Hyena => 'h',
            Self::Tiger => 't',
            Self::Lion => 'l',
            Self::Elephant => 'e',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'm' => Some(Self::Mouse),
            'c' => Some(Self::Cat),
            'd' => Some(Self::Dog),
            'w' => Some(Self::Wolf),
            'h' => Some(Self::Hyena),
            't' => Some(Self::Tiger),
            'l' => Some(Self::Lion),
            'e' => Some(Self::Elephant),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub species: Species,
    pub side: Side,
}

impl Piece {
    pub const fn new(species: Species, side: Side) -> Self {
        Self { species, side }
    }

    /// Notation letter: uppercase for side A, lowercase for side B.
    pub const fn code(self) -> char {
        let code = self.species.code();
        match self.side {
            Side::A => code.to_ascii_uppercase(),
            Side::B => code,
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        let side = if code.is_ascii_uppercase() {
            Side::A
        } else {
            Side::B
        };
        match Species::from_code(code.to_ascii_lowercase()) {
            Some(species) => Some(Self { species, side }),
            None => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.to_code(), self.species.code())
    }
}

/// A square on the 7x9 grid. Fields are private so that every `Point` in
/// circulation is in range; board access never re-checks bounds.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Point {
    file: u8,
    rank: u8,
}

impl Point {
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if (file as usize) < FILES && (rank as usize) < RANKS {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Caller guarantees `file < 7` and `rank < 9`.
    pub const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Flat index in generator scan order (files outer, ranks inner).
    pub const fn index(self) -> usize {
        self.file as usize * RANKS + self.rank as usize
    }

    /// The same square seen from the opposite side of the board.
    pub const fn rotate(self) -> Self {
        Self {
            file: FILES as u8 - 1 - self.file,
            rank: RANKS as u8 - 1 - self.rank,
        }
    }

    pub(crate) fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file.checked_add_signed(df)?;
        let rank = self.rank.checked_add_signed(dr)?;
        Self::new(file, rank)
    }
}

impl TryFrom<(u8, u8)> for Point {
    type Error = String;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(file, rank).ok_or_else(|| format!("point ({file}, {rank}) is off the board"))
    }
}

impl From<Point> for (u8, u8) {
    fn from(point: Point) -> Self {
        (point.file, point.rank)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Point,
    pub to: Point,
}

impl Move {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// At most four destinations from each square, for any board built with
/// `put`, not only positions reachable in play.
pub const MAX_MOVES: usize = 4 * NUM_POINTS;

pub type MoveList = ArrayVec<Move, MAX_MOVES>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_code_round_trip() {
        for species in Species::ALL {
            assert_eq!(Species::from_code(species.code()), Some(species));
            for side in Side::BOTH {
                let piece = Piece::new(species, side);
                assert_eq!(Piece::from_code(piece.code()), Some(piece));
            }
        }
        assert_eq!(Species::from_code('x'), None);
        assert_eq!(Piece::from_code('7'), None);
    }

    #[test]
    fn ranks_are_a_total_order() {
        let ranks: Vec<u8> = Species::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Species::WEAKEST.rank(), 1);
        assert_eq!(Species::STRONGEST.rank(), 8);
    }

    #[test]
    fn exactly_one_swimmer_and_two_jumpers() {
        let swimmers: Vec<_> = Species::ALL.into_iter().filter(|s| s.can_swim()).collect();
        let jumpers: Vec<_> = Species::ALL.into_iter().filter(|s| s.can_jump()).collect();
        assert_eq!(swimmers, vec![Species::Mouse]);
        assert_eq!(jumpers, vec![Species::Tiger, Species::Lion]);
    }

    #[test]
    fn point_bounds_and_rotation() {
        assert_eq!(Point::new(6, 8), Some(Point::new_unchecked(6, 8)));
        assert_eq!(Point::new(7, 0), None);
        assert_eq!(Point::new(0, 9), None);
        assert_eq!(Point::new_unchecked(0, 0).rotate(), Point::new_unchecked(6, 8));
        assert_eq!(Point::new_unchecked(2, 3).rotate(), Point::new_unchecked(4, 5));
        assert_eq!(Point::new_unchecked(3, 4).rotate(), Point::new_unchecked(3, 4));
        assert_eq!(Side::A.den().rotate(), Side::B.den());
    }

    #[test]
    fn point_offset_stays_on_board() {
        let corner = Point::new_unchecked(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 0), Some(Point::new_unchecked(1, 0)));
        assert_eq!(Point::new_unchecked(6, 8).offset(0, 1), None);
    }

    #[test]
    fn piece_is_two_bytes() {
        assert_eq!(core::mem::size_of::<Piece>(), 2);
        assert_eq!(core::mem::size_of::<Option<Piece>>(), 2);
    }
}
