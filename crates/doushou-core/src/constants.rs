use crate::types::{Point, Side, Species};

pub const FILES: usize = 7;
pub const RANKS: usize = 9;
pub const NUM_POINTS: usize = FILES * RANKS;

pub const A_DEN: Point = Point::new_unchecked(3, 0);
pub const A_TRAPS: [Point; 3] = [
    Point::new_unchecked(2, 0),
    Point::new_unchecked(4, 0),
    Point::new_unchecked(3, 1),
];

pub const B_DEN: Point = Point::new_unchecked(3, 8);
pub const B_TRAPS: [Point; 3] = [
    Point::new_unchecked(3, 7),
    Point::new_unchecked(2, 8),
    Point::new_unchecked(4, 8),
];

pub const fn is_river(point: Point) -> bool {
    let file = point.file();
    let rank = point.rank();
    matches!(file, 1 | 2 | 4 | 5) && matches!(rank, 3..=5)
}

/// The side whose trap this is, if any.
pub const fn trap_owner(point: Point) -> Option<Side> {
    let (file, rank) = (point.file(), point.rank());
    match (file, rank) {
        (2, 0) | (4, 0) | (3, 1) => Some(Side::A),
        (3, 7) | (2, 8) | (4, 8) => Some(Side::B),
        _ => None,
    }
}

/// Side A's starting squares; side B mirrors them through `Point::rotate`.
pub const HOME_LAYOUT: [(Species, Point); 8] = [
    (Species::Lion, Point::new_unchecked(0, 0)),
    (Species::Tiger, Point::new_unchecked(6, 0)),
    (Species::Dog, Point::new_unchecked(1, 1)),
    (Species::Cat, Point::new_unchecked(5, 1)),
    (Species::Mouse, Point::new_unchecked(0, 2)),
    (Species::Hyena, Point::new_unchecked(2, 2)),
    (Species::Wolf, Point::new_unchecked(4, 2)),
    (Species::Elephant, Point::new_unchecked(6, 2)),
];

/// Every square in generator scan order: files outer, ranks inner.
pub const POINTS: [Point; NUM_POINTS] = {
    let mut points = [Point::new_unchecked(0, 0); NUM_POINTS];
    let mut i = 0;
    while i < NUM_POINTS {
        points[i] = Point::new_unchecked((i / RANKS) as u8, (i % RANKS) as u8);
        i += 1;
    }
    points
};
