//! Static movement tables over the 63 squares.
//!
//! Three adjacency relations (ordinary, jumping, swimming) and the table of
//! river squares a long jump passes over. All four are derived once from the
//! board geometry on first use and never change afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use arrayvec::ArrayVec;

use crate::constants::{is_river, NUM_POINTS, POINTS};
use crate::types::{Point, Species};

/// Neighbour scan order: down, left, right, up. Generated move order
/// depends on it.
pub const DIRS: [(i8, i8); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

pub type Neighbours = ArrayVec<Point, 4>;
pub type JumpPath = ArrayVec<Point, 3>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Ordinary,
    Jumping,
    Swimming,
}

impl Movement {
    pub const fn for_species(species: Species) -> Self {
        if species.can_jump() {
            Self::Jumping
        } else if species.can_swim() {
            Self::Swimming
        } else {
            Self::Ordinary
        }
    }
}

static TOPOLOGY: LazyLock<Topology> = LazyLock::new(Topology::new);

pub fn topology() -> &'static Topology {
    &TOPOLOGY
}

#[derive(Debug, Clone)]
pub struct Topology {
    ordinary: [Neighbours; NUM_POINTS],
    jumping: [Neighbours; NUM_POINTS],
    swimming: [Neighbours; NUM_POINTS],
    jump_paths: HashMap<(Point, Point), JumpPath>,
}

impl Topology {
    fn new() -> Self {
        let mut jump_paths = HashMap::new();
        let jumping = std::array::from_fn(|i| {
            let from = POINTS[i];
            let mut out = Neighbours::new();
            if is_river(from) {
                return out;
            }
            for (df, dr) in DIRS {
                let Some((to, path)) = jump_landing(from, df, dr) else {
                    continue;
                };
                if !path.is_empty() {
                    jump_paths.insert((from, to), path);
                }
                out.push(to);
            }
            out
        });

        Self {
            ordinary: std::array::from_fn(|i| ordinary_neighbours(POINTS[i])),
            jumping,
            swimming: std::array::from_fn(|i| swimming_neighbours(POINTS[i])),
            jump_paths,
        }
    }

    pub fn neighbours(&self, movement: Movement, point: Point) -> &[Point] {
        let table = match movement {
            Movement::Ordinary => &self.ordinary,
            Movement::Jumping => &self.jumping,
            Movement::Swimming => &self.swimming,
        };
        &table[point.index()]
    }

    /// River squares that must be empty for the long jump `from -> to`, in
    /// ascending order. `None` for ordinary one-step moves.
    pub fn jump_path(&self, from: Point, to: Point) -> Option<&[Point]> {
        self.jump_paths.get(&(from, to)).map(ArrayVec::as_slice)
    }

    pub fn jump_paths(&self) -> impl Iterator<Item = (Point, Point, &[Point])> + '_ {
        self.jump_paths
            .iter()
            .map(|(&(from, to), path)| (from, to, path.as_slice()))
    }
}

fn swimming_neighbours(point: Point) -> Neighbours {
    DIRS.iter()
        .filter_map(|&(df, dr)| point.offset(df, dr))
        .collect()
}

fn ordinary_neighbours(point: Point) -> Neighbours {
    if is_river(point) {
        return Neighbours::new();
    }
    swimming_neighbours(point)
        .into_iter()
        .filter(|&to| !is_river(to))
        .collect()
}

/// One step in a direction, carried across any run of river squares.
fn jump_landing(from: Point, df: i8, dr: i8) -> Option<(Point, JumpPath)> {
    let mut path = JumpPath::new();
    let mut to = from.offset(df, dr)?;
    while is_river(to) {
        path.push(to);
        to = to.offset(df, dr)?;
    }
    path.sort_unstable();
    Some((to, path))
}
