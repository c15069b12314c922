//! HPP square lattice: 4 directions, parity-free neighbor offsets,
//! deterministic head-on collisions.

use crate::cell::Cell;
use crate::grid::Grid;

/// Travel directions on the square lattice. Opposite directions sit two
/// positions apart so that a half-turn bit rotation reverses all of them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SquareDir {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl SquareDir {
    pub const ALL: [SquareDir; 4] = [
        SquareDir::North,
        SquareDir::East,
        SquareDir::South,
        SquareDir::West,
    ];

    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    pub const fn opposite(self) -> SquareDir {
        match self {
            SquareDir::North => SquareDir::South,
            SquareDir::East => SquareDir::West,
            SquareDir::South => SquareDir::North,
            SquareDir::West => SquareDir::East,
        }
    }

    /// Coordinate of the adjacent cell this direction points at.
    ///
    /// Screen convention: y grows downward, so North is y-1. Total over
    /// interior coordinates only; the caller guarantees 1 <= x < W-1 and
    /// 1 <= y < H-1.
    pub const fn neighbor(self, x: usize, y: usize) -> (usize, usize) {
        match self {
            SquareDir::North => (x, y - 1),
            SquareDir::East => (x + 1, y),
            SquareDir::South => (x, y + 1),
            SquareDir::West => (x - 1, y),
        }
    }
}

const NS: u8 = SquareDir::North.bit() | SquareDir::South.bit();
const EW: u8 = SquareDir::East.bit() | SquareDir::West.bit();

/// Streaming stage: every direction bit arrives from the neighbor a
/// particle travelling that way departs from, i.e. the neighbor in the
/// opposite direction.
pub fn stream(old: &Grid, x: usize, y: usize) -> Cell {
    let mut next = old.get(x, y).reflector_part();
    for d in SquareDir::ALL {
        let (sx, sy) = d.opposite().neighbor(x, y);
        if old.get(sx, sy).has(d.bit()) {
            next = next.with(d.bit());
        }
    }
    next
}

/// Collision stage: the two head-on pairs rotate into each other (90
/// degrees, self-inverse). Any other configuration is collision-invariant
/// and passes through unchanged.
pub fn collide(cell: Cell) -> Cell {
    match cell.particles() {
        NS => Cell::from_bits(EW),
        EW => Cell::from_bits(NS),
        _ => cell,
    }
}
