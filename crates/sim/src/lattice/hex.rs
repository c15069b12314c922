//! FHP-I hexagonal lattice on a rectangular array.
//!
//! Even rows are shifted half a cell relative to odd rows, so the six
//! neighbor offsets depend on the parity of y. Head-on two-particle
//! collisions are degenerate (two rotated outcomes conserve momentum
//! equally) and are resolved by a fair coin flip; the three-particle
//! zero-momentum configurations rotate deterministically.

use crate::cell::Cell;
use crate::grid::Grid;
use rand::Rng;

/// Travel directions on the hex lattice. Opposite directions sit three
/// positions apart so that a half-turn bit rotation reverses all of them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HexDir {
    UpperLeft = 0,
    MidLeft = 1,
    DownLeft = 2,
    DownRight = 3,
    MidRight = 4,
    UpperRight = 5,
}

impl HexDir {
    pub const ALL: [HexDir; 6] = [
        HexDir::UpperLeft,
        HexDir::MidLeft,
        HexDir::DownLeft,
        HexDir::DownRight,
        HexDir::MidRight,
        HexDir::UpperRight,
    ];

    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    pub const fn opposite(self) -> HexDir {
        match self {
            HexDir::UpperLeft => HexDir::DownRight,
            HexDir::MidLeft => HexDir::MidRight,
            HexDir::DownLeft => HexDir::UpperRight,
            HexDir::DownRight => HexDir::UpperLeft,
            HexDir::MidRight => HexDir::MidLeft,
            HexDir::UpperRight => HexDir::DownLeft,
        }
    }

    /// Coordinate of the adjacent cell this direction points at,
    /// parity-aware (even rows sit half a cell right of odd rows).
    ///
    /// Screen convention: y grows downward. Total over interior
    /// coordinates only.
    pub const fn neighbor(self, x: usize, y: usize) -> (usize, usize) {
        let even = y % 2 == 0;
        match self {
            HexDir::UpperRight => {
                if even {
                    (x + 1, y - 1)
                } else {
                    (x, y - 1)
                }
            }
            HexDir::MidRight => (x + 1, y),
            HexDir::DownRight => {
                if even {
                    (x + 1, y + 1)
                } else {
                    (x, y + 1)
                }
            }
            HexDir::DownLeft => {
                if even {
                    (x, y + 1)
                } else {
                    (x - 1, y + 1)
                }
            }
            HexDir::MidLeft => (x - 1, y),
            HexDir::UpperLeft => {
                if even {
                    (x, y - 1)
                } else {
                    (x - 1, y - 1)
                }
            }
        }
    }
}

const UL: u8 = HexDir::UpperLeft.bit();
const ML: u8 = HexDir::MidLeft.bit();
const DL: u8 = HexDir::DownLeft.bit();
const DR: u8 = HexDir::DownRight.bit();
const MR: u8 = HexDir::MidRight.bit();
const UR: u8 = HexDir::UpperRight.bit();

// Zero-momentum three-particle configurations, 60-degree rotations of one
// another.
const TRI_RIGHT: u8 = UR | DR | ML;
const TRI_LEFT: u8 = UL | DL | MR;

// The three head-on pairs.
const PAIR_STEEP_UP: u8 = UR | DL;
const PAIR_FLAT: u8 = MR | ML;
const PAIR_STEEP_DOWN: u8 = UL | DR;

/// Streaming stage: every direction bit arrives from the neighbor a
/// particle travelling that way departs from, i.e. the parity-aware
/// neighbor in the opposite direction.
pub fn stream(old: &Grid, x: usize, y: usize) -> Cell {
    let mut next = old.get(x, y).reflector_part();
    for d in HexDir::ALL {
        let (sx, sy) = d.opposite().neighbor(x, y);
        if old.get(sx, sy).has(d.bit()) {
            next = next.with(d.bit());
        }
    }
    next
}

/// Collision stage, matched against the full particle mask in table order.
///
/// A head-on pair becomes one of the *other two* head-on pairs with equal
/// probability, never itself; without that random rotation the doubled
/// head-on outcomes stay degenerate and the gas loses isotropy. A set rest
/// bit defeats every exact match, so such configurations pass through.
pub fn collide(cell: Cell, rng: &mut impl Rng) -> Cell {
    match cell.particles() {
        TRI_RIGHT => Cell::from_bits(TRI_LEFT),
        TRI_LEFT => Cell::from_bits(TRI_RIGHT),
        PAIR_STEEP_UP => Cell::from_bits(if rng.gen() { PAIR_FLAT } else { PAIR_STEEP_DOWN }),
        PAIR_FLAT => Cell::from_bits(if rng.gen() { PAIR_STEEP_UP } else { PAIR_STEEP_DOWN }),
        PAIR_STEEP_DOWN => Cell::from_bits(if rng.gen() { PAIR_FLAT } else { PAIR_STEEP_UP }),
        _ => cell,
    }
}
