//! Lattice topologies and the per-cell transition rule.
//!
//! One time step per cell is stream -> reflect-or-collide:
//! 1. Stream: gather each direction bit from the neighbor a particle
//!    travelling that way departs from (the reflector flag propagates in
//!    place).
//! 2. Reflect: wall cells reverse every gathered particle (bounce-back)
//!    and skip collisions.
//! 3. Collide: free cells rewrite configurations that are not
//!    collision-invariant; everything else passes through unchanged.
//!
//! Every cell reads only the previous grid, so the rule is a pure function
//! of the old neighborhood and the scan order within a step is irrelevant.

pub mod hex;
pub mod square;

pub use hex::HexDir;
pub use square::SquareDir;

use crate::cell::Cell;
use crate::grid::Grid;
use rand::Rng;

/// Lattice topology, chosen once at startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lattice {
    /// 4-direction square lattice (HPP).
    Square,
    /// 6-direction hexagonal lattice on a row-staggered grid (FHP-I).
    Hex,
}

impl Lattice {
    /// Number of travel directions.
    pub const fn directions(self) -> u8 {
        match self {
            Lattice::Square => 4,
            Lattice::Hex => 6,
        }
    }

    /// Advance one interior cell by one time step, reading only `old`.
    ///
    /// `rng` feeds the randomized hex head-on collisions; the square rule
    /// never draws from it.
    pub fn update(self, old: &Grid, x: usize, y: usize, rng: &mut impl Rng) -> Cell {
        let streamed = match self {
            Lattice::Square => square::stream(old, x, y),
            Lattice::Hex => hex::stream(old, x, y),
        };
        if streamed.is_reflector() {
            streamed.reversed(self.directions())
        } else {
            match self {
                Lattice::Square => square::collide(streamed),
                Lattice::Hex => hex::collide(streamed, rng),
            }
        }
    }

    /// One uniformly random direction bit, for domain seeding.
    pub fn random_direction_bit(self, rng: &mut impl Rng) -> u8 {
        match self {
            Lattice::Square => SquareDir::ALL[rng.gen_range(0..4)].bit(),
            Lattice::Hex => HexDir::ALL[rng.gen_range(0..6)].bit(),
        }
    }
}
