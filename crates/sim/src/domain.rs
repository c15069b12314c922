//! Domain setup: reflecting tank walls, circular cavity, random seeding.
//!
//! The reference domain is a rectangular tank whose wall ring sits one
//! cell inside the grid border, with an empty circular cavity left in the
//! seeded gas to make the flow visible as it fills back in.

use glam::Vec2;
use rand::Rng;

use crate::cell::Cell;
use crate::lga::LgaSimulation;

/// Interior seeding density.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeedDensity {
    /// Every eligible cell receives exactly one particle.
    Full,
    /// Each eligible cell is left empty with probability 1/2.
    Half,
}

/// Mark the wall ring one cell inside the border of both buffers' domain.
/// Walls overwrite whatever the cell held, so the reflector flag always
/// wins over any particle seeded there earlier.
pub fn create_tank(sim: &mut LgaSimulation) {
    sim.clear();
    add_walls(sim);
}

/// Tank walls plus a randomly seeded interior with an empty circular
/// cavity at `center` (grid coordinates) of the given `radius`.
///
/// Seeding covers only cells strictly inside the wall ring: the outermost
/// ring is never updated by the driver, so a particle placed there would
/// be re-gathered by its wall neighbor every step, injecting mass out of
/// nothing. Seeding draws from the simulation's own RNG, so a seeded
/// `LgaSimulation` reproduces the same domain.
pub fn create_cavity_tank(
    sim: &mut LgaSimulation,
    center: Vec2,
    radius: f32,
    density: SeedDensity,
) {
    sim.clear();
    let lattice = sim.lattice();
    let (grid, rng) = sim.grid_and_rng_mut();
    let (w, h) = (grid.width, grid.height);
    for y in 2..h - 2 {
        for x in 2..w - 2 {
            if center.distance(Vec2::new(x as f32, y as f32)) < radius {
                continue;
            }
            if density == SeedDensity::Half && rng.gen() {
                continue;
            }
            let bit = lattice.random_direction_bit(rng);
            grid.set(x, y, Cell::EMPTY.with(bit));
        }
    }
    add_walls(sim);
}

fn add_walls(sim: &mut LgaSimulation) {
    let grid = sim.grid_mut();
    let (w, h) = (grid.width, grid.height);
    for x in 1..w - 1 {
        grid.set(x, 1, Cell::REFLECTOR);
        grid.set(x, h - 2, Cell::REFLECTOR);
    }
    for y in 1..h - 1 {
        grid.set(1, y, Cell::REFLECTOR);
        grid.set(w - 2, y, Cell::REFLECTOR);
    }
}
