//! Wall behavior: reflector permanence, outer-ring containment, and the
//! two-step bounce-back round trip.

use glam::Vec2;
use sim::{
    create_cavity_tank, create_tank, Cell, HexDir, Lattice, LgaSimulation, SeedDensity,
    SquareDir,
};

const W: usize = 48;
const H: usize = 36;

#[test]
fn reflector_flags_are_permanent() {
    let mut sim = LgaSimulation::new(Lattice::Hex, W, H, Some(21));
    create_cavity_tank(&mut sim, Vec2::new(24.0, 18.0), 8.0, SeedDensity::Full);
    let walls = sim.grid().reflector_count();

    for _ in 0..100 {
        sim.step();
        assert_eq!(sim.grid().reflector_count(), walls);
        for x in 1..W - 1 {
            assert!(sim.grid().get(x, 1).is_reflector());
            assert!(sim.grid().get(x, H - 2).is_reflector());
        }
        for y in 1..H - 1 {
            assert!(sim.grid().get(1, y).is_reflector());
            assert!(sim.grid().get(W - 2, y).is_reflector());
        }
    }
}

#[test]
fn outer_ring_never_gains_particles() {
    for lattice in [Lattice::Square, Lattice::Hex] {
        let mut sim = LgaSimulation::new(lattice, W, H, Some(22));
        create_cavity_tank(&mut sim, Vec2::new(24.0, 18.0), 8.0, SeedDensity::Full);
        for step in 0..100 {
            sim.step();
            for x in 0..W {
                assert_eq!(sim.grid().get(x, 0), Cell::EMPTY, "step {step}, ({x},0)");
                assert_eq!(sim.grid().get(x, H - 1), Cell::EMPTY, "step {step}, ({x},{})", H - 1);
            }
            for y in 0..H {
                assert_eq!(sim.grid().get(0, y), Cell::EMPTY, "step {step}, (0,{y})");
                assert_eq!(sim.grid().get(W - 1, y), Cell::EMPTY, "step {step}, ({},{y})", W - 1);
            }
        }
    }
}

#[test]
fn square_wall_bounces_particle_back() {
    let mut sim = LgaSimulation::new(Lattice::Square, 16, 16, Some(0));
    create_tank(&mut sim);
    let (e, w) = (SquareDir::East.bit(), SquareDir::West.bit());
    // East wall sits at x = 14; launch an east-bound particle toward it.
    sim.grid_mut().set(12, 8, Cell::EMPTY.with(e));

    sim.step();
    assert!(sim.grid().get(13, 8).has(e));

    sim.step();
    let wall = sim.grid().get(14, 8);
    assert!(wall.is_reflector());
    assert!(wall.has(w), "wall must reverse the arrival");
    assert_eq!(sim.total_particles(), 1);

    sim.step();
    assert!(sim.grid().get(13, 8).has(w), "particle must come back out");
    assert_eq!(sim.total_particles(), 1);
}

#[test]
fn hex_wall_bounces_particle_back() {
    let mut sim = LgaSimulation::new(Lattice::Hex, 16, 16, Some(0));
    create_tank(&mut sim);
    let (mr, ml) = (HexDir::MidRight.bit(), HexDir::MidLeft.bit());
    sim.grid_mut().set(12, 8, Cell::EMPTY.with(mr));

    sim.step();
    assert!(sim.grid().get(13, 8).has(mr));

    sim.step();
    let wall = sim.grid().get(14, 8);
    assert!(wall.is_reflector());
    assert!(wall.has(ml), "wall must reverse the arrival");

    sim.step();
    assert!(sim.grid().get(13, 8).has(ml), "particle must come back out");
    assert_eq!(sim.total_particles(), 1);
}

/// Reflection happens even while other particles pass nearby: the wall
/// rule acts on the whole gathered mask, not on single particles.
#[test]
fn wall_reverses_every_gathered_particle() {
    let mut sim = LgaSimulation::new(Lattice::Square, 16, 16, Some(0));
    create_tank(&mut sim);
    let (n, s, e, w) = (
        SquareDir::North.bit(),
        SquareDir::South.bit(),
        SquareDir::East.bit(),
        SquareDir::West.bit(),
    );
    // Two particles converge on the same east-wall cell (14, 8), one of
    // them already travelling inside the wall ring.
    sim.grid_mut().set(13, 8, Cell::EMPTY.with(e));
    sim.grid_mut().set(14, 9, Cell::REFLECTOR.with(n));

    sim.step();
    let wall = sim.grid().get(14, 8);
    assert_eq!(wall.particles(), w | s, "both arrivals reversed together");
    assert_eq!(sim.total_particles(), 2);
}
