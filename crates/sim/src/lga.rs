//! Simulation driver: owns the double-buffered grid and advances the
//! automaton one whole-grid step at a time.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::Grid;
use crate::lattice::Lattice;

/// Lattice gas simulation state.
///
/// Two equally sized buffers exist at all times: `current` is read, `next`
/// is fully rewritten over the interior, then the two swap ownership. No
/// cell of the buffer being read is ever mutated within a step, so each
/// new cell depends only on the grid as it was when the step began.
pub struct LgaSimulation {
    lattice: Lattice,
    current: Grid,
    next: Grid,
    rng: StdRng,
    steps: u64,
}

impl LgaSimulation {
    /// Create an empty simulation. `seed` pins the RNG used for randomized
    /// collisions and domain seeding; pass `None` for an entropy seed.
    pub fn new(lattice: Lattice, width: usize, height: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            lattice,
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            rng,
            steps: 0,
        }
    }

    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// The grid as of the last completed step.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Mutable access for domain setup and tests. Callers must not hold
    /// the borrow across a step.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub(crate) fn grid_and_rng_mut(&mut self) -> (&mut Grid, &mut StdRng) {
        (&mut self.current, &mut self.rng)
    }

    /// Completed step count.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Total particles in the current buffer (diagnostic; invariant in a
    /// walled domain).
    pub fn total_particles(&self) -> u64 {
        self.current.total_particles()
    }

    /// Empty both buffers. Domain setup starts from this.
    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
    }

    /// Advance the automaton one time step.
    ///
    /// Every interior cell of `next` is overwritten from `current`, then
    /// the buffers swap. The outermost ring is never written: it was
    /// initialized empty and nothing ever streams into it, so border reads
    /// during interior updates stay in bounds without per-cell checks.
    pub fn step(&mut self) {
        let (w, h) = (self.current.width, self.current.height);
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let cell = self.lattice.update(&self.current, x, y, &mut self.rng);
                self.next.set(x, y, cell);
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.steps += 1;
    }
}
