//! Fixed-size cell grid with flat row-major storage.

use crate::cell::Cell;

/// W x H array of cells, (0,0) at the top-left corner, y growing downward.
#[derive(Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate an all-empty grid. The wall ring sits one cell inside the
    /// border, so anything smaller than 4x4 has no room for it.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 4 && height >= 4,
            "grid must be at least 4x4 to hold the wall ring"
        );
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    #[inline]
    pub fn cell_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.cell_index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.cell_index(x, y);
        self.cells[idx] = cell;
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Total particle count over the whole grid (diagnostic; the transition
    /// rule conserves it in a walled domain).
    pub fn total_particles(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.particle_count())).sum()
    }

    /// Number of reflector-flagged cells (diagnostic).
    pub fn reflector_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_reflector()).count()
    }
}
