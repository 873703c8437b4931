//! Board snapshot for the render driver

use blockfield_types::{Bounds, Cell, Phase, TileId};

use crate::grid::Grid;

/// Flat copy of the board occupancy plus the engine phase, handed to the
/// render layer each frame. Refill with
/// [`BoardEngine::snapshot_into`](crate::engine::BoardEngine::snapshot_into)
/// to avoid reallocating.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    bounds: Bounds,
    phase: Phase,
    cells: Vec<Option<TileId>>,
}

impl BoardSnapshot {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            phase: Phase::Spawning,
            cells: vec![None; bounds.cell_count()],
        }
    }

    pub(crate) fn fill_from(&mut self, grid: &Grid, phase: Phase) {
        self.bounds = grid.bounds();
        self.phase = phase;
        self.cells.clear();
        self.cells.extend_from_slice(grid.cells());
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tile at the cell; `None` when empty or outside the boundaries.
    pub fn tile(&self, cell: Cell) -> Option<TileId> {
        if !self.bounds.contains(cell) {
            return None;
        }
        let col = (cell.x - self.bounds.x_min()) as usize;
        let row = (cell.y - self.bounds.y_min()) as usize;
        self.cells[row * self.bounds.width() as usize + col]
    }

    /// Row-major flat view from the lower corner of the boundaries.
    pub fn cells(&self) -> &[Option<TileId>] {
        &self.cells
    }
}
