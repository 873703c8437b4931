//! Grid module - bounded occupancy map of the board
//!
//! Flat row-major storage indexed from the lower corner of the boundaries,
//! for cache locality and no per-cell allocation. Coordinates may be
//! negative: the boundaries carry their own origin. Row `y + 1` is directly
//! above row `y`.

use blockfield_types::{Bounds, Cell, TileId};

/// The board occupancy map. Boundaries are fixed at construction; there is
/// no implicit resizing.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    bounds: Bounds,
    /// Row-major, `(y - y_min) * width + (x - x_min)`.
    cells: Vec<Option<TileId>>,
}

impl Grid {
    /// Create an empty grid covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![None; bounds.cell_count()],
        }
    }

    /// Calculate flat index for a cell. Returns `None` out of bounds.
    #[inline(always)]
    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.bounds.contains(cell) {
            return None;
        }
        let col = (cell.x - self.bounds.x_min()) as usize;
        let row = (cell.y - self.bounds.y_min()) as usize;
        Some(row * self.bounds.width() as usize + col)
    }

    /// Flat start index of row `y`. Caller guarantees the row is in range.
    fn row_start(&self, y: i32) -> usize {
        (y - self.bounds.y_min()) as usize * self.bounds.width() as usize
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// True iff the cell lies within the boundaries, independent of
    /// occupancy.
    pub fn contains(&self, cell: Cell) -> bool {
        self.bounds.contains(cell)
    }

    /// Tile marker at the cell; `None` when empty or out of bounds.
    pub fn tile(&self, cell: Cell) -> Option<TileId> {
        self.index(cell).and_then(|idx| self.cells[idx])
    }

    /// True iff an entry exists at the cell.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.tile(cell).is_some()
    }

    /// Write or clear a single cell's occupancy.
    ///
    /// No bounds enforcement beyond ignoring out-of-range writes: the caller
    /// is expected to have validated the position, which keeps the primitive
    /// O(1) with no side effect beyond the single write.
    pub fn set(&mut self, cell: Cell, tile: Option<TileId>) {
        if let Some(idx) = self.index(cell) {
            self.cells[idx] = tile;
        }
    }

    /// True iff every x in `[x_min, x_max)` at row `y` is occupied.
    pub fn row_is_full(&self, y: i32) -> bool {
        if y < self.bounds.y_min() || y >= self.bounds.y_max() {
            return false;
        }
        let start = self.row_start(y);
        let width = self.bounds.width() as usize;
        self.cells[start..start + width].iter().all(|c| c.is_some())
    }

    /// Set every cell in row `y` to empty.
    pub fn clear_row(&mut self, y: i32) {
        if y < self.bounds.y_min() || y >= self.bounds.y_max() {
            return;
        }
        let start = self.row_start(y);
        let width = self.bounds.width() as usize;
        for cell in &mut self.cells[start..start + width] {
            *cell = None;
        }
    }

    /// Copy row `y + 1`'s occupancy into row `y`, cell by cell.
    ///
    /// The topmost row has no row above inside the boundaries and comes out
    /// empty.
    pub fn shift_row_down(&mut self, y: i32) {
        if y < self.bounds.y_min() || y >= self.bounds.y_max() {
            return;
        }
        let dst = self.row_start(y);
        let width = self.bounds.width() as usize;
        if y + 1 < self.bounds.y_max() {
            // copy_within handles the adjacent-row overlap safely
            let src = dst + width;
            self.cells.copy_within(src..src + width, dst);
        } else {
            for cell in &mut self.cells[dst..dst + width] {
                *cell = None;
            }
        }
    }

    /// Reset every cell to empty (the game-over wipe).
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Read-only view of the flat storage, row-major from the lower corner.
    pub fn cells(&self) -> &[Option<TileId>] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_6x6() -> Grid {
        Grid::new(Bounds::centered(6, 6))
    }

    #[test]
    fn test_new_grid_empty() {
        let grid = grid_6x6();
        for y in -3..3 {
            for x in -3..3 {
                let cell = Cell::new(x, y);
                assert!(grid.contains(cell));
                assert!(!grid.is_occupied(cell));
            }
        }
    }

    #[test]
    fn test_contains_tracks_bounds_only() {
        let mut grid = grid_6x6();
        grid.set(Cell::new(0, 0), Some(TileId(1)));

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(-3, -3)));
        assert!(!grid.contains(Cell::new(3, 0)));
        assert!(!grid.contains(Cell::new(0, -4)));
    }

    #[test]
    fn test_set_and_tile() {
        let mut grid = grid_6x6();
        grid.set(Cell::new(1, -2), Some(TileId(7)));

        assert_eq!(grid.tile(Cell::new(1, -2)), Some(TileId(7)));
        assert!(grid.is_occupied(Cell::new(1, -2)));

        grid.set(Cell::new(1, -2), None);
        assert_eq!(grid.tile(Cell::new(1, -2)), None);
        assert!(!grid.is_occupied(Cell::new(1, -2)));
    }

    #[test]
    fn test_set_out_of_bounds_ignored() {
        let mut grid = grid_6x6();
        grid.set(Cell::new(10, 10), Some(TileId(1)));
        assert!(grid.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_row_is_full() {
        let mut grid = grid_6x6();
        assert!(!grid.row_is_full(-3));

        for x in -3..3 {
            grid.set(Cell::new(x, -3), Some(TileId(2)));
        }
        assert!(grid.row_is_full(-3));

        // one hole left open
        for x in -3..2 {
            grid.set(Cell::new(x, -2), Some(TileId(2)));
        }
        assert!(!grid.row_is_full(-2));

        // out-of-range rows are never full
        assert!(!grid.row_is_full(3));
        assert!(!grid.row_is_full(-4));
    }

    #[test]
    fn test_clear_row() {
        let mut grid = grid_6x6();
        for x in -3..3 {
            grid.set(Cell::new(x, 0), Some(TileId(3)));
        }
        grid.set(Cell::new(0, 1), Some(TileId(4)));

        grid.clear_row(0);

        for x in -3..3 {
            assert!(!grid.is_occupied(Cell::new(x, 0)));
        }
        // neighbouring rows untouched
        assert!(grid.is_occupied(Cell::new(0, 1)));
    }

    #[test]
    fn test_shift_row_down_copies_row_above() {
        let mut grid = grid_6x6();
        grid.set(Cell::new(-1, 1), Some(TileId(5)));
        grid.set(Cell::new(2, 1), Some(TileId(6)));
        grid.set(Cell::new(0, 0), Some(TileId(9)));

        grid.shift_row_down(0);

        assert_eq!(grid.tile(Cell::new(-1, 0)), Some(TileId(5)));
        assert_eq!(grid.tile(Cell::new(2, 0)), Some(TileId(6)));
        // cells empty above stay empty below
        assert!(!grid.is_occupied(Cell::new(0, 0)));
        // the source row itself is untouched
        assert!(grid.is_occupied(Cell::new(-1, 1)));
    }

    #[test]
    fn test_shift_topmost_row_empties_it() {
        let mut grid = grid_6x6();
        for x in -3..3 {
            grid.set(Cell::new(x, 2), Some(TileId(1)));
        }

        grid.shift_row_down(2);

        for x in -3..3 {
            assert!(!grid.is_occupied(Cell::new(x, 2)));
        }
    }

    #[test]
    fn test_clear_all() {
        let mut grid = grid_6x6();
        for y in -3..3 {
            grid.set(Cell::new(0, y), Some(TileId(1)));
        }

        grid.clear_all();
        assert!(grid.cells().iter().all(|c| c.is_none()));
    }
}
