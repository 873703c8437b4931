//! Board engine - the orchestrating state machine
//!
//! Owns the grid, the current falling piece, and the board boundaries.
//! Every movement, rotation, and spawn routes through a single
//! collision/bounds check; committing a piece runs line detection and
//! row compaction; a blocked spawn is the terminal board-full condition.
//!
//! Single-threaded and synchronous: every operation is a finite bounded
//! scan, invoked by one external driver loop. A multi-threaded host must
//! serialize calls itself.

use blockfield_types::{Bounds, Cell, Phase, RotationDirection, TileId};

use crate::catalog::{ShapeCatalog, ShapeCells};
use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::select::ShapeSelector;
use crate::snapshot::BoardSnapshot;

/// The board state machine.
///
/// Runtime failures never surface as errors: rejected moves and rotations
/// are `false` returns, and a blocked spawn transitions to
/// [`Phase::GameOver`] after wiping the grid.
#[derive(Debug, Clone)]
pub struct BoardEngine<S: ShapeSelector> {
    grid: Grid,
    piece: Piece,
    bounds: Bounds,
    spawn: Cell,
    catalog: ShapeCatalog,
    selector: S,
    phase: Phase,
    started: bool,
}

impl<S: ShapeSelector> BoardEngine<S> {
    /// Validate the board parameters and build an idle engine with an empty
    /// grid. Call [`start`](Self::start) to spawn the first piece.
    pub fn new(config: BoardConfig, catalog: ShapeCatalog, selector: S) -> Result<Self, ConfigError> {
        if config.width <= 0 || config.height <= 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let bounds = config.bounds();
        let spawn = config.spawn_cell();
        if !bounds.contains(spawn) {
            return Err(ConfigError::SpawnOutOfBounds { spawn });
        }

        Ok(Self {
            grid: Grid::new(bounds),
            piece: Piece::idle(),
            bounds,
            spawn,
            catalog,
            selector,
            phase: Phase::Spawning,
            started: false,
        })
    }

    /// Spawn the first piece. No-op on an already started engine.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn spawn_cell(&self) -> Cell {
        self.spawn
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// The live falling piece, if one is in play.
    pub fn piece(&self) -> Option<&Piece> {
        match self.phase {
            Phase::Falling => Some(&self.piece),
            _ => None,
        }
    }

    /// Select a shape and reset the current piece at the spawn cell.
    ///
    /// A blocked spawn is the terminal board-full condition: the grid is
    /// wiped and the engine transitions to `GameOver`. Returns true when a
    /// piece entered play.
    pub fn spawn_piece(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.phase = Phase::Spawning;

        // Uniform over the whole catalog; the modulo keeps a misbehaving
        // selector from indexing out of range.
        let index = self.selector.pick(self.catalog.len()) % self.catalog.len();
        let shape = &self.catalog[index];
        self.piece.reset(self.spawn, index, shape);

        if self.position_blocked(self.piece.cells(), self.spawn) {
            self.grid.clear_all();
            self.phase = Phase::GameOver;
            return false;
        }

        self.phase = Phase::Falling;
        true
    }

    /// Single authority for collision and bounds checks.
    ///
    /// True (= invalid) iff any offset, placed at `center`, lands outside
    /// the boundaries or on an occupied cell. Short-circuits on the first
    /// violation; the result is order-independent.
    pub fn position_blocked(&self, cells: &[Cell], center: Cell) -> bool {
        cells.iter().any(|&offset| {
            let absolute = offset + center;
            !self.bounds.contains(absolute) || self.grid.is_occupied(absolute)
        })
    }

    /// Try to move the falling piece by `delta`.
    ///
    /// A rejected move leaves the piece unchanged; what a rejection means is
    /// the driver's call (a rejected downward move is the usual cue to
    /// lock). Always rejected outside the `Falling` phase.
    pub fn attempt_move(&mut self, delta: Cell) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let candidate = self.piece.translated(delta);
        if self.position_blocked(self.piece.cells(), candidate) {
            return false;
        }
        self.piece.set_center(candidate);
        true
    }

    /// Try to rotate the falling piece 90 degrees about its center.
    ///
    /// Validated at the current center; the center never changes, only the
    /// occupied offsets. Rejected rotations leave the piece unchanged.
    pub fn attempt_rotate(&mut self, direction: RotationDirection) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let rotated: ShapeCells = self.piece.rotated(direction);
        if self.position_blocked(&rotated, self.piece.center()) {
            return false;
        }
        self.piece.set_cells(rotated);
        true
    }

    /// Commit the falling piece into the grid, clear completed rows, and
    /// spawn the next piece. Returns the number of rows cleared.
    pub fn lock_piece(&mut self) -> u32 {
        if self.phase != Phase::Falling {
            return 0;
        }
        self.phase = Phase::Locking;

        let tile = self.piece.tile();
        let center = self.piece.center();
        for &offset in self.piece.cells() {
            self.grid.set(offset + center, Some(tile));
        }

        let cleared = self.clear_lines();
        self.spawn_piece();
        cleared
    }

    /// Remove every full row and settle the rows above downward.
    ///
    /// The row index is re-examined after a clear (the row shifted down into
    /// its place may be full as well) and advances only past non-full rows,
    /// so any number of simultaneously full rows compacts in one pass.
    /// Returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.bounds.y_min();

        while row < self.bounds.y_max() {
            if self.grid.row_is_full(row) {
                self.grid.clear_row(row);
                self.shift_rows_down_from(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }

        cleared
    }

    /// Copy each row's occupancy from the row above, from `row` to the top.
    /// The topmost row pulls from outside the boundaries and comes out
    /// empty.
    fn shift_rows_down_from(&mut self, row: i32) {
        for y in row..self.bounds.y_max() {
            self.grid.shift_row_down(y);
        }
    }

    /// Erase the falling piece's footprint from the grid. Idempotent.
    ///
    /// With [`draw_piece`](Self::draw_piece), the only grid-visible effects
    /// of an in-flight piece: the render layer clears the old position and
    /// draws the new one each frame without permanently committing it. A
    /// drawn footprint occupies the grid for validation, so the driver
    /// clears the piece before attempting moves and redraws afterwards.
    pub fn clear_piece(&mut self) {
        self.stamp_piece(None);
    }

    /// Write the falling piece's tile marker at its current footprint.
    pub fn draw_piece(&mut self) {
        if self.phase != Phase::Falling {
            return;
        }
        self.stamp_piece(Some(self.piece.tile()));
    }

    fn stamp_piece(&mut self, tile: Option<TileId>) {
        if self.phase != Phase::Falling {
            return;
        }
        let center = self.piece.center();
        for &offset in self.piece.cells() {
            self.grid.set(offset + center, tile);
        }
    }

    /// External reset after a game over: empty grid, idle engine, ready to
    /// `start` again.
    pub fn reset(&mut self) {
        self.grid.clear_all();
        self.phase = Phase::Spawning;
        self.started = false;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut out = BoardSnapshot::new(self.bounds);
        self.snapshot_into(&mut out);
        out
    }

    /// Refill an existing snapshot without reallocating.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.fill_from(&self.grid, self.phase);
    }
}
