//! Piece module - the single falling piece
//!
//! One `Piece` lives for the whole session and is reset in place on every
//! spawn, so a render adapter holding a handle to "the current piece" stays
//! valid across respawns. Transforms are pure: movement and rotation produce
//! candidates that the engine validates before committing.

use blockfield_types::{Cell, RotationDirection, TileId};

use crate::catalog::{ShapeCells, ShapeDefinition};

/// The currently falling, movable set of cells around a center.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    center: Cell,
    /// Current occupied offsets; differ from the shape's base offsets after
    /// rotation.
    cells: ShapeCells,
    tile: TileId,
    shape_index: usize,
}

impl Piece {
    /// Placeholder before the first spawn; `reset` replaces everything.
    pub(crate) fn idle() -> Self {
        Self {
            center: Cell::new(0, 0),
            cells: ShapeCells::new(),
            tile: TileId(0),
            shape_index: 0,
        }
    }

    /// Re-initialize in place for a spawn: new center, base offsets copied
    /// from the definition (any prior rotation is discarded).
    pub(crate) fn reset(&mut self, center: Cell, shape_index: usize, shape: &ShapeDefinition) {
        self.center = center;
        self.cells.clear();
        self.cells.extend(shape.cells().iter().copied());
        self.tile = shape.tile();
        self.shape_index = shape_index;
    }

    pub fn center(&self) -> Cell {
        self.center
    }

    /// Current occupied offsets, in insertion order from the shape
    /// definition. The order carries no meaning but is stable, which keeps
    /// collision checks and assertions deterministic.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn tile(&self) -> TileId {
        self.tile
    }

    /// Index of the shape definition this piece was spawned from.
    pub fn shape_index(&self) -> usize {
        self.shape_index
    }

    /// Candidate center after moving by `delta`. Pure; nothing is committed
    /// until the engine validates the position.
    pub fn translated(&self, delta: Cell) -> Cell {
        self.center + delta
    }

    /// Candidate offsets after a 90-degree rotation about the center. Pure;
    /// the center itself never moves.
    pub fn rotated(&self, direction: RotationDirection) -> ShapeCells {
        self.cells.iter().map(|c| c.rotated(direction)).collect()
    }

    pub(crate) fn set_center(&mut self, center: Cell) {
        self.center = center;
    }

    pub(crate) fn set_cells(&mut self, cells: ShapeCells) {
        self.cells = cells;
    }
}
