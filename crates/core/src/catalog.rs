//! Shape catalog - immutable piece shape definitions
//!
//! Validates the host-supplied raw definitions once at startup and caches
//! what spawning and layout need afterwards. Pure and deterministic: no
//! randomness or game logic lives here.

use std::ops::Index;

use arrayvec::ArrayVec;

use blockfield_types::{Cell, TileId};

use crate::config::RawShapeDefinition;
use crate::error::ConfigError;

/// Fixed per-shape cell capacity. Keeps piece cell lists on the stack.
pub const MAX_SHAPE_CELLS: usize = 8;

/// Fixed-capacity list of cell offsets.
pub type ShapeCells = ArrayVec<Cell, MAX_SHAPE_CELLS>;

/// Immutable named shape template: base offsets around the piece center,
/// the visual tile tag, and the offset bounding box cached at initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDefinition {
    id: String,
    tile: TileId,
    cells: ShapeCells,
    min_offset: Cell,
    max_offset: Cell,
}

impl ShapeDefinition {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tile(&self) -> TileId {
        self.tile
    }

    /// Base offsets, in the order the definition supplied them.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Inclusive lower corner of the offset bounding box.
    pub fn min_offset(&self) -> Cell {
        self.min_offset
    }

    /// Inclusive upper corner of the offset bounding box.
    pub fn max_offset(&self) -> Cell {
        self.max_offset
    }
}

/// Ordered, startup-validated set of shape definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeCatalog {
    shapes: Vec<ShapeDefinition>,
}

impl ShapeCatalog {
    /// Validate the raw definitions and build the catalog. Called once at
    /// startup; the catalog never changes afterwards.
    pub fn initialize(raw: &[RawShapeDefinition]) -> Result<Self, ConfigError> {
        let mut shapes = Vec::with_capacity(raw.len());

        for def in raw {
            if def.cells.is_empty() {
                return Err(ConfigError::EmptyShape {
                    shape: def.id.clone(),
                });
            }
            if def.cells.len() > MAX_SHAPE_CELLS {
                return Err(ConfigError::OversizedShape {
                    shape: def.id.clone(),
                    cells: def.cells.len(),
                });
            }

            let mut cells = ShapeCells::new();
            let mut min_offset = Cell::new(i32::MAX, i32::MAX);
            let mut max_offset = Cell::new(i32::MIN, i32::MIN);
            for &(x, y) in &def.cells {
                let cell = Cell::new(x, y);
                if cells.contains(&cell) {
                    return Err(ConfigError::DuplicateOffset {
                        shape: def.id.clone(),
                        cell,
                    });
                }
                min_offset = Cell::new(min_offset.x.min(x), min_offset.y.min(y));
                max_offset = Cell::new(max_offset.x.max(x), max_offset.y.max(y));
                cells.push(cell);
            }

            shapes.push(ShapeDefinition {
                id: def.id.clone(),
                tile: TileId(def.tile),
                cells,
                min_offset,
                max_offset,
            });
        }

        Ok(Self { shapes })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShapeDefinition> {
        self.shapes.get(index)
    }

    /// First definition with the given id.
    pub fn by_id(&self, id: &str) -> Option<&ShapeDefinition> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeDefinition> {
        self.shapes.iter()
    }
}

impl Index<usize> for ShapeCatalog {
    type Output = ShapeDefinition;

    fn index(&self, index: usize) -> &ShapeDefinition {
        &self.shapes[index]
    }
}
