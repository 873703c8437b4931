//! Startup configuration surface
//!
//! The host supplies an ordered set of raw shape definitions plus the board
//! parameters once at startup. Both types derive serde so a host can load
//! them from JSON; the engine itself never touches the filesystem.

use serde::{Deserialize, Serialize};

use blockfield_types::{Bounds, Cell};

/// One shape as supplied by the host, before validation.
///
/// `cells` are offsets of the occupied cells relative to the piece center.
/// `tile` is the opaque visual marker forwarded to the render layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShapeDefinition {
    pub id: String,
    pub cells: Vec<(i32, i32)>,
    pub tile: u16,
}

impl RawShapeDefinition {
    pub fn new(id: impl Into<String>, cells: Vec<(i32, i32)>, tile: u16) -> Self {
        Self {
            id: id.into(),
            cells,
            tile,
        }
    }
}

/// Board parameters supplied at startup.
///
/// The boundaries are centered on the origin, lower corner at
/// `(-width/2, -height/2)`. `spawn` is the center cell new pieces start at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub spawn: (i32, i32),
}

impl BoardConfig {
    pub fn new(width: i32, height: i32, spawn: (i32, i32)) -> Self {
        Self {
            width,
            height,
            spawn,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.width, self.height)
    }

    pub fn spawn_cell(&self) -> Cell {
        Cell::new(self.spawn.0, self.spawn.1)
    }
}
