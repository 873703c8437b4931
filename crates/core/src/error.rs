//! Configuration-time error taxonomy
//!
//! Runtime failures never surface as errors: invalid moves are rejected
//! booleans and a blocked spawn is the `GameOver` transition. The only
//! fallible calls are the startup ones that ingest configuration.

use std::fmt;

use blockfield_types::Cell;

/// Malformed startup configuration. Fatal: no partial catalog or engine is
/// ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A shape definition supplied zero cells.
    EmptyShape { shape: String },
    /// A shape definition listed the same offset twice.
    DuplicateOffset { shape: String, cell: Cell },
    /// A shape definition exceeded the fixed per-shape cell capacity.
    OversizedShape { shape: String, cells: usize },
    /// The catalog has no shapes to spawn from.
    EmptyCatalog,
    /// Board width or height is not positive.
    EmptyBoard,
    /// The configured spawn cell lies outside the board boundaries.
    SpawnOutOfBounds { spawn: Cell },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyShape { shape } => {
                write!(f, "shape definition '{shape}' has no cells")
            }
            ConfigError::DuplicateOffset { shape, cell } => {
                write!(
                    f,
                    "shape definition '{shape}' repeats offset ({}, {})",
                    cell.x, cell.y
                )
            }
            ConfigError::OversizedShape { shape, cells } => {
                write!(f, "shape definition '{shape}' has {cells} cells, over capacity")
            }
            ConfigError::EmptyCatalog => write!(f, "shape catalog is empty"),
            ConfigError::EmptyBoard => write!(f, "board width and height must be positive"),
            ConfigError::SpawnOutOfBounds { spawn } => {
                write!(
                    f,
                    "spawn cell ({}, {}) lies outside the board boundaries",
                    spawn.x, spawn.y
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
