//! Core board engine - pure, deterministic, and testable
//!
//! This crate contains the whole logical core of a falling-block puzzle
//! game: board occupancy, piece placement validation, and line clearing.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: an injected selector makes piece sequences
//!   reproducible (for tests and replays)
//! - **Testable**: every rule is exercised without a host engine
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: bounded occupancy map with row queries and compaction
//!   primitives
//! - [`piece`]: the single falling piece and its pure transforms
//! - [`catalog`]: startup-validated, immutable shape definitions
//! - [`engine`]: the orchestrating state machine (spawn, move, rotate,
//!   lock, line clear, game over)
//! - [`select`]: injectable shape-selection policy
//! - [`config`]: the serde-backed startup configuration surface
//! - [`snapshot`]: board copies for the render driver
//! - [`error`]: configuration-time error taxonomy
//!
//! # Example
//!
//! ```
//! use blockfield_core::{BoardConfig, BoardEngine, RawShapeDefinition, ShapeCatalog};
//! use blockfield_core::select::UniformSelector;
//! use blockfield_types::Cell;
//!
//! let shapes = vec![
//!     RawShapeDefinition::new("square", vec![(0, 0), (1, 0), (0, 1), (1, 1)], 1),
//!     RawShapeDefinition::new("bar", vec![(-1, 0), (0, 0), (1, 0), (2, 0)], 2),
//! ];
//! let catalog = ShapeCatalog::initialize(&shapes).unwrap();
//! let config = BoardConfig::new(10, 20, (0, 8));
//!
//! let mut engine = BoardEngine::new(config, catalog, UniformSelector::new(12345)).unwrap();
//! engine.start();
//!
//! engine.attempt_move(Cell::new(0, -1));
//! assert!(!engine.is_game_over());
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod piece;
pub mod select;
pub mod snapshot;

pub use blockfield_types as types;

// Re-export commonly used types for convenience
pub use catalog::{ShapeCatalog, ShapeDefinition, MAX_SHAPE_CELLS};
pub use config::{BoardConfig, RawShapeDefinition};
pub use engine::BoardEngine;
pub use error::ConfigError;
pub use grid::Grid;
pub use piece::Piece;
pub use select::{ScriptedSelector, ShapeSelector, SimpleRng, UniformSelector};
pub use snapshot::BoardSnapshot;
