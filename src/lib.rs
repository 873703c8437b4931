//! Blockfield (workspace facade crate).
//!
//! This package keeps the public `blockfield::{core,types}` API stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use blockfield_core as core;
pub use blockfield_types as types;
