//! Match grid (workspace facade crate).
//!
//! Exposes `match_grid::{core,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use match_grid_core as core;
pub use match_grid_types as types;
