//! Core grid engine - pure, deterministic, and testable
//!
//! This crate owns the grid model and the two algorithms that act on it:
//! match detection and gravity settling. It has **zero dependencies** on
//! rendering, input, timing or scoring, making it:
//!
//! - **Deterministic**: the same grid always yields the same matches and settle result
//! - **Testable**: every rule is covered by unit tests beside the code
//! - **Portable**: usable from a terminal demo, a game engine, or headless tests
//!
//! # Module Structure
//!
//! - [`grid`]: the rectangle of pieces, coordinate and neighbour queries, rows, columns, swaps
//! - [`piece`]: one cell with fixed coordinates and mutable content
//! - [`matching`]: flood-fill match detection and clearing
//! - [`gravity`]: per-line settling toward the configured direction
//! - [`debug`]: text dump of the grid
//! - [`config`]: grid options from environment variables
//! - [`error`]: construction errors
//!
//! # Game Cycle
//!
//! The caller drives the cycle; the engine never fills cells itself:
//!
//! 1. **Fill**: assign content to empty pieces
//! 2. **Match**: [`Grid::get_matches`] finds groups of 3 or more
//! 3. **Clear**: [`Grid::clear_matches`] empties them
//! 4. **Settle**: [`Grid::apply_gravity`] packs pieces and reports the movers
//! 5. Repeat from 1
//!
//! # Example
//!
//! ```
//! use match_grid_core::Grid;
//! use match_grid_core::types::{Content, Coords, Gravity, GridConfig};
//!
//! let mut grid: Grid<char> = Grid::new(GridConfig::new(3, 3).gravity(Gravity::Down)).unwrap();
//!
//! // Three in the middle row plus one on top
//! for x in 0..3 {
//!     grid.set_content(Coords::new(x, 1), Content::Filled('a'));
//! }
//! grid.set_content(Coords::new(1, 0), Content::Filled('b'));
//!
//! assert_eq!(grid.get_matches().len(), 1);
//! assert!(grid.clear_matches());
//!
//! // The 'b' falls to the bottom row
//! let moved = grid.apply_gravity();
//! assert_eq!(moved.len(), 1);
//! assert_eq!(moved[0].coords(), Coords::new(1, 2));
//! ```

pub mod config;
pub mod debug;
pub mod error;
pub mod gravity;
pub mod grid;
pub mod matching;
pub mod piece;

pub use match_grid_types as types;

// Re-export commonly used types for convenience
pub use config::{config_from_env, parse_gravity};
pub use error::GridError;
pub use grid::{Grid, Neighbours};
pub use matching::Match;
pub use piece::Piece;
