//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by the grid engine.
//! All types are plain data with no engine behaviour attached, so they can be
//! shared between the engine, a renderer and whatever fills the grid.
//!
//! # Coordinates
//!
//! - `x` grows left to right, `y` grows top to bottom
//! - `(0, 0)` is the top-left cell
//! - Coordinates are signed so that neighbour arithmetic can step off the
//!   grid; the grid reports such positions as absent instead of failing
//!
//! # Directions
//!
//! | Direction | Vector |
//! |-----------|--------|
//! | `Up` | `(0, -1)` |
//! | `Down` | `(0, 1)` |
//! | `Right` | `(1, 0)` |
//! | `Left` | `(-1, 0)` |
//!
//! Diagonals are never adjacent.
//!
//! # Examples
//!
//! ```
//! use match_grid_types::{Content, Coords, Direction, Gravity, GridConfig};
//!
//! let origin = Coords::new(2, 2);
//! assert_eq!(origin.offset(Direction::Up, 1), Coords::new(2, 1));
//! assert_eq!(origin.offset(Direction::Right, 3), Coords::new(5, 2));
//!
//! assert_eq!(Gravity::from_str("DOWN"), Some(Gravity::Down));
//! assert_eq!(Gravity::Down.direction(), Some(Direction::Down));
//!
//! let config = GridConfig::new(8, 6).gravity(Gravity::Left);
//! assert_eq!(config.width, 8);
//!
//! let empty: Content<char> = Content::Empty;
//! assert_ne!(empty, Content::Filled('a'));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default grid width when none is configured
pub const DEFAULT_WIDTH: usize = 10;

/// Default grid height when none is configured
pub const DEFAULT_HEIGHT: usize = 10;

/// Smallest connected group that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Reserved type name of the empty sentinel
pub const EMPTY_TYPE_NAME: &str = "empty";

/// A position on (or next to) the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position `distance` steps away in `direction`
    ///
    /// Saturates at the `i32` bounds, which always lie off any grid.
    pub fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.saturating_add(distance.saturating_mul(dx)),
            y: self.y.saturating_add(distance.saturating_mul(dy)),
        }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// All directions, in the order neighbour queries visit them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Unit vector `(dx, dy)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
        }
    }

    /// True for left/right
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction pieces settle toward, fixed when the grid is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Gravity {
    /// Parse gravity from string (case-insensitive)
    ///
    /// An empty string and `"false"` both mean no gravity.
    ///
    /// # Examples
    ///
    /// ```
    /// use match_grid_types::Gravity;
    ///
    /// assert_eq!(Gravity::from_str("up"), Some(Gravity::Up));
    /// assert_eq!(Gravity::from_str("false"), Some(Gravity::None));
    /// assert_eq!(Gravity::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "false" => Some(Gravity::None),
            "up" => Some(Gravity::Up),
            "down" => Some(Gravity::Down),
            "left" => Some(Gravity::Left),
            "right" => Some(Gravity::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gravity::None => "none",
            Gravity::Up => "up",
            Gravity::Down => "down",
            Gravity::Left => "left",
            Gravity::Right => "right",
        }
    }

    /// Direction pieces fall toward, `None` when gravity is off
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Gravity::None => None,
            Gravity::Up => Some(Direction::Up),
            Gravity::Down => Some(Direction::Down),
            Gravity::Left => Some(Direction::Left),
            Gravity::Right => Some(Direction::Right),
        }
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a cell currently holds
///
/// `Empty` is the single shared sentinel: every empty cell compares equal to
/// every other empty cell and unequal to any filled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Content<K> {
    Empty,
    Filled(K),
}

impl<K> Content<K> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    /// Piece type, `None` for the empty sentinel
    pub fn kind(&self) -> Option<&K> {
        match self {
            Content::Empty => None,
            Content::Filled(kind) => Some(kind),
        }
    }
}

impl<K> Default for Content<K> {
    fn default() -> Self {
        Content::Empty
    }
}

impl<K> From<Option<K>> for Content<K> {
    fn from(value: Option<K>) -> Self {
        match value {
            Some(kind) => Content::Filled(kind),
            None => Content::Empty,
        }
    }
}

impl<K: fmt::Display> fmt::Display for Content<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => f.write_str(EMPTY_TYPE_NAME),
            Content::Filled(kind) => kind.fmt(f),
        }
    }
}

/// Construction options for a grid
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub gravity: Gravity,
}

impl GridConfig {
    /// Config with the given size and no gravity
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            gravity: Gravity::None,
        }
    }

    /// Set the gravity direction
    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Parse from a JSON object such as `{"width": 8, "gravity": "down"}`
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
