//! Grid module - owns the pieces and answers positional queries
//!
//! The grid is a `width` x `height` rectangle of pieces stored in a flat
//! vector, row-major (`y * width + x`). Pieces never move; swaps, clears and
//! gravity only exchange or reset content.
//! Coordinates: (x, y) with x growing to the right and y growing downward.
//!
//! Match detection lives in [`matching`](crate::matching), settling in
//! [`gravity`](crate::gravity) and the text dump in [`debug`](crate::debug).

use tracing::{debug, trace};

use crate::error::GridError;
use crate::piece::Piece;
use crate::types::{Content, Coords, Direction, Gravity, GridConfig};

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<K> {
    width: usize,
    height: usize,
    gravity: Gravity,
    /// Flat array of pieces, row-major order (y * width + x)
    pub(crate) pieces: Vec<Piece<K>>,
}

/// The four neighbours of a piece, `None` where the grid ends
#[derive(Debug, PartialEq, Eq)]
pub struct Neighbours<'g, K> {
    pub up: Option<&'g Piece<K>>,
    pub down: Option<&'g Piece<K>>,
    pub right: Option<&'g Piece<K>>,
    pub left: Option<&'g Piece<K>>,
}

impl<K> Clone for Neighbours<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Neighbours<'_, K> {}

impl<'g, K> Neighbours<'g, K> {
    pub fn get(&self, direction: Direction) -> Option<&'g Piece<K>> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Right => self.right,
            Direction::Left => self.left,
        }
    }

    /// Every direction with its neighbour slot, in [`Direction::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<&'g Piece<K>>)> + '_ {
        Direction::ALL.into_iter().map(move |dir| (dir, self.get(dir)))
    }
}

impl<K> Grid<K> {
    /// Create a grid with every piece empty
    ///
    /// Fails on a zero dimension or a size whose coordinates would not fit.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let GridConfig {
            width,
            height,
            gravity,
        } = config;

        if width == 0 {
            return Err(GridError::ZeroWidth);
        }
        if height == 0 {
            return Err(GridError::ZeroHeight);
        }
        let too_large = GridError::TooLarge { width, height };
        let w = i32::try_from(width).map_err(|_| too_large.clone())?;
        let h = i32::try_from(height).map_err(|_| too_large.clone())?;
        let len = width.checked_mul(height).ok_or(too_large)?;

        let mut pieces = Vec::with_capacity(len);
        for y in 0..h {
            for x in 0..w {
                pieces.push(Piece::new(x, y));
            }
        }

        debug!(width, height, %gravity, "grid created");
        Ok(Self {
            width,
            height,
            gravity,
            pieces,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Total number of pieces (`width * height`)
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false; a grid has at least one piece
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Calculate flat index from coordinates, `None` when off the grid
    #[inline(always)]
    pub(crate) fn index(&self, coords: Coords) -> Option<usize> {
        if !self.coords_in_world(coords) {
            return None;
        }
        Some(coords.y as usize * self.width + coords.x as usize)
    }

    /// Check if coordinates are inside the grid
    pub fn coords_in_world(&self, coords: Coords) -> bool {
        coords.x >= 0
            && coords.y >= 0
            && (coords.x as usize) < self.width
            && (coords.y as usize) < self.height
    }

    /// Piece at coordinates, `None` if out of bounds
    pub fn get_piece(&self, coords: Coords) -> Option<&Piece<K>> {
        self.index(coords).map(|idx| &self.pieces[idx])
    }

    /// Mutable piece at coordinates, for filling
    pub fn piece_mut(&mut self, coords: Coords) -> Option<&mut Piece<K>> {
        match self.index(coords) {
            Some(idx) => Some(&mut self.pieces[idx]),
            None => None,
        }
    }

    /// Set the content at coordinates
    /// Returns false if out of bounds
    pub fn set_content(&mut self, coords: Coords, content: Content<K>) -> bool {
        match self.piece_mut(coords) {
            Some(piece) => {
                piece.content = content;
                true
            }
            None => false,
        }
    }

    /// Neighbour of `piece` one step in `direction`
    pub fn neighbour_of(&self, piece: &Piece<K>, direction: Direction) -> Option<&Piece<K>> {
        self.get_piece(piece.relative_coordinates(direction, 1))
    }

    /// All four neighbours of `piece`, keeping the missing ones
    pub fn neighbours_of(&self, piece: &Piece<K>) -> Neighbours<'_, K> {
        Neighbours {
            up: self.neighbour_of(piece, Direction::Up),
            down: self.neighbour_of(piece, Direction::Down),
            right: self.neighbour_of(piece, Direction::Right),
            left: self.neighbour_of(piece, Direction::Left),
        }
    }

    /// Pieces of row `index` in increasing x, or decreasing x when `reverse`
    ///
    /// An out-of-range index gives an empty row.
    pub fn get_row(&self, index: usize, reverse: bool) -> Vec<&Piece<K>> {
        if index >= self.height {
            return Vec::new();
        }
        let start = index * self.width;
        let row = &self.pieces[start..start + self.width];
        if reverse {
            row.iter().rev().collect()
        } else {
            row.iter().collect()
        }
    }

    /// Pieces of column `index` in increasing y, or decreasing y when `reverse`
    pub fn get_column(&self, index: usize, reverse: bool) -> Vec<&Piece<K>> {
        if index >= self.width {
            return Vec::new();
        }
        let column = self.pieces[index..].iter().step_by(self.width);
        if reverse {
            column.rev().collect()
        } else {
            column.collect()
        }
    }

    /// Every piece once, row-major
    pub fn pieces(&self) -> impl DoubleEndedIterator<Item = &Piece<K>> + ExactSizeIterator {
        self.pieces.iter()
    }

    /// Every piece once, row-major, mutably
    pub fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece<K>> {
        self.pieces.iter_mut()
    }

    /// Call `f` on every piece, row-major
    pub fn for_each_piece<F>(&self, f: F)
    where
        F: FnMut(&Piece<K>),
    {
        self.pieces.iter().for_each(f);
    }

    /// Call `f` on every piece mutably, row-major
    pub fn for_each_piece_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut Piece<K>),
    {
        self.pieces.iter_mut().for_each(f);
    }

    /// Exchange the content of two pieces
    /// Returns false (and changes nothing) if either is out of bounds
    pub fn swap_pieces(&mut self, a: Coords, b: Coords) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.swap_content(ia, ib);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn swap_content(&mut self, ia: usize, ib: usize) {
        if ia == ib {
            return;
        }
        let (lo, hi) = (ia.min(ib), ia.max(ib));
        let (head, tail) = self.pieces.split_at_mut(hi);
        std::mem::swap(&mut head[lo].content, &mut tail[0].content);
        trace!(from = %self.pieces[ia].coords(), to = %self.pieces[ib].coords(), "swap");
    }

    /// Last empty piece of `pieces`, in the order given
    ///
    /// Fed a gravity line ordered toward the gravity end, this is the
    /// deepest slot a filler should drop into next.
    pub fn get_last_empty_piece<'a, I>(pieces: I) -> Option<&'a Piece<K>>
    where
        I: IntoIterator<Item = &'a Piece<K>>,
        K: 'a,
    {
        pieces.into_iter().filter(|piece| piece.is_empty()).last()
    }
}
