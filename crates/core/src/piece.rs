//! Piece module - a single grid cell
//!
//! A piece has fixed coordinates and mutable content. Pieces are created by
//! their grid and live exactly as long as it does; only the content ever
//! changes.

use crate::types::{Content, Coords, Direction};

/// One addressable cell of a [`Grid`](crate::Grid)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece<K> {
    coords: Coords,
    pub(crate) content: Content<K>,
}

impl<K> Piece<K> {
    pub(crate) fn new(x: i32, y: i32) -> Self {
        Self {
            coords: Coords::new(x, y),
            content: Content::Empty,
        }
    }

    pub fn x(&self) -> i32 {
        self.coords.x
    }

    pub fn y(&self) -> i32 {
        self.coords.y
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn content(&self) -> &Content<K> {
        &self.content
    }

    /// Piece type, `None` when empty
    pub fn kind(&self) -> Option<&K> {
        self.content.kind()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Replace the content, returning the previous one
    pub fn set_content(&mut self, content: Content<K>) -> Content<K> {
        std::mem::replace(&mut self.content, content)
    }

    /// Fill with a piece type
    pub fn fill(&mut self, kind: K) {
        self.content = Content::Filled(kind);
    }

    /// Reset to the empty sentinel
    pub fn clear(&mut self) {
        self.content = Content::Empty;
    }

    /// Coordinates `distance` steps away in `direction`; may be off-grid
    pub fn relative_coordinates(&self, direction: Direction, distance: i32) -> Coords {
        self.coords.offset(direction, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_starts_empty() {
        let piece: Piece<u8> = Piece::new(3, 4);
        assert!(piece.is_empty());
        assert_eq!(piece.coords(), Coords::new(3, 4));
        assert_eq!(piece.kind(), None);
    }

    #[test]
    fn test_piece_fill_and_clear() {
        let mut piece = Piece::new(0, 0);
        piece.fill('x');
        assert_eq!(piece.kind(), Some(&'x'));

        let previous = piece.set_content(Content::Filled('y'));
        assert_eq!(previous, Content::Filled('x'));

        piece.clear();
        assert_eq!(piece.content(), &Content::Empty);
    }

    #[test]
    fn test_relative_coordinates() {
        let piece: Piece<u8> = Piece::new(2, 5);
        assert_eq!(
            piece.relative_coordinates(Direction::Up, 2),
            Coords::new(2, 3)
        );
        assert_eq!(
            piece.relative_coordinates(Direction::Left, 3),
            Coords::new(-1, 5)
        );
        assert_eq!(
            piece.relative_coordinates(Direction::Right, -1),
            Coords::new(1, 5)
        );
    }
}
