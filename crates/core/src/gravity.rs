//! Gravity - settle pieces toward the configured direction
//!
//! Each line parallel to the gravity direction (a column for up/down, a row
//! for left/right) is settled on its own. A pass walks the line starting at
//! the gravity end and swaps every filled piece with an empty neighbour in
//! the gravity direction; passes repeat until one makes no swap.
//!
//! The fixed point is a stable partition of the line: filled pieces packed
//! against the gravity end in their original order, empty pieces at the
//! other end.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{Coords, Direction};

impl<K> Grid<K> {
    /// Settle every line and return the filled pieces that received content
    ///
    /// Each piece appears at most once. A piece that was filled by a swap and
    /// emptied again by a later one is not reported, and neither is a piece
    /// that never swaps, such as one already resting at the gravity end.
    /// Without gravity this is a no-op returning an empty list.
    pub fn apply_gravity(&mut self) -> Vec<&Piece<K>> {
        let Some(direction) = self.gravity().direction() else {
            return Vec::new();
        };

        let mut moved: Vec<usize> = Vec::new();
        let mut moved_set: FxHashSet<usize> = FxHashSet::default();
        let mut passes = 0usize;

        let lines = if direction.is_horizontal() {
            self.height()
        } else {
            self.width()
        };
        for line in 0..lines {
            let order = self.line_order(line, direction);
            passes += self.settle_line(&order, direction, &mut moved, &mut moved_set);
        }

        let grid: &Grid<K> = self;
        let result: Vec<&Piece<K>> = moved
            .into_iter()
            .map(move |idx| &grid.pieces[idx])
            .filter(|piece| !piece.is_empty())
            .collect();

        debug!(%direction, lines, passes, moved = result.len(), "gravity settled");
        result
    }

    /// Flat indices of one line, ordered from the gravity end backward
    fn line_order(&self, line: usize, direction: Direction) -> Vec<usize> {
        let (width, height) = (self.width(), self.height());
        let mut order: Vec<usize> = if direction.is_horizontal() {
            (0..width).map(|x| line * width + x).collect()
        } else {
            (0..height).map(|y| y * width + line).collect()
        };

        let (dx, dy) = direction.delta();
        if dx > 0 || dy > 0 {
            order.reverse();
        }
        order
    }

    /// Run passes over one line until none swaps; returns the pass count
    fn settle_line(
        &mut self,
        order: &[usize],
        direction: Direction,
        moved: &mut Vec<usize>,
        moved_set: &mut FxHashSet<usize>,
    ) -> usize {
        let mut passes = 0;
        loop {
            passes += 1;
            let mut swaps = 0;

            for &idx in order {
                let Some(target) = self.target_of(idx, direction) else {
                    continue;
                };
                if !self.pieces[idx].is_empty() && self.pieces[target].is_empty() {
                    self.swap_content(idx, target);
                    if moved_set.insert(target) {
                        moved.push(target);
                    }
                    swaps += 1;
                }
            }

            if swaps == 0 {
                return passes;
            }
        }
    }

    /// Index of the neighbour one step in `direction`
    fn target_of(&self, idx: usize, direction: Direction) -> Option<usize> {
        let coords: Coords = self.pieces[idx].relative_coordinates(direction, 1);
        self.index(coords)
    }
}
