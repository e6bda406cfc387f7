//! Match detection - connected groups of same-typed pieces
//!
//! A match is a maximal 4-connected group of at least [`MIN_MATCH_LEN`]
//! pieces sharing one non-empty type. Groups are found by flood fill from
//! every not-yet-visited piece in row-major order.
//!
//! The flood fill does not seed its result with the starting piece. The
//! start only joins the group when one of its own same-typed neighbours
//! finds it again, so a piece with no same-typed neighbour yields an empty
//! group and any other piece yields its whole group, itself included.
//! The match threshold counts that result directly.

use arrayvec::ArrayVec;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{Content, Coords, Direction, MIN_MATCH_LEN};

/// One detected match: its pieces and their shared type
#[derive(Debug, PartialEq, Eq)]
pub struct Match<'g, K> {
    kind: &'g K,
    pieces: Vec<&'g Piece<K>>,
}

impl<'g, K> Match<'g, K> {
    /// The type every piece of this match holds
    pub fn kind(&self) -> &'g K {
        self.kind
    }

    /// Pieces in discovery order
    pub fn pieces(&self) -> &[&'g Piece<K>] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn contains(&self, coords: Coords) -> bool {
        self.pieces.iter().any(|piece| piece.coords() == coords)
    }

    /// Coordinates of the pieces, sorted row-major
    pub fn coords(&self) -> Vec<Coords> {
        let mut coords: Vec<Coords> = self.pieces.iter().map(|piece| piece.coords()).collect();
        coords.sort_by_key(|c| (c.y, c.x));
        coords
    }
}

impl<K: PartialEq> Grid<K> {
    /// Neighbours of `piece` holding the same content, in [`Direction::ALL`] order
    ///
    /// Empty pieces match other empty pieces here; the empty type is only
    /// filtered out when groups are turned into matches.
    pub fn matching_neighbours(&self, piece: &Piece<K>) -> ArrayVec<&Piece<K>, 4> {
        let mut result = ArrayVec::new();
        for dir in Direction::ALL {
            if let Some(neighbour) = self.neighbour_of(piece, dir) {
                if neighbour.content() == piece.content() {
                    result.push(neighbour);
                }
            }
        }
        result
    }

    /// Whole same-typed group reachable from `piece`
    ///
    /// Empty if `piece` has no same-typed neighbour, otherwise every piece of
    /// its group including `piece` itself. Uses an explicit stack, so group
    /// size is not limited by recursion depth.
    pub fn deep_matching_neighbours(&self, piece: &Piece<K>) -> Vec<&Piece<K>> {
        let mut found: Vec<&Piece<K>> = Vec::new();
        let mut seen: FxHashSet<Coords> = FxHashSet::default();
        let mut stack = vec![piece];

        while let Some(current) = stack.pop() {
            for neighbour in self.matching_neighbours(current) {
                if seen.insert(neighbour.coords()) {
                    found.push(neighbour);
                    stack.push(neighbour);
                }
            }
        }

        found
    }

    /// All current matches, in discovery order (empty when there are none)
    pub fn get_matches(&self) -> Vec<Match<'_, K>> {
        let mut checked: FxHashSet<Coords> = FxHashSet::default();
        let mut matches = Vec::new();

        for piece in self.pieces() {
            if checked.contains(&piece.coords()) {
                continue;
            }

            let group = self.deep_matching_neighbours(piece);
            checked.extend(group.iter().map(|p| p.coords()));

            if group.len() >= MIN_MATCH_LEN {
                if let Content::Filled(kind) = piece.content() {
                    matches.push(Match {
                        kind,
                        pieces: group,
                    });
                }
            }
        }

        debug!(
            matches = matches.len(),
            pieces = matches.iter().map(Match::len).sum::<usize>(),
            "match scan"
        );
        matches
    }

    /// Call `f(pieces, kind)` once per current match, in discovery order
    pub fn for_each_match<F>(&self, mut f: F)
    where
        F: FnMut(&[&Piece<K>], &K),
    {
        for m in self.get_matches() {
            f(m.pieces(), m.kind());
        }
    }

    /// Empty every piece that is part of a match
    ///
    /// Returns false, without touching the grid, when there is no match.
    pub fn clear_matches(&mut self) -> bool {
        let cleared: Vec<Coords> = self
            .get_matches()
            .iter()
            .flat_map(|m| m.pieces().iter().map(|piece| piece.coords()))
            .collect();

        if cleared.is_empty() {
            return false;
        }

        for &coords in &cleared {
            if let Some(piece) = self.piece_mut(coords) {
                piece.clear();
            }
        }

        debug!(pieces = cleared.len(), "cleared matches");
        true
    }
}
