//! Property/invariant tests for match detection and gravity.
//!
//! Invariants covered:
//! - Every match is a maximal same-typed group of 3+ non-empty pieces, and
//!   no piece belongs to two matches.
//! - Every group of 3+ non-empty pieces is reported.
//! - Clearing leaves no match behind; detection is repeatable.
//! - Settling each line is a stable partition toward the gravity end.
//! - Reported movers are distinct, filled, and cover every slot that went
//!   from empty to filled.
//! - Swapping twice restores both pieces.

use std::collections::HashSet;

use proptest::prelude::*;

use match_grid::core::Grid;
use match_grid::types::{Content, Coords, Direction, Gravity, GridConfig};

fn gravity_strategy() -> impl Strategy<Value = Gravity> {
    prop_oneof![
        Just(Gravity::None),
        Just(Gravity::Up),
        Just(Gravity::Down),
        Just(Gravity::Left),
        Just(Gravity::Right),
    ]
}

/// Small grids with three kinds and roughly a third of the cells empty
fn grid_strategy() -> impl Strategy<Value = Grid<u8>> {
    (1usize..8, 1usize..8, gravity_strategy()).prop_flat_map(|(w, h, gravity)| {
        prop::collection::vec(prop::option::weighted(0.7, 0u8..3), w * h).prop_map(
            move |cells| {
                let mut grid = Grid::new(GridConfig::new(w, h).gravity(gravity)).unwrap();
                for (piece, cell) in grid.pieces_mut().zip(cells) {
                    piece.set_content(Content::from(cell));
                }
                grid
            },
        )
    })
}

fn snapshot(grid: &Grid<u8>) -> Vec<Option<u8>> {
    grid.pieces().map(|p| p.kind().copied()).collect()
}

/// Flat indices of every gravity line, each ordered toward the gravity end
fn lines(width: usize, height: usize, direction: Direction) -> Vec<Vec<usize>> {
    match direction {
        Direction::Down => (0..width)
            .map(|x| (0..height).map(|y| y * width + x).collect())
            .collect(),
        Direction::Up => (0..width)
            .map(|x| (0..height).rev().map(|y| y * width + x).collect())
            .collect(),
        Direction::Right => (0..height)
            .map(|y| (0..width).map(|x| y * width + x).collect())
            .collect(),
        Direction::Left => (0..height)
            .map(|y| (0..width).rev().map(|x| y * width + x).collect())
            .collect(),
    }
}

proptest! {
    #[test]
    fn matches_are_maximal_disjoint_groups(grid in grid_strategy()) {
        let matches = grid.get_matches();
        let mut seen: HashSet<Coords> = HashSet::new();

        for m in &matches {
            prop_assert!(m.len() >= 3);
            for piece in m.pieces() {
                prop_assert_eq!(piece.kind(), Some(m.kind()));
                prop_assert!(seen.insert(piece.coords()), "piece {} in two matches", piece.coords());
                for neighbour in grid.matching_neighbours(piece) {
                    prop_assert!(m.contains(neighbour.coords()));
                }
            }
        }

        for piece in grid.pieces() {
            if !piece.is_empty() && grid.deep_matching_neighbours(piece).len() >= 3 {
                prop_assert!(seen.contains(&piece.coords()));
            }
        }
    }

    #[test]
    fn deep_matching_includes_seed_unless_isolated(grid in grid_strategy()) {
        for piece in grid.pieces() {
            let group = grid.deep_matching_neighbours(piece);
            if grid.matching_neighbours(piece).is_empty() {
                prop_assert!(group.is_empty());
            } else {
                prop_assert!(group.len() >= 2);
                prop_assert!(group.iter().any(|p| p.coords() == piece.coords()));
                let unique: HashSet<Coords> = group.iter().map(|p| p.coords()).collect();
                prop_assert_eq!(unique.len(), group.len());
            }
        }
    }

    #[test]
    fn detection_is_repeatable_and_clear_is_final(grid in grid_strategy()) {
        let first: Vec<Vec<Coords>> = grid.get_matches().iter().map(|m| m.coords()).collect();
        let second: Vec<Vec<Coords>> = grid.get_matches().iter().map(|m| m.coords()).collect();
        prop_assert_eq!(&first, &second);

        let mut grid = grid;
        prop_assert_eq!(grid.clear_matches(), !first.is_empty());
        prop_assert!(grid.get_matches().is_empty());
        for coords in first.iter().flatten() {
            prop_assert!(grid.get_piece(*coords).unwrap().is_empty());
        }
    }

    #[test]
    fn gravity_is_a_stable_partition(grid in grid_strategy()) {
        let before = snapshot(&grid);
        let mut grid = grid;
        let (width, height) = (grid.width(), grid.height());
        let direction = grid.gravity().direction();

        let moved: Vec<Coords> = grid.apply_gravity().iter().map(|p| p.coords()).collect();
        let after = snapshot(&grid);

        let Some(direction) = direction else {
            prop_assert!(moved.is_empty());
            prop_assert_eq!(before, after);
            return Ok(());
        };

        for line in lines(width, height, direction) {
            let filled: Vec<u8> = line.iter().filter_map(|&i| before[i]).collect();
            let mut expected = vec![None; line.len() - filled.len()];
            expected.extend(filled.into_iter().map(Some));
            let actual: Vec<Option<u8>> = line.iter().map(|&i| after[i]).collect();
            prop_assert_eq!(actual, expected);
        }

        let unique: HashSet<Coords> = moved.iter().copied().collect();
        prop_assert_eq!(unique.len(), moved.len());
        for coords in &moved {
            prop_assert!(!grid.get_piece(*coords).unwrap().is_empty());
        }
        for piece in grid.pieces() {
            let i = piece.y() as usize * width + piece.x() as usize;
            if before[i].is_none() && after[i].is_some() {
                prop_assert!(unique.contains(&piece.coords()));
            }
        }

        // A second settle finds nothing to do
        prop_assert!(grid.apply_gravity().is_empty());
    }

    #[test]
    fn swap_twice_restores(grid in grid_strategy(), a in 0usize..64, b in 0usize..64) {
        let len = grid.len();
        let (width, before) = (grid.width(), snapshot(&grid));
        let to_coords = |i: usize| Coords::new((i % width) as i32, (i / width) as i32);
        let (ca, cb) = (to_coords(a % len), to_coords(b % len));

        let mut grid = grid;
        prop_assert!(grid.swap_pieces(ca, cb));
        let once = snapshot(&grid);
        prop_assert_eq!(once[a % len], before[b % len]);
        prop_assert_eq!(once[b % len], before[a % len]);

        prop_assert!(grid.swap_pieces(ca, cb));
        prop_assert_eq!(snapshot(&grid), before);
    }
}
