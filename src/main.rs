//! Headless match-grid demo (default binary).
//!
//! Builds a grid from a JSON config file (first argument) or from the
//! `MATCH_GRID_*` environment variables, fills it from a fixed kind cycle
//! and runs clear → settle → refill rounds until no match is left, logging
//! the grid after every round. Set `RUST_LOG=debug` to see engine events.

use std::collections::HashMap;
use std::env;
use std::fs;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use match_grid::core::{config_from_env, Grid};
use match_grid::types::{Content, Coords, Direction, GridConfig};

/// Piece kinds handed out by the filler
const KINDS: [char; 5] = ['r', 'g', 'b', 'y', 'p'];

/// Upper bound on clear/settle/refill rounds
const MAX_ROUNDS: usize = 32;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {path}"))?;
            GridConfig::from_json(&raw).with_context(|| format!("invalid config in {path}"))?
        }
        None => config_from_env()?,
    };

    run(config)
}

fn run(config: GridConfig) -> Result<()> {
    let mut grid: Grid<char> = Grid::new(config)?;
    let mut filler = KindCycle::default();

    let mut symbols = HashMap::new();
    symbols.insert(Content::Empty, '.');

    refill(&mut grid, &mut filler);
    grid.debug(Some(&symbols));

    for round in 1..=MAX_ROUNDS {
        let mut matched = 0usize;
        grid.for_each_match(|pieces, kind| {
            info!(round, %kind, size = pieces.len(), "match");
            matched += pieces.len();
        });

        if !grid.clear_matches() {
            info!(round, "no matches left");
            return Ok(());
        }

        let moved = grid.apply_gravity().len();
        let filled = refill(&mut grid, &mut filler);
        info!(round, matched, moved, filled, "round complete");
        grid.debug(Some(&symbols));
    }

    info!(rounds = MAX_ROUNDS, "round limit reached");
    Ok(())
}

/// Deterministic stand-in for a game's piece generator
#[derive(Debug, Default)]
struct KindCycle {
    state: usize,
}

impl KindCycle {
    fn next_kind(&mut self) -> char {
        self.state = (self.state * 31 + 7) % 1009;
        KINDS[self.state % KINDS.len()]
    }
}

/// Fill every empty piece, deepest slot of each gravity line first.
/// Returns how many pieces were filled.
fn refill(grid: &mut Grid<char>, filler: &mut KindCycle) -> usize {
    let Some(direction) = grid.gravity().direction() else {
        let mut filled = 0;
        grid.for_each_piece_mut(|piece| {
            if piece.is_empty() {
                piece.fill(filler.next_kind());
                filled += 1;
            }
        });
        return filled;
    };

    let lines = if direction.is_horizontal() {
        grid.height()
    } else {
        grid.width()
    };

    let mut filled = 0;
    for line in 0..lines {
        while let Some(coords) = deepest_empty(grid, line, direction) {
            grid.set_content(coords, Content::Filled(filler.next_kind()));
            filled += 1;
        }
    }
    filled
}

/// Line ordered toward the gravity end, so its last empty piece is the deepest
fn deepest_empty(grid: &Grid<char>, line: usize, direction: Direction) -> Option<Coords> {
    let (dx, dy) = direction.delta();
    let reverse = dx < 0 || dy < 0;
    let pieces = if direction.is_horizontal() {
        grid.get_row(line, reverse)
    } else {
        grid.get_column(line, reverse)
    };
    Grid::get_last_empty_piece(pieces).map(|piece| piece.coords())
}
