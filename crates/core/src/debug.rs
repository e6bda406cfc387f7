//! Text dump of a grid, one line per row.

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::{BuildHasher, Hash};

use tracing::info;

use crate::grid::Grid;
use crate::types::Content;

impl<K: Display> Grid<K> {
    /// Render every row, mapping each cell through `symbols` when given
    ///
    /// Cells with no entry in `symbols` fall back to their raw type name.
    /// Pass `None::<&HashMap<Content<K>, char>>` for the raw dump.
    pub fn debug_string<S, H>(&self, symbols: Option<&HashMap<Content<K>, S, H>>) -> String
    where
        K: Eq + Hash,
        S: Display,
        H: BuildHasher,
    {
        let mut out = String::with_capacity(self.len() * 2);
        for y in 0..self.height() {
            for piece in self.get_row(y, false) {
                let content = piece.content();
                match symbols.and_then(|map| map.get(content)) {
                    Some(symbol) => out.push_str(&symbol.to_string()),
                    None => out.push_str(&content.to_string()),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Log the dump at info level
    pub fn debug<S, H>(&self, symbols: Option<&HashMap<Content<K>, S, H>>)
    where
        K: Eq + Hash,
        S: Display,
        H: BuildHasher,
    {
        info!("Actual grid");
        for line in self.debug_string(symbols).lines() {
            info!("{line}");
        }
    }
}

impl<K: Display> Display for Grid<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for piece in self.get_row(y, false) {
                write!(f, "{}", piece.content())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
