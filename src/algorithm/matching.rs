//! Boundary compatibility and compositing of fragments onto a grid

use crate::spatial::grid::{Grid, Tile};
use crate::spatial::tiles::{Edge, TileFragment};

/// Grid cells immediately outside each edge of a prospective fragment footprint
///
/// Cells beyond the grid are reported as [`Tile::Undecided`], so an open
/// fragment edge can never face the outside of the level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryStrips {
    /// Row above the footprint, left to right
    pub top: Vec<Tile>,
    /// Column right of the footprint, top to bottom
    pub right: Vec<Tile>,
    /// Row below the footprint, left to right
    pub bottom: Vec<Tile>,
    /// Column left of the footprint, top to bottom
    pub left: Vec<Tile>,
}

impl BoundaryStrips {
    /// Collect the strips around a `side`-sized footprint anchored at `anchor`
    pub fn around(grid: &Grid, anchor: [usize; 2], side: usize) -> Self {
        let [row, col] = anchor;
        let outside = |r: Option<usize>, c: Option<usize>| -> Tile {
            r.zip(c)
                .and_then(|(r, c)| grid.get(r, c))
                .unwrap_or(Tile::Undecided)
        };

        Self {
            top: (0..side)
                .map(|i| outside(row.checked_sub(1), Some(col + i)))
                .collect(),
            right: (0..side)
                .map(|i| outside(Some(row + i), Some(col + side)))
                .collect(),
            bottom: (0..side)
                .map(|i| outside(Some(row + side), Some(col + i)))
                .collect(),
            left: (0..side)
                .map(|i| outside(Some(row + i), col.checked_sub(1)))
                .collect(),
        }
    }

    /// Strip facing one edge of the fragment
    pub fn strip(&self, edge: Edge) -> &[Tile] {
        match edge {
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
        }
    }
}

/// Decide whether a fragment variant may be committed against the given strips
///
/// Every open cell on a fragment edge must face an open strip cell. Walls,
/// placeholders and unrecognised symbols impose no constraint. A single
/// violation on any edge rejects the whole variant.
pub fn compatible(fragment: &TileFragment, strips: &BoundaryStrips) -> bool {
    Edge::ALL.iter().all(|&edge| {
        fragment
            .edge(edge)
            .iter()
            .zip(strips.strip(edge))
            .all(|(cell, outside)| !cell.is_open() || outside.is_open())
    })
}

/// Paint a fragment onto the grid with its top-left corner at `anchor`
///
/// A placeholder never erases a cell an earlier fragment already decided; every
/// other fragment cell overwrites the grid, undecided cells included. Cells that
/// would fall outside the grid are ignored.
pub fn composite(grid: &mut Grid, fragment: &TileFragment, anchor: [usize; 2]) {
    let [row, col] = anchor;
    for ((i, j), &tile) in fragment.cells().indexed_iter() {
        let (target_row, target_col) = (row + i, col + j);
        let Some(existing) = grid.get(target_row, target_col) else {
            continue;
        };
        if existing.is_decided() && tile == Tile::Placeholder {
            continue;
        }
        grid.set(target_row, target_col, tile);
    }
}
