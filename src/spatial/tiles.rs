//! Template fragments and their symmetry variants
//!
//! A fragment is a small square of tiles. Rotations walk the concentric rings of a
//! working copy so repeated turns never accumulate error, and mirroring flips an
//! array axis in place. The library's originals are never touched: every variant is
//! an independent copy.

use ndarray::{Array2, Axis};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Tile;

/// One side of a square fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// First row
    Top,
    /// Last column
    Right,
    /// Last row
    Bottom,
    /// First column
    Left,
}

impl Edge {
    /// All edges in clockwise order starting at the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// Which symmetry transforms are tried for every fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryMode {
    /// Per rotation: as rotated, then mirrored horizontally, then mirrored vertically on top
    #[default]
    Legacy,
    /// The eight dihedral transforms: each rotation with and without a horizontal mirror
    Full,
}

/// Square pattern fragment used as a building block for levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileFragment {
    cells: Array2<Tile>,
}

impl TileFragment {
    /// Wrap a square array of tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the array is empty or not square
    pub fn new(cells: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || rows != cols {
            return Err(invalid_parameter(
                "fragment",
                &format!("{rows}x{cols}"),
                &"fragments must be non-empty squares",
            ));
        }
        Ok(Self { cells })
    }

    /// Build a fragment from rows of symbols
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the rows do not form a non-empty square
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let side = rows.len();
        let mut flat = Vec::with_capacity(side * side);
        for row in rows {
            let tiles: Vec<Tile> = row.as_ref().chars().map(Tile::from_symbol).collect();
            if tiles.len() != side {
                return Err(invalid_parameter(
                    "fragment",
                    &row.as_ref(),
                    &format!("row width {} does not match side {side}", tiles.len()),
                ));
            }
            flat.extend(tiles);
        }
        let cells = Array2::from_shape_vec((side, side), flat)
            .map_err(|e| invalid_parameter("fragment", &side, &e))?;
        Self::new(cells)
    }

    /// A fragment filled with one tile
    pub fn filled(side: usize, tile: Tile) -> Self {
        Self {
            cells: Array2::from_elem((side, side), tile),
        }
    }

    /// Side length of the fragment
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile at a position, `None` when outside the fragment
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get([row, col]).copied()
    }

    /// Read-only view of the underlying cells
    pub const fn cells(&self) -> &Array2<Tile> {
        &self.cells
    }

    /// Cells along one edge
    ///
    /// Top and bottom read left to right, left and right read top to bottom.
    pub fn edge(&self, edge: Edge) -> Vec<Tile> {
        let last = self.side().saturating_sub(1);
        let lane = match edge {
            Edge::Top => self.cells.row(0),
            Edge::Bottom => self.cells.row(last),
            Edge::Left => self.cells.column(0),
            Edge::Right => self.cells.column(last),
        };
        lane.to_vec()
    }

    /// Rotate clockwise by 90° `turns` times in place
    ///
    /// Each turn shifts every concentric ring by one side length, which also
    /// leaves the centre of odd-sized fragments untouched.
    pub fn rotate(&mut self, turns: usize) {
        let side = self.side();
        for _ in 0..turns % 4 {
            for layer in 0..side / 2 {
                let ring = ring_positions(side, layer);
                let mut values: Vec<Tile> = ring
                    .iter()
                    .filter_map(|&position| self.cells.get(position).copied())
                    .collect();
                values.rotate_right(side - 1 - 2 * layer);
                for (position, value) in ring.into_iter().zip(values) {
                    if let Some(cell) = self.cells.get_mut(position) {
                        *cell = value;
                    }
                }
            }
        }
    }

    /// Copy rotated clockwise by 90° `turns` times
    #[must_use]
    pub fn rotated(&self, turns: usize) -> Self {
        let mut copy = self.clone();
        copy.rotate(turns);
        copy
    }

    /// Mirror across the vertical mid-line in place
    pub fn flip_horizontal(&mut self) {
        self.cells.invert_axis(Axis(1));
    }

    /// Mirror across the horizontal mid-line in place
    pub fn flip_vertical(&mut self) {
        self.cells.invert_axis(Axis(0));
    }

    /// Symmetry variants in enumeration order, duplicates included
    ///
    /// `Legacy` yields three attempts per rotation count: the rotation itself, a
    /// horizontal mirror of it, and a vertical mirror stacked on that mirror.
    /// `Full` yields each rotation with and without a horizontal mirror.
    pub fn variants(&self, mode: SymmetryMode) -> Vec<Self> {
        let mut variants = Vec::with_capacity(12);
        for turns in 0..4 {
            let mut working = self.rotated(turns);
            variants.push(working.clone());
            working.flip_horizontal();
            match mode {
                SymmetryMode::Legacy => {
                    variants.push(working.clone());
                    working.flip_vertical();
                    variants.push(working);
                }
                SymmetryMode::Full => variants.push(working),
            }
        }
        variants
    }

    /// Symmetry variants with exact duplicates removed, first occurrence kept
    pub fn distinct_variants(&self, mode: SymmetryMode) -> Vec<Self> {
        let mut distinct: Vec<Self> = Vec::new();
        for variant in self.variants(mode) {
            if !distinct.contains(&variant) {
                distinct.push(variant);
            }
        }
        distinct
    }
}

/// Positions of one concentric ring in clockwise order from its top-left corner
fn ring_positions(side: usize, layer: usize) -> Vec<[usize; 2]> {
    let first = layer;
    let last = side - 1 - layer;
    let mut positions = Vec::with_capacity(4 * (last - first));
    for col in first..last {
        positions.push([first, col]);
    }
    for row in first..last {
        positions.push([row, last]);
    }
    for col in (first + 1..=last).rev() {
        positions.push([last, col]);
    }
    for row in (first + 1..=last).rev() {
        positions.push([row, first]);
    }
    positions
}
