//! Level grid and tile alphabet
//!
//! A grid is a rectangular `ndarray` of tiles. Every cell starts undecided; lattice
//! placement paints fragments over it and the finishing passes leave only walls and
//! open floor behind.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::{
    FRAGMENT_SIDE, LATTICE_STRIDE, MAX_ROOMS, OPEN_SYMBOL, PLACEHOLDER_SYMBOL, UNDECIDED_SYMBOL,
    WALL_SYMBOL,
};
use crate::io::error::{Result, invalid_parameter};

/// A single cell symbol of a grid or template fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Solid wall
    Wall,
    /// Walkable floor
    Open,
    /// Fragment cell that keeps whatever the grid already decided
    Placeholder,
    /// Grid cell nothing has written yet, also used for off-grid boundary strips
    Undecided,
    /// Unrecognised template symbol, treated like a wall
    Other(char),
}

impl Tile {
    /// Map a text symbol onto the tile alphabet
    ///
    /// Unknown characters are preserved as [`Tile::Other`].
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            WALL_SYMBOL => Self::Wall,
            OPEN_SYMBOL => Self::Open,
            PLACEHOLDER_SYMBOL => Self::Placeholder,
            UNDECIDED_SYMBOL => Self::Undecided,
            other => Self::Other(other),
        }
    }

    /// Text symbol of this tile
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => WALL_SYMBOL,
            Self::Open => OPEN_SYMBOL,
            Self::Placeholder => PLACEHOLDER_SYMBOL,
            Self::Undecided => UNDECIDED_SYMBOL,
            Self::Other(symbol) => symbol,
        }
    }

    /// Whether this tile is walkable floor
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether an earlier fragment has already committed this cell
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::Undecided)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Number of fragment rooms along each axis of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCount {
    /// Rooms stacked vertically
    pub rows: usize,
    /// Rooms side by side horizontally
    pub cols: usize,
}

impl RoomCount {
    /// Same room count on both axes
    pub const fn square(rooms: usize) -> Self {
        Self {
            rows: rooms,
            cols: rooms,
        }
    }

    /// Grid dimensions (rows, cols) for this room count
    ///
    /// Each room contributes one lattice stride and the remainder of a fragment
    /// closes the far edge, giving `rooms * 3 + 2` cells per axis.
    pub const fn dimensions(self) -> (usize, usize) {
        let border = FRAGMENT_SIDE - LATTICE_STRIDE;
        (
            self.rows * LATTICE_STRIDE + border,
            self.cols * LATTICE_STRIDE + border,
        )
    }

    /// Check both counts lie within `1..=MAX_ROOMS`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first axis out of range
    pub fn validate(self) -> Result<()> {
        for (parameter, value) in [("rooms.rows", self.rows), ("rooms.cols", self.cols)] {
            if value == 0 || value > MAX_ROOMS {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("room count must be between 1 and {MAX_ROOMS}"),
                ));
            }
        }
        Ok(())
    }
}

/// Rectangular level topology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Tile>,
}

impl Grid {
    /// Create a grid with every cell undecided
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Tile::Undecided),
        }
    }

    /// Create an undecided grid sized for a room count
    pub fn for_rooms(rooms: RoomCount) -> Self {
        let (rows, cols) = rooms.dimensions();
        Self::new(rows, cols)
    }

    /// Parse a grid from one line of symbols per row
    ///
    /// Blank lines are skipped and a trailing `\r` is dropped from each row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the text has no rows or rows differ in width
    pub fn from_text(text: &str) -> Result<Self> {
        let rows: Vec<Vec<Tile>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().map(Tile::from_symbol).collect())
            .collect();

        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(invalid_parameter("grid", &text, &"grid text has no rows"));
        }
        if let Some(row) = rows.iter().position(|row| row.len() != width) {
            return Err(invalid_parameter(
                "grid",
                &row,
                &format!("row width differs from first row width {width}"),
            ));
        }

        let height = rows.len();
        let flat: Vec<Tile> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|e| invalid_parameter("grid", &height, &e))?;
        Ok(Self { cells })
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Tile at a position, `None` when outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get([row, col]).copied()
    }

    /// Overwrite a tile, ignoring positions outside the grid
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) {
        if let Some(cell) = self.cells.get_mut([row, col]) {
            *cell = tile;
        }
    }

    /// Read-only view of the underlying cells
    pub const fn cells(&self) -> &Array2<Tile> {
        &self.cells
    }

    /// Whether a position lies on the outermost ring
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows() || col + 1 == self.cols()
    }

    /// Force the outermost ring to walls
    pub fn repair_border(&mut self) {
        let (rows, cols) = self.dimensions();
        for ((row, col), cell) in self.cells.indexed_iter_mut() {
            if row == 0 || col == 0 || row + 1 == rows || col + 1 == cols {
                *cell = Tile::Wall;
            }
        }
    }

    /// Turn every cell that is not open floor into a wall
    ///
    /// Clears placeholders no later fragment refined, undecided cells, and
    /// unrecognised template symbols.
    pub fn resolve_leftovers(&mut self) {
        for cell in &mut self.cells {
            if !matches!(cell, Tile::Open | Tile::Wall) {
                *cell = Tile::Wall;
            }
        }
    }

    /// Positions of all open cells in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, tile)| tile.is_open())
            .map(|((row, col), _)| [row, col])
    }

    /// Number of cells holding the given tile
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&cell| cell == tile).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for tile in row {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
