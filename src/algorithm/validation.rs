//! Structural checks applied to finished grids
//!
//! Two independent checks can reject a grid: a degenerate open area (a fully open
//! 3x3 window whose diagonal extension past the far corner is open too) and, when
//! enabled, open floor split into more than one region.

use bitvec::prelude::*;
use std::collections::VecDeque;
use std::fmt;

use crate::spatial::grid::{Grid, Tile};

/// Side of the open window searched for by the degenerate area check
const DEGENERATE_WINDOW: usize = 3;

/// Reason a finished grid was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Open window plus diagonal extension found with its top-left corner here
    DegenerateOpenArea {
        /// Top-left corner of the open window
        origin: [usize; 2],
    },
    /// Open floor does not form a single 4-connected region
    Disconnected {
        /// Open cells reachable from the first open cell
        reached: usize,
        /// All open cells in the grid
        total: usize,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateOpenArea { origin } => write!(
                f,
                "degenerate open area at ({}, {})",
                origin[0], origin[1]
            ),
            Self::Disconnected { reached, total } => {
                write!(f, "only {reached} of {total} open cells connected")
            }
        }
    }
}

/// Accepts or rejects fully placed, border-repaired grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralValidator {
    require_connectivity: bool,
}

impl Default for StructuralValidator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StructuralValidator {
    /// Create a validator, optionally skipping the connectivity check
    pub const fn new(require_connectivity: bool) -> Self {
        Self {
            require_connectivity,
        }
    }

    /// Whether the flood-fill connectivity check runs
    pub const fn requires_connectivity(&self) -> bool {
        self.require_connectivity
    }

    /// Run every enabled check, reporting the first failure
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] describing why the grid is unusable
    pub fn validate(&self, grid: &Grid) -> Result<(), Rejection> {
        if let Some(origin) = find_degenerate_area(grid) {
            return Err(Rejection::DegenerateOpenArea { origin });
        }

        if self.require_connectivity {
            let total = count_open_cells(grid);
            let reached = reachable_open_cells(grid);
            if reached != total {
                return Err(Rejection::Disconnected { reached, total });
            }
        }

        Ok(())
    }
}

/// Find the first fully open 3x3 window whose diagonal extension is also open
///
/// The extension cell sits one step down and right of the window's far corner;
/// windows whose extension falls outside the grid are never degenerate.
pub fn find_degenerate_area(grid: &Grid) -> Option<[usize; 2]> {
    let (rows, cols) = grid.dimensions();
    let is_open = |row: usize, col: usize| grid.get(row, col).is_some_and(Tile::is_open);

    for row in 0..=rows.saturating_sub(DEGENERATE_WINDOW) {
        for col in 0..=cols.saturating_sub(DEGENERATE_WINDOW) {
            let window_open = (0..DEGENERATE_WINDOW).all(|i| {
                (0..DEGENERATE_WINDOW).all(|j| is_open(row + i, col + j))
            });
            if window_open && is_open(row + DEGENERATE_WINDOW, col + DEGENERATE_WINDOW) {
                return Some([row, col]);
            }
        }
    }
    None
}

/// Count every open cell in the grid
pub fn count_open_cells(grid: &Grid) -> usize {
    grid.count(Tile::Open)
}

/// Count open cells 4-connected to the first open cell in row-major order
///
/// Uses an explicit queue so large grids cannot exhaust the call stack. A grid
/// without open cells reaches zero.
pub fn reachable_open_cells(grid: &Grid) -> usize {
    let Some(start) = grid.open_cells().next() else {
        return 0;
    };

    let (rows, cols) = grid.dimensions();
    let mut visited: BitVec = bitvec![0; rows * cols];
    let mut queue = VecDeque::new();
    visited.set(start[0] * cols + start[1], true);
    queue.push_back(start);
    let mut reached = 0;

    while let Some([row, col]) = queue.pop_front() {
        reached += 1;
        let neighbours = [
            row.checked_sub(1).map(|r| [r, col]),
            Some([row + 1, col]),
            col.checked_sub(1).map(|c| [row, c]),
            Some([row, col + 1]),
        ];
        for [r, c] in neighbours.into_iter().flatten() {
            if r >= rows || c >= cols || !grid.get(r, c).is_some_and(Tile::is_open) {
                continue;
            }
            let index = r * cols + c;
            if visited.get(index).as_deref() == Some(&false) {
                visited.set(index, true);
                queue.push_back([r, c]);
            }
        }
    }
    reached
}
