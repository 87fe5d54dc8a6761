//! Lattice placement driver
//!
//! Walks a fixed lattice of fragment anchors in row-major order. At every anchor it
//! gathers all compatible symmetry variants of all library fragments, commits one
//! chosen uniformly at random, and moves on. An anchor with no compatible variant
//! fails the whole pass; there is no backtracking.

use crate::algorithm::matching::{BoundaryStrips, composite};
use crate::algorithm::selection::{CandidateSet, RandomSelector};
use crate::io::configuration::LATTICE_STRIDE;
use crate::io::templates::TemplateLibrary;
use crate::spatial::grid::{Grid, RoomCount};
use crate::spatial::tiles::SymmetryMode;

/// Driver state while walking the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// Moving to the next lattice anchor
    Scanning,
    /// Building the candidate set for the current anchor
    Enumerating,
    /// Compositing the chosen candidate
    Committing,
    /// Every anchor has been filled and the border repaired
    Complete,
    /// Some anchor had no compatible candidate
    Failed,
}

/// Result of one full placement pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// All anchors filled; the grid holds only walls and open floor
    Placed(Grid),
    /// No fragment variant fit at this anchor
    Failed {
        /// Top-left corner of the window that could not be filled
        anchor: [usize; 2],
    },
}

/// Top-left anchors of every `side`-sized window that fits the grid, row-major
///
/// Anchors step by the lattice stride, so neighbouring windows overlap by
/// `side - LATTICE_STRIDE` cells.
pub fn lattice_anchors(rows: usize, cols: usize, side: usize) -> Vec<[usize; 2]> {
    let row_starts: Vec<usize> = (0..=rows.saturating_sub(side))
        .step_by(LATTICE_STRIDE)
        .take_while(|&row| row + side <= rows)
        .collect();
    let col_starts: Vec<usize> = (0..=cols.saturating_sub(side))
        .step_by(LATTICE_STRIDE)
        .take_while(|&col| col + side <= cols)
        .collect();

    row_starts
        .iter()
        .flat_map(|&row| col_starts.iter().map(move |&col| [row, col]))
        .collect()
}

/// Single generation attempt owning its grid and candidate state
pub struct LatticePlacer<'a> {
    library: &'a TemplateLibrary,
    symmetry: SymmetryMode,
    grid: Grid,
    candidates: CandidateSet,
    state: PlacementState,
}

impl<'a> LatticePlacer<'a> {
    /// Start an attempt on a fresh undecided grid sized for `rooms`
    pub fn new(library: &'a TemplateLibrary, symmetry: SymmetryMode, rooms: RoomCount) -> Self {
        Self::with_grid(library, symmetry, Grid::for_rooms(rooms))
    }

    /// Start an attempt on a caller-supplied grid
    pub fn with_grid(library: &'a TemplateLibrary, symmetry: SymmetryMode, grid: Grid) -> Self {
        Self {
            library,
            symmetry,
            grid,
            candidates: CandidateSet::new(),
            state: PlacementState::Scanning,
        }
    }

    /// Current driver state
    pub const fn state(&self) -> PlacementState {
        self.state
    }

    /// Grid as built so far
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Candidates gathered for the anchor being resolved
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Build the candidate set for one anchor
    ///
    /// Returns the number of compatible variants found.
    pub fn enumerate(&mut self, anchor: [usize; 2]) -> usize {
        self.state = PlacementState::Enumerating;
        self.candidates.clear();

        let strips = BoundaryStrips::around(&self.grid, anchor, self.library.side());
        for (template_index, fragment) in self.library.fragments().iter().enumerate() {
            for variant in fragment.variants(self.symmetry) {
                self.candidates.offer(template_index, variant, &strips);
            }
        }
        self.candidates.len()
    }

    /// Resolve one anchor: enumerate, pick, composite
    ///
    /// Returns `false` and enters [`PlacementState::Failed`] when nothing fits.
    pub fn place_at(&mut self, anchor: [usize; 2], selector: &mut RandomSelector) -> bool {
        if self.enumerate(anchor) == 0 {
            self.state = PlacementState::Failed;
            return false;
        }

        self.state = PlacementState::Committing;
        if let Some(candidate) = self.candidates.choose(selector) {
            composite(&mut self.grid, &candidate.variant, anchor);
        }
        self.candidates.clear();
        self.state = PlacementState::Scanning;
        true
    }

    /// Walk the whole lattice and finish the grid
    ///
    /// On success the border is forced to walls and leftover placeholders are
    /// resolved, so the returned grid holds only walls and open floor.
    pub fn run(&mut self, selector: &mut RandomSelector) -> PlacementOutcome {
        let (rows, cols) = self.grid.dimensions();
        for anchor in lattice_anchors(rows, cols, self.library.side()) {
            self.state = PlacementState::Scanning;
            if !self.place_at(anchor, selector) {
                return PlacementOutcome::Failed { anchor };
            }
        }

        self.grid.repair_border();
        self.grid.resolve_leftovers();
        self.state = PlacementState::Complete;
        PlacementOutcome::Placed(self.grid.clone())
    }
}
