//! Candidate set construction and uniform random selection

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashMap;

use crate::algorithm::matching::{BoundaryStrips, compatible};
use crate::spatial::tiles::TileFragment;

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly pick an index below `len`, `None` when `len` is zero
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// A fragment variant found compatible at the current anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Library index of the base fragment
    pub template_index: usize,
    /// The transformed copy to composite
    pub variant: TileFragment,
}

/// Compatible variants for a single lattice anchor
///
/// Also remembers, per base fragment, which variants were already accepted so
/// indistinguishable copies do not inflate the pool. Both are cleared together
/// once the anchor is resolved.
#[derive(Debug, Default)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
    accepted: HashMap<usize, Vec<TileFragment>>,
}

impl CandidateSet {
    /// Create an empty candidate set
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one variant of a base fragment
    ///
    /// Exact duplicates of a variant already accepted for the same base
    /// fragment are skipped before any compatibility test. Returns whether the
    /// variant joined the set.
    pub fn offer(
        &mut self,
        template_index: usize,
        variant: TileFragment,
        strips: &BoundaryStrips,
    ) -> bool {
        let seen = self.accepted.entry(template_index).or_default();
        if seen.contains(&variant) || !compatible(&variant, strips) {
            return false;
        }
        seen.push(variant.clone());
        self.candidates.push(Candidate {
            template_index,
            variant,
        });
        true
    }

    /// Accepted candidates in the order they were offered
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of accepted candidates
    pub const fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no variant has been accepted
    pub const fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Pick one candidate uniformly at random
    pub fn choose(&self, selector: &mut RandomSelector) -> Option<&Candidate> {
        selector
            .choose_index(self.candidates.len())
            .and_then(|index| self.candidates.get(index))
    }

    /// Forget all candidates and duplicate tracking
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.accepted.clear();
    }
}
