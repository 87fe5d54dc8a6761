//! Level generation orchestrator
//!
//! Repeats lattice placement and structural validation until a grid is accepted.
//! Each attempt starts from a fresh undecided grid and owns all of its mutable
//! state; nothing survives a failed attempt. The attempt ceiling turns a template
//! set that can never succeed into a reported error instead of an endless loop.

use log::{debug, info, warn};

use crate::algorithm::placement::{LatticePlacer, PlacementOutcome};
use crate::algorithm::selection::RandomSelector;
use crate::algorithm::validation::StructuralValidator;
use crate::io::configuration::{DEFAULT_MAX_ATTEMPTS, DEFAULT_ROOMS};
use crate::io::error::{GeneratorError, Result, invalid_parameter};
use crate::io::templates::TemplateLibrary;
use crate::spatial::grid::{Grid, RoomCount};
use crate::spatial::tiles::SymmetryMode;

/// Generator parameters controlling level size, symmetry and validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Rooms per axis; each room adds three cells
    pub rooms: RoomCount,
    /// Which symmetry variants are tried per fragment
    pub symmetry: SymmetryMode,
    /// Whether open floor must form a single connected region
    pub require_connectivity: bool,
    /// Attempts allowed per level, `None` for no limit
    pub max_attempts: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rooms: RoomCount::square(DEFAULT_ROOMS),
            symmetry: SymmetryMode::Legacy,
            require_connectivity: true,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl GeneratorConfig {
    /// Check every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a room count is out of range or the
    /// attempt ceiling is zero
    pub fn validate(&self) -> Result<()> {
        self.rooms.validate()?;
        if self.max_attempts == Some(0) {
            return Err(invalid_parameter(
                "max_attempts",
                &0,
                &"attempt ceiling must be positive",
            ));
        }
        Ok(())
    }
}

/// Running totals across every level produced by a generator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Levels accepted
    pub levels: usize,
    /// Placement attempts started
    pub attempts: usize,
    /// Attempts abandoned because some anchor had no compatible fragment
    pub placement_failures: usize,
    /// Attempts whose finished grid failed structural validation
    pub validation_rejections: usize,
}

/// Produces validated levels from a template library
pub struct LevelGenerator {
    library: TemplateLibrary,
    config: GeneratorConfig,
    validator: StructuralValidator,
    random_selector: RandomSelector,
    stats: GenerationStats,
    last_level_attempts: usize,
}

impl LevelGenerator {
    /// Create a generator with a deterministic random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is invalid or the
    /// library holds no fragments
    pub fn new(library: TemplateLibrary, config: GeneratorConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        if library.is_empty() {
            return Err(invalid_parameter(
                "library",
                &0,
                &"template library holds no fragments",
            ));
        }

        Ok(Self {
            library,
            validator: StructuralValidator::new(config.require_connectivity),
            config,
            random_selector: RandomSelector::new(seed),
            stats: GenerationStats::default(),
            last_level_attempts: 0,
        })
    }

    /// Template library in use
    pub const fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Totals accumulated so far
    pub const fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Attempts spent on the most recent level, successful or not
    pub const fn attempts_for_last_level(&self) -> usize {
        self.last_level_attempts
    }

    /// Generate `level_count` validated levels
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `level_count` is zero and
    /// `GenerationExhausted` if any level hits the attempt ceiling
    pub fn generate(&mut self, level_count: usize) -> Result<Vec<Grid>> {
        if level_count == 0 {
            return Err(invalid_parameter(
                "level_count",
                &level_count,
                &"at least one level must be requested",
            ));
        }

        (0..level_count)
            .map(|level| self.generate_level(level))
            .collect()
    }

    /// Generate a single validated level
    ///
    /// `level` only labels logs and errors.
    ///
    /// # Errors
    ///
    /// Returns `GenerationExhausted` if the attempt ceiling is reached
    pub fn generate_level(&mut self, level: usize) -> Result<Grid> {
        self.last_level_attempts = 0;

        loop {
            if self
                .config
                .max_attempts
                .is_some_and(|max_attempts| self.last_level_attempts >= max_attempts)
            {
                warn!(
                    "level {level}: giving up after {} attempts",
                    self.last_level_attempts
                );
                return Err(GeneratorError::GenerationExhausted {
                    level,
                    attempts: self.last_level_attempts,
                });
            }

            self.last_level_attempts += 1;
            self.stats.attempts += 1;

            if let Some(grid) = self.attempt(level) {
                self.stats.levels += 1;
                info!(
                    "level {level}: accepted {}x{} grid after {} attempts",
                    grid.rows(),
                    grid.cols(),
                    self.last_level_attempts
                );
                return Ok(grid);
            }
        }
    }

    /// One placement pass plus validation, `None` if either fails
    fn attempt(&mut self, level: usize) -> Option<Grid> {
        let mut placer =
            LatticePlacer::new(&self.library, self.config.symmetry, self.config.rooms);

        match placer.run(&mut self.random_selector) {
            PlacementOutcome::Failed { anchor } => {
                self.stats.placement_failures += 1;
                debug!(
                    "level {level} attempt {}: no compatible fragment at ({}, {})",
                    self.last_level_attempts, anchor[0], anchor[1]
                );
                None
            }
            PlacementOutcome::Placed(grid) => match self.validator.validate(&grid) {
                Ok(()) => Some(grid),
                Err(rejection) => {
                    self.stats.validation_rejections += 1;
                    debug!(
                        "level {level} attempt {}: {rejection}",
                        self.last_level_attempts
                    );
                    None
                }
            },
        }
    }
}
