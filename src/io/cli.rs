//! Command-line interface for batch level generation

use crate::algorithm::executor::{GeneratorConfig, LevelGenerator};
use crate::io::configuration::{
    DEFAULT_LEVEL_COUNT, DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_DIR, DEFAULT_ROOMS, DEFAULT_SEED,
    FRAGMENT_SIDE, OUTPUT_PREFIX, PNG_CELL_SCALE,
};
use crate::io::error::{GeneratorError, Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::templates::TemplateLibrary;
use crate::spatial::grid::{Grid, RoomCount};
use crate::spatial::tiles::SymmetryMode;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Symmetry enumeration selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SymmetryArg {
    /// Three attempts per rotation
    Legacy,
    /// All eight rotations and reflections
    Full,
}

impl From<SymmetryArg> for SymmetryMode {
    fn from(arg: SymmetryArg) -> Self {
        match arg {
            SymmetryArg::Legacy => Self::Legacy,
            SymmetryArg::Full => Self::Full,
        }
    }
}

#[derive(Parser)]
#[command(name = "sokotile")]
#[command(
    author,
    version,
    about = "Generate wall and floor layouts for box-pushing puzzle levels"
)]
/// Command-line arguments for the level generator
// Each flag toggles one independent output or validation switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of levels to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_LEVEL_COUNT)]
    pub levels: usize,

    /// Rooms per axis (each room adds three cells)
    #[arg(short, long, default_value_t = DEFAULT_ROOMS)]
    pub rooms: usize,

    /// Rooms stacked vertically, overrides --rooms
    #[arg(long)]
    pub rows: Option<usize>,

    /// Rooms side by side, overrides --rooms
    #[arg(long)]
    pub cols: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Template definition file (builtin set when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub templates: Option<PathBuf>,

    /// Directory receiving generated levels
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Also export each level as a PNG image
    #[arg(long)]
    pub png: bool,

    /// Symmetry variants tried for each template
    #[arg(long, value_enum, default_value_t = SymmetryArg::Legacy)]
    pub symmetry: SymmetryArg,

    /// Accept levels whose open floor is split into several regions
    #[arg(long)]
    pub skip_connectivity: bool,

    /// Attempts allowed per level before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Retry without limit, ignoring --max-attempts
    #[arg(long)]
    pub unbounded: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Room count after applying per-axis overrides
    pub fn room_count(&self) -> RoomCount {
        RoomCount {
            rows: self.rows.unwrap_or(self.rooms),
            cols: self.cols.unwrap_or(self.rooms),
        }
    }

    /// Generator configuration described by the arguments
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            rooms: self.room_count(),
            symmetry: self.symmetry.into(),
            require_connectivity: !self.skip_connectivity,
            max_attempts: (!self.unbounded).then_some(self.max_attempts),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Generates the requested levels and writes them to the output directory
pub struct LevelBatch {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LevelBatch {
    /// Create a batch for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.levels));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and write every level
    ///
    /// Returns the paths of the written level files.
    ///
    /// # Errors
    ///
    /// Returns an error if the templates cannot be loaded, the configuration is
    /// invalid, a level exhausts its attempts, or an output cannot be written
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let library = match &self.cli.templates {
            Some(path) => TemplateLibrary::from_path(path, FRAGMENT_SIDE)?,
            None => TemplateLibrary::builtin()?,
        };

        if self.cli.levels == 0 {
            return Err(invalid_parameter(
                "levels",
                &self.cli.levels,
                &"at least one level must be requested",
            ));
        }
        let mut generator =
            LevelGenerator::new(library, self.cli.generator_config(), self.cli.seed)?;

        std::fs::create_dir_all(&self.cli.output).map_err(|e| GeneratorError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create directory",
            source: e,
        })?;

        let mut written = Vec::with_capacity(self.cli.levels);
        for level in 0..self.cli.levels {
            let start_time = Instant::now();
            if let Some(ref pm) = self.progress_manager {
                pm.start_level(level);
            }

            let grid = generator.generate_level(level)?;
            written.push(self.write_level(&grid, level)?);

            if let Some(ref pm) = self.progress_manager {
                pm.complete_level(
                    level,
                    generator.attempts_for_last_level(),
                    start_time.elapsed(),
                );
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn write_level(&self, grid: &Grid, level: usize) -> Result<PathBuf> {
        let text_path = Self::get_level_path(&self.cli.output, level, "txt");
        std::fs::write(&text_path, grid.to_string()).map_err(|e| {
            GeneratorError::FileSystem {
                path: text_path.clone(),
                operation: "write level",
                source: e,
            }
        })?;

        if self.cli.png {
            let png_path = Self::get_level_path(&self.cli.output, level, "png");
            export_grid_as_png(grid, &png_path, PNG_CELL_SCALE)?;
        }

        Ok(text_path)
    }

    /// Output path for a level with the given extension, numbered from 1
    pub fn get_level_path(output_dir: &Path, level: usize, extension: &str) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}{:03}.{extension}", level + 1))
    }
}
