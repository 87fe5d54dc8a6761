//! Generator constants and runtime configuration defaults

/// Side length of every template fragment
pub const FRAGMENT_SIDE: usize = 5;

// Consecutive fragments share `FRAGMENT_SIDE - LATTICE_STRIDE` rows or columns
/// Distance between neighbouring lattice anchors on both axes
pub const LATTICE_STRIDE: usize = 3;

/// Symbol for a wall cell
pub const WALL_SYMBOL: char = '#';
/// Symbol for an open floor cell
pub const OPEN_SYMBOL: char = '.';
/// Symbol for a fragment cell that defers to the grid
pub const PLACEHOLDER_SYMBOL: char = '?';
/// Symbol for a grid cell no fragment has written yet
pub const UNDECIDED_SYMBOL: char = '~';

/// Builtin template set shipped with the crate
pub const BUILTIN_TEMPLATES: &str = include_str!("../../templates/default.txt");

/// Room count used on each axis when none is given
pub const DEFAULT_ROOMS: usize = 3;

// Keeps a single grid well under a few megabytes of tiles
/// Largest accepted room count on either axis
pub const MAX_ROOMS: usize = 64;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Number of levels produced when none is requested
pub const DEFAULT_LEVEL_COUNT: usize = 1;

/// Attempts allowed per level before generation gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

// Output settings
/// Default directory receiving generated levels
pub const DEFAULT_OUTPUT_DIR: &str = "levels";
/// Filename prefix for generated levels
pub const OUTPUT_PREFIX: &str = "level_";
/// Pixels per grid cell in exported images
pub const PNG_CELL_SCALE: u32 = 16;
/// RGBA colour of wall cells in exported images
pub const WALL_COLOR: [u8; 4] = [64, 48, 40, 255];
/// RGBA colour of open cells in exported images
pub const OPEN_COLOR: [u8; 4] = [224, 216, 192, 255];

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
