/// Command-line argument parsing and batch output
pub mod cli;
/// Generator constants and defaults
pub mod configuration;
/// Error types for loading and generation
pub mod error;
/// PNG export of finished levels
pub mod image;
/// Progress bars for multi-level runs
pub mod progress;
/// Template definition parsing
pub mod templates;
