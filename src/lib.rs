//! Template-tiled wall and floor layouts for box-pushing puzzle levels
//!
//! Small pre-authored fragments are tiled across a grid on a fixed lattice under
//! boundary compatibility constraints. Finished grids are validated structurally and
//! regenerated from scratch on any failure, producing level topologies that a
//! downstream placer can populate with boxes, goals and a player.

#![forbid(unsafe_code)]

/// Lattice placement, boundary matching, validation and the generation loop
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid, tile alphabet and template fragment data structures
pub mod spatial;

pub use io::error::{GeneratorError, Result};
