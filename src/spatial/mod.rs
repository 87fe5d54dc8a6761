//! Spatial data structures for levels and template fragments
//!
//! This module contains spatial-related functionality including:
//! - The tile alphabet and level grid
//! - Square fragments and their symmetry variants

/// Tile alphabet, room counts and the level grid
pub mod grid;
/// Template fragments, edges and symmetry transforms
pub mod tiles;

pub use grid::{Grid, Tile};
