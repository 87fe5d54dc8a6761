//! PNG export of finished levels

use crate::io::configuration::{OPEN_COLOR, WALL_COLOR};
use crate::io::error::{GeneratorError, Result, invalid_parameter};
use crate::spatial::grid::{Grid, Tile};
use image::{ImageBuffer, Rgba};
use std::path::Path;

// Anything that is not open floor renders as wall
const fn tile_color(tile: Tile) -> [u8; 4] {
    if tile.is_open() { OPEN_COLOR } else { WALL_COLOR }
}

/// Export a grid as a PNG with `scale` pixels per cell
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or the grid is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path, scale: u32) -> Result<()> {
    let (rows, cols) = grid.dimensions();
    if scale == 0 || rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("cannot render a {rows}x{cols} grid at this scale"),
        ));
    }

    let width = cols as u32 * scale;
    let height = rows as u32 * scale;
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let tile = grid
            .get((y / scale) as usize, (x / scale) as usize)
            .unwrap_or(Tile::Wall);
        Rgba(tile_color(tile))
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GeneratorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
