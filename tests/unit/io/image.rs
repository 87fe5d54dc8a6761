//! Tests for PNG export of finished levels

#[cfg(test)]
mod tests {
    use sokotile::GeneratorError;
    use sokotile::io::configuration::{OPEN_COLOR, WALL_COLOR};
    use sokotile::io::image::export_grid_as_png;
    use sokotile::spatial::grid::Grid;

    // Tests the image size and cell colours of an exported level
    // Verified by rendering open cells with the wall colour
    #[test]
    fn test_export_grid_as_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("level.png");
        let grid = Grid::from_text("####\n#..#\n####").unwrap();

        export_grid_as_png(&grid, &output_path, 4).unwrap();

        let img = image::open(&output_path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (16, 12));
        assert_eq!(img.get_pixel(0, 0).0, WALL_COLOR);
        assert_eq!(img.get_pixel(5, 5).0, OPEN_COLOR);
        assert_eq!(img.get_pixel(11, 7).0, OPEN_COLOR);
        assert_eq!(img.get_pixel(12, 7).0, WALL_COLOR);
    }

    // Tests cells that are neither wall nor open render as wall
    // Verified by rendering placeholders as open
    #[test]
    fn test_export_unresolved_cells_as_wall() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("raw.png");
        let grid = Grid::from_text("?~\nx.").unwrap();

        export_grid_as_png(&grid, &output_path, 1).unwrap();

        let img = image::open(&output_path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, WALL_COLOR);
        assert_eq!(img.get_pixel(1, 0).0, WALL_COLOR);
        assert_eq!(img.get_pixel(0, 1).0, WALL_COLOR);
        assert_eq!(img.get_pixel(1, 1).0, OPEN_COLOR);
    }

    // Tests missing parent directories are created
    // Verified by skipping directory creation
    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("nested").join("deeper").join("level.png");
        let grid = Grid::from_text("###\n#.#\n###").unwrap();

        export_grid_as_png(&grid, &output_path, 2).unwrap();

        assert!(output_path.exists());
    }

    // Tests a zero scale is rejected before anything is written
    // Verified by ignoring the scale check
    #[test]
    fn test_export_zero_scale_error() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("zero.png");
        let grid = Grid::from_text("###").unwrap();

        let result = export_grid_as_png(&grid, &output_path, 0);

        assert!(matches!(
            result,
            Err(GeneratorError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));
        assert!(!output_path.exists());
    }

    // Tests an empty grid cannot be exported
    // Verified by ignoring the empty grid check
    #[test]
    fn test_export_empty_grid_error() {
        let dir = tempfile::tempdir().unwrap();
        let grid = Grid::new(0, 0);

        assert!(export_grid_as_png(&grid, &dir.path().join("empty.png"), 4).is_err());
    }
}
