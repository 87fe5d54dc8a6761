//! Tests for command-line parsing and batch level output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use sokotile::GeneratorError;
    use sokotile::io::cli::{Cli, LevelBatch, SymmetryArg};
    use sokotile::io::configuration::{
        DEFAULT_LEVEL_COUNT, DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_DIR, DEFAULT_ROOMS, DEFAULT_SEED,
    };
    use sokotile::spatial::grid::{Grid, RoomCount, Tile};
    use sokotile::spatial::tiles::SymmetryMode;
    use std::fs;
    use std::path::{Path, PathBuf};

    const ALL_WALL: &str = "#####\n#####\n#####\n#####\n#####\n";

    // Tests CLI parsing with no arguments uses defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["sokotile"]);

        assert_eq!(cli.levels, DEFAULT_LEVEL_COUNT);
        assert_eq!(cli.rooms, DEFAULT_ROOMS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(cli.symmetry, SymmetryArg::Legacy);
        assert!(cli.templates.is_none());
        assert!(!cli.png);
        assert!(!cli.skip_connectivity);
        assert!(!cli.unbounded);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the short flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "sokotile",
            "-n",
            "4",
            "-r",
            "2",
            "--rows",
            "5",
            "-s",
            "7",
            "-t",
            "rooms.txt",
            "-o",
            "out",
            "--png",
            "--symmetry",
            "full",
            "--skip-connectivity",
            "--max-attempts",
            "50",
            "--unbounded",
            "-q",
        ]);

        assert_eq!(cli.levels, 4);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.templates, Some(PathBuf::from("rooms.txt")));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.png);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.room_count(), RoomCount { rows: 5, cols: 2 });
    }

    // Tests arguments map onto the generator configuration
    // Verified by ignoring the unbounded flag
    #[test]
    fn test_generator_config_mapping() {
        let config = Cli::parse_from(["sokotile", "--cols", "4", "--max-attempts", "9"])
            .generator_config();
        assert_eq!(config.rooms, RoomCount { rows: 3, cols: 4 });
        assert_eq!(config.symmetry, SymmetryMode::Legacy);
        assert!(config.require_connectivity);
        assert_eq!(config.max_attempts, Some(9));

        let config = Cli::parse_from([
            "sokotile",
            "--symmetry",
            "full",
            "--skip-connectivity",
            "--unbounded",
        ])
        .generator_config();
        assert_eq!(config.symmetry, SymmetryMode::Full);
        assert!(!config.require_connectivity);
        assert_eq!(config.max_attempts, None);
    }

    // Tests level files are numbered from one with a padded index
    // Verified by numbering from zero
    #[test]
    fn test_get_level_path() {
        let path = LevelBatch::get_level_path(Path::new("out"), 0, "txt");
        assert_eq!(path, PathBuf::from("out/level_001.txt"));

        let path = LevelBatch::get_level_path(Path::new("out"), 41, "png");
        assert_eq!(path, PathBuf::from("out/level_042.png"));
    }

    // Tests a batch writes one text file and one image per level
    // Verified by skipping the image export
    #[test]
    fn test_batch_writes_levels() {
        let dir = tempfile::tempdir().unwrap();
        let templates = dir.path().join("walls.txt");
        fs::write(&templates, ALL_WALL).unwrap();
        let output = dir.path().join("levels");

        let cli = Cli::parse_from([
            "sokotile",
            "-n",
            "2",
            "-r",
            "1",
            "-t",
            templates.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--png",
            "-q",
        ]);
        let written = LevelBatch::new(cli).run().unwrap();

        assert_eq!(written.len(), 2);
        for path in &written {
            let grid = Grid::from_text(&fs::read_to_string(path).unwrap()).unwrap();
            assert_eq!(grid.dimensions(), (5, 5));
            assert_eq!(grid.count(Tile::Wall), 25);
        }
        assert!(output.join("level_001.png").exists());
        assert!(output.join("level_002.png").exists());
    }

    // Tests the builtin templates produce a level without a template file
    // Verified by requiring a template path
    #[test]
    fn test_batch_with_builtin_templates() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("builtin");

        let cli = Cli::parse_from([
            "sokotile",
            "-r",
            "2",
            "-o",
            output.to_str().unwrap(),
            "-q",
        ]);
        let written = LevelBatch::new(cli).run().unwrap();

        assert_eq!(written, vec![output.join("level_001.txt")]);
        let text = fs::read_to_string(output.join("level_001.txt")).unwrap();
        let grid = Grid::from_text(&text).unwrap();
        assert_eq!(grid.dimensions(), (8, 8));
    }

    // Tests requesting zero levels is an error
    // Verified by returning an empty batch instead
    #[test]
    fn test_batch_zero_levels_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from([
            "sokotile",
            "-n",
            "0",
            "-o",
            dir.path().to_str().unwrap(),
            "-q",
        ]);

        assert!(matches!(
            LevelBatch::new(cli).run(),
            Err(GeneratorError::InvalidParameter {
                parameter: "levels",
                ..
            })
        ));
    }

    // Tests a missing template file surfaces as a file system error
    // Verified by falling back to the builtin templates
    #[test]
    fn test_batch_missing_templates_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let cli = Cli::parse_from([
            "sokotile",
            "-t",
            missing.to_str().unwrap(),
            "-o",
            dir.path().to_str().unwrap(),
            "-q",
        ]);

        assert!(matches!(
            LevelBatch::new(cli).run(),
            Err(GeneratorError::FileSystem { .. })
        ));
    }
}
