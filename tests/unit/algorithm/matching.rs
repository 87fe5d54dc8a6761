//! Tests for boundary strip extraction, compatibility and compositing

#[cfg(test)]
mod tests {
    use sokotile::algorithm::matching::{BoundaryStrips, compatible, composite};
    use sokotile::spatial::grid::{Grid, Tile};
    use sokotile::spatial::tiles::{Edge, TileFragment};

    fn open_top_fragment() -> TileFragment {
        TileFragment::from_rows(&["#...#", "#...#", "#...#", "#...#", "#####"]).unwrap()
    }

    // Tests strips beyond the grid read as undecided
    // Verified by reading off-grid cells as walls
    #[test]
    fn test_strips_outside_grid() {
        let grid = Grid::from_text(&".....\n".repeat(5)).unwrap();
        let strips = BoundaryStrips::around(&grid, [0, 0], 5);

        for edge in Edge::ALL {
            assert_eq!(strips.strip(edge), &[Tile::Undecided; 5]);
        }
    }

    // Tests strips read the cells just outside each footprint edge
    // Verified by reading the strips one cell inside the footprint
    #[test]
    fn test_strips_inside_grid() {
        let grid = Grid::from_text(
            "#######\n\
             #abcde#\n\
             f.....g\n\
             h.....i\n\
             j.....k\n\
             l.....m\n\
             n.....o\n\
             #pqrst#\n",
        )
        .unwrap();
        let strips = BoundaryStrips::around(&grid, [2, 1], 5);

        let text = |edge| -> String { strips.strip(edge).iter().map(|t| t.symbol()).collect() };
        assert_eq!(text(Edge::Top), "abcde");
        assert_eq!(text(Edge::Bottom), "pqrst");
        assert_eq!(text(Edge::Left), "fhjln");
        assert_eq!(text(Edge::Right), "gikmo");
    }

    // Tests open edge cells need open floor beyond them
    // Verified by letting placeholders satisfy open edge cells
    #[test]
    fn test_compatible_open_edge() {
        let fragment = open_top_fragment();
        let mut grid = Grid::new(11, 11);
        for col in 0..11 {
            grid.set(2, col, Tile::Open);
        }

        assert!(compatible(
            &fragment,
            &BoundaryStrips::around(&grid, [3, 3], 5)
        ));

        grid.set(2, 5, Tile::Placeholder);
        assert!(!compatible(
            &fragment,
            &BoundaryStrips::around(&grid, [3, 3], 5)
        ));
    }

    // Tests an open edge can never face undecided cells or the outside
    // Verified by treating undecided cells as open
    #[test]
    fn test_compatible_rejects_undecided_neighbours() {
        let grid = Grid::new(11, 11);

        assert!(!compatible(
            &open_top_fragment(),
            &BoundaryStrips::around(&grid, [3, 3], 5)
        ));
        assert!(!compatible(
            &open_top_fragment(),
            &BoundaryStrips::around(&grid, [0, 0], 5)
        ));
    }

    // Tests fragments without open edge cells fit anywhere
    // Verified by requiring walls to face walls
    #[test]
    fn test_compatible_closed_edges() {
        let fragment = TileFragment::from_rows(&["??#??", "?...?", "#...#", "?...?", "??x??"]).unwrap();
        let grid = Grid::from_text(&".......\n".repeat(7)).unwrap();

        assert!(compatible(
            &fragment,
            &BoundaryStrips::around(&grid, [1, 1], 5)
        ));
        assert!(compatible(
            &fragment,
            &BoundaryStrips::around(&Grid::new(5, 5), [0, 0], 5)
        ));
    }

    // Tests a single mismatch on one edge rejects the fragment
    // Verified by accepting when most edge cells match
    #[test]
    fn test_compatible_single_violation() {
        let fragment = TileFragment::from_rows(&["#####", "#...#", "#...#", "#....", "#####"]).unwrap();
        let mut grid = Grid::from_text(&".......\n".repeat(7)).unwrap();
        let strips = BoundaryStrips::around(&grid, [1, 1], 5);
        assert!(compatible(&fragment, &strips));

        grid.set(4, 6, Tile::Wall);
        let strips = BoundaryStrips::around(&grid, [1, 1], 5);
        assert!(!compatible(&fragment, &strips));
    }

    // Tests a placeholder never erases a committed wall
    // Verified by letting placeholders overwrite every cell
    #[test]
    fn test_composite_placeholder_keeps_wall() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, Tile::Wall);
        grid.set(0, 1, Tile::Open);

        composite(&mut grid, &TileFragment::filled(5, Tile::Placeholder), [0, 0]);

        assert_eq!(grid.get(0, 0), Some(Tile::Wall));
        assert_eq!(grid.get(0, 1), Some(Tile::Open));
        assert_eq!(grid.get(2, 2), Some(Tile::Placeholder));
        assert_eq!(grid.count(Tile::Placeholder), 23);
    }

    // Tests decided fragment cells overwrite whatever the grid holds
    // Verified by skipping cells that are already decided
    #[test]
    fn test_composite_overwrites() {
        let mut grid = Grid::from_text("#.#..\n.....\n.....\n.....\n.....").unwrap();
        let fragment = TileFragment::from_rows(&["..", "##"]).unwrap();

        composite(&mut grid, &fragment, [0, 0]);

        assert_eq!(grid.get(0, 0), Some(Tile::Open));
        assert_eq!(grid.get(1, 0), Some(Tile::Wall));
        assert_eq!(grid.get(1, 1), Some(Tile::Wall));
        assert_eq!(grid.get(0, 2), Some(Tile::Wall));
    }

    // Tests fragment cells beyond the grid are dropped
    // Verified by wrapping around to the first column
    #[test]
    fn test_composite_clips_to_grid() {
        let mut grid = Grid::new(3, 3);

        composite(&mut grid, &TileFragment::filled(5, Tile::Open), [1, 1]);

        assert_eq!(grid.count(Tile::Open), 4);
        assert_eq!(grid.get(0, 0), Some(Tile::Undecided));
    }
}
