use seabattle::{Cell, Coordinate, GameError, Grid, ShipId, MAX_GRID_SIZE};

#[test]
fn every_supported_size_starts_empty() {
    for n in 1..=MAX_GRID_SIZE {
        let grid = Grid::new(n).unwrap();
        assert_eq!(grid.size(), n);
        assert_eq!(grid.cells().count(), n * n);
        assert!(grid.cells().all(|(_, cell)| cell == Cell::Empty));
        for r in 0..n {
            assert_eq!(grid.row(r).map(<[Cell]>::len), Some(n));
        }
        assert!(grid.row(n).is_none());
    }
}

#[test]
fn rejects_unlabelled_sizes() {
    assert_eq!(Grid::new(0).unwrap_err(), GameError::InvalidGridSize(0));
    assert_eq!(
        Grid::new(MAX_GRID_SIZE + 1).unwrap_err(),
        GameError::InvalidGridSize(MAX_GRID_SIZE + 1)
    );
}

#[test]
fn mark_updates_a_single_cell() {
    let mut grid = Grid::new(10).unwrap();
    grid.mark(Coordinate::new(0, 0), Cell::Hit).unwrap();
    grid.mark(Coordinate::new(1, 1), Cell::Miss).unwrap();
    grid.mark(Coordinate::new(9, 9), Cell::Ship(ShipId(4))).unwrap();

    assert_eq!(grid.get(Coordinate::new(0, 0)).unwrap(), Cell::Hit);
    assert_eq!(grid.get(Coordinate::new(1, 1)).unwrap(), Cell::Miss);
    assert_eq!(grid.get(Coordinate::new(9, 9)).unwrap(), Cell::Ship(ShipId(4)));
    let touched = grid.cells().filter(|(_, c)| *c != Cell::Empty).count();
    assert_eq!(touched, 3);
}

#[test]
fn mark_out_of_bounds_fails() {
    let mut grid = Grid::new(4).unwrap();
    assert_eq!(
        grid.mark(Coordinate::new(4, 0), Cell::Miss).unwrap_err(),
        GameError::OutOfBounds { row: 4, col: 0 }
    );
    assert_eq!(
        grid.mark(Coordinate::new(0, 7), Cell::Miss).unwrap_err(),
        GameError::OutOfBounds { row: 0, col: 7 }
    );
    assert!(grid.get(Coordinate::new(3, 4)).is_err());
    assert!(grid.cells().all(|(_, cell)| cell == Cell::Empty));
}

#[test]
fn coordinates_display_as_row_letter_and_column() {
    assert_eq!(Coordinate::new(0, 0).to_string(), "A1");
    assert_eq!(Coordinate::new(0, 4).to_string(), "A5");
    assert_eq!(Coordinate::new(9, 9).to_string(), "J10");
}

#[test]
fn clear_resets_every_cell() {
    let mut grid = Grid::new(3).unwrap();
    grid.mark(Coordinate::new(2, 2), Cell::Hit).unwrap();
    grid.clear();
    assert!(grid.cells().all(|(_, cell)| cell == Cell::Empty));
}
