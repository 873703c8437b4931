//! Grid tests - occupancy map primitives

use blockfield::core::Grid;
use blockfield::types::{Bounds, Cell, TileId};

#[test]
fn test_new_grid_empty_and_in_bounds() {
    let grid = Grid::new(Bounds::centered(10, 20));

    for y in -10..10 {
        for x in -5..5 {
            let cell = Cell::new(x, y);
            assert!(grid.contains(cell), "cell ({x}, {y}) should be in bounds");
            assert!(!grid.is_occupied(cell));
            assert_eq!(grid.tile(cell), None);
        }
    }
}

#[test]
fn test_contains_false_outside_bounds() {
    let grid = Grid::new(Bounds::centered(10, 20));

    for cell in [
        Cell::new(-6, 0),
        Cell::new(5, 0),
        Cell::new(0, -11),
        Cell::new(0, 10),
        Cell::new(100, 100),
    ] {
        assert!(!grid.contains(cell));
        assert!(!grid.is_occupied(cell));
    }
}

#[test]
fn test_set_and_clear_single_cell() {
    let mut grid = Grid::new(Bounds::centered(10, 20));

    grid.set(Cell::new(3, -7), Some(TileId(2)));
    assert!(grid.is_occupied(Cell::new(3, -7)));
    assert_eq!(grid.tile(Cell::new(3, -7)), Some(TileId(2)));

    grid.set(Cell::new(3, -7), None);
    assert!(!grid.is_occupied(Cell::new(3, -7)));
}

#[test]
fn test_out_of_bounds_write_is_ignored() {
    let mut grid = Grid::new(Bounds::centered(10, 20));
    grid.set(Cell::new(50, 0), Some(TileId(1)));
    assert!(grid.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_row_is_full_requires_every_column() {
    let mut grid = Grid::new(Bounds::centered(10, 20));

    for x in -5..4 {
        grid.set(Cell::new(x, -10), Some(TileId(1)));
    }
    assert!(!grid.row_is_full(-10));

    grid.set(Cell::new(4, -10), Some(TileId(1)));
    assert!(grid.row_is_full(-10));
}

#[test]
fn test_clear_row_leaves_neighbours() {
    let mut grid = Grid::new(Bounds::centered(10, 20));
    for x in -5..5 {
        grid.set(Cell::new(x, 0), Some(TileId(1)));
        grid.set(Cell::new(x, 1), Some(TileId(2)));
    }

    grid.clear_row(0);

    for x in -5..5 {
        assert!(!grid.is_occupied(Cell::new(x, 0)));
        assert!(grid.is_occupied(Cell::new(x, 1)));
    }
}

#[test]
fn test_shift_row_down_copies_occupancy_and_holes() {
    let mut grid = Grid::new(Bounds::centered(10, 20));
    grid.set(Cell::new(-5, 5), Some(TileId(3)));
    grid.set(Cell::new(0, 5), Some(TileId(4)));
    // row 4 has content that must be overwritten, including by holes
    for x in -5..5 {
        grid.set(Cell::new(x, 4), Some(TileId(9)));
    }

    grid.shift_row_down(4);

    assert_eq!(grid.tile(Cell::new(-5, 4)), Some(TileId(3)));
    assert_eq!(grid.tile(Cell::new(0, 4)), Some(TileId(4)));
    assert!(!grid.is_occupied(Cell::new(2, 4)));
}

#[test]
fn test_clear_all_resets_everything() {
    let mut grid = Grid::new(Bounds::centered(10, 20));
    for y in -10..10 {
        grid.set(Cell::new(0, y), Some(TileId(1)));
    }

    grid.clear_all();

    assert!(grid.cells().iter().all(|c| c.is_none()));
}
