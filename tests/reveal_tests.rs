//! Flood-fill reveal tests

use tui_minesweeper::core::{reveal_from, TileGrid};

fn revealed(grid: &TileGrid) -> Vec<usize> {
    (0..grid.len())
        .filter(|&i| grid.at(i).unwrap().is_revealed())
        .collect()
}

#[test]
fn test_zero_region_reveals_its_border() {
    // Column 0 is empty, column 1 borders the wall of mines.
    let mut grid = TileGrid::from_picture(&["..*..", "..*..", "..*.."]);

    assert_eq!(reveal_from(&mut grid, 0, 0), 6);
    assert_eq!(revealed(&grid), vec![0, 1, 5, 6, 10, 11]);

    // Nothing behind the wall.
    for i in [2, 3, 4, 7, 8, 9, 12, 13, 14] {
        assert!(grid.at(i).unwrap().is_hidden());
    }
}

#[test]
fn test_corner_mine_leaves_only_the_mine_hidden() {
    let mut grid = TileGrid::from_picture(&[".....", ".....", ".....", ".....", "....*"]);

    assert_eq!(reveal_from(&mut grid, 0, 0), 24);
    assert!(grid.at(24).unwrap().is_hidden());
}

#[test]
fn test_second_reveal_is_a_noop() {
    let mut grid = TileGrid::from_picture(&["....", "....", "...*"]);

    let first = reveal_from(&mut grid, 0, 0);
    assert_eq!(first, 11);
    assert_eq!(reveal_from(&mut grid, 0, 0), 0);
    assert_eq!(reveal_from(&mut grid, 2, 1), 0);
    assert_eq!(revealed(&grid).len(), first);
}

#[test]
fn test_number_tile_does_not_cascade() {
    let mut grid = TileGrid::from_picture(&["*...", "....", "...."]);
    assert_eq!(reveal_from(&mut grid, 1, 1), 1);
    assert_eq!(revealed(&grid), vec![5]);
}

#[test]
fn test_large_empty_board() {
    let rows = vec![".".repeat(24); 24];
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let mut grid = TileGrid::from_picture(&rows);

    assert_eq!(reveal_from(&mut grid, 12, 12), 24 * 24);
}
