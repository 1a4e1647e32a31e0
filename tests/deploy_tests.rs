//! Mine deployment tests

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_minesweeper::core::{bomb_count, deploy, BoardError, TileGrid};
use tui_minesweeper::types::TileValue;

/// Mines around each tile, counted on coordinates.
fn expected_count(grid: &TileGrid, index: usize) -> u8 {
    let (x, y) = grid.coords_of(index);
    let mut count = 0;
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if let Some(n) = grid.index_of(x as isize + dx, y as isize + dy) {
                if grid.at(n).unwrap().is_mine() {
                    count += 1;
                }
            }
        }
    }
    count
}

fn assert_valid_layout(grid: &TileGrid, exclude: usize, count: usize) {
    assert!(!grid.at(exclude).unwrap().is_mine(), "excluded tile got a mine");
    assert_eq!(grid.mine_count(), count);

    for index in 0..grid.len() {
        let tile = grid.at(index).unwrap();
        if tile.is_mine() {
            continue;
        }
        assert_eq!(
            tile.value.count(),
            expected_count(grid, index),
            "tile {} has value {:?}",
            index,
            tile.value
        );
    }
}

#[test]
fn test_deploy_on_preset_board() {
    let mut grid = TileGrid::new(15, 15);
    let mut rng = StdRng::seed_from_u64(7);
    deploy(&mut grid, 112, 40, &mut rng).unwrap();
    assert_valid_layout(&grid, 112, 40);
}

#[test]
fn test_deploy_fills_every_tile_but_the_safe_one() {
    let mut grid = TileGrid::new(4, 4);
    let mut rng = StdRng::seed_from_u64(1);
    deploy(&mut grid, 5, 15, &mut rng).unwrap();

    assert_eq!(grid.mine_count(), 15);
    assert_eq!(grid.at(5).unwrap().value, TileValue::Number(8));
}

#[test]
fn test_deploy_rejects_bad_arguments() {
    let mut rng = StdRng::seed_from_u64(0);

    let mut grid = TileGrid::new(3, 3);
    assert_eq!(
        deploy(&mut grid, 9, 1, &mut rng),
        Err(BoardError::OutOfRange { index: 9, len: 9 })
    );
    assert_eq!(
        deploy(&mut grid, 0, 9, &mut rng),
        Err(BoardError::TooManyMines { mines: 9, size: 9 })
    );
    assert_eq!(grid.mine_count(), 0);
}

#[test]
fn test_same_seed_same_layout() {
    let layout = |seed| {
        let mut grid = TileGrid::new(20, 20);
        deploy(&mut grid, 0, 50, &mut StdRng::seed_from_u64(seed)).unwrap();
        grid
    };
    assert_eq!(layout(99).tiles(), layout(99).tiles());
}

#[test]
fn test_bomb_count_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let n = bomb_count(400, 30, &mut rng);
        assert!((20..=120).contains(&n), "{n} mines on 400 tiles");
    }
}

proptest! {
    #[test]
    fn prop_deploy_layout_is_consistent(
        width in 3usize..25,
        height in 1usize..25,
        seed in any::<u64>(),
        exclude_seed in any::<usize>(),
        density in 0usize..100,
    ) {
        let size = width * height;
        let exclude = exclude_seed % size;
        let count = (size - 1) * density / 100;

        let mut grid = TileGrid::new(width, height);
        deploy(&mut grid, exclude, count, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_valid_layout(&grid, exclude, count);
    }
}
