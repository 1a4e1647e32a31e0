//! Grid module - owns the tiles of one board
//!
//! Tiles are stored in a flat vector in row-major order (`y * width + x`).
//! The grid never resizes during play; `allocate` discards everything.

use crate::error::BoardError;
use crate::types::{TileStatus, TileValue};

/// A single tile: what it holds and whether the player can see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub value: TileValue,
    pub status: TileStatus,
}

impl Tile {
    pub fn is_mine(&self) -> bool {
        self.value.is_mine()
    }

    pub fn is_hidden(&self) -> bool {
        self.status == TileStatus::Hidden
    }

    pub fn is_flagged(&self) -> bool {
        self.status == TileStatus::Flagged
    }

    pub fn is_revealed(&self) -> bool {
        self.status == TileStatus::Revealed
    }
}

/// The board - `width` x `height` tiles using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid of empty, hidden tiles.
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = Self {
            width: 0,
            height: 0,
            tiles: Vec::new(),
        };
        grid.allocate(width, height);
        grid
    }

    /// Reset to `width` x `height` empty, hidden tiles, dropping prior state.
    pub fn allocate(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.tiles.clear();
        self.tiles.resize(width * height, Tile::default());
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a linear index.
    pub fn at(&self, index: usize) -> Result<&Tile, BoardError> {
        let len = self.tiles.len();
        self.tiles
            .get(index)
            .ok_or(BoardError::OutOfRange { index, len })
    }

    /// Mutable tile at a linear index.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Tile, BoardError> {
        let len = self.tiles.len();
        self.tiles
            .get_mut(index)
            .ok_or(BoardError::OutOfRange { index, len })
    }

    /// Linear index of `(x, y)`, or None when outside the board.
    #[inline(always)]
    pub fn index_of(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// `(x, y)` coordinates of a linear index.
    #[inline(always)]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles holding a mine.
    pub fn mine_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_mine()).count()
    }

    /// Force every tile to revealed (end-of-game display).
    pub fn reveal_all(&mut self) {
        for tile in &mut self.tiles {
            tile.status = TileStatus::Revealed;
        }
    }

    /// Build a deployed grid from a picture (tests and benches).
    ///
    /// `*` is a mine, anything else a safe tile; adjacency counts are computed.
    pub fn from_picture(rows: &[&str]) -> Self {
        use crate::bounds::NEIGHBOR_STEPS;

        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '*' {
                    grid.tiles[y * width + x].value = TileValue::Mine;
                }
            }
        }
        for y in 0..height as isize {
            for x in 0..width as isize {
                let idx = y as usize * width + x as usize;
                if grid.tiles[idx].is_mine() {
                    continue;
                }
                for (dx, dy) in NEIGHBOR_STEPS {
                    if let Some(n) = grid.index_of(x + dx, y + dy) {
                        if grid.tiles[n].is_mine() {
                            grid.tiles[idx].value = grid.tiles[idx].value.incremented();
                        }
                    }
                }
            }
        }
        grid
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(3, 0), Some(3));
        assert_eq!(grid.index_of(0, 1), Some(4));
        assert_eq!(grid.index_of(3, 2), Some(11));
        assert_eq!(grid.index_of(-1, 0), None);
        assert_eq!(grid.index_of(4, 0), None);
        assert_eq!(grid.index_of(0, 3), None);
        assert_eq!(grid.coords_of(7), (3, 1));
    }

    #[test]
    fn test_allocate_discards_prior_state() {
        let mut grid = TileGrid::new(3, 3);
        grid.at_mut(4).unwrap().value = TileValue::Mine;
        grid.at_mut(0).unwrap().status = TileStatus::Flagged;

        grid.allocate(5, 2);
        assert_eq!(grid.len(), 10);
        assert!(grid.tiles().iter().all(|t| *t == Tile::default()));
    }

    #[test]
    fn test_at_out_of_range() {
        let grid = TileGrid::new(3, 3);
        assert!(grid.at(8).is_ok());
        assert_eq!(
            grid.at(9),
            Err(BoardError::OutOfRange { index: 9, len: 9 })
        );
    }

    #[test]
    fn test_from_picture_counts_neighbors() {
        let grid = TileGrid::from_picture(&["*..", "...", "..*"]);
        assert_eq!(grid.mine_count(), 2);
        assert_eq!(grid.at(1).unwrap().value, TileValue::Number(1));
        assert_eq!(grid.at(4).unwrap().value, TileValue::Number(2));
        assert_eq!(grid.at(2).unwrap().value, TileValue::Empty);
    }

    #[test]
    fn test_reveal_all() {
        let mut grid = TileGrid::new(2, 2);
        grid.at_mut(1).unwrap().status = TileStatus::Flagged;
        grid.reveal_all();
        assert!(grid.tiles().iter().all(|t| t.is_revealed()));
    }
}
