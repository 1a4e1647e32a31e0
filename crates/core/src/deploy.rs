//! Mine deployment.
//!
//! Mines are placed lazily on the first reveal so the opening move is always
//! safe. Placement picks distinct tiles uniformly at random and bumps the
//! adjacency count of every in-bounds, non-mine neighbor.

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::bounds::neighbors;
use crate::error::BoardError;
use crate::grid::TileGrid;
use crate::types::{TileValue, MIN_BOMB_PERCENT};

/// Number of mines for a board of `size` tiles.
///
/// The density is drawn uniformly from `[MIN_BOMB_PERCENT, difficulty_percent]`,
/// so the difficulty is a ceiling rather than an exact rate.
pub fn bomb_count<R: Rng + ?Sized>(size: usize, difficulty_percent: u32, rng: &mut R) -> usize {
    let ceiling = difficulty_percent.max(MIN_BOMB_PERCENT);
    let percent = rng.gen_range(MIN_BOMB_PERCENT..=ceiling) as usize;
    size * percent / 100
}

/// Place `count` mines on a freshly allocated grid, never on `exclude`.
///
/// Neighbor counts are derived through [`neighbors`], which assumes the
/// board is at least 3 tiles wide.
pub fn deploy<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    exclude: usize,
    count: usize,
    rng: &mut R,
) -> Result<(), BoardError> {
    let size = grid.len();
    if exclude >= size {
        return Err(BoardError::OutOfRange {
            index: exclude,
            len: size,
        });
    }
    if count >= size {
        return Err(BoardError::TooManyMines { mines: count, size });
    }

    let width = grid.width();

    // Sample from every tile but `exclude`, then shift picks past it.
    for pick in index::sample(rng, size - 1, count) {
        let mine = if pick >= exclude { pick + 1 } else { pick };
        grid.at_mut(mine)?.value = TileValue::Mine;

        for neighbor in neighbors(mine, width, size) {
            let tile = grid.at_mut(neighbor)?;
            if !tile.is_mine() {
                tile.value = tile.value.incremented();
            }
        }
    }

    debug!(mines = count, exclude, size, "mines deployed");
    Ok(())
}
