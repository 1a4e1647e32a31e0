//! Flood-fill reveal.
//!
//! Breadth-first over 2D coordinates with an explicit worklist, so large empty
//! regions never hit the call stack. Neighbors of an empty tile are queued
//! whatever their status; anything off the board or not hidden is dropped on
//! dequeue, which is what keeps the walk finite.

use std::collections::VecDeque;

use crate::bounds::NEIGHBOR_STEPS;
use crate::grid::TileGrid;
use crate::types::{TileStatus, TileValue};

/// Reveal from `(x, y)`, cascading through empty tiles.
///
/// Returns the number of tiles that went from hidden to revealed.
pub fn reveal_from(grid: &mut TileGrid, x: isize, y: isize) -> usize {
    let mut revealed = 0;
    let mut work = VecDeque::new();
    work.push_back((x, y));

    while let Some((cx, cy)) = work.pop_front() {
        let Some(idx) = grid.index_of(cx, cy) else {
            continue;
        };
        let Ok(tile) = grid.at_mut(idx) else {
            continue;
        };
        if tile.status != TileStatus::Hidden {
            continue;
        }

        tile.status = TileStatus::Revealed;
        revealed += 1;

        if tile.value == TileValue::Empty {
            for (dx, dy) in NEIGHBOR_STEPS {
                work.push_back((cx + dx, cy + dy));
            }
        }
    }

    revealed
}
