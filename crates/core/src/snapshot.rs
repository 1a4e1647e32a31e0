//! Per-frame copy of a game session.

use crate::grid::Tile;
use crate::types::{GamePhase, TileStatus, FLAG_CHAR, HIDDEN_CHAR};

/// Copy of everything a frame needs, taken under the session lock.
///
/// Renderers keep one snapshot and refill it every tick, so steady-state
/// rendering does not allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
    pub cursor: usize,
    pub cursor_glyph: char,
    pub num_bombs: usize,
    pub flag_count: usize,
    pub revealed_count: usize,
    pub time_bonus: u32,
    pub phase: GamePhase,
}

impl SessionSnapshot {
    /// Glyph for the tile at `index`, cursor spinner included.
    pub fn glyph_at(&self, index: usize) -> char {
        if index == self.cursor {
            return self.cursor_glyph;
        }
        match self.tiles.get(index) {
            Some(tile) => match tile.status {
                TileStatus::Hidden => HIDDEN_CHAR,
                TileStatus::Flagged => FLAG_CHAR,
                TileStatus::Revealed => tile.value.glyph(),
            },
            None => ' ',
        }
    }

    /// Bonus as displayed (the raw counter ticks nine times per point).
    pub fn score_bonus(&self) -> u32 {
        self.time_bonus / 9
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            tiles: Vec::new(),
            cursor: 0,
            cursor_glyph: ' ',
            num_bombs: 0,
            flag_count: 0,
            revealed_count: 0,
            time_bonus: 0,
            phase: GamePhase::NotStarted,
        }
    }
}
