//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Frame layout, anchored at the top-left corner:
//!
//! ```text
//!          MINESWEEPER        <- right-aligned to width + 5 columns
//!  | - - 1 P - ...            <- one row per board row, " c" per tile
//!  ...
//!
//! Number of bombs: 23
//! Number of flagged tiles: 2
//! Score Bonus : 998
//! ```

use crate::core::SessionSnapshot;
use crate::fb::{FrameBuffer, Tint};
use crate::types::{TileStatus, TileValue};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Title line for a board `width` tiles wide.
pub fn title_line(width: usize) -> String {
    format!("{:>w$}", "MINESWEEPER", w = width + 5)
}

/// Stats lines printed under the board.
pub fn stats_lines(snap: &SessionSnapshot) -> [String; 3] {
    [
        format!("Number of bombs: {}", snap.num_bombs),
        format!("Number of flagged tiles: {}", snap.flag_count),
        format!("Score Bonus : {:03}", snap.score_bonus()),
    ]
}

/// The whole frame as plain text lines.
pub fn frame_lines(snap: &SessionSnapshot) -> Vec<String> {
    let mut lines = Vec::with_capacity(snap.height + 5);
    lines.push(title_line(snap.width));
    for y in 0..snap.height {
        let row: String = (0..snap.width)
            .flat_map(|x| [' ', snap.glyph_at(y * snap.width + x)])
            .collect();
        lines.push(row);
    }
    lines.push(String::new());
    lines.extend(stats_lines(snap));
    lines
}

/// Colour role of a tile (cursor cells stay plain).
fn tile_tint(snap: &SessionSnapshot, index: usize) -> Tint {
    if index == snap.cursor {
        return Tint::Plain;
    }
    match snap.tiles.get(index) {
        Some(t) if t.status == TileStatus::Flagged => Tint::Flag,
        Some(t) if t.status == TileStatus::Revealed && t.value == TileValue::Mine => Tint::Mine,
        _ => Tint::Plain,
    }
}

/// Renders the board frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        self.draw_board(snap, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw title, tiles and stats from row 0. Returns the next free row.
    pub fn draw_board(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) -> u16 {
        fb.put_str(0, 0, &title_line(snap.width), Tint::Plain);

        for y in 0..snap.height {
            let row = (y + 1) as u16;
            for x in 0..snap.width {
                let index = y * snap.width + x;
                let col = (x * 2 + 1) as u16;
                fb.put_char(col, row, snap.glyph_at(index), tile_tint(snap, index));
            }
        }

        let mut row = (snap.height + 2) as u16;
        for line in stats_lines(snap) {
            fb.put_str(0, row, &line, Tint::Plain);
            row += 1;
        }
        row
    }
}
