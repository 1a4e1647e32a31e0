//! Cursor - the single active tile and its spinner animation.

use crate::bounds::is_valid_move;
use crate::types::{Direction, CURSOR_FRAMES};

/// The player's cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    index: usize,
    frame: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move one tile in `direction` if the move stays on the board.
    ///
    /// Returns false (and leaves the cursor alone) otherwise.
    pub fn try_move(&mut self, direction: Direction, width: usize, size: usize) -> bool {
        let offset = direction.offset(width);
        if !is_valid_move(offset, self.index, width, size) {
            return false;
        }
        self.index = (self.index as isize + offset) as usize;
        true
    }

    pub fn move_up(&mut self, width: usize, size: usize) -> bool {
        self.try_move(Direction::Up, width, size)
    }

    pub fn move_down(&mut self, width: usize, size: usize) -> bool {
        self.try_move(Direction::Down, width, size)
    }

    pub fn move_left(&mut self, width: usize, size: usize) -> bool {
        self.try_move(Direction::Left, width, size)
    }

    pub fn move_right(&mut self, width: usize, size: usize) -> bool {
        self.try_move(Direction::Right, width, size)
    }

    /// Advance the spinner and return the glyph to draw.
    pub fn next_glyph(&mut self) -> char {
        self.frame = (self.frame + 1) % CURSOR_FRAMES.len();
        CURSOR_FRAMES[self.frame]
    }

    /// Current spinner glyph without advancing.
    pub fn glyph(&self) -> char {
        CURSOR_FRAMES[self.frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_stop_at_edges() {
        let mut c = Cursor::new();
        // 3x3, starting top-left.
        assert!(!c.move_up(3, 9));
        assert!(!c.move_left(3, 9));
        assert!(c.move_right(3, 9));
        assert!(c.move_right(3, 9));
        assert_eq!(c.index(), 2);
        assert!(!c.move_right(3, 9));
        assert!(c.move_down(3, 9));
        assert!(c.move_down(3, 9));
        assert_eq!(c.index(), 8);
        assert!(!c.move_down(3, 9));
    }

    #[test]
    fn test_spinner_cycles_four_frames() {
        let mut c = Cursor::new();
        let frames: Vec<char> = (0..5).map(|_| c.next_glyph()).collect();
        assert_eq!(frames, vec!['|', '/', '-', '\\', '|']);
    }
}
