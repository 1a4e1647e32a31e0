//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, score persistence).
//!
//! # Board Presets
//!
//! Boards are always square and come in three sizes:
//!
//! | Preset | Side |
//! |--------|------|
//! | Small  | 15   |
//! | Medium | 20   |
//! | Large  | 24   |
//!
//! # Difficulty
//!
//! The difficulty is the *ceiling* of the mine density in percent. The actual
//! density of a game is drawn uniformly from `[MIN_BOMB_PERCENT, ceiling]`.
//!
//! | Preset | Ceiling |
//! |--------|---------|
//! | Easy   | 10%     |
//! | Medium | 20%     |
//! | Hard   | 30%     |
//!
//! # Examples
//!
//! ```
//! use tui_minesweeper_types::{BoardSize, Difficulty, Direction, TileValue};
//!
//! assert_eq!(BoardSize::Small.side(), 15);
//! assert_eq!(Difficulty::Hard.percent(), 30);
//!
//! // Linear offsets on a 15-wide board.
//! assert_eq!(Direction::Up.offset(15), -15);
//! assert_eq!(Direction::Right.offset(15), 1);
//!
//! // Adjacency counts grow one mine at a time.
//! assert_eq!(TileValue::Empty.incremented(), TileValue::Number(1));
//! ```

/// Side length of the small preset board.
pub const SMALL_BOARD: u16 = 15;

/// Side length of the medium preset board.
pub const MEDIUM_BOARD: u16 = 20;

/// Side length of the large preset board.
pub const LARGE_BOARD: u16 = 24;

/// Mine density ceiling (percent) for easy games.
pub const EASY_DIFFICULTY: u32 = 10;

/// Mine density ceiling (percent) for medium games.
pub const MEDIUM_DIFFICULTY: u32 = 20;

/// Mine density ceiling (percent) for hard games.
pub const HARD_DIFFICULTY: u32 = 30;

/// Lower bound of the randomized mine density (percent).
pub const MIN_BOMB_PERCENT: u32 = 5;

/// Time bonus granted when mines are deployed (displays as 999).
pub const TIME_BONUS_START: u32 = 8999;

/// Default render interval in milliseconds (25 FPS).
pub const RENDER_INTERVAL_MS: u64 = 40;

/// Number of entries kept in the highscore table.
pub const HIGHSCORE_CAPACITY: usize = 5;

/// Length of a highscore name.
pub const NAME_LEN: usize = 5;

/// Glyph of a hidden tile.
pub const HIDDEN_CHAR: char = '-';

/// Glyph of a flagged tile.
pub const FLAG_CHAR: char = 'P';

/// Glyph of a revealed mine.
pub const BOMB_CHAR: char = '*';

/// Glyph of a revealed empty tile.
pub const EMPTY_CHAR: char = ' ';

/// Cursor spinner frames, drawn in order.
pub const CURSOR_FRAMES: [char; 4] = ['\\', '|', '/', '-'];


/// What a tile holds once mines are deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileValue {
    /// No adjacent mines.
    #[default]
    Empty,
    /// Number of adjacent mines (1-8).
    Number(u8),
    /// A mine.
    Mine,
}

impl TileValue {
    /// One more adjacent mine. Mines stay mines.
    pub fn incremented(self) -> Self {
        match self {
            TileValue::Empty => TileValue::Number(1),
            TileValue::Number(n) => TileValue::Number((n + 1).min(8)),
            TileValue::Mine => TileValue::Mine,
        }
    }

    pub fn is_mine(self) -> bool {
        matches!(self, TileValue::Mine)
    }

    /// Number of adjacent mines, 0 for empty tiles and mines.
    pub fn count(self) -> u8 {
        match self {
            TileValue::Number(n) => n,
            _ => 0,
        }
    }

    /// Glyph shown once the tile is revealed.
    pub fn glyph(self) -> char {
        match self {
            TileValue::Empty => EMPTY_CHAR,
            TileValue::Mine => BOMB_CHAR,
            TileValue::Number(n) => char::from(b'0' + n.min(9)),
        }
    }
}

/// Visibility of a tile.
///
/// `Hidden <-> Flagged` toggles freely; `Hidden -> Revealed` is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileStatus {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Linear index offset of a one-cell move on a board `width` tiles wide.
    pub fn offset(self, width: usize) -> isize {
        match self {
            Direction::Up => -(width as isize),
            Direction::Down => width as isize,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Game actions produced by the input layer.
///
/// Quitting a round is handled separately (see the input crate's `should_quit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one tile
    Move(Direction),
    /// Reveal the tile under the cursor
    Reveal,
    /// Toggle the flag on the tile under the cursor
    Flag,
}

/// Menu navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
}

/// Board size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    /// Side length in tiles (boards are square).
    pub fn side(self) -> u16 {
        match self {
            BoardSize::Small => SMALL_BOARD,
            BoardSize::Medium => MEDIUM_BOARD,
            BoardSize::Large => LARGE_BOARD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BoardSize::Small => "Small",
            BoardSize::Medium => "Medium",
            BoardSize::Large => "Large",
        }
    }
}

/// Difficulty presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Mine density ceiling in percent.
    pub fn percent(self) -> u32 {
        match self {
            Difficulty::Easy => EASY_DIFFICULTY,
            Difficulty::Medium => MEDIUM_DIFFICULTY,
            Difficulty::Hard => HARD_DIFFICULTY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Board size and difficulty chosen before a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSettings {
    pub size: BoardSize,
    pub difficulty: Difficulty,
}

impl GameSettings {
    pub fn new(size: BoardSize, difficulty: Difficulty) -> Self {
        Self { size, difficulty }
    }
}

/// Lifecycle of a single game.
///
/// `NotStarted -> Playing -> {Won, Lost}`; the last two are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Mines are not deployed yet.
    #[default]
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}
