//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the render
//! scheduling. It has **no dependencies** on terminals or files, making it:
//!
//! - **Deterministic**: A seeded session produces the same mine layout every time
//! - **Testable**: Every rule can be exercised on hand-drawn boards
//! - **Portable**: Any [`FrameSink`] can display a game (terminal, recorder, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: Flat row-major tile storage with bounds-checked access
//! - [`bounds`]: Linear offset validation that rejects row wrapping
//! - [`deploy`]: Lazy, first-click-safe mine placement and adjacency counts
//! - [`reveal`]: Iterative flood-fill of empty regions
//! - [`cursor`]: The single active tile and its spinner
//! - [`session`]: Game lifecycle, win/loss detection and scoring
//! - [`render_loop`]: Timer-driven renderer sharing the session through a mutex
//! - [`menu`]: Main/settings menus and highscore name entry
//! - [`snapshot`]: Lock-free copy of a session for rendering
//!
//! # Game Rules
//!
//! - **Deferred deployment**: Mines are placed on the first reveal, never under it
//! - **Density**: `size * r / 100` mines with `r` uniform in `[5, difficulty]`
//! - **Flood fill**: Revealing an empty tile reveals its whole empty region and border
//! - **Flags**: Flagged tiles cannot be revealed until unflagged
//! - **Time bonus**: Starts at 8999 and loses one point per rendered frame
//! - **Scoring**: `revealed / (width / 4) + (bonus / 9 + bombs * 5)` on a win
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_core::{GameSession, GamePhase};
//! use tui_minesweeper_core::types::{BoardSize, Difficulty, Direction, GameSettings};
//!
//! let settings = GameSettings::new(BoardSize::Small, Difficulty::Easy);
//! let mut game = GameSession::with_seed(settings, 12345);
//!
//! game.move_cursor(Direction::Right);
//! game.move_cursor(Direction::Down);
//! assert_eq!(game.cursor(), 16);
//!
//! // The first reveal is always safe.
//! game.reveal_at_cursor().unwrap();
//! assert_ne!(game.phase(), GamePhase::Lost);
//! assert!(game.num_bombs() > 0);
//! ```

pub mod bounds;
pub mod cursor;
pub mod deploy;
pub mod error;
pub mod grid;
pub mod menu;
pub mod render_loop;
pub mod reveal;
pub mod session;
pub mod snapshot;

pub use tui_minesweeper_types as types;

// Re-export commonly used types for convenience
pub use bounds::{is_valid_move, neighbor_offsets, neighbors, NEIGHBOR_STEPS};
pub use cursor::Cursor;
pub use deploy::{bomb_count, deploy};
pub use error::BoardError;
pub use grid::{Tile, TileGrid};
pub use menu::{MainMenuChoice, Menu, NameEntry, NAME_KEYS, NAME_KEYS_PER_ROW};
pub use render_loop::{render_tick, FrameSink, RenderLoop, SharedSession};
pub use reveal::reveal_from;
pub use session::{compute_score, GameSession};
pub use snapshot::SessionSnapshot;
pub use types::GamePhase;
