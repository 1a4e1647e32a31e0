//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is diffed and flushed to a crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every view pure so screens can be asserted cell by cell
//! - Let the render thread own the terminal only while a game runs

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;
pub mod sink;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_scores as scores;
pub use tui_minesweeper_types as types;

pub use fb::{Cell, FrameBuffer, Tint};
pub use game_view::{frame_lines, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{render_game_over, render_highscores, render_menu, render_name_entry};
pub use sink::TerminalSink;
