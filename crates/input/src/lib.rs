//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and
//! [`crate::types::MenuAction`]. Input is event driven: callers block on
//! `crossterm::event::read` instead of polling key state.

pub mod map;

pub use tui_minesweeper_types as types;

pub use map::{handle_key_event, handle_menu_key, is_actionable, should_quit};
