//! TUI Minesweeper (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_minesweeper::{core,input,scores,term,types}` and
//! adds the runtime configuration and logging setup used by the binary.

pub mod config;
pub mod logging;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_input as input;
pub use tui_minesweeper_scores as scores;
pub use tui_minesweeper_term as term;
pub use tui_minesweeper_types as types;
