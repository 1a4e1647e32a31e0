use thiserror::Error;

/// Errors raised by board operations.
///
/// Both variants are programming errors: the game only ever addresses tiles
/// through bounds-checked indices and presets never ask for more mines than tiles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("tile index {index} is out of range for a board of {len} tiles")]
    OutOfRange { index: usize, len: usize },
    #[error("cannot place {mines} mines on a board of {size} tiles")]
    TooManyMines { mines: usize, size: usize },
}
