use thiserror::Error;

/// Reasons a grid cannot be turned into a [`Board`](crate::board::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    #[error("input is empty")]
    Empty,

    #[error("invalid token `{token}`, expected a non-negative integer")]
    InvalidToken { token: String },

    #[error("board size must be at least 1")]
    ZeroSize,

    #[error("board size {size} is too large")]
    TooLarge { size: usize },

    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile {value} is out of range (max {max})")]
    OutOfRange { value: u32, max: u32 },

    #[error("tile {value} appears more than once")]
    Duplicate { value: u32 },
}
