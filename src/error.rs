//! Error types for input validation

use thiserror::Error;

/// Errors raised while reading the external board string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board string must have 64 cells, got {len}")]
    WrongLength { len: usize },

    #[error("invalid value {found:?} found in board at index {index}")]
    InvalidCell { index: usize, found: char },
}

/// Errors raised while reading a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PosError {
    #[error("position out of range: ({x}, {y})")]
    OutOfRange { x: i32, y: i32 },

    #[error("malformed position: {0:?}")]
    Malformed(String),
}

/// Errors raised while reading engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown search strategy: {0:?}")]
    UnknownStrategy(String),
}
