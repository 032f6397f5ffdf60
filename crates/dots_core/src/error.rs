//! Error types for the board model

use thiserror::Error;

use crate::types::Move;

/// Why a move was refused by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    AlreadyDrawn,
    NotDrawn,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfBounds => "edge is out of bounds",
            InvalidMoveReason::AlreadyDrawn => "edge is already drawn",
            InvalidMoveReason::NotDrawn => "edge is not drawn",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move {mv}: {reason}")]
    InvalidMove {
        mv: Move,
        reason: InvalidMoveReason,
    },

    #[error("invalid board dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("could not read move '{input}': {message}")]
    Notation { input: String, message: String },
}

impl Error {
    pub fn invalid_move(mv: Move, reason: InvalidMoveReason) -> Self {
        Error::InvalidMove { mv, reason }
    }

    /// True for every rejection the search loop treats as "not a candidate".
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
