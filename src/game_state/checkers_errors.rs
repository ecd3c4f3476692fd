//! Error types shared across the rule engine and its callers.

use std::fmt;

use crate::game_state::checkers_types::BoardCoord;

/// Represents all recoverable error conditions reported by the engine.
/// Out-of-range coordinates are a caller precondition violation and panic
/// via indexing instead of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    /// Attempted to place a piece on a square that is already occupied.
    SquareOccupied(BoardCoord),
    /// Attempted to move from a square that holds no piece.
    NoPieceAtSquare(BoardCoord),
    /// The requested destination is not a legal destination for this piece.
    NotALegalDestination { from: BoardCoord, to: BoardCoord },
    /// The provided algebraic coordinate is invalid or could not be parsed.
    InvalidAlgebraic(String),
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Errors::SquareOccupied(coord) => {
                write!(f, "square {:?} is already occupied", coord)
            }
            Errors::NoPieceAtSquare(coord) => {
                write!(f, "no piece at square {:?}", coord)
            }
            Errors::NotALegalDestination { from, to } => {
                write!(
                    f,
                    "{:?} is not a legal destination for the piece at {:?}",
                    to, from
                )
            }
            Errors::InvalidAlgebraic(text) => {
                write!(f, "invalid algebraic coordinate '{}'", text)
            }
        }
    }
}

impl std::error::Error for Errors {}
