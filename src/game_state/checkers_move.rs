//! Move representation produced by move generation and consumed by search,
//! engines, and the external driver.

use crate::game_state::checkers_types::BoardCoord;

/// A board transition: origin square, destination square, and the coordinates
/// of every piece captured along the way. A non-empty capture set marks a
/// jump; a multi-jump chain is a single move whose capture set holds all
/// pieces taken along the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckersMove {
    pub start: BoardCoord,
    pub stop: BoardCoord,
    pub captures: Vec<BoardCoord>,
}

impl CheckersMove {
    pub fn new(start: BoardCoord, stop: BoardCoord, captures: Vec<BoardCoord>) -> Self {
        Self {
            start,
            stop,
            captures,
        }
    }

    /// True when the move captures at least one piece.
    pub fn is_jump(&self) -> bool {
        !self.captures.is_empty()
    }
}
