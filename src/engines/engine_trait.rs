//! Engine abstraction layer used by drivers and the match harness.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::board::Board;
use crate::game_state::checkers_move::CheckersMove;
use crate::game_state::checkers_types::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Wall-clock budget per move, in milliseconds.
    pub movetime_ms: Option<u64>,
    /// Optional depth ceiling override.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The chosen move, or `None` when the side to move has no legal move.
    pub best_move: Option<CheckersMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    /// Chooses a move for `side` on the given board. A `None` best move is a
    /// distinct "no-move" result, not an error; drivers interpret it as the
    /// opponent winning.
    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
