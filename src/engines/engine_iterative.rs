//! Iterative-deepening positional-search engine.
//!
//! Wraps the core minimax alpha-beta search with a per-move time budget and
//! the positional scorer. This is the engine behind the `choose_move` entry
//! point consumed by driver code.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_move::CheckersMove;
use crate::game_state::checkers_types::Color;
use crate::search::board_scoring::PositionalScorer;
use crate::search::iterative_deepening::{
    iterative_deepening_search, SearchConfig, MAX_SEARCH_DEPTH,
};

pub struct IterativeEngine {
    default_movetime_ms: u64,
    scorer: PositionalScorer,
}

impl IterativeEngine {
    pub fn new(default_movetime_ms: u64) -> Self {
        Self {
            default_movetime_ms,
            scorer: PositionalScorer,
        }
    }
}

impl Default for IterativeEngine {
    fn default() -> Self {
        Self::new(1_000)
    }
}

impl Engine for IterativeEngine {
    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let movetime_ms = params.movetime_ms.unwrap_or(self.default_movetime_ms);
        let max_depth = params.depth.unwrap_or(MAX_SEARCH_DEPTH);

        let result = iterative_deepening_search(
            board,
            side == Color::Dark,
            &self.scorer,
            SearchConfig {
                movetime_ms,
                max_depth,
            },
        );

        let info_lines = vec![
            format!(
                "info depth {} score {} nodes {} time {}",
                result.reached_depth, result.best_score, result.nodes, result.elapsed_ms
            ),
            format!("info string iterative_engine movetime_ms {}", movetime_ms),
        ];
        Ok(EngineOutput {
            best_move: result.best_move,
            info_lines,
        })
    }
}

/// Chooses a move for the computer within a wall-clock budget. This is the
/// sole search entry point drivers need: `maximizing_color_to_move` is true
/// when Dark (the maximizing color) is to move. Returns `None` when the side
/// to move has no legal move.
pub fn choose_move(
    board: &Board,
    maximizing_color_to_move: bool,
    time_budget_seconds: f64,
) -> Option<CheckersMove> {
    let movetime_ms = (time_budget_seconds.max(0.0) * 1_000.0) as u64;
    let result = iterative_deepening_search(
        board,
        maximizing_color_to_move,
        &PositionalScorer,
        SearchConfig {
            movetime_ms,
            max_depth: MAX_SEARCH_DEPTH,
        },
    );
    result.best_move
}
