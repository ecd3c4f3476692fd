//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! harness baselines, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_generator::generate_all_moves;

#[derive(Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let legal_moves = generate_all_moves(board, side);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(picked.clone());
        Ok(out)
    }
}
