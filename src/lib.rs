//! Crate root module declarations for the Plum Checkers engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! driver code can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod checkers_errors;
    pub mod checkers_move;
    pub mod checkers_types;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
}
