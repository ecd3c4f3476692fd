//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use plum_checkers::engines::engine_iterative::IterativeEngine;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::{Engine, GoParams};
use plum_checkers::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different pairings.
    let light = || Box::new(RandomEngine::new()) as Box<dyn Engine>;
    let dark = || Box::new(IterativeEngine::new(250)) as Box<dyn Engine>;

    println!(
        "series started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let stats = play_engine_match_series(
        light,
        dark,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_plies: 4,
                go_params: GoParams {
                    movetime_ms: Some(250),
                    depth: None,
                },
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
