//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any terminal
//! I/O, with an optional seeded random opening prefix so repeated games
//! diverge reproducibly. Light moves first. A side whose engine reports
//! no-move loses the match; the board's own `winner()` stays piece-count
//! based.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_apply::apply_checkers_move;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::utils::algebraic::move_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWin,
    DarkWin,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn win_for(color: Color) -> Self {
        match color {
            Color::Light => MatchOutcome::LightWin,
            Color::Dark => MatchOutcome::DarkWin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Random opening plies played before the engines take over.
    pub opening_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_plies: 4,
            go_params: GoParams {
                movetime_ms: Some(100),
                depth: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub played_moves: Vec<String>,
    pub plies: u16,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

/// Plays a single match between two engines. `seed` drives the random
/// opening prefix so series games are reproducible.
pub fn play_engine_match(
    light: &mut dyn Engine,
    dark: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let mut board = Board::new_game();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played_moves = Vec::new();
    let mut plies: u16 = 0;
    let mut light_total_time_ns: u128 = 0;
    let mut dark_total_time_ns: u128 = 0;
    let mut side = Color::Light;

    light.new_game();
    dark.new_game();

    let finish = |outcome, board: Board, played_moves, plies, light_ns, dark_ns| MatchResult {
        outcome,
        final_board: board,
        played_moves,
        plies,
        light_total_time_ns: light_ns,
        dark_total_time_ns: dark_ns,
    };

    // Seeded random opening prefix.
    for _ in 0..config.opening_plies {
        if let Some(winner) = board.winner() {
            return Ok(finish(
                MatchOutcome::win_for(winner),
                board,
                played_moves,
                plies,
                light_total_time_ns,
                dark_total_time_ns,
            ));
        }
        let legal = generate_all_moves(&board, side);
        let Some(mv) = legal.as_slice().choose(&mut rng) else {
            return Ok(finish(
                MatchOutcome::win_for(side.opponent()),
                board,
                played_moves,
                plies,
                light_total_time_ns,
                dark_total_time_ns,
            ));
        };
        apply_checkers_move(&mut board, mv).map_err(|e| e.to_string())?;
        played_moves.push(move_to_algebraic(mv));
        plies += 1;
        side = side.opponent();
    }

    while plies < config.max_plies {
        if let Some(winner) = board.winner() {
            return Ok(finish(
                MatchOutcome::win_for(winner),
                board,
                played_moves,
                plies,
                light_total_time_ns,
                dark_total_time_ns,
            ));
        }

        let engine: &mut dyn Engine = match side {
            Color::Light => &mut *light,
            Color::Dark => &mut *dark,
        };

        let started = Instant::now();
        let output = engine.choose_move(&board, side, &config.go_params)?;
        let elapsed = started.elapsed().as_nanos();
        match side {
            Color::Light => light_total_time_ns += elapsed,
            Color::Dark => dark_total_time_ns += elapsed,
        }

        let Some(mv) = output.best_move else {
            // No legal move: the opponent wins at the driver level.
            return Ok(finish(
                MatchOutcome::win_for(side.opponent()),
                board,
                played_moves,
                plies,
                light_total_time_ns,
                dark_total_time_ns,
            ));
        };

        apply_checkers_move(&mut board, &mv).map_err(|e| e.to_string())?;
        played_moves.push(move_to_algebraic(&mv));
        plies += 1;
        side = side.opponent();
    }

    Ok(finish(
        MatchOutcome::DrawMaxPlies,
        board,
        played_moves,
        plies,
        light_total_time_ns,
        dark_total_time_ns,
    ))
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeriesStats {
    pub light_wins: u16,
    pub dark_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
}

impl SeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games {} light_wins {} dark_wins {} draws {}",
            self.outcomes.len(),
            self.light_wins,
            self.dark_wins,
            self.draws
        )
    }
}

/// Plays a series of matches, building fresh engines per game so no state
/// leaks between games.
pub fn play_engine_match_series<L, D>(
    make_light: L,
    make_dark: D,
    config: MatchSeriesConfig,
) -> Result<SeriesStats, String>
where
    L: Fn() -> Box<dyn Engine>,
    D: Fn() -> Box<dyn Engine>,
{
    let mut stats = SeriesStats::default();

    for game in 0..config.games {
        let mut light = make_light();
        let mut dark = make_dark();
        let seed = config.base_seed.wrapping_add(u64::from(game));

        let result = play_engine_match(light.as_mut(), dark.as_mut(), seed, &config.per_game)?;
        match result.outcome {
            MatchOutcome::LightWin => stats.light_wins += 1,
            MatchOutcome::DarkWin => stats.dark_wins += 1,
            MatchOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "game {} seed {} outcome {:?} plies {} moves {}",
                game,
                seed,
                result.outcome,
                result.plies,
                result.played_moves.join(" ")
            );
        }
    }

    Ok(stats)
}
