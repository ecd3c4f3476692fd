//! Iterative deepening search with minimax alpha-beta pruning.
//!
//! Depth-progressive search under a wall-clock budget: each completed depth
//! refines the recorded best move, and an exceeded deadline unwinds the
//! in-flight depth entirely, falling back to the last completed one.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;

use crate::game_state::board::Board;
use crate::game_state::checkers_move::CheckersMove;
use crate::game_state::checkers_types::Color;
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::search::board_scoring::BoardScorer;

/// Hard ceiling on search depth, bounding stack use in drawish lines.
pub const MAX_SEARCH_DEPTH: u8 = 20;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Wall-clock budget for the whole iterative-deepening run.
    pub movetime_ms: u64,
    /// Depth ceiling; clamped to `MAX_SEARCH_DEPTH`.
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            movetime_ms: 1_000,
            max_depth: MAX_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<CheckersMove>,
    pub best_score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Internal unwind signal: the deadline passed mid-recursion, so the whole
/// current depth is abandoned. Never surfaced to callers.
struct DeadlineExceeded;

/// Runs time-bounded iterative deepening for the side to move.
///
/// `maximizing` is true when Dark (the maximizing color) is to move. Depths
/// are searched in order 1, 2, ... until the deadline passes, a depth proves
/// a win or loss, or the depth ceiling is reached. The first depth runs
/// without deadline interruption so even a zero budget yields a valid move
/// whenever the side to move has one.
pub fn iterative_deepening_search<S: BoardScorer>(
    board: &Board,
    maximizing: bool,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started = Instant::now();
    let deadline = started + Duration::from_millis(config.movetime_ms);
    let max_depth = config.max_depth.clamp(1, MAX_SEARCH_DEPTH);

    let mut result = SearchResult::default();
    let mut nodes = 0u64;
    let mut depth = 1u8;

    loop {
        let gate = if depth == 1 { None } else { Some(deadline) };
        match minimax(
            board,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            maximizing,
            gate,
            scorer,
            &mut nodes,
        ) {
            Ok((score, best_move)) => {
                if best_move.is_some() {
                    result.best_move = best_move;
                }
                result.best_score = score;
                result.reached_depth = depth;
            }
            Err(DeadlineExceeded) => break,
        }

        // A proven win or loss cannot be refined by searching deeper.
        if result.best_score.is_infinite() {
            break;
        }
        depth += 1;
        if depth > max_depth {
            break;
        }
        if Instant::now() > deadline {
            break;
        }
    }

    result.nodes = nodes;
    result.elapsed_ms = started.elapsed().as_millis() as u64;
    result
}

/// Minimax with alpha-beta pruning. Returns the node's score together with
/// the best immediate child move (meaningful only at the root).
///
/// Best-move bookkeeping overwrites on score ties, so among equally scored
/// candidates the one explored last is kept. This tie-break is deliberate;
/// changing it changes engine behavior.
#[allow(clippy::too_many_arguments)]
fn minimax<S: BoardScorer>(
    board: &Board,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    max_player: bool,
    deadline: Option<Instant>,
    scorer: &S,
    nodes: &mut u64,
) -> Result<(f64, Option<CheckersMove>), DeadlineExceeded> {
    if let Some(limit) = deadline {
        if Instant::now() > limit {
            return Err(DeadlineExceeded);
        }
    }
    *nodes += 1;

    if depth == 0 || board.winner().is_some() {
        return Ok((scorer.score(board), None));
    }

    let color = if max_player { Color::Dark } else { Color::Light };
    let mut children = expand(board, color);
    order_moves(&mut children);

    let mut best_move = None;
    if max_player {
        let mut max_eval = f64::NEG_INFINITY;
        for (child, mv) in children {
            let (evaluation, _) = minimax(
                &child,
                depth - 1,
                alpha,
                beta,
                false,
                deadline,
                scorer,
                nodes,
            )?;
            max_eval = max_eval.max(evaluation);
            if max_eval == evaluation {
                best_move = Some(mv);
            }
            alpha = alpha.max(evaluation);
            if beta <= alpha {
                break;
            }
        }
        Ok((max_eval, best_move))
    } else {
        let mut min_eval = f64::INFINITY;
        for (child, mv) in children {
            let (evaluation, _) = minimax(
                &child,
                depth - 1,
                alpha,
                beta,
                true,
                deadline,
                scorer,
                nodes,
            )?;
            min_eval = min_eval.min(evaluation);
            if min_eval == evaluation {
                best_move = Some(mv);
            }
            beta = beta.min(evaluation);
            if beta <= alpha {
                break;
            }
        }
        Ok((min_eval, best_move))
    }
}

/// Generates every successor position for a color. Each candidate move gets
/// its own cloned board; sibling branches never share mutable state.
fn expand(board: &Board, color: Color) -> Vec<(Board, CheckersMove)> {
    let mut children = Vec::new();
    for mv in generate_all_moves(board, color) {
        // Generated moves always apply cleanly to the board they came from.
        if let Ok(next) = simulate_move(board, &mv) {
            children.push((next, mv));
        }
    }
    children
}

/// Shuffles candidates, then stably sorts by descending capture count so
/// multi-jumps are explored first. The shuffle keeps tie-broken play from
/// being strictly deterministic.
fn order_moves(children: &mut [(Board, CheckersMove)]) {
    let mut rng = rand::rng();
    children.shuffle(&mut rng);
    children.sort_by(|a, b| b.1.captures.len().cmp(&a.1.captures.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Piece;
    use crate::search::board_scoring::PositionalScorer;

    fn place(board: &mut Board, row: i8, col: i8, color: Color) {
        board
            .place_piece(Piece::new(row, col, color))
            .expect("square should be free");
    }

    #[test]
    fn search_returns_a_legal_move_from_the_start_position() {
        let board = Board::new_game();
        let result = iterative_deepening_search(
            &board,
            true,
            &PositionalScorer,
            SearchConfig {
                movetime_ms: 50,
                max_depth: 6,
            },
        );

        let best = result.best_move.expect("dark has legal moves");
        assert!(generate_all_moves(&board, Color::Dark).contains(&best));
        assert!(result.reached_depth >= 1);
        assert!(result.nodes > 0);
    }

    #[test]
    fn zero_budget_still_completes_depth_one() {
        let board = Board::new_game();
        let result = iterative_deepening_search(
            &board,
            true,
            &PositionalScorer,
            SearchConfig {
                movetime_ms: 0,
                max_depth: MAX_SEARCH_DEPTH,
            },
        );

        assert!(result.best_move.is_some(), "depth 1 must always complete");
        assert_eq!(result.reached_depth, 1);
    }

    #[test]
    fn maximizer_takes_a_winning_capture() {
        let mut board = Board::empty();
        place(&mut board, 3, 2, Color::Dark);
        place(&mut board, 4, 3, Color::Light);

        let result = iterative_deepening_search(
            &board,
            true,
            &PositionalScorer,
            SearchConfig {
                movetime_ms: 100,
                max_depth: 4,
            },
        );

        let best = result.best_move.expect("dark has legal moves");
        assert_eq!(best.stop, (5, 4));
        assert_eq!(best.captures, vec![(4, 3)]);
        assert_eq!(result.best_score, f64::INFINITY);
    }

    #[test]
    fn minimizer_takes_a_winning_capture() {
        let mut board = Board::empty();
        place(&mut board, 4, 3, Color::Light);
        place(&mut board, 3, 2, Color::Dark);

        let result = iterative_deepening_search(
            &board,
            false,
            &PositionalScorer,
            SearchConfig {
                movetime_ms: 100,
                max_depth: 4,
            },
        );

        let best = result.best_move.expect("light has legal moves");
        assert_eq!(best.stop, (2, 1));
        assert_eq!(result.best_score, f64::NEG_INFINITY);
    }

    #[test]
    fn proven_win_stops_the_deepening_early() {
        let mut board = Board::empty();
        place(&mut board, 3, 2, Color::Dark);
        place(&mut board, 4, 3, Color::Light);

        let result = iterative_deepening_search(
            &board,
            true,
            &PositionalScorer,
            SearchConfig::default(),
        );

        assert_eq!(result.reached_depth, 1);
        assert_eq!(result.best_score, f64::INFINITY);
    }

    #[test]
    fn side_with_no_moves_yields_no_move() {
        // A dark man on the far row has no forward squares left, so the side
        // to move has no legal move at all.
        let mut board = Board::empty();
        place(&mut board, 7, 0, Color::Dark);
        place(&mut board, 5, 2, Color::Light);

        let result = iterative_deepening_search(
            &board,
            true,
            &PositionalScorer,
            SearchConfig {
                movetime_ms: 10,
                max_depth: 3,
            },
        );

        assert!(result.best_move.is_none());
    }

    #[test]
    fn search_respects_the_depth_ceiling() {
        let board = Board::new_game();
        let result = iterative_deepening_search(
            &board,
            true,
            &PositionalScorer,
            SearchConfig {
                movetime_ms: 10_000,
                max_depth: 2,
            },
        );

        assert_eq!(result.reached_depth, 2);
    }
}
