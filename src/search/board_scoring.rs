//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search delegates static position scoring to the `BoardScorer` trait so
//! alternate heuristics can be swapped without altering search code. Scores
//! are from Dark's perspective: positive favors Dark, the maximizing side.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, COLS};

pub trait BoardScorer: Send + Sync {
    /// Score the board; positive favors Dark. A board where one color has no
    /// pieces left evaluates to `f64::INFINITY` (Dark wins) or
    /// `f64::NEG_INFINITY` (Light wins).
    fn score(&self, board: &Board) -> f64;
}

/// Positional heuristic used by the iterative engine. Per piece: base value
/// 10 (20 for kings), +2 inside the central 4x4 region, +1 per row of
/// advancement toward the promotion rank for non-kings, and +1 on an edge
/// column, where pieces resist certain capture geometries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board) -> f64 {
        match board.winner() {
            Some(Color::Dark) => return f64::INFINITY,
            Some(Color::Light) => return f64::NEG_INFINITY,
            None => {}
        }

        let mut score = 0.0;
        for piece in board.pieces() {
            let mut piece_score = if piece.king { 20.0 } else { 10.0 };

            if (2..=5).contains(&piece.row) && (2..=5).contains(&piece.col) {
                piece_score += 2.0;
            }

            if !piece.king {
                let advancement = match piece.color {
                    Color::Dark => piece.row,
                    Color::Light => 7 - piece.row,
                };
                piece_score += f64::from(advancement);
            }

            if piece.col == 0 || piece.col == COLS - 1 {
                piece_score += 1.0;
            }

            match piece.color {
                Color::Dark => score += piece_score,
                Color::Light => score -= piece_score,
            }
        }

        score
    }
}

/// Material-only baseline: piece differential plus half a point per king.
/// Kept as the cheap comparison scorer for engine-vs-engine testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> f64 {
        let pieces =
            f64::from(board.remaining(Color::Dark)) - f64::from(board.remaining(Color::Light));
        let kings =
            0.5 * (f64::from(board.kings(Color::Dark)) - f64::from(board.kings(Color::Light)));
        pieces + kings
    }
}
