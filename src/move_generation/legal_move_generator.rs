//! Legal-move discovery for the checkers rule engine.
//!
//! Each piece is probed along its available diagonals: a simple step is the
//! immediate adjacent empty cell, a capture is an adjacent enemy piece with
//! an empty landing cell beyond it, and captures recurse from the landing
//! square to discover multi-jump chains.

use std::collections::HashMap;

use crate::game_state::board::Board;
use crate::game_state::checkers_move::CheckersMove;
use crate::game_state::checkers_types::{BoardCoord, Color, Piece, COLS, ROWS};

/// Mapping from destination coordinate to the coordinates captured to reach
/// it. An empty capture set marks a simple step. When two capture paths land
/// on the same square, the path discovered last wins.
pub type DestinationMap = HashMap<BoardCoord, Vec<BoardCoord>>;

/// Computes every legal destination for a piece on the given board.
///
/// Non-king pieces probe only their two forward diagonals; kings probe all
/// four. Within a single probe, a capture supersedes the simple step: the
/// probe contributes either its immediate empty-cell step or its capture
/// chain, never both.
pub fn legal_destinations(board: &Board, piece: &Piece) -> DestinationMap {
    let mut moves = DestinationMap::new();
    let row = piece.row;
    let col = piece.col;

    if piece.color == Color::Light || piece.king {
        let stop = (row - 3).max(-1);
        traverse_diagonal(board, row - 1, stop, -1, piece.color, col - 1, -1, &[], &mut moves);
        traverse_diagonal(board, row - 1, stop, -1, piece.color, col + 1, 1, &[], &mut moves);
    }
    if piece.color == Color::Dark || piece.king {
        let stop = (row + 3).min(ROWS);
        traverse_diagonal(board, row + 1, stop, 1, piece.color, col - 1, -1, &[], &mut moves);
        traverse_diagonal(board, row + 1, stop, 1, piece.color, col + 1, 1, &[], &mut moves);
    }

    moves
}

/// Scans one diagonal probe, at most two cells deep, recording the simple
/// step or capture it yields and recursing on captures.
///
/// `skipped` holds the pieces already captured earlier in this exploration.
/// It is copied, never aliased, into each recursive branch so two diverging
/// capture paths cannot observe each other's partial capture sets.
#[allow(clippy::too_many_arguments)]
fn traverse_diagonal(
    board: &Board,
    start_row: i8,
    stop_row: i8,
    row_step: i8,
    color: Color,
    start_col: i8,
    col_step: i8,
    skipped: &[BoardCoord],
    moves: &mut DestinationMap,
) {
    let mut pending_capture: Option<BoardCoord> = None;
    let mut row = start_row;
    let mut col = start_col;

    while row != stop_row {
        if col < 0 || col >= COLS {
            break;
        }
        match board.get_piece(row, col) {
            None => {
                // A simple step is only legal when no capture is pending in
                // this exploration.
                if !skipped.is_empty() && pending_capture.is_none() {
                    break;
                }
                let mut captured: Vec<BoardCoord> = Vec::new();
                if let Some(coord) = pending_capture {
                    captured.push(coord);
                }
                captured.extend_from_slice(skipped);
                moves.insert((row, col), captured.clone());

                if pending_capture.is_some() {
                    // Continue the chain from the landing square, keeping the
                    // row direction of travel.
                    let next_stop = if row_step == -1 {
                        (row - 3).max(-1)
                    } else {
                        (row + 3).min(ROWS)
                    };
                    traverse_diagonal(
                        board,
                        row + row_step,
                        next_stop,
                        row_step,
                        color,
                        col - 1,
                        -1,
                        &captured,
                        moves,
                    );
                    traverse_diagonal(
                        board,
                        row + row_step,
                        next_stop,
                        row_step,
                        color,
                        col + 1,
                        1,
                        &captured,
                        moves,
                    );
                }
                break;
            }
            Some(other) if other.color == color => break,
            Some(other) => {
                pending_capture = Some(other.coord());
            }
        }
        row += row_step;
        col += col_step;
    }
}

/// Enumerates every legal move available to a color as
/// (origin, destination, captured-set) triples. Used by search and the
/// engines layer.
pub fn generate_all_moves(board: &Board, color: Color) -> Vec<CheckersMove> {
    let mut all_moves = Vec::new();
    for piece in board.all_pieces(color) {
        for (destination, captured) in legal_destinations(board, &piece) {
            all_moves.push(CheckersMove::new(piece.coord(), destination, captured));
        }
    }
    all_moves
}
