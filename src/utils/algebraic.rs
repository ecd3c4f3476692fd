//! Algebraic coordinate conversions for driver input and match logs.
//!
//! Column letters A-H map to columns 0-7 and row digits 1-8 map to rows 0-7,
//! so `"B6"` names row 5, column 1. The rule engine itself never parses
//! text; these helpers sit at the boundary for drivers and the harness.

use crate::game_state::checkers_errors::Errors;
use crate::game_state::checkers_move::CheckersMove;
use crate::game_state::checkers_types::BoardCoord;

/// Converts an algebraic square (for example: "C3") to a board coordinate.
pub fn coord_from_algebraic(text: &str) -> Result<BoardCoord, Errors> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::InvalidAlgebraic(trimmed.to_owned()));
    }

    let col_char = bytes[0].to_ascii_uppercase();
    let row_char = bytes[1];
    if !(b'A'..=b'H').contains(&col_char) || !(b'1'..=b'8').contains(&row_char) {
        return Err(Errors::InvalidAlgebraic(trimmed.to_owned()));
    }

    let col = (col_char - b'A') as i8;
    let row = (row_char - b'1') as i8;
    Ok((row, col))
}

/// Converts a board coordinate to its algebraic square (for example: "C3").
pub fn coord_to_algebraic(coord: BoardCoord) -> String {
    let col_char = char::from(b'A' + coord.1 as u8);
    let row_char = char::from(b'1' + coord.0 as u8);
    format!("{}{}", col_char, row_char)
}

/// Formats a move for logs: "C3-D4" for a step, "C3xE5" for a jump.
pub fn move_to_algebraic(mv: &CheckersMove) -> String {
    let separator = if mv.is_jump() { 'x' } else { '-' };
    format!(
        "{}{}{}",
        coord_to_algebraic(mv.start),
        separator,
        coord_to_algebraic(mv.stop)
    )
}
