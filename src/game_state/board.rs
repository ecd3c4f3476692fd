//! Authoritative board state for the checkers rule engine.
//!
//! Owns piece placement and the per-color remaining/king counters used for
//! win detection and fast evaluation. Legality and mutation primitives live
//! in the `move_generation` modules.

use crate::game_state::checkers_errors::Errors;
use crate::game_state::checkers_types::{Color, Piece, COLS, ROWS};

/// An 8x8 grid of cells, each empty or holding exactly one piece. Pieces
/// occupy only the dark squares (`col % 2 == (row + 1) % 2`). Cloning is a
/// plain value copy, which is what search node expansion relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; COLS as usize]; ROWS as usize],
    pub(crate) light_left: u8,
    pub(crate) dark_left: u8,
    pub(crate) light_kings: u8,
    pub(crate) dark_kings: u8,
}

impl Board {
    /// Creates a board with the standard starting layout: 12 Dark pieces in
    /// rows 0-2 and 12 Light pieces in rows 5-7, dark squares only.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for row in 0..ROWS {
            for col in 0..COLS {
                if col % 2 != (row + 1) % 2 {
                    continue;
                }
                if row < 3 {
                    board.grid[row as usize][col as usize] =
                        Some(Piece::new(row, col, Color::Dark));
                    board.dark_left += 1;
                } else if row > 4 {
                    board.grid[row as usize][col as usize] =
                        Some(Piece::new(row, col, Color::Light));
                    board.light_left += 1;
                }
            }
        }
        board
    }

    /// Creates a board with no pieces. Combined with `place_piece`, this is
    /// the position-construction path for tests, benches, and the harness.
    pub fn empty() -> Self {
        Self {
            grid: [[None; COLS as usize]; ROWS as usize],
            light_left: 0,
            dark_left: 0,
            light_kings: 0,
            dark_kings: 0,
        }
    }

    /// Places a piece on its own coordinate, updating the counters.
    pub fn place_piece(&mut self, piece: Piece) -> Result<(), Errors> {
        let cell = &mut self.grid[piece.row as usize][piece.col as usize];
        if cell.is_some() {
            return Err(Errors::SquareOccupied(piece.coord()));
        }
        *cell = Some(piece);
        match piece.color {
            Color::Light => {
                self.light_left += 1;
                if piece.king {
                    self.light_kings += 1;
                }
            }
            Color::Dark => {
                self.dark_left += 1;
                if piece.king {
                    self.dark_kings += 1;
                }
            }
        }
        Ok(())
    }

    /// Returns the piece at the given coordinates, if any. Coordinates must
    /// come from `legal_destinations` or be otherwise in range.
    pub fn get_piece(&self, row: i8, col: i8) -> Option<Piece> {
        self.grid[row as usize][col as usize]
    }

    /// Remaining piece count for a color.
    pub fn remaining(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_left,
            Color::Dark => self.dark_left,
        }
    }

    /// Remaining king count for a color.
    pub fn kings(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.light_kings,
            Color::Dark => self.dark_kings,
        }
    }

    /// Returns the winning color once the opponent has no pieces left.
    /// A side with pieces but no legal moves is not detected here; only
    /// piece-count exhaustion ends the game.
    pub fn winner(&self) -> Option<Color> {
        if self.light_left == 0 {
            Some(Color::Dark)
        } else if self.dark_left == 0 {
            Some(Color::Light)
        } else {
            None
        }
    }

    /// All pieces belonging to a color, scanned row-major.
    pub fn all_pieces(&self, color: Color) -> Vec<Piece> {
        let mut pieces = Vec::new();
        for row in self.grid.iter() {
            for cell in row.iter() {
                if let Some(piece) = cell {
                    if piece.color == color {
                        pieces.push(*piece);
                    }
                }
            }
        }
        pieces
    }

    /// Iterates every occupied cell, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().filter_map(|cell| cell.as_ref())
    }
}
