//! Fundamental types shared across the rule engine and search.

/// Board coordinate as `(row, column)`, each in `0..=7`.
pub type BoardCoord = (i8, i8);

/// Number of rows on the board.
pub const ROWS: i8 = 8;
/// Number of columns on the board.
pub const COLS: i8 = 8;

/// Represents the team (color) of a checkers piece.
/// Light starts on rows 5-7 and advances upward (toward row 0); Dark starts
/// on rows 0-2 and advances downward (toward row 7).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    /// The light (red) side.
    Light,
    /// The dark (black) side.
    Dark,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta for this color's forward direction.
    pub fn forward_step(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// The back rank of the opponent; reaching it promotes a piece.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => ROWS - 1,
        }
    }
}

/// Represents a single checkers piece: its location, team, and whether it
/// has been promoted to a king.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub row: i8,
    pub col: i8,
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn new(row: i8, col: i8, color: Color) -> Self {
        Self {
            row,
            col,
            color,
            king: false,
        }
    }

    /// Promotes the piece to a king. Promotion is irreversible.
    pub fn make_king(&mut self) {
        self.king = true;
    }

    pub fn coord(&self) -> BoardCoord {
        (self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_steps_point_toward_promotion_rows() {
        assert_eq!(Color::Light.forward_step(), -1);
        assert_eq!(Color::Light.promotion_row(), 0);
        assert_eq!(Color::Dark.forward_step(), 1);
        assert_eq!(Color::Dark.promotion_row(), 7);
    }

    #[test]
    fn promotion_is_irreversible() {
        let mut piece = Piece::new(0, 1, Color::Light);
        assert!(!piece.king);
        piece.make_king();
        piece.make_king();
        assert!(piece.king);
    }
}
