//! Board mutation primitives: moving pieces, removing captures, and the
//! checked execution path used by external drivers.

use crate::game_state::board::Board;
use crate::game_state::checkers_errors::Errors;
use crate::game_state::checkers_move::CheckersMove;
use crate::game_state::checkers_types::{BoardCoord, Color};
use crate::move_generation::legal_move_generator::legal_destinations;

/// Moves the piece at `from` to `to`, updating its coordinate and promoting
/// it to a king when it lands on the far rank for its color. Does not remove
/// captured pieces; callers pair this with `remove_pieces`.
///
/// Legality is the caller's responsibility: the destination must come from
/// `legal_destinations`. Use `execute_move` for the checked path.
pub fn apply_move(board: &mut Board, from: BoardCoord, to: BoardCoord) -> Result<(), Errors> {
    let mut piece = board
        .get_piece(from.0, from.1)
        .ok_or(Errors::NoPieceAtSquare(from))?;

    piece.row = to.0;
    piece.col = to.1;
    if to.0 == piece.color.promotion_row() && !piece.king {
        piece.make_king();
        match piece.color {
            Color::Light => board.light_kings += 1,
            Color::Dark => board.dark_kings += 1,
        }
    }

    board.grid[from.0 as usize][from.1 as usize] = None;
    board.grid[to.0 as usize][to.1 as usize] = Some(piece);
    Ok(())
}

/// Deletes each given piece from its cell and decrements the owner's
/// remaining (and king) counters. Already-empty cells are skipped.
pub fn remove_pieces(board: &mut Board, captured: &[BoardCoord]) {
    for &(row, col) in captured {
        if let Some(piece) = board.grid[row as usize][col as usize].take() {
            match piece.color {
                Color::Light => {
                    board.light_left -= 1;
                    if piece.king {
                        board.light_kings -= 1;
                    }
                }
                Color::Dark => {
                    board.dark_left -= 1;
                    if piece.king {
                        board.dark_kings -= 1;
                    }
                }
            }
        }
    }
}

/// Checked execution path for externally submitted moves: validates the
/// destination against `legal_destinations`, then applies the move and
/// removes its captures. On an illegal destination the board is untouched.
pub fn execute_move(
    board: &mut Board,
    from: BoardCoord,
    to: BoardCoord,
) -> Result<CheckersMove, Errors> {
    let piece = board
        .get_piece(from.0, from.1)
        .ok_or(Errors::NoPieceAtSquare(from))?;

    let destinations = legal_destinations(board, &piece);
    let captured = destinations
        .get(&to)
        .cloned()
        .ok_or(Errors::NotALegalDestination { from, to })?;

    apply_move(board, from, to)?;
    remove_pieces(board, &captured);
    Ok(CheckersMove::new(from, to, captured))
}

/// Applies a move produced by `generate_all_moves` (or search) in place:
/// the piece relocation plus the removal of every captured piece.
pub fn apply_checkers_move(board: &mut Board, mv: &CheckersMove) -> Result<(), Errors> {
    apply_move(board, mv.start, mv.stop)?;
    remove_pieces(board, &mv.captures);
    Ok(())
}

/// Clones the board and applies a hypothetical move to the clone. This is
/// the node-expansion primitive for search: sibling branches never share a
/// mutable board.
pub fn simulate_move(board: &Board, mv: &CheckersMove) -> Result<Board, Errors> {
    let mut next = board.clone();
    apply_checkers_move(&mut next, mv)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Piece;

    fn place(board: &mut Board, row: i8, col: i8, color: Color) {
        board
            .place_piece(Piece::new(row, col, color))
            .expect("square should be free");
    }

    #[test]
    fn apply_move_relocates_the_piece() {
        let mut board = Board::empty();
        place(&mut board, 5, 2, Color::Light);

        apply_move(&mut board, (5, 2), (4, 3)).expect("move should apply");
        assert_eq!(board.get_piece(5, 2), None);
        let moved = board.get_piece(4, 3).expect("piece should have moved");
        assert_eq!(moved.coord(), (4, 3));
        assert_eq!(moved.color, Color::Light);
        assert!(!moved.king);
    }

    #[test]
    fn apply_move_from_empty_square_is_an_error() {
        let mut board = Board::empty();
        let err = apply_move(&mut board, (5, 2), (4, 3)).expect_err("no piece to move");
        assert_eq!(err, Errors::NoPieceAtSquare((5, 2)));
    }

    #[test]
    fn light_piece_promotes_on_row_zero() {
        let mut board = Board::empty();
        place(&mut board, 1, 2, Color::Light);

        apply_move(&mut board, (1, 2), (0, 1)).expect("move should apply");
        let king = board.get_piece(0, 1).expect("piece should have moved");
        assert!(king.king);
        assert_eq!(board.kings(Color::Light), 1);
    }

    #[test]
    fn dark_piece_promotes_on_row_seven() {
        let mut board = Board::empty();
        place(&mut board, 6, 1, Color::Dark);

        apply_move(&mut board, (6, 1), (7, 2)).expect("move should apply");
        assert!(board.get_piece(7, 2).expect("piece should exist").king);
        assert_eq!(board.kings(Color::Dark), 1);
    }

    #[test]
    fn king_is_not_promoted_twice() {
        let mut board = Board::empty();
        let mut king = Piece::new(1, 2, Color::Light);
        king.make_king();
        board.place_piece(king).expect("square should be free");
        assert_eq!(board.kings(Color::Light), 1);

        apply_move(&mut board, (1, 2), (0, 1)).expect("move should apply");
        assert!(board.get_piece(0, 1).expect("piece should exist").king);
        assert_eq!(board.kings(Color::Light), 1);
    }

    #[test]
    fn opposite_back_rank_does_not_promote() {
        let mut board = Board::empty();
        let mut king = Piece::new(6, 1, Color::Light);
        king.make_king();
        board.place_piece(king).expect("square should be free");

        apply_move(&mut board, (6, 1), (7, 2)).expect("move should apply");
        // Light promotes on row 0 only; the king flag was already set and the
        // counter must not change.
        assert_eq!(board.kings(Color::Light), 1);
    }

    #[test]
    fn remove_pieces_decrements_the_right_counters() {
        let mut board = Board::empty();
        place(&mut board, 3, 2, Color::Dark);
        place(&mut board, 5, 4, Color::Dark);
        let mut dark_king = Piece::new(2, 5, Color::Dark);
        dark_king.make_king();
        board.place_piece(dark_king).expect("square should be free");
        place(&mut board, 6, 1, Color::Light);

        remove_pieces(&mut board, &[(3, 2), (2, 5)]);
        assert_eq!(board.remaining(Color::Dark), 1);
        assert_eq!(board.kings(Color::Dark), 0);
        assert_eq!(board.remaining(Color::Light), 1);
        assert_eq!(board.get_piece(3, 2), None);
        assert_eq!(board.get_piece(2, 5), None);
    }

    #[test]
    fn execute_move_rejects_illegal_destinations_without_mutation() {
        let mut board = Board::empty();
        place(&mut board, 5, 2, Color::Light);
        let snapshot = board.clone();

        let err = execute_move(&mut board, (5, 2), (3, 2)).expect_err("not a legal destination");
        assert_eq!(
            err,
            Errors::NotALegalDestination {
                from: (5, 2),
                to: (3, 2)
            }
        );
        assert_eq!(board, snapshot);
    }

    #[test]
    fn execute_move_applies_a_jump_and_its_captures() {
        let mut board = Board::empty();
        place(&mut board, 4, 3, Color::Light);
        place(&mut board, 3, 2, Color::Dark);

        let mv = execute_move(&mut board, (4, 3), (2, 1)).expect("jump should be legal");
        assert_eq!(mv.captures, vec![(3, 2)]);
        assert_eq!(board.get_piece(3, 2), None);
        assert_eq!(board.remaining(Color::Dark), 0);
        assert_eq!(board.winner(), Some(Color::Light));
    }

    #[test]
    fn multi_jump_execution_removes_the_whole_chain() {
        let mut board = Board::empty();
        place(&mut board, 6, 1, Color::Light);
        place(&mut board, 5, 2, Color::Dark);
        place(&mut board, 3, 4, Color::Dark);
        place(&mut board, 0, 7, Color::Dark);

        let mv = execute_move(&mut board, (6, 1), (2, 5)).expect("double jump should be legal");
        assert_eq!(mv.captures.len(), 2);
        assert_eq!(board.remaining(Color::Dark), 1);
        assert_eq!(board.get_piece(5, 2), None);
        assert_eq!(board.get_piece(3, 4), None);
        assert!(board.get_piece(2, 5).is_some());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn simulate_move_leaves_the_source_board_untouched() {
        let mut board = Board::empty();
        place(&mut board, 4, 3, Color::Light);
        place(&mut board, 3, 2, Color::Dark);
        let snapshot = board.clone();

        let mv = CheckersMove::new((4, 3), (2, 1), vec![(3, 2)]);
        let next = simulate_move(&board, &mv).expect("simulation should apply");
        assert_eq!(board, snapshot);
        assert_eq!(next.remaining(Color::Dark), 0);
        assert!(next.get_piece(2, 1).is_some());
    }
}
