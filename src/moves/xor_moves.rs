//! Xor legality: a diagonal slide of any distance.

use crate::game_state::board::Board;
use crate::game_state::kwazam_types::Coord;
use crate::moves::move_shared::path_is_clear;

/// Pure diagonal slide (`|d_row| == |d_col| >= 1`) with every
/// strictly-intermediate square unoccupied.
pub fn xor_move_is_legal(board: &Board, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return false;
    }
    path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::xor_move_is_legal;
    use crate::game_state::board::Board;
    use crate::game_state::kwazam_types::{Coord, Piece, PieceVariant, Side};

    #[test]
    fn slides_along_diagonals() {
        let board = Board::default();
        let from = Coord::new(4, 2);
        assert!(xor_move_is_legal(&board, from, Coord::new(2, 0)));
        assert!(xor_move_is_legal(&board, from, Coord::new(6, 4)));
        assert!(xor_move_is_legal(&board, from, Coord::new(6, 0)));
        assert!(xor_move_is_legal(&board, from, Coord::new(2, 4)));
    }

    #[test]
    fn orthogonal_moves_are_illegal() {
        let board = Board::default();
        assert!(!xor_move_is_legal(&board, Coord::new(4, 2), Coord::new(4, 4)));
        assert!(!xor_move_is_legal(&board, Coord::new(4, 2), Coord::new(1, 2)));
        assert!(!xor_move_is_legal(&board, Coord::new(4, 2), Coord::new(6, 3)));
    }

    #[test]
    fn blocked_diagonal_is_illegal() {
        let mut board = Board::default();
        board
            .place(Coord::new(3, 1), Piece::new(PieceVariant::Sau, Side::Blue))
            .expect("in bounds");

        assert!(!xor_move_is_legal(&board, Coord::new(4, 0), Coord::new(2, 2)));
        assert!(xor_move_is_legal(&board, Coord::new(4, 0), Coord::new(3, 1)));
    }
}
