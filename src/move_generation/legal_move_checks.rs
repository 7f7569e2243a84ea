//! Variant dispatch for move legality.
//!
//! `is_legal_move` is the single predicate behind both move submission and
//! destination enumeration. It performs the checks shared by every variant
//! (distinct squares, bounds, occupied origin, no same-side capture) and
//! then dispatches exhaustively on the piece variant. It never mutates.

use crate::game_state::board::Board;
use crate::game_state::kwazam_types::{Coord, PieceVariant};
use crate::moves::biz_moves::biz_move_is_legal;
use crate::moves::ram_moves::ram_move_is_legal;
use crate::moves::sau_moves::sau_move_is_legal;
use crate::moves::tor_moves::tor_move_is_legal;
use crate::moves::xor_moves::xor_move_is_legal;

/// True when the piece on `from` may move to `to` under its variant's
/// rules. Out-of-range coordinates and an empty `from` are illegal, not
/// errors.
pub fn is_legal_move(board: &Board, from: Coord, to: Coord) -> bool {
    if from == to {
        return false;
    }
    if !board.contains(from) || !board.contains(to) {
        return false;
    }

    let Ok(Some(piece)) = board.piece_at(from) else {
        return false;
    };

    // Destination occupied by the mover's own side is illegal for every
    // variant.
    if let Ok(Some(destination)) = board.piece_at(to) {
        if destination.owner == piece.owner {
            return false;
        }
    }

    let (d_row, d_col) = from.delta_to(to);

    match piece.variant {
        PieceVariant::Sau => sau_move_is_legal(d_row, d_col),
        PieceVariant::Biz => biz_move_is_legal(d_row, d_col),
        PieceVariant::Tor => tor_move_is_legal(board, from, to),
        PieceVariant::Xor => xor_move_is_legal(board, from, to),
        PieceVariant::Ram => ram_move_is_legal(piece, from, to, board.is_flipped()),
    }
}
