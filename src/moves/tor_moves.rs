//! Tor legality: an orthogonal slide of any distance.

use crate::game_state::board::Board;
use crate::game_state::kwazam_types::Coord;
use crate::moves::move_shared::path_is_clear;

/// Pure orthogonal slide (exactly one of the deltas is zero) with every
/// strictly-intermediate square unoccupied. The destination itself may hold
/// an opposing piece; same-side destinations are rejected upstream.
pub fn tor_move_is_legal(board: &Board, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    if (d_row == 0) == (d_col == 0) {
        return false;
    }
    path_is_clear(board, from, to)
}
