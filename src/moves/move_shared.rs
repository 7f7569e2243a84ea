//! Shared helpers for sliding-piece legality.

use crate::game_state::board::Board;
use crate::game_state::kwazam_types::Coord;

/// True when every square strictly between `from` and `to` is unoccupied.
///
/// Steps a unit vector toward `to`; callers guarantee the two endpoints are
/// in bounds and colinear (same row, same column, or same diagonal), so
/// every intermediate square is in bounds as well.
pub fn path_is_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    let row_step = d_row.signum();
    let col_step = d_col.signum();

    let mut row = from.row as i32 + row_step;
    let mut col = from.col as i32 + col_step;

    while (row, col) != (to.row as i32, to.col as i32) {
        match board.piece_at(Coord::new(row as usize, col as usize)) {
            Ok(None) => {}
            _ => return false,
        }
        row += row_step;
        col += col_step;
    }

    true
}
