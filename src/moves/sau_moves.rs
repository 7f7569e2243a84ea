//! Sau legality: one square in any of the eight directions.
//!
//! Win detection on a captured Sau belongs to the move lifecycle, not to
//! this predicate.

/// `from != to` is a caller-enforced precondition, so `(0, 0)` never
/// reaches this check.
#[inline]
pub fn sau_move_is_legal(d_row: i32, d_col: i32) -> bool {
    d_row.abs() <= 1 && d_col.abs() <= 1
}
