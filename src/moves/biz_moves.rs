//! Biz legality: a fixed-offset knight-style jump.

/// `(|d_row|, |d_col|)` must be `(2, 1)` or `(1, 2)`. The Biz jumps, so
/// there is no path check.
#[inline]
pub fn biz_move_is_legal(d_row: i32, d_col: i32) -> bool {
    let shape = (d_row.abs(), d_col.abs());
    shape == (2, 1) || shape == (1, 2)
}

#[cfg(test)]
mod tests {
    use super::biz_move_is_legal;

    #[test]
    fn all_eight_jump_offsets_are_legal() {
        let offsets = [
            (2, 1),
            (2, -1),
            (-2, 1),
            (-2, -1),
            (1, 2),
            (1, -2),
            (-1, 2),
            (-1, -2),
        ];
        for (d_row, d_col) in offsets {
            assert!(biz_move_is_legal(d_row, d_col));
        }
    }

    #[test]
    fn non_jump_shapes_are_illegal() {
        assert!(!biz_move_is_legal(1, 1));
        assert!(!biz_move_is_legal(2, 2));
        assert!(!biz_move_is_legal(2, 0));
        assert!(!biz_move_is_legal(0, 2));
        assert!(!biz_move_is_legal(3, 1));
    }
}
