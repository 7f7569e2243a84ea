//! Canonical Kwazam Chess rule constants.
//!
//! Board extent and the fixed starting arrangement used to initialize and
//! validate game state setup.

use crate::game_state::kwazam_types::{PieceVariant, Side};

pub const BOARD_WIDTH: usize = 5;
pub const BOARD_HEIGHT: usize = 8;

/// Blue's back rank, placed on row 0 left to right.
pub const BLUE_BACK_RANK: [PieceVariant; BOARD_WIDTH] = [
    PieceVariant::Tor,
    PieceVariant::Biz,
    PieceVariant::Sau,
    PieceVariant::Biz,
    PieceVariant::Xor,
];

/// Red's back rank, placed on row 7 left to right.
pub const RED_BACK_RANK: [PieceVariant; BOARD_WIDTH] = [
    PieceVariant::Xor,
    PieceVariant::Biz,
    PieceVariant::Sau,
    PieceVariant::Biz,
    PieceVariant::Tor,
];

/// Row holding each side's five Rams at game start.
pub const fn ram_row(side: Side) -> usize {
    match side {
        Side::Blue => 1,
        Side::Red => BOARD_HEIGHT - 2,
    }
}

/// Row holding each side's back rank at game start.
pub const fn back_rank_row(side: Side) -> usize {
    match side {
        Side::Blue => 0,
        Side::Red => BOARD_HEIGHT - 1,
    }
}

/// The row farthest from `owner`'s starting side under the current
/// orientation. A Ram landing here is promoted; a promoted Ram may step
/// onto it to capture.
pub const fn far_end_row(owner: Side, flipped: bool) -> usize {
    match (owner, flipped) {
        (Side::Blue, false) => BOARD_HEIGHT - 1,
        (Side::Blue, true) => 0,
        (Side::Red, false) => 0,
        (Side::Red, true) => BOARD_HEIGHT - 1,
    }
}

/// The row `owner`'s back rank occupies under the current orientation.
/// A promoted Ram may never step back onto it.
pub const fn home_row(owner: Side, flipped: bool) -> usize {
    BOARD_HEIGHT - 1 - far_end_row(owner, flipped)
}

#[cfg(test)]
mod tests {
    use super::{far_end_row, home_row, BOARD_HEIGHT};
    use crate::game_state::kwazam_types::Side;

    #[test]
    fn far_end_and_home_rows_mirror_on_flip() {
        for side in [Side::Blue, Side::Red] {
            for flipped in [false, true] {
                let far = far_end_row(side, flipped);
                let home = home_row(side, flipped);
                assert_eq!(far + home, BOARD_HEIGHT - 1);
                assert_eq!(far, home_row(side, !flipped));
            }
        }
    }

    #[test]
    fn mover_always_faces_the_bottom_row() {
        // Blue moves while unflipped, Red while flipped; both see their
        // far end at the last row in that orientation.
        assert_eq!(far_end_row(Side::Blue, false), 7);
        assert_eq!(far_end_row(Side::Red, true), 7);
    }
}
