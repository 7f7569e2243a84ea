//! Ram legality: a column-locked single step whose direction depends on
//! promotion state and board orientation.
//!
//! Before reaching the far-end row a Ram only steps forward (toward the
//! opponent's back rank as seen under the current orientation). Once
//! promoted it may step back toward its own side, but never onto its own
//! home row, and may still step forward onto the far-end row itself (the
//! allowance that lets it capture a Sau sitting there).

use crate::game_state::kwazam_rules::{far_end_row, home_row};
use crate::game_state::kwazam_types::{Coord, Piece};

pub fn ram_move_is_legal(ram: Piece, from: Coord, to: Coord, flipped: bool) -> bool {
    let (d_row, d_col) = from.delta_to(to);

    // Column-locked: never sideways.
    if d_col != 0 {
        return false;
    }

    let far_end = far_end_row(ram.owner, flipped) as i32;
    let home = home_row(ram.owner, flipped) as i32;
    let forward = (far_end - home).signum();

    if ram.reached_far_end {
        if d_row == -forward {
            // Backward step, but never onto the owner's original home row.
            return to.row as i32 != home;
        }
        d_row == forward && to.row as i32 == far_end
    } else {
        d_row == forward
    }
}
