//! The move lifecycle: validate, capture, move, promote, advance, flip,
//! transform.
//!
//! `submit_move` is the only mutating entry point of the engine. A rejected
//! move returns `false` with the state untouched; an accepted move runs the
//! full side-effect sequence and returns `true`.

use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::game_state::kwazam_rules::far_end_row;
use crate::game_state::kwazam_types::{Coord, PieceVariant};
use crate::move_generation::legal_move_checks::is_legal_move;

/// Validates and applies the move `from -> to` for the current player.
///
/// Side-effect order on success:
/// 1. capture the destination occupant; a captured Sau ends the game at
///    once (the capturing piece stays on `from`, the counter does not
///    advance, the board does not flip);
/// 2. move the piece and clear `from`;
/// 3. promote a Ram landing on its far-end row;
/// 4. increment the turn counter;
/// 5. recount Saus; a sole survivor ends the game (no flip);
/// 6. reverse the board for the next player;
/// 7. on even turn numbers, swap every Tor and Xor.
pub fn submit_move(state: &mut GameState, from: Coord, to: Coord) -> bool {
    // A recorded winner is terminal.
    if state.winner.is_some() {
        return false;
    }

    let Ok(Some(piece)) = state.board.piece_at(from) else {
        return false;
    };
    if piece.owner != state.current_player() {
        return false;
    }
    if !is_legal_move(&state.board, from, to) {
        return false;
    }

    // Legality already guaranteed both coordinates are in bounds and that
    // any destination occupant belongs to the opponent.
    let Ok(captured) = state.board.take(to) else {
        return false;
    };
    if let Some(captured) = captured {
        if captured.variant == PieceVariant::Sau {
            state.winner = Some(piece.owner);
            return true;
        }
    }

    let Ok(Some(mut moved)) = state.board.take(from) else {
        return false;
    };
    if moved.variant == PieceVariant::Ram
        && to.row == far_end_row(moved.owner, state.board.is_flipped())
    {
        moved.reached_far_end = true;
    }
    if state.board.place(to, moved).is_err() {
        return false;
    }

    state.turn_number += 1;

    if let Some(owner) = state.sole_sau_owner() {
        state.winner = Some(owner);
        return true;
    }

    state.board.reverse();

    // The Tor/Xor swap fires once per full round of both players.
    if state.turn_number % 2 == 0 {
        swap_tor_xor(&mut state.board);
    }

    true
}

/// Turns every Tor on the board into an Xor and vice versa.
pub fn swap_tor_xor(board: &mut Board) {
    for slot in board.slots_mut() {
        if let Some(piece) = slot.piece.as_mut() {
            piece.variant = match piece.variant {
                PieceVariant::Tor => PieceVariant::Xor,
                PieceVariant::Xor => PieceVariant::Tor,
                other => other,
            };
        }
    }
}
