//! Read-only enumeration of legal moves.
//!
//! Built directly on the `is_legal_move` predicate so enumeration and
//! submission can never disagree: a destination is listed iff a hypothetical
//! `submit_move` to it would pass validation.

use crate::game_state::game_state::GameState;
use crate::game_state::kwazam_types::Coord;
use crate::move_generation::legal_move_checks::is_legal_move;

/// Every square the piece on `from` may legally move to right now.
///
/// Empty when the game is over, `from` is empty or out of bounds, or the
/// occupant does not belong to the current player.
pub fn legal_destinations(state: &GameState, from: Coord) -> Vec<Coord> {
    if state.winner.is_some() {
        return Vec::new();
    }
    let Ok(Some(piece)) = state.board.piece_at(from) else {
        return Vec::new();
    };
    if piece.owner != state.current_player() {
        return Vec::new();
    }

    state
        .board
        .slots()
        .iter()
        .map(|slot| slot.coord)
        .filter(|&to| is_legal_move(&state.board, from, to))
        .collect()
}

/// All `(from, to)` pairs available to the current player.
pub fn generate_all_legal_moves(state: &GameState) -> Vec<(Coord, Coord)> {
    if state.winner.is_some() {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for slot in state.board.slots() {
        let Some(piece) = slot.piece else {
            continue;
        };
        if piece.owner != state.current_player() {
            continue;
        }
        for to in legal_destinations(state, slot.coord) {
            moves.push((slot.coord, to));
        }
    }
    moves
}
