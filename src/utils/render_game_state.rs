//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! console front-end. Renders the board in its current orientation, so the
//! player to move always reads their far end at the bottom.

use crate::game_state::game_state::GameState;
use crate::game_state::kwazam_types::Piece;

/// Render the board plus turn/winner status to a string for terminal
/// output. Row and column indices frame the grid.
pub fn render_game_state(state: &GameState) -> String {
    let board = &state.board;
    let mut out = String::new();

    out.push_str("     ");
    for col in 0..board.width() {
        out.push_str(&format!("{col:^6} "));
    }
    out.push('\n');

    for row in 0..board.height() {
        out.push_str(&format!("  {row}  "));
        for col in 0..board.width() {
            let index = row * board.width() + col;
            let cell = match board.slots()[index].piece {
                Some(piece) => piece_cell(piece),
                None => "·".to_owned(),
            };
            out.push_str(&format!("{cell:^6} "));
        }
        out.push('\n');
    }

    match state.winner() {
        Some(winner) => out.push_str(&format!("Winner: {winner:?}\n")),
        None => out.push_str(&format!(
            "Turn {} | {:?} to move{}\n",
            state.turn_count(),
            state.current_player(),
            if board.is_flipped() { " (flipped)" } else { "" }
        )),
    }

    out
}

fn piece_cell(piece: Piece) -> String {
    let mut cell = format!("{}{}", piece.owner.letter(), piece.variant.name());
    if piece.reached_far_end {
        cell.push('*');
    }
    cell
}
