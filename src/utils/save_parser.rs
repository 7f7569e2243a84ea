//! Save-text-to-GameState parser.
//!
//! Rebuilds a fully-populated state from the plain-text save format. The
//! parser is strict: exactly 8 board lines of exactly 5 fields separated by
//! two or more spaces, known side letters and variant tokens, a parseable
//! move count, and a `Player to Move` letter that agrees with the move-count
//! parity. Decoding always builds a fresh state; a failure never touches any
//! live game.

use crate::errors::KwazamErrors;
use crate::game_state::game_state::GameState;
use crate::game_state::kwazam_rules::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game_state::kwazam_types::{Coord, Piece, PieceVariant, Side};

const END_MARKER: &str = " (End)";
const PLAYER_PREFIX: &str = "Player to Move:";
const COUNT_PREFIX: &str = "Move Count:";

pub fn parse_save_text(text: &str) -> Result<GameState, KwazamErrors> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < BOARD_HEIGHT {
        return Err(KwazamErrors::MalformedSave(format!(
            "expected {BOARD_HEIGHT} board lines, found {}",
            lines.len()
        )));
    }

    let mut state = GameState::new_empty();

    for (row, line) in lines[..BOARD_HEIGHT].iter().enumerate() {
        let fields = split_board_fields(line);
        if fields.len() != BOARD_WIDTH {
            return Err(KwazamErrors::MalformedSave(format!(
                "board line {} has {} fields, expected {BOARD_WIDTH}",
                row + 1,
                fields.len()
            )));
        }

        for (col, field) in fields.iter().enumerate() {
            if field == "----" {
                continue;
            }
            let piece = parse_piece_field(field)?;
            state
                .board
                .place(Coord::new(row, col), piece)
                .map_err(|_| {
                    KwazamErrors::MalformedSave(format!("piece placed out of bounds at row {row}"))
                })?;
        }
    }

    let (side_to_move, move_count) = parse_trailer(&lines[BOARD_HEIGHT..])?;

    let parity_side = if move_count % 2 == 1 {
        Side::Blue
    } else {
        Side::Red
    };
    if parity_side != side_to_move {
        return Err(KwazamErrors::MalformedSave(format!(
            "player letter '{}' does not match move count {move_count}",
            side_to_move.letter()
        )));
    }

    state.turn_number = move_count;

    // The grid is written in Blue's orientation; restore Red's perspective
    // before play resumes.
    if side_to_move == Side::Red {
        state.board.reverse();
    }

    Ok(state)
}

/// Splits a board line on runs of two or more spaces. Single spaces stay
/// inside a field, so `BRam (End)` survives as one token.
fn split_board_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut token = String::new();
    let mut pending_space = false;

    for ch in line.trim_end().chars() {
        if ch == ' ' {
            if pending_space {
                if !token.is_empty() {
                    fields.push(std::mem::take(&mut token));
                }
                pending_space = false;
            } else if !token.is_empty() {
                pending_space = true;
            }
        } else {
            if pending_space {
                token.push(' ');
                pending_space = false;
            }
            token.push(ch);
        }
    }
    if !token.is_empty() {
        fields.push(token);
    }

    fields
}

fn parse_piece_field(field: &str) -> Result<Piece, KwazamErrors> {
    let mut chars = field.chars();
    let letter = chars
        .next()
        .ok_or_else(|| KwazamErrors::MalformedSave("empty board field".to_owned()))?;
    let owner = Side::from_letter(letter).ok_or_else(|| {
        KwazamErrors::MalformedSave(format!("unknown side letter in field '{field}'"))
    })?;

    let rest = chars.as_str();
    let reached_far_end = rest.ends_with(END_MARKER);
    let name = if reached_far_end {
        &rest[..rest.len() - END_MARKER.len()]
    } else {
        rest
    };

    let variant = PieceVariant::from_name(name).ok_or_else(|| {
        KwazamErrors::MalformedSave(format!("unknown variant token '{name}'"))
    })?;
    if reached_far_end && variant != PieceVariant::Ram {
        return Err(KwazamErrors::MalformedSave(format!(
            "end marker on non-Ram field '{field}'"
        )));
    }

    Ok(Piece {
        variant,
        owner,
        reached_far_end,
    })
}

fn parse_trailer(lines: &[&str]) -> Result<(Side, u32), KwazamErrors> {
    let mut side: Option<Side> = None;
    let mut count: Option<u32> = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix(PLAYER_PREFIX) {
            let letter = rest.trim();
            let mut chars = letter.chars();
            let parsed = chars.next().and_then(Side::from_letter);
            match (parsed, chars.next()) {
                (Some(parsed), None) => side = Some(parsed),
                _ => {
                    return Err(KwazamErrors::MalformedSave(format!(
                        "invalid player letter '{letter}'"
                    )))
                }
            }
        } else if let Some(rest) = line.strip_prefix(COUNT_PREFIX) {
            let value = rest.trim().parse::<u32>().map_err(|_| {
                KwazamErrors::MalformedSave(format!("invalid move count '{}'", rest.trim()))
            })?;
            if value == 0 {
                return Err(KwazamErrors::MalformedSave(
                    "move count must be at least 1".to_owned(),
                ));
            }
            count = Some(value);
        } else {
            return Err(KwazamErrors::MalformedSave(format!(
                "unrecognized line '{line}'"
            )));
        }
    }

    match (side, count) {
        (Some(side), Some(count)) => Ok((side, count)),
        (None, _) => Err(KwazamErrors::MalformedSave(
            "missing 'Player to Move' line".to_owned(),
        )),
        (_, None) => Err(KwazamErrors::MalformedSave(
            "missing 'Move Count' line".to_owned(),
        )),
    }
}
