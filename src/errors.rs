//! Errors used throughout the Kwazam Chess engine.
//!
//! This module defines the canonical error type returned by board access,
//! persistence, and file IO. The enum `KwazamErrors` is used as the single
//! error type across the crate to simplify propagation and matching.
//!
//! Illegal move attempts are deliberately *not* represented here: a rejected
//! move is a routine outcome of user interaction and is surfaced as a plain
//! `false` from `submit_move`, never as an error.

/// Unified error type for the Kwazam Chess engine.
///
/// Each variant corresponds to a specific, identifiable failure mode that can
/// occur while accessing the board or round-tripping a saved game. Variants
/// carry contextual payloads where useful so callers can log or display
/// precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KwazamErrors {
    /// A `(row, col)` coordinate outside the board extent was used.
    ///
    /// Payload: the offending coordinate pair.
    OutOfBounds(i32, i32),

    /// A linear slot index outside the board extent was used.
    ///
    /// Payload: the offending index.
    IndexOutOfBounds(usize),

    /// A saved-game text could not be decoded (wrong line count, malformed
    /// field, unknown variant token, inconsistent turn metadata).
    ///
    /// The live game state is never touched by a failed decode.
    MalformedSave(String),

    /// An underlying read or write failed while saving or loading a game.
    IoFailure(String),
}
