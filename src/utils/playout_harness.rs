//! Seeded random playout harness for local testing.
//!
//! Plays uniformly-random legal moves against themselves without any IO.
//! Used by invariant tests (the engine must hold its guarantees over whole
//! games, not just hand-built positions), by the `random_playouts` binary,
//! and by the criterion bench.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::game_state::GameState;
use crate::game_state::kwazam_types::Side;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Win(Side),
    /// The move cap was reached before either Sau fell.
    MoveCapReached,
    /// The side to move had no legal move at all. Kwazam Chess has no
    /// stalemate rule; this records the position instead of looping.
    NoLegalMoves(Side),
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_moves: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0x4B57_415A,
            max_moves: 400,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub moves_played: u32,
    pub final_state: GameState,
}

/// Runs one seeded random game from the starting position.
pub fn run_random_playout(config: &PlayoutConfig) -> PlayoutResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut state = GameState::new_game();
    let mut moves_played = 0u32;

    loop {
        if let Some(winner) = state.winner() {
            return PlayoutResult {
                outcome: PlayoutOutcome::Win(winner),
                moves_played,
                final_state: state,
            };
        }
        if moves_played >= config.max_moves {
            return PlayoutResult {
                outcome: PlayoutOutcome::MoveCapReached,
                moves_played,
                final_state: state,
            };
        }

        let moves = generate_all_legal_moves(&state);
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            return PlayoutResult {
                outcome: PlayoutOutcome::NoLegalMoves(state.current_player()),
                moves_played,
                final_state: state,
            };
        };

        let accepted = state.submit_move(from, to);
        debug_assert!(accepted, "enumerated move {from:?} -> {to:?} was rejected");
        moves_played += 1;
    }
}

/// Runs `games` playouts with consecutive seeds and returns every result.
pub fn run_playout_series(base: &PlayoutConfig, games: u32) -> Vec<PlayoutResult> {
    (0..games)
        .map(|game| {
            let config = PlayoutConfig {
                seed: base.seed.wrapping_add(game as u64),
                max_moves: base.max_moves,
            };
            run_random_playout(&config)
        })
        .collect()
}
