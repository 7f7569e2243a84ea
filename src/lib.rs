//! Crate root module declarations for the Kwazam Chess rule engine.
//!
//! This file exposes all top-level subsystems (game state, per-variant move
//! legality, move generation, console front-end, and utility helpers) so
//! binaries, tests, and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod game_state;
    pub mod kwazam_rules;
    pub mod kwazam_types;
}

pub mod moves {
    pub mod biz_moves;
    pub mod move_shared;
    pub mod ram_moves;
    pub mod sau_moves;
    pub mod tor_moves;
    pub mod xor_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod playout_harness;
    pub mod render_game_state;
    pub mod save_file;
    pub mod save_generator;
    pub mod save_parser;
}
