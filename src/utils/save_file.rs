//! Save-file read/write on top of the text codec.
//!
//! A failed write reports `IoFailure` and leaves the game untouched; a
//! failed read or decode returns the error without producing a state, so
//! callers only ever swap in a fully-decoded game.

use std::fs;
use std::path::Path;

use crate::errors::KwazamErrors;
use crate::game_state::game_state::GameState;

pub fn save_game_to_file<P: AsRef<Path>>(state: &GameState, path: P) -> Result<(), KwazamErrors> {
    fs::write(path, state.to_save_text()).map_err(|err| KwazamErrors::IoFailure(err.to_string()))
}

pub fn load_game_from_file<P: AsRef<Path>>(path: P) -> Result<GameState, KwazamErrors> {
    let text =
        fs::read_to_string(path).map_err(|err| KwazamErrors::IoFailure(err.to_string()))?;
    GameState::from_save_text(&text)
}

#[cfg(test)]
mod tests {
    use super::{load_game_from_file, save_game_to_file};
    use crate::errors::KwazamErrors;
    use crate::game_state::game_state::GameState;
    use crate::game_state::kwazam_types::Coord;

    #[test]
    fn save_and_load_round_trip_through_a_file() {
        let mut state = GameState::new_game();
        assert!(state.submit_move(Coord::new(1, 3), Coord::new(2, 3)));

        let path = std::env::temp_dir().join("kwazam_save_file_round_trip.txt");
        save_game_to_file(&state, &path).expect("save should succeed");
        let loaded = load_game_from_file(&path).expect("load should succeed");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_reports_io_failure() {
        let path = std::env::temp_dir().join("kwazam_save_file_does_not_exist.txt");
        assert!(matches!(
            load_game_from_file(&path),
            Err(KwazamErrors::IoFailure(_))
        ));
    }
}
