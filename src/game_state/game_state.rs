//! Central game state model.
//!
//! `GameState` owns the board, the turn counter, and the recorded winner.
//! It is an explicitly owned value with no ambient state: every operation
//! takes it by reference. Rule logic lives in `move_generation`; the thin
//! methods here delegate so callers get one stable surface.

use crate::errors::KwazamErrors;
use crate::game_state::board::Board;
use crate::game_state::kwazam_rules::{back_rank_row, ram_row, BLUE_BACK_RANK, RED_BACK_RANK};
use crate::game_state::kwazam_types::{Coord, Piece, PieceVariant, Side};
use crate::move_generation::legal_move_apply::submit_move;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::utils::save_generator::generate_save_text;
use crate::utils::save_parser::parse_save_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    /// Starts at 1 (Blue to move) and increments once per legal
    /// non-terminal move. Odd means Blue, even means Red.
    pub turn_number: u32,

    /// Set exactly once, when a Sau is captured or only one remains.
    /// Terminal: no further moves are accepted once set.
    pub winner: Option<Side>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Empty board, counters reset. Used by the save parser, which places
    /// pieces itself.
    pub fn new_empty() -> Self {
        Self {
            board: Board::default(),
            turn_number: 1,
            winner: None,
        }
    }

    /// Fresh game in the standard starting formation.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        state.setup_pieces();
        state
    }

    /// Reinitializes to the starting layout, clears the winner, and resets
    /// the turn counter and orientation.
    pub fn restart(&mut self) {
        if self.board.is_flipped() {
            self.board.reverse();
        }
        self.board.clear();
        self.setup_pieces();
        self.turn_number = 1;
        self.winner = None;
    }

    fn setup_pieces(&mut self) {
        for (col, &variant) in BLUE_BACK_RANK.iter().enumerate() {
            let coord = Coord::new(back_rank_row(Side::Blue), col);
            self.board
                .place(coord, Piece::new(variant, Side::Blue))
                .expect("starting layout is in bounds");
        }
        for (col, &variant) in RED_BACK_RANK.iter().enumerate() {
            let coord = Coord::new(back_rank_row(Side::Red), col);
            self.board
                .place(coord, Piece::new(variant, Side::Red))
                .expect("starting layout is in bounds");
        }
        for side in [Side::Blue, Side::Red] {
            for col in 0..self.board.width() {
                let coord = Coord::new(ram_row(side), col);
                self.board
                    .place(coord, Piece::new(PieceVariant::Ram, side))
                    .expect("starting layout is in bounds");
            }
        }
    }

    /// Side to move by turn-number parity; once a winner is recorded this
    /// reports the winner (the player who made the winning move), not the
    /// would-be next player.
    pub fn current_player(&self) -> Side {
        if let Some(winner) = self.winner {
            return winner;
        }
        if self.turn_number % 2 == 1 {
            Side::Blue
        } else {
            Side::Red
        }
    }

    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_number
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Number of Sau pieces still on the board.
    pub fn sau_count(&self) -> usize {
        self.board
            .slots()
            .iter()
            .filter_map(|slot| slot.piece)
            .filter(|piece| piece.variant == PieceVariant::Sau)
            .count()
    }

    /// Owner of the sole surviving Sau, if exactly one remains.
    pub fn sole_sau_owner(&self) -> Option<Side> {
        let mut owners = self
            .board
            .slots()
            .iter()
            .filter_map(|slot| slot.piece)
            .filter(|piece| piece.variant == PieceVariant::Sau)
            .map(|piece| piece.owner);

        let first = owners.next()?;
        if owners.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Validates and applies a move. See `legal_move_apply::submit_move`.
    #[inline]
    pub fn submit_move(&mut self, from: Coord, to: Coord) -> bool {
        submit_move(self, from, to)
    }

    /// Every square a legal move from `from` could reach right now.
    #[inline]
    pub fn legal_destinations(&self, from: Coord) -> Vec<Coord> {
        legal_destinations(self, from)
    }

    /// Encode the full state to the plain-text save format.
    #[inline]
    pub fn to_save_text(&self) -> String {
        generate_save_text(self)
    }

    /// Decode a plain-text save into a fresh state. The receiver of the
    /// result decides when to swap it in; nothing is mutated on failure.
    #[inline]
    pub fn from_save_text(text: &str) -> Result<Self, KwazamErrors> {
        parse_save_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::kwazam_types::{Coord, PieceVariant, Side};

    #[test]
    fn starting_layout_matches_the_standard_formation() {
        let state = GameState::new_game();
        let board = &state.board;

        let expect = |row: usize, col: usize, variant: PieceVariant, owner: Side| {
            let piece = board
                .piece_at(Coord::new(row, col))
                .expect("in bounds")
                .expect("square should be occupied");
            assert_eq!(piece.variant, variant);
            assert_eq!(piece.owner, owner);
            assert!(!piece.reached_far_end);
        };

        expect(0, 0, PieceVariant::Tor, Side::Blue);
        expect(0, 1, PieceVariant::Biz, Side::Blue);
        expect(0, 2, PieceVariant::Sau, Side::Blue);
        expect(0, 3, PieceVariant::Biz, Side::Blue);
        expect(0, 4, PieceVariant::Xor, Side::Blue);
        expect(7, 0, PieceVariant::Xor, Side::Red);
        expect(7, 1, PieceVariant::Biz, Side::Red);
        expect(7, 2, PieceVariant::Sau, Side::Red);
        expect(7, 3, PieceVariant::Biz, Side::Red);
        expect(7, 4, PieceVariant::Tor, Side::Red);

        for col in 0..5 {
            expect(1, col, PieceVariant::Ram, Side::Blue);
            expect(6, col, PieceVariant::Ram, Side::Red);
        }

        for row in 2..6 {
            for col in 0..5 {
                assert_eq!(board.piece_at(Coord::new(row, col)).expect("in bounds"), None);
            }
        }

        assert_eq!(state.turn_number, 1);
        assert_eq!(state.current_player(), Side::Blue);
        assert_eq!(state.winner(), None);
        assert_eq!(state.sau_count(), 2);
    }

    #[test]
    fn restart_rebuilds_the_initial_state() {
        let mut state = GameState::new_game();
        assert!(state.submit_move(Coord::new(1, 0), Coord::new(2, 0)));
        assert!(state.board.is_flipped());
        assert_eq!(state.turn_number, 2);

        state.restart();

        assert_eq!(state, GameState::new_game());
        assert!(!state.board.is_flipped());
    }

    #[test]
    fn sole_sau_owner_requires_exactly_one() {
        let mut state = GameState::new_game();
        assert_eq!(state.sole_sau_owner(), None);

        state
            .board
            .take(Coord::new(7, 2))
            .expect("in bounds")
            .expect("red sau present");
        assert_eq!(state.sole_sau_owner(), Some(Side::Blue));
    }
}
