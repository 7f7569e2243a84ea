//! Board storage: a flat, reorientable arena of squares.
//!
//! The board owns `width * height` squares in a single linear ordering.
//! Perspective switching is done by reversing that ordering in place and
//! re-stamping each square's coordinates, so all movement math stays in one
//! frame and index arithmetic (`row * width + col`) remains valid after any
//! number of flips.

use crate::errors::KwazamErrors;
use crate::game_state::kwazam_rules::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game_state::kwazam_types::{Coord, Piece};

/// A single board slot: its stamped coordinate plus at most one occupant.
///
/// Invariant: `coord` always matches the square's linear index under the
/// current orientation; `Board::reverse` re-stamps it on every flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pub coord: Coord,
    pub piece: Option<Piece>,
}

impl Square {
    #[inline]
    fn empty(row: usize, col: usize) -> Self {
        Self {
            coord: Coord::new(row, col),
            piece: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    slots: Vec<Square>,
    flipped: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Board {
    /// Empty board, all squares unoccupied, not flipped.
    pub fn new(width: usize, height: usize) -> Self {
        let mut board = Self {
            width,
            height,
            slots: Vec::with_capacity(width * height),
            flipped: false,
        };
        board.fill_empty_slots();
        board
    }

    fn fill_empty_slots(&mut self) {
        self.slots.clear();
        for row in 0..self.height {
            for col in 0..self.width {
                self.slots.push(Square::empty(row, col));
            }
        }
    }

    /// Resets all squares to unoccupied in place. Does not change the
    /// flipped state.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.piece = None;
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// True when `coord` lies inside the board extent.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    #[inline]
    fn linear_index(&self, coord: Coord) -> usize {
        coord.row * self.width + coord.col
    }

    pub fn slot_at(&self, coord: Coord) -> Result<&Square, KwazamErrors> {
        if !self.contains(coord) {
            return Err(KwazamErrors::OutOfBounds(coord.row as i32, coord.col as i32));
        }
        Ok(&self.slots[self.linear_index(coord)])
    }

    pub fn slot_at_mut(&mut self, coord: Coord) -> Result<&mut Square, KwazamErrors> {
        if !self.contains(coord) {
            return Err(KwazamErrors::OutOfBounds(coord.row as i32, coord.col as i32));
        }
        let index = self.linear_index(coord);
        Ok(&mut self.slots[index])
    }

    pub fn slot_at_index(&self, index: usize) -> Result<&Square, KwazamErrors> {
        self.slots
            .get(index)
            .ok_or(KwazamErrors::IndexOutOfBounds(index))
    }

    /// Occupant of `coord`, or `None` for an empty in-bounds square.
    /// Out-of-bounds coordinates surface as `OutOfBounds`.
    pub fn piece_at(&self, coord: Coord) -> Result<Option<Piece>, KwazamErrors> {
        Ok(self.slot_at(coord)?.piece)
    }

    /// Bounds-checked placement. Overwrites any existing occupant.
    pub fn place(&mut self, coord: Coord, piece: Piece) -> Result<(), KwazamErrors> {
        self.slot_at_mut(coord)?.piece = Some(piece);
        Ok(())
    }

    /// Removes and returns the occupant of `coord`.
    pub fn take(&mut self, coord: Coord) -> Result<Option<Piece>, KwazamErrors> {
        Ok(self.slot_at_mut(coord)?.piece.take())
    }

    /// Reverses the linear ordering of all squares (slot 0 becomes the last
    /// slot and so on), re-stamps every square's coordinate to match its new
    /// linear position, and toggles the flipped state.
    ///
    /// This is the mechanism by which "whose perspective is at the top"
    /// alternates each turn; it is applied once per completed non-terminal
    /// move.
    pub fn reverse(&mut self) {
        self.slots.reverse();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.coord = Coord::new(index / self.width, index % self.width);
        }
        self.flipped = !self.flipped;
    }

    /// Read-only view of every slot in linear order.
    pub fn slots(&self) -> &[Square] {
        &self.slots
    }

    /// Mutable iteration over every slot in linear order.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut Square> {
        self.slots.iter_mut()
    }
}
