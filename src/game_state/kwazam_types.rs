//! Core value types shared by the whole engine.
//!
//! Sides, piece variants, pieces, and board coordinates are plain copyable
//! data; all rule logic lives in the `moves` and `move_generation` modules.

/// One of the two competing sides.
///
/// `Blue` is the first side: it moves on odd turn numbers, starts on rows
/// 0 and 1, and serializes as the letter `B`. `Red` is the second side
/// (rows 6 and 7, letter `R`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }

    /// Single-character side identifier used by the save format.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Side::Blue => 'B',
            Side::Red => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'B' => Some(Side::Blue),
            'R' => Some(Side::Red),
            _ => None,
        }
    }
}

/// Piece kind. `Tor` and `Xor` swap into each other on a fixed cadence;
/// the other variants are immutable for the lifetime of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceVariant {
    Ram,
    Tor,
    Xor,
    Biz,
    Sau,
}

impl PieceVariant {
    /// Variant token used by the save format.
    pub const fn name(self) -> &'static str {
        match self {
            PieceVariant::Ram => "Ram",
            PieceVariant::Tor => "Tor",
            PieceVariant::Xor => "Xor",
            PieceVariant::Biz => "Biz",
            PieceVariant::Sau => "Sau",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Ram" => Some(PieceVariant::Ram),
            "Tor" => Some(PieceVariant::Tor),
            "Xor" => Some(PieceVariant::Xor),
            "Biz" => Some(PieceVariant::Biz),
            "Sau" => Some(PieceVariant::Sau),
            _ => None,
        }
    }
}

/// A piece on the board.
///
/// `reached_far_end` is meaningful only for `Ram`, where it unlocks the
/// backward step after the piece has touched the far-end row. Facing
/// direction is a pure presentation concern derived by the UI from
/// `(variant, owner, reached_far_end, board.is_flipped())` and is not
/// tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub variant: PieceVariant,
    pub owner: Side,
    pub reached_far_end: bool,
}

impl Piece {
    #[inline]
    pub const fn new(variant: PieceVariant, owner: Side) -> Self {
        Self {
            variant,
            owner,
            reached_far_end: false,
        }
    }
}

/// Board coordinate: `row` in `0..8`, `col` in `0..5` when in bounds.
///
/// Coordinates are stored unsigned; movement deltas are computed in `i32`
/// so out-of-range candidates stay representable and simply fail the
/// bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Signed `(row, col)` delta from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Coord) -> (i32, i32) {
        (
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, PieceVariant, Side};

    #[test]
    fn side_letters_round_trip() {
        for side in [Side::Blue, Side::Red] {
            assert_eq!(Side::from_letter(side.letter()), Some(side));
        }
        assert_eq!(Side::from_letter('X'), None);
    }

    #[test]
    fn variant_names_round_trip() {
        for variant in [
            PieceVariant::Ram,
            PieceVariant::Tor,
            PieceVariant::Xor,
            PieceVariant::Biz,
            PieceVariant::Sau,
        ] {
            assert_eq!(PieceVariant::from_name(variant.name()), Some(variant));
        }
        assert_eq!(PieceVariant::from_name("Pawn"), None);
    }

    #[test]
    fn coord_deltas_are_signed() {
        let from = Coord::new(6, 2);
        let to = Coord::new(4, 3);
        assert_eq!(from.delta_to(to), (-2, 1));
        assert_eq!(to.delta_to(from), (2, -1));
    }
}
