//! Castling rights and castle kinds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Kingside (short) or queenside (long) castling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Short,
    Long,
}

impl CastleSide {
    /// Rook (from, to) files for this castle
    #[inline]
    pub(crate) const fn rook_files(self) -> (usize, usize) {
        match self {
            CastleSide::Short => (7, 5),
            CastleSide::Long => (0, 3),
        }
    }

    /// Destination file of the king
    #[inline]
    pub(crate) const fn king_file(self) -> usize {
        match self {
            CastleSide::Short => 6,
            CastleSide::Long => 2,
        }
    }

    /// King (from, to) squares for a color
    pub(crate) fn king_squares(self, color: Color) -> (Square, Square) {
        match (color, self) {
            (Color::White, CastleSide::Short) => (Square::E1, Square::G1),
            (Color::White, CastleSide::Long) => (Square::E1, Square::C1),
            (Color::Black, CastleSide::Short) => (Square::E8, Square::G8),
            (Color::Black, CastleSide::Long) => (Square::E8, Square::C8),
        }
    }
}

/// Castling rights represented as a 4-bit mask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Drop both rights for one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Short);
        self.remove(color, CastleSide::Long);
    }

    /// Get the raw 0-15 value (Zobrist castling key index)
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Short) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Long) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::Short) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Long) => CASTLE_BLACK_Q,
        }
    }
}
