//! Attack tables for move generation.
//!
//! Leaper pieces (knight, king, pawns) use per-square masks built by shifting
//! a single bit. Sliders (bishop, rook) use magic bitboards: the relevant
//! blockers are multiplied by a per-square magic and shifted down to index a
//! table of precomputed attack sets. Queens combine both slider lookups.
//!
//! All tables are built once on first use and are read-only afterwards, so
//! they can be shared across search threads without locking.

mod leapers;
mod magic;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Bitboard, Color, Square};

pub use magic::find_magic;
pub(crate) use magic::ray_attacks_u64;
use magic::relevant_mask;

use magic::MagicTable;

/// Pieces whose attacks do not depend on occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Leaper {
    Knight,
    King,
    WhitePawn,
    BlackPawn,
}

/// Sliding pieces with their own magic table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    pub(crate) const fn directions(self) -> [(isize, isize); 4] {
        match self {
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
        }
    }
}

static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leapers::table(leapers::knight_mask));
static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leapers::table(leapers::king_mask));
static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [
        leapers::table(leapers::white_pawn_mask),
        leapers::table(leapers::black_pawn_mask),
    ]
});

static BISHOP_TABLE: Lazy<MagicTable> = Lazy::new(|| MagicTable::build(Slider::Bishop));
static ROOK_TABLE: Lazy<MagicTable> = Lazy::new(|| MagicTable::build(Slider::Rook));

/// Attack set of a leaper standing on `square`.
#[must_use]
pub fn leaper_attacks(kind: Leaper, square: Square) -> Bitboard {
    let idx = square.index();
    Bitboard(match kind {
        Leaper::Knight => KNIGHT_ATTACKS[idx],
        Leaper::King => KING_ATTACKS[idx],
        Leaper::WhitePawn => PAWN_ATTACKS[0][idx],
        Leaper::BlackPawn => PAWN_ATTACKS[1][idx],
    })
}

/// Attack set of a slider on `square` given the board occupancy, via magic lookup.
#[must_use]
pub fn sliding_attacks(kind: Slider, square: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(match kind {
        Slider::Bishop => bishop_attacks(square.index(), occupancy.0),
        Slider::Rook => rook_attacks(square.index(), occupancy.0),
    })
}

/// Attack set of a slider computed by walking each ray until it is blocked.
///
/// Slower than [`sliding_attacks`] but needs no table; used for check
/// detection and to verify the magic tables.
#[must_use]
pub fn ray_attacks(kind: Slider, square: Square, occupancy: Bitboard) -> Bitboard {
    Bitboard(ray_attacks_u64(kind, square, occupancy.0))
}

/// Squares whose occupancy can change a slider's attacks from `square` (board edges excluded).
#[must_use]
pub fn relevant_occupancy(kind: Slider, square: Square) -> Bitboard {
    Bitboard(relevant_mask(kind, square))
}

/// Force construction of every table.
///
/// Tables are otherwise built lazily on first lookup; calling this up front
/// moves the magic search out of the first search or move generation.
pub fn init() {
    Lazy::force(&KNIGHT_ATTACKS);
    Lazy::force(&KING_ATTACKS);
    Lazy::force(&PAWN_ATTACKS);
    Lazy::force(&BISHOP_TABLE);
    Lazy::force(&ROOK_TABLE);
}

#[inline]
pub(crate) fn knight_attacks(sq: usize) -> u64 {
    KNIGHT_ATTACKS[sq]
}

#[inline]
pub(crate) fn king_attacks(sq: usize) -> u64 {
    KING_ATTACKS[sq]
}

/// Squares a pawn of `color` on `sq` attacks
#[inline]
pub(crate) fn pawn_attacks(color: Color, sq: usize) -> u64 {
    PAWN_ATTACKS[color.index()][sq]
}

#[inline]
pub(crate) fn bishop_attacks(sq: usize, occupancy: u64) -> u64 {
    BISHOP_TABLE.attacks(sq, occupancy)
}

#[inline]
pub(crate) fn rook_attacks(sq: usize, occupancy: u64) -> u64 {
    ROOK_TABLE.attacks(sq, occupancy)
}

#[inline]
pub(crate) fn queen_attacks(sq: usize, occupancy: u64) -> u64 {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}
