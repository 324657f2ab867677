//! Zobrist hashing for chess positions.
//!
//! A position hash XORs one random key per (color, piece, square) occupant,
//! one for the castling-rights mask, one for the en passant file and one when
//! Black is to move. Keys come from a fixed seed so hashes are reproducible
//! across runs and threads.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Piece};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece][square]
    pub(crate) piece_keys: [[[u64; 64]; 6]; 2],
    // indexed by the raw 4-bit castling mask
    pub(crate) castling_keys: [u64; 16],
    // only the file of the en passant target matters
    pub(crate) en_passant_keys: [u64; 8],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        for key in &mut castling_keys {
            *key = rng.gen();
        }
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }
        let black_to_move_key = rng.gen();

        ZobristKeys {
            piece_keys,
            castling_keys,
            en_passant_keys,
            black_to_move_key,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash of the position: placement, side to move, castling rights and en passant file.
///
/// Clocks and history do not contribute, so transpositions hash alike.
#[must_use]
pub fn hash(board: &Board) -> u64 {
    let keys = &*ZOBRIST;
    let mut hash = 0u64;
    for color in Color::BOTH {
        for piece in Piece::ALL {
            for sq in board.pieces(color, piece) {
                hash ^= keys.piece_keys[color.index()][piece.index()][sq.index()];
            }
        }
    }
    hash ^= keys.castling_keys[board.castling_rights().as_u8() as usize];
    if let Some(ep) = board.en_passant() {
        hash ^= keys.en_passant_keys[ep.file()];
    }
    if board.side_to_move() == Color::Black {
        hash ^= keys.black_to_move_key;
    }
    hash
}

impl Board {
    /// Zobrist hash of this position, see [`hash`]
    #[must_use]
    pub fn hash(&self) -> u64 {
        hash(self)
    }
}

/// Occurrence counts per position hash for repetition detection.
#[derive(Clone, Debug, Default)]
pub struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `board`, returning the new tally.
    pub fn record(&mut self, board: &Board) -> u32 {
        let count = self.counts.entry(board.hash()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Remove one occurrence of `board`, dropping the entry at zero.
    pub fn forget(&mut self, board: &Board) {
        let key = board.hash();
        if let Some(count) = self.counts.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&key);
            }
        }
    }

    /// Times `board` has occurred
    #[must_use]
    pub fn count(&self, board: &Board) -> u32 {
        self.counts.get(&board.hash()).copied().unwrap_or(0)
    }

    /// `board` has occurred at least three times.
    #[must_use]
    pub fn is_threefold(&self, board: &Board) -> bool {
        self.count(board) >= 3
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
