//! Core chess types.
//!
//! - `Piece` and `Color`: piece kinds and sides
//! - `Square`: a bit index a1 = 0 .. h8 = 63
//! - `Bitboard`: a 64-bit set of squares
//! - `Move` and `MoveList`: move descriptors
//! - `CastlingRights` and `CastleSide`: castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use bitboard::pop_lsb;
pub(crate) use moves::names_piece;
pub(crate) use piece::PROMOTION_PIECES;
