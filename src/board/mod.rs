//! Chess board representation, move generation and search.
//!
//! Positions are twelve piece bitboards. Leaper attacks come from shift-built
//! tables and slider attacks from magic bitboards generated at startup.
//! Supports full chess rules including castling, en passant and promotions.
//!
//! # Example
//! ```
//! use caissa_engine::board::Board;
//!
//! let board = Board::new();
//! let moves = board.generate_legal();
//! assert_eq!(moves.len(), 20);
//! assert!(board.best_move(1).is_some());
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod render;
mod search;
mod state;
mod terminal;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{
    find_magic, init as init_attack_tables, leaper_attacks, ray_attacks, relevant_occupancy,
    sliding_attacks, Leaper, Slider,
};
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use search::{
    is_mate_score, SearchConfig, SearchResult, DEFAULT_DEPTH, INFINITY, MATE_SCORE,
};
pub use state::Board;
pub use types::{Bitboard, BitboardIter, CastleSide, CastlingRights, Color, Move, MoveList, Piece, Square};

pub(crate) use types::{names_piece, pop_lsb, PROMOTION_PIECES};
