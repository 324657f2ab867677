//! Bitboard chess engine core.
//!
//! Board representation, magic-bitboard move generation, a parallel
//! alpha-beta search and Zobrist-based draw detection.
//!
//! # Example
//! ```
//! use caissa_engine::{Game, GameStatus, SearchConfig};
//!
//! let mut game = Game::new();
//! game.play("e2e4").unwrap();
//! let reply = game.engine_move(&SearchConfig::with_depth(2)).unwrap();
//! assert!(reply.is_some());
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! ```

pub mod board;
pub mod game;
pub mod zobrist;

pub use board::{
    Bitboard, Board, CastleSide, Color, FenError, Move, MoveError, MoveParseError, Piece,
    SearchConfig, SearchResult, Square,
};
pub use game::{Game, GameStatus, SharedGame};
pub use zobrist::RepetitionTable;
