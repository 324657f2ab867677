//! Game facade: a board plus the repetition tally of the moves actually played.
//!
//! Search works on board copies and never touches the tally. [`SharedGame`]
//! wraps a game in a mutex for callers that serve several requests at once.

use std::sync::Arc;

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, FenError, Move, MoveError, SearchConfig, SearchResult};
use crate::zobrist::RepetitionTable;

/// Where a game stands after the last move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    ThreefoldRepetition,
    FiftyMove,
    InsufficientMaterial,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    repetitions: RepetitionTable,
}

impl Game {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// A game starting from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::with_board(Board::try_from_fen(fen)?))
    }

    fn with_board(board: Board) -> Self {
        let mut repetitions = RepetitionTable::new();
        repetitions.record(&board);
        Game { board, repetitions }
    }

    /// Back to the starting position with an empty tally.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Restart from `fen`, or from the starting position when `None`.
    ///
    /// On a malformed FEN the current game is left as it was.
    pub fn init_position(&mut self, fen: Option<&str>) -> Result<(), FenError> {
        *self = match fen {
            Some(fen) => Game::from_fen(fen)?,
            None => Game::new(),
        };
        Ok(())
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply `mv` if it is legal in the current position.
    ///
    /// Returns the generated move that matched, which carries the capture
    /// and castle details of the position.
    pub fn apply_move(&mut self, mv: Move) -> Result<Move, MoveError> {
        let legal = self
            .board
            .generate_legal()
            .into_iter()
            .find(|&candidate| candidate == mv)
            .ok_or_else(|| MoveError::Illegal {
                notation: mv.to_string(),
            })?;
        self.board.make_move(legal)?;
        let _seen = self.repetitions.record(&self.board);

        #[cfg(feature = "logging")]
        log::debug!("played {} ({}), position seen {} times", legal, legal.describe(), _seen);

        Ok(legal)
    }

    /// Parse move text (see [`Board::parse_move`]) and apply it.
    pub fn play(&mut self, text: &str) -> Result<Move, MoveError> {
        let mv = self.board.parse_move(text)?;
        self.apply_move(mv)
    }

    /// Take back the last move and its repetition count.
    pub fn undo(&mut self) -> Result<(), MoveError> {
        if self.board.history_len() == 0 {
            return self.board.undo_move();
        }
        self.repetitions.forget(&self.board);
        self.board.undo_move()
    }

    /// Search the current position without changing it.
    #[must_use]
    pub fn search(&self, config: &SearchConfig) -> SearchResult {
        self.board.search(config)
    }

    #[must_use]
    pub fn best_move(&self, depth: u32) -> Option<Move> {
        self.board.best_move(depth)
    }

    /// Search and play the best move, returning it. `None` when no move exists.
    pub fn engine_move(&mut self, config: &SearchConfig) -> Result<Option<Move>, MoveError> {
        match self.search(config).best_move {
            Some(mv) => self.apply_move(mv).map(Some),
            None => Ok(None),
        }
    }

    /// The current position has occurred three times in this game.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetitions.is_threefold(&self.board)
    }

    /// Times the current position has occurred in this game
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.count(&self.board)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_threefold_repetition() || self.board.is_terminal()
    }

    /// Checkmate and stalemate take precedence over the draw rules.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let side = self.board.side_to_move();
        if self.board.generate_legal().is_empty() {
            return if self.board.is_king_in_check(side) {
                GameStatus::Checkmate {
                    winner: side.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_threefold_repetition() {
            GameStatus::ThreefoldRepetition
        } else if self.board.is_fifty_move() {
            GameStatus::FiftyMove
        } else if self.board.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Cloneable handle to one game shared between callers.
///
/// Every operation takes the lock for its whole duration, so an engine move
/// never interleaves with a player's move.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Run `f` with exclusive access to the game.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// FEN of the current position
    #[must_use]
    pub fn fen(&self) -> String {
        self.inner.lock().board().to_fen()
    }

    /// Copy of the current position
    #[must_use]
    pub fn board(&self) -> Board {
        self.inner.lock().board().clone()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.inner.lock().status()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn init_position(&self, fen: Option<&str>) -> Result<(), FenError> {
        self.inner.lock().init_position(fen)
    }

    pub fn play(&self, text: &str) -> Result<Move, MoveError> {
        self.inner.lock().play(text)
    }

    /// Suggest a move without playing it. The search runs outside the lock.
    #[must_use]
    pub fn best(&self, depth: u32) -> Option<Move> {
        let board = self.board();
        board.best_move(depth)
    }

    pub fn engine_move(&self, config: &SearchConfig) -> Result<Option<Move>, MoveError> {
        self.inner.lock().engine_move(config)
    }
}
