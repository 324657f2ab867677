use std::str::FromStr;

use super::error::{FenError, MoveError, MoveParseError};
use super::{names_piece, Board, CastleSide, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// 0 and 1 when missing or unreadable.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let sq = Square::new(7 - rank_idx, file).ok_or(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file + 1,
                })?;
                board.set_piece(sq, color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling.set(Color::White, CastleSide::Short),
                'Q' => board.castling.set(Color::White, CastleSide::Long),
                'k' => board.castling.set(Color::Black, CastleSide::Short),
                'q' => board.castling.set(Color::Black, CastleSide::Long),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant = match parts[3] {
            "-" => None,
            text => Some(text.parse().map_err(|_| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        board.halfmove_clock = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        board.fullmove_number = parts.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        board.refresh_occupancy();
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for sq in (0..8).filter_map(|file| Square::new(rank, file)) {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::Short, 'K'),
            (Color::White, CastleSide::Long, 'Q'),
            (Color::Black, CastleSide::Short, 'k'),
            (Color::Black, CastleSide::Long, 'q'),
        ] {
            if self.castling.has(color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Resolve move text against the legal moves of the side to move.
    ///
    /// Accepts every form [`Move::parse`] does. A bare coordinate move such as
    /// `g1f3` is matched by origin, destination and promotion, so it works for
    /// any piece, and `e1g1` selects the castle when one is legal.
    ///
    /// # Example
    /// ```
    /// use caissa_engine::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("Ng1f3").unwrap();
    /// assert_eq!(mv.to_string(), "g1f3");
    /// assert_eq!(board.parse_move("g1f3").unwrap(), mv);
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let request = Move::parse(text, self.side_to_move)?;
        let legal = self.generate_legal();

        if let Some(mv) = legal.iter().find(|&&mv| mv == request) {
            return Ok(*mv);
        }

        let chars: Vec<char> = text.chars().collect();
        if !request.is_castle() && !names_piece(&chars) {
            if let Some(mv) = legal.iter().find(|mv| {
                mv.from() == request.from()
                    && mv.to() == request.to()
                    && mv.promotion() == request.promotion()
            }) {
                return Ok(*mv);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: text.to_string(),
        })
    }

    /// Parse move text and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use caissa_engine::Board;
    ///
    /// let mut board = Board::new();
    /// board.play("e2e4").unwrap();
    /// board.play("e7e5").unwrap();
    /// assert_eq!(board.fullmove_number(), 2);
    /// ```
    pub fn play(&mut self, text: &str) -> Result<Move, MoveError> {
        let mv = self.parse_move(text)?;
        self.make_move(mv)?;
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
