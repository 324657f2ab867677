use super::{Board, Color, Piece};

impl Board {
    /// Side to move is in check and has no legal move.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_king_in_check(self.side_to_move) && self.generate_legal().is_empty()
    }

    /// Side to move is not in check and has no legal move.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_king_in_check(self.side_to_move) && self.generate_legal().is_empty()
    }

    /// Fifty moves by each side without a capture or pawn move.
    #[must_use]
    pub fn is_fifty_move(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Material-only draw heuristic.
    ///
    /// Drawn when no pawns, rooks or queens remain and each side has at most
    /// one minor piece. This is a simplification: it also calls king and
    /// knight against king and knight a draw, which is not a dead position.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let heavy = Color::BOTH.iter().any(|&color| {
            [Piece::Pawn, Piece::Rook, Piece::Queen]
                .iter()
                .any(|&piece| !self.pieces(color, piece).is_empty())
        });
        if heavy {
            return false;
        }

        let minors = |color: Color| -> u32 {
            Piece::ALL
                .iter()
                .filter(|piece| piece.is_minor())
                .map(|&piece| self.pieces(color, piece).popcount())
                .sum()
        };
        minors(Color::White) <= 1 && minors(Color::Black) <= 1
    }

    /// Checkmate, stalemate, fifty-move rule or insufficient material.
    ///
    /// Repetition needs the game's position tally and is covered by
    /// [`crate::Game::is_game_over`].
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_fifty_move()
            || self.is_insufficient_material()
            || self.generate_legal().is_empty()
    }
}
