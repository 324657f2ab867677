use super::error::MoveError;
use super::{Board, CastleSide, Color, Move, Piece, Square};

/// Castling right lost when a rook leaves or is captured on `sq`
fn rook_home_right(sq: Square) -> Option<(Color, CastleSide)> {
    match sq {
        Square::A1 => Some((Color::White, CastleSide::Long)),
        Square::H1 => Some((Color::White, CastleSide::Short)),
        Square::A8 => Some((Color::Black, CastleSide::Long)),
        Square::H8 => Some((Color::Black, CastleSide::Short)),
        _ => None,
    }
}

impl Board {
    /// Apply a move and record the prior position for [`Board::undo_move`].
    ///
    /// The moving piece, any capture, en passant and castling are read from
    /// the board, so a move parsed from text applies the same way as a
    /// generated one. Legality is not checked beyond the origin square
    /// holding a piece of the side to move and the destination not holding a
    /// friendly piece.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let snapshot = self.snapshot();
        self.apply(mv)?;
        self.history.push(snapshot);
        Ok(())
    }

    /// Apply a move without touching the history stack.
    pub(crate) fn make_move_unrecorded(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply(mv)
    }

    /// Restore the position before the most recent [`Board::make_move`].
    pub fn undo_move(&mut self) -> Result<(), MoveError> {
        match self.history.pop() {
            Some(snapshot) => {
                self.restore(snapshot);
                Ok(())
            }
            None => {
                #[cfg(feature = "logging")]
                log::warn!("undo requested with empty history");
                Err(MoveError::EmptyHistory)
            }
        }
    }

    fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let from = mv.from();
        let to = mv.to();
        let (color, piece) = self
            .piece_at(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        if color != self.side_to_move {
            return Err(MoveError::WrongSide { square: from });
        }
        let them = color.opponent();
        let target = self.piece_at(to);
        if matches!(target, Some((c, _)) if c == color) {
            return Err(MoveError::Illegal {
                notation: mv.to_string(),
            });
        }

        let en_passant =
            piece == Piece::Pawn && Some(to) == self.en_passant && from.file() != to.file();
        let mut captured = false;
        if en_passant {
            if let Some(behind) = Square::new(from.rank(), to.file()) {
                self.remove_piece(behind, them, Piece::Pawn);
                captured = true;
            }
        } else if let Some((_, victim)) = target {
            self.remove_piece(to, them, victim);
            captured = true;
        }

        self.remove_piece(from, color, piece);
        let placed = if piece == Piece::Pawn && to.rank() == them.back_rank() {
            mv.promotion().unwrap_or(Piece::Queen)
        } else {
            piece
        };
        self.set_piece(to, color, placed);

        if piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            let side = if to.file() > from.file() {
                CastleSide::Short
            } else {
                CastleSide::Long
            };
            let (rook_from, rook_to) = side.rook_files();
            let rank = color.back_rank();
            if let (Some(rook_from), Some(rook_to)) =
                (Square::new(rank, rook_from), Square::new(rank, rook_to))
            {
                if self.pieces(color, Piece::Rook).contains(rook_from) {
                    self.remove_piece(rook_from, color, Piece::Rook);
                    self.set_piece(rook_to, color, Piece::Rook);
                }
            }
        }

        if piece == Piece::King {
            self.castling.remove_color(color);
        }
        for sq in [from, to] {
            if let Some((owner, side)) = rook_home_right(sq) {
                self.castling.remove(owner, side);
            }
        }

        self.en_passant = if piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            Square::new((from.rank() + to.rank()) / 2, from.file())
        } else {
            None
        };

        if piece == Piece::Pawn || captured {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;
        self.refresh_occupancy();
        Ok(())
    }
}
