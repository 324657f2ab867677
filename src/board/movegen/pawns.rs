use super::super::attack_tables::pawn_attacks;
use super::super::{pop_lsb, Bitboard, Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

/// Push `mv`, or one move per promotion piece when it reaches the last rank.
fn push_pawn_move(mv: Move, color: Color, moves: &mut MoveList) {
    if mv.to().rank() == color.opponent().back_rank() {
        for promo in PROMOTION_PIECES {
            moves.push(mv.with_promotion(promo));
        }
    } else {
        moves.push(mv);
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, color: Color, moves: &mut MoveList) {
        let pawns = self.pieces(color, Piece::Pawn);
        let empty = self.empty;
        let (single, double, step): (Bitboard, Bitboard, isize) = match color {
            Color::White => {
                let single = pawns.shift_north() & empty;
                (single, single.shift_north() & empty & Bitboard::RANK_4, 8)
            }
            Color::Black => {
                let single = pawns.shift_south() & empty;
                (single, single.shift_south() & empty & Bitboard::RANK_5, -8)
            }
        };

        let origin = |to: Square, rows: isize| {
            Square::from_index_unchecked((to.index() as isize - step * rows) as usize)
        };

        let mut targets = single.0;
        while targets != 0 {
            let to = pop_lsb(&mut targets);
            push_pawn_move(Move::new(color, Piece::Pawn, origin(to, 1), to), color, moves);
        }
        let mut targets = double.0;
        while targets != 0 {
            let to = pop_lsb(&mut targets);
            moves.push(Move::new(color, Piece::Pawn, origin(to, 2), to));
        }

        let enemy = self.occupancy(color.opponent());
        let enemy_pawns = self.pieces(color.opponent(), Piece::Pawn);
        for from in pawns {
            let attacks = pawn_attacks(color, from.index());
            let mut captures = attacks & enemy.0;
            while captures != 0 {
                let to = pop_lsb(&mut captures);
                push_pawn_move(Move::capture(color, Piece::Pawn, from, to), color, moves);
            }

            if let Some(ep) = self.en_passant {
                if attacks & ep.bit() != 0 {
                    if let Some(behind) = Square::new(from.rank(), ep.file()) {
                        if enemy_pawns.contains(behind) && !self.all_occupied.contains(ep) {
                            moves.push(Move::en_passant(color, from, ep, behind));
                        }
                    }
                }
            }
        }
    }
}
