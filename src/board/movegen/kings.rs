use super::super::attack_tables::king_attacks;
use super::super::{Board, CastleSide, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_king_moves(&self, color: Color, moves: &mut MoveList) {
        let own = self.occupancy(color).0;
        for from in self.pieces(color, Piece::King) {
            let targets = king_attacks(from.index()) & !own;
            self.push_targets(color, Piece::King, from, targets, moves);
        }
    }

    /// Castles whose right is held, with king and rook at home, the squares
    /// between them empty, and no attack on the king's path.
    pub(crate) fn generate_castles(&self, color: Color, moves: &mut MoveList) {
        for side in [CastleSide::Short, CastleSide::Long] {
            if self.can_castle(color, side) {
                moves.push(Move::castle(color, side));
            }
        }
    }

    fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling.has(color, side) {
            return false;
        }
        let (king_from, king_to) = side.king_squares(color);
        if !self.pieces(color, Piece::King).contains(king_from) {
            return false;
        }
        let rank = color.back_rank();
        let (rook_file, _) = side.rook_files();
        match Square::new(rank, rook_file) {
            Some(rook) if self.pieces(color, Piece::Rook).contains(rook) => {}
            _ => return false,
        }

        let (lo, hi) = match side {
            CastleSide::Short => (5, 6),
            CastleSide::Long => (1, 3),
        };
        let between_empty = (lo..=hi)
            .filter_map(|file| Square::new(rank, file))
            .all(|sq| !self.all_occupied.contains(sq));
        if !between_empty {
            return false;
        }

        let transit = Square::new(rank, (king_from.file() + side.king_file()) / 2);
        [Some(king_from), transit, Some(king_to)]
            .into_iter()
            .flatten()
            .all(|sq| !self.is_king_in_check_at(color, sq))
    }
}
