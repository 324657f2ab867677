use super::super::attack_tables::knight_attacks;
use super::super::{Board, Color, MoveList, Piece};

impl Board {
    pub(crate) fn generate_knight_moves(&self, color: Color, moves: &mut MoveList) {
        let own = self.occupancy(color).0;
        for from in self.pieces(color, Piece::Knight) {
            let targets = knight_attacks(from.index()) & !own;
            self.push_targets(color, Piece::Knight, from, targets, moves);
        }
    }
}
