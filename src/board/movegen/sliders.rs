use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Board, Color, MoveList, Piece};

impl Board {
    /// Bishop, rook or queen moves through the magic tables.
    pub(crate) fn generate_slider_moves(&self, color: Color, piece: Piece, moves: &mut MoveList) {
        let attacks: fn(usize, u64) -> u64 = match piece {
            Piece::Bishop => bishop_attacks,
            Piece::Rook => rook_attacks,
            Piece::Queen => queen_attacks,
            _ => return,
        };
        let own = self.occupancy(color).0;
        let occupancy = self.all_occupied.0;
        for from in self.pieces(color, piece) {
            let targets = attacks(from.index(), occupancy) & !own;
            self.push_targets(color, piece, from, targets, moves);
        }
    }
}
