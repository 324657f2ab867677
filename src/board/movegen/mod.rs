mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{self, ray_attacks_u64, Slider};
use super::{pop_lsb, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves for the side to move: pawns, knights, bishops,
    /// rooks, queens, king steps, then castles.
    ///
    /// Moves may leave the mover's own king in check, with one exception:
    /// castles are only generated when the king's origin, transit and
    /// destination squares are all safe.
    #[must_use]
    pub fn generate_pseudo_legal(&self) -> MoveList {
        let mut moves = MoveList::with_capacity(64);
        let color = self.side_to_move;
        self.generate_pawn_moves(color, &mut moves);
        self.generate_knight_moves(color, &mut moves);
        self.generate_slider_moves(color, Piece::Bishop, &mut moves);
        self.generate_slider_moves(color, Piece::Rook, &mut moves);
        self.generate_slider_moves(color, Piece::Queen, &mut moves);
        self.generate_king_moves(color, &mut moves);
        self.generate_castles(color, &mut moves);
        moves
    }

    /// Legal moves for the side to move, in pseudo-legal generation order.
    #[must_use]
    pub fn generate_legal(&self) -> MoveList {
        let color = self.side_to_move;
        let mut scratch = self.scratch_copy();
        let base = scratch.snapshot();
        self.generate_pseudo_legal()
            .into_iter()
            .filter(|&mv| {
                scratch.restore(base);
                scratch.make_move_unrecorded(mv).is_ok() && !scratch.is_king_in_check(color)
            })
            .collect()
    }

    /// Whether `side`'s king is attacked where it stands.
    ///
    /// A board without a king for `side` is never in check.
    #[must_use]
    pub fn is_king_in_check(&self, side: Color) -> bool {
        match self.king_square(side) {
            Some(king) => self.is_king_in_check_at(side, king),
            None => false,
        }
    }

    /// Whether `side`'s king would be attacked if it stood on `square`.
    ///
    /// The king is lifted from its current square first, so it does not
    /// shield itself along a ray, and an enemy piece on `square` counts as
    /// captured. The board itself is not modified.
    #[must_use]
    pub fn is_king_in_check_at(&self, side: Color, square: Square) -> bool {
        let king = self.pieces(side, Piece::King).0;
        let occupancy = (self.all_occupied.0 & !king) | square.bit();
        self.is_square_attacked_with(square, side.opponent(), occupancy, square.bit())
    }

    /// Whether any piece of `by` attacks `square` on the current board.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.is_square_attacked_with(square, by, self.all_occupied.0, 0)
    }

    /// Attack test against an explicit occupancy, ignoring attackers on `captured`.
    fn is_square_attacked_with(&self, square: Square, by: Color, occupancy: u64, captured: u64) -> bool {
        let idx = square.index();
        let attackers = |piece: Piece| self.pieces(by, piece).0 & !captured;

        if attackers(Piece::Pawn) & attack_tables::pawn_attacks(by.opponent(), idx) != 0 {
            return true;
        }
        if attackers(Piece::Knight) & attack_tables::knight_attacks(idx) != 0 {
            return true;
        }
        if attackers(Piece::King) & attack_tables::king_attacks(idx) != 0 {
            return true;
        }

        let queens = attackers(Piece::Queen);
        let diagonal = attackers(Piece::Bishop) | queens;
        if diagonal != 0 && ray_attacks_u64(Slider::Bishop, square, occupancy) & diagonal != 0 {
            return true;
        }
        let straight = attackers(Piece::Rook) | queens;
        straight != 0 && ray_attacks_u64(Slider::Rook, square, occupancy) & straight != 0
    }

    /// Push a move for every square in `targets`, marking captures.
    fn push_targets(&self, color: Color, piece: Piece, from: Square, mut targets: u64, moves: &mut MoveList) {
        let enemy = self.occupancy(color.opponent()).0;
        while targets != 0 {
            let to = pop_lsb(&mut targets);
            if enemy & to.bit() != 0 {
                moves.push(Move::capture(color, piece, from, to));
            } else {
                moves.push(Move::new(color, piece, from, to));
            }
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        let mut board = self.scratch_copy();
        board.perft_recursive(depth)
    }

    fn perft_recursive(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_legal();
        if depth == 1 {
            return moves.len() as u64;
        }
        let saved = self.snapshot();
        let mut nodes = 0;
        for mv in moves {
            if self.make_move_unrecorded(mv).is_ok() {
                nodes += self.perft_recursive(depth - 1);
                self.restore(saved);
            }
        }
        nodes
    }
}
