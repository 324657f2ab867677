use super::pst::{MATERIAL_EG, MATERIAL_MG, MAX_PHASE, PHASE_WEIGHTS, PST_EG, PST_MG};
use super::{Board, Color, Piece};

/// Piece-square index for a color: White reads the tables directly, Black mirrored.
#[inline]
fn pst_sq(sq_idx: usize, color: Color) -> usize {
    match color {
        Color::White => sq_idx,
        Color::Black => sq_idx ^ 56,
    }
}

impl Board {
    /// Static evaluation in centipawns from the side to move's point of view.
    ///
    /// Material plus piece-square bonuses, blended between middlegame and
    /// endgame tables by the remaining non-pawn material.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut mg = [0i32; 2];
        let mut eg = [0i32; 2];
        let mut phase = 0;

        for color in Color::BOTH {
            let c = color.index();
            for piece in Piece::ALL {
                let p = piece.index();
                for sq in self.pieces(color, piece) {
                    let idx = pst_sq(sq.index(), color);
                    mg[c] += MATERIAL_MG[p] + PST_MG[p][idx];
                    eg[c] += MATERIAL_EG[p] + PST_EG[p][idx];
                    phase += PHASE_WEIGHTS[p];
                }
            }
        }

        let phase = phase.min(MAX_PHASE);
        let mg_score = mg[0] - mg[1];
        let eg_score = eg[0] - eg[1];
        let score = (mg_score * phase + eg_score * (MAX_PHASE - phase)) / MAX_PHASE;

        match self.side_to_move {
            Color::White => score,
            Color::Black => -score,
        }
    }
}
