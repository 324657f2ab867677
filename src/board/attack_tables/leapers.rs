//! Shift-based leaper masks.

const NOT_A: u64 = !0x0101010101010101;
const NOT_AB: u64 = !0x0303030303030303;
const NOT_H: u64 = !0x8080808080808080;
const NOT_GH: u64 = !0xC0C0C0C0C0C0C0C0;

pub(super) fn table(mask: fn(u64) -> u64) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = mask(1u64 << sq);
    }
    attacks
}

pub(super) fn knight_mask(b: u64) -> u64 {
    ((b << 17) & NOT_A)
        | ((b << 15) & NOT_H)
        | ((b << 10) & NOT_AB)
        | ((b << 6) & NOT_GH)
        | ((b >> 17) & NOT_H)
        | ((b >> 15) & NOT_A)
        | ((b >> 10) & NOT_GH)
        | ((b >> 6) & NOT_AB)
}

pub(super) fn king_mask(b: u64) -> u64 {
    (b << 8)
        | (b >> 8)
        | ((b << 1) & NOT_A)
        | ((b >> 1) & NOT_H)
        | ((b << 9) & NOT_A)
        | ((b << 7) & NOT_H)
        | ((b >> 7) & NOT_A)
        | ((b >> 9) & NOT_H)
}

pub(super) fn white_pawn_mask(b: u64) -> u64 {
    ((b << 9) & NOT_A) | ((b << 7) & NOT_H)
}

pub(super) fn black_pawn_mask(b: u64) -> u64 {
    ((b >> 7) & NOT_A) | ((b >> 9) & NOT_H)
}
