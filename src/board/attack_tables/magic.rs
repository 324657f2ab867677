//! Magic bitboards for sliding pieces.

use rand::prelude::*;
use rayon::prelude::*;

use super::Slider;
use crate::board::Square;

/// Candidates must spread the relevant mask into the top byte this much.
const MIN_TOP_BYTE_BITS: u32 = 6;
const TOP_BYTE: u64 = 0xFF00_0000_0000_0000;

struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

pub(super) struct MagicTable {
    entries: Vec<MagicEntry>,
    attacks: Vec<u64>,
}

impl MagicTable {
    pub(super) fn build(slider: Slider) -> Self {
        let magics: Vec<u64> = (0..64)
            .into_par_iter()
            .map(|idx| find_magic(Square::from_index_unchecked(idx), slider))
            .collect();

        let mut entries = Vec::with_capacity(64);
        let mut attacks = Vec::new();

        for (idx, &magic) in magics.iter().enumerate() {
            let square = Square::from_index_unchecked(idx);
            let mask = relevant_mask(slider, square);
            let bits = mask.count_ones();
            let entry = MagicEntry {
                mask,
                magic,
                shift: 64 - bits,
                offset: attacks.len(),
            };
            attacks.resize(entry.offset + (1usize << bits), 0);

            for blockers in blocker_subsets(mask) {
                let index = magic_index(blockers, magic, entry.shift);
                attacks[entry.offset + index] = ray_attacks_u64(slider, square, blockers);
            }
            entries.push(entry);
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "built {:?} magic table with {} attack entries",
            slider,
            attacks.len()
        );

        MagicTable { entries, attacks }
    }

    #[inline]
    pub(super) fn attacks(&self, sq: usize, occupancy: u64) -> u64 {
        let entry = &self.entries[sq];
        let index = magic_index(occupancy & entry.mask, entry.magic, entry.shift);
        self.attacks[entry.offset + index]
    }
}

#[inline]
fn magic_index(blockers: u64, magic: u64, shift: u32) -> usize {
    (blockers.wrapping_mul(magic) >> shift) as usize
}

/// Relevant blocker mask: every ray square except the last one before the edge.
pub(crate) fn relevant_mask(slider: Slider, square: Square) -> u64 {
    let mut mask = 0u64;
    for (dr, df) in slider.directions() {
        let mut current = square.offset(dr, df);
        while let Some(sq) = current {
            let next = sq.offset(dr, df);
            if next.is_none() {
                break;
            }
            mask |= sq.bit();
            current = next;
        }
    }
    mask
}

/// Attacks found by walking each ray until it leaves the board or hits a blocker.
pub(crate) fn ray_attacks_u64(slider: Slider, square: Square, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    for (dr, df) in slider.directions() {
        let mut current = square.offset(dr, df);
        while let Some(sq) = current {
            attacks |= sq.bit();
            if occupancy & sq.bit() != 0 {
                break;
            }
            current = sq.offset(dr, df);
        }
    }
    attacks
}

/// The `index`-th subset of `mask`: bit *i* of `index` selects the *i*-th lowest mask square.
fn occupancy_subset(index: usize, mask: u64) -> u64 {
    let mut remaining = mask;
    let mut occupancy = 0u64;
    let mut bit = 0;
    while remaining != 0 {
        let lsb = remaining & remaining.wrapping_neg();
        if index & (1 << bit) != 0 {
            occupancy |= lsb;
        }
        remaining ^= lsb;
        bit += 1;
    }
    occupancy
}

/// Every subset of `mask`, 2^popcount in all.
pub(crate) fn blocker_subsets(mask: u64) -> impl Iterator<Item = u64> {
    (0..1usize << mask.count_ones()).map(move |index| occupancy_subset(index, mask))
}

fn magic_seed(square: Square, slider: Slider) -> u64 {
    let kind = match slider {
        Slider::Bishop => 0x0B15_4A9E,
        Slider::Rook => 0x0500_C0DE,
    };
    (kind << 8) ^ square.index() as u64
}

/// Find a magic multiplier for `slider` on `square`.
///
/// Samples sparse random candidates until one maps every blocker subset of
/// the relevant mask to a table slot without a destructive collision (two
/// subsets may share a slot only when their attack sets are equal). The
/// sampler is seeded from the square and piece, so the result is the same on
/// every call.
#[must_use]
pub fn find_magic(square: Square, slider: Slider) -> u64 {
    let mask = relevant_mask(slider, square);
    let bits = mask.count_ones();
    let shift = 64 - bits;
    let size = 1usize << bits;

    let subsets: Vec<u64> = blocker_subsets(mask).collect();
    let reference: Vec<u64> = subsets
        .iter()
        .map(|&blockers| ray_attacks_u64(slider, square, blockers))
        .collect();

    let mut rng = StdRng::seed_from_u64(magic_seed(square, slider));
    let mut used = vec![0u64; size];
    let mut epoch = vec![0u32; size];
    let mut attempt = 0u32;

    loop {
        let magic = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (mask.wrapping_mul(magic) & TOP_BYTE).count_ones() < MIN_TOP_BYTE_BITS {
            continue;
        }
        attempt = attempt.wrapping_add(1);

        let collision_free = subsets.iter().zip(&reference).all(|(&blockers, &attack)| {
            let index = magic_index(blockers, magic, shift);
            if epoch[index] != attempt {
                epoch[index] = attempt;
                used[index] = attack;
                true
            } else {
                used[index] == attack
            }
        });

        if collision_free {
            return magic;
        }
    }
}
