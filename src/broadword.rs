//! Broadword operations treating `u64` as a parallel vector.
//!
//! From [Sebastiano Vigna, “Broadword Implementation of
//! Rank/Select Queries”](http://sux.di.unimi.it/paper.pdf).

use crate::storage::{low_mask, WORD_BITS};

/// Has the lowest bit of every octet set: `0x0101010101010101`.
pub const L8: u64 = 0x0101_0101_0101_0101;

const M2: u64 = 0x5555_5555_5555_5555;
const M4: u64 = 0x3333_3333_3333_3333;
const M8: u64 = 0x0F0F_0F0F_0F0F_0F0F;

/// Counts the number of ones in a `u64`.
///
/// Sums adjacent fields in parallel (1-bit counts into 2-bit fields, then
/// 4-bit, then 8-bit), and then adds up the eight byte counts with a
/// single multiplication by `L8`.
#[inline]
pub fn count_ones(mut x: u64) -> u64 {
    x = (x & M2) + ((x >> 1) & M2);
    x = (x & M4) + ((x >> 2) & M4);
    x = (x + (x >> 4)) & M8;
    x.wrapping_mul(L8) >> 56
}

/// Counts the ones of `word` at bit offsets `start .. end`.
///
/// # Precondition
///
/// `start <= end <= 64`
#[inline]
pub fn count_ones_in(word: u64, start: u32, end: u32) -> u64 {
    debug_assert!(start <= end && end as u64 <= WORD_BITS);
    count_ones(word & low_mask(end) & !low_mask(start))
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn count_ones_edges() {
        assert_eq!(0, count_ones(0));
        assert_eq!(1, count_ones(1));
        assert_eq!(1, count_ones(1 << 63));
        assert_eq!(32, count_ones(0xAAAA_AAAA_AAAA_AAAA));
        assert_eq!(64, count_ones(!0));
    }

    #[quickcheck]
    fn count_ones_matches_std(word: u64) -> bool {
        count_ones(word) == word.count_ones() as u64
    }

    #[quickcheck]
    fn count_ones_rotation_invariant(word: u64, by: u32) -> bool {
        count_ones(word.rotate_left(by % 64)) == count_ones(word)
    }

    #[test]
    fn count_ones_in_ranges() {
        let word = 0b1011_0110u64;
        assert_eq!(0, count_ones_in(word, 0, 0));
        assert_eq!(0, count_ones_in(word, 0, 1));
        assert_eq!(2, count_ones_in(word, 0, 3));
        assert_eq!(3, count_ones_in(word, 2, 8));
        assert_eq!(5, count_ones_in(word, 0, 64));
        assert_eq!(0, count_ones_in(word, 8, 64));
        assert_eq!(64, count_ones_in(!0, 0, 64));
        assert_eq!(1, count_ones_in(!0, 63, 64));
    }

    #[quickcheck]
    fn count_ones_in_matches_bits(word: u64, a: u8, b: u8) -> bool {
        let (a, b) = ((a % 65) as u32, (b % 65) as u32);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let expected = (start..end).filter(|&i| word >> i & 1 == 1).count() as u64;
        count_ones_in(word, start, end) == expected
    }
}
