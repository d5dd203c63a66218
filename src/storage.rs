//! Word-level arithmetic for packing bits into `u64`s.
//!
//! Bits are stored least-significant first: bit `i` of a bit vector lives
//! in word `i / 64` at offset `i % 64`.

/// The number of bits in a storage word.
pub const WORD_BITS: u64 = 64;

/// Log-base-2 of `WORD_BITS`.
pub const LG_WORD_BITS: u32 = 6;

/// Returns `index / WORD_BITS`, computed by shifting.
///
/// This converts a bit address into a word address. There is no check
/// that the result fits in a `usize`, so it should only be used for
/// positions already known to be backed by storage.
#[inline]
pub fn div_word_bits(index: u64) -> usize {
    (index >> LG_WORD_BITS) as usize
}

/// Returns `index % WORD_BITS`, computed by masking.
#[inline]
pub fn mod_word_bits(index: u64) -> u32 {
    (index & (WORD_BITS - 1)) as u32
}

/// Returns `index * WORD_BITS`, converting a word address into the bit
/// address of its first bit.
#[inline]
pub fn mul_word_bits(index: usize) -> u64 {
    (index as u64) << LG_WORD_BITS
}

/// The number of words needed to hold `len` bits, that is,
/// `len / WORD_BITS` rounded up.
///
/// Returns `None` if the count does not fit in a `usize`.
#[inline]
pub fn checked_word_len(len: u64) -> Option<usize> {
    let words = (len >> LG_WORD_BITS) + u64::from(mod_word_bits(len) != 0);
    if words > usize::max_value() as u64 {
        None
    } else {
        Some(words as usize)
    }
}

/// The mask with the lowest `bits` bits set.
///
/// # Precondition
///
/// `bits <= 64`
#[inline]
pub fn low_mask(bits: u32) -> u64 {
    debug_assert!(bits as u64 <= WORD_BITS);

    if bits as u64 == WORD_BITS {
        !0
    } else {
        (1 << bits) - 1
    }
}

/// The mask with the `bit_offset`th bit set.
///
/// # Precondition
///
/// `bit_offset < 64`
#[inline]
pub fn nth_mask(bit_offset: u32) -> u64 {
    debug_assert!((bit_offset as u64) < WORD_BITS);
    1 << bit_offset
}

/// Returns the largest `n` such that `2.pow(n) <= x`, or 0 when `x <= 1`.
#[inline]
pub fn floor_lg(x: u64) -> u32 {
    if x <= 1 {
        return 0;
    }
    63 - x.leading_zeros()
}

/// Represents the address of a bit, broken into a word component and a bit
/// offset component.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address {
    /// The index of the word containing the bit in question.
    pub word_index: usize,
    /// The position of the bit in question within its word.
    pub bit_offset: u32,
}

impl Address {
    /// Creates an `Address` for the given bit index.
    #[inline]
    pub fn new(bit_index: u64) -> Self {
        Address {
            word_index: div_word_bits(bit_index),
            bit_offset: mod_word_bits(bit_index),
        }
    }

    /// Converts an `Address` back into a raw bit index.
    ///
    /// This method and `new` are inverses.
    #[inline]
    pub fn bit_index(&self) -> u64 {
        mul_word_bits(self.word_index) + self.bit_offset as u64
    }
}
