use std::iter::FromIterator;

use super::BitVector;
use crate::space_usage::SpaceUsage;
use crate::storage::{self, Address};

/// Fixed-length accumulator of bits, finalized into a `BitVector`.
///
/// All bits start as 0 and may be overwritten any number of times in any
/// order. [`build`](#method.build) takes the builder by value, so once the
/// `BitVector` exists nothing can write to its storage.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Builder {
    len: u64,
    // Always `ceil(len / 64) + 1` words; bits at `len` and beyond stay 0.
    words: Vec<u64>,
}

impl Builder {
    /// Creates a builder for `len` bits, all initially 0.
    ///
    /// # Panics
    ///
    /// Panics if the number of words required by `len` does not fit in a
    /// `usize`.
    pub fn new(len: u64) -> Self {
        let word_len = storage::checked_word_len(len)
            .and_then(|words| words.checked_add(1))
            .expect("Builder::new: overflow");

        Builder {
            len,
            words: vec![0; word_len],
        }
    }

    /// The number of bits being built.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Is the builder zero bits long?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the bit at `position` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn set(&mut self, position: u64, value: bool) {
        assert!(position < self.len, "Builder::set: out of bounds");

        let address = Address::new(position);
        let mask = storage::nth_mask(address.bit_offset);
        let word = &mut self.words[address.word_index];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Sets the bit at `position` to 1.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    #[inline]
    pub fn set_one(&mut self, position: u64) {
        self.set(position, true);
    }

    /// Sets the bit at `position` to 0.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    #[inline]
    pub fn set_zero(&mut self, position: u64) {
        self.set(position, false);
    }

    /// Gets the bit at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn get(&self, position: u64) -> bool {
        assert!(position < self.len, "Builder::get: out of bounds");

        let address = Address::new(position);
        self.words[address.word_index] & storage::nth_mask(address.bit_offset) != 0
    }

    /// Builds the rank index and returns the finished `BitVector`.
    ///
    /// Makes a single pass over the packed words. The builder's storage
    /// moves into the result without copying.
    pub fn build(self) -> BitVector {
        BitVector::from_words(self.len, self.words)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new(0)
    }
}

/// Sized to the number of bits the iterator yields.
impl FromIterator<bool> for Builder {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let bits: Vec<bool> = iter.into_iter().collect();
        let mut builder = Builder::new(bits.len() as u64);
        for (position, &bit) in bits.iter().enumerate() {
            if bit {
                builder.set_one(position as u64);
            }
        }
        builder
    }
}

impl From<Builder> for BitVector {
    fn from(builder: Builder) -> Self {
        builder.build()
    }
}

impl SpaceUsage for Builder {
    #[inline]
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        self.words.heap_bytes()
    }
}
