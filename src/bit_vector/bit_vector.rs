use std::fmt;

use log::debug;

use super::Builder;
use crate::broadword;
use crate::errors::{Error, Result};
use crate::internal::search::last_not_above;
use crate::space_usage::SpaceUsage;
use crate::storage::{self, Address, WORD_BITS};

/// Immutable bit vector with rank and select support.
///
/// Construct with [`Builder`](struct.Builder.html).
///
/// Alongside the packed bits we keep one prefix count per block of
/// `⌊lg n⌋²` bits: entry `k` is the number of 1s before bit `k * B`.
/// Rank looks up its block's entry and popcounts the words between the
/// block start and the query position; select binary searches over rank.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BitVector {
    len: u64,
    words: Vec<u64>,
    block_size: u64,
    block_ranks: Vec<u64>,
    ones: u64,
}

/// The rank block size for a vector of `len` bits: `⌊lg len⌋²`, and at
/// least 1.
fn block_size_for(len: u64) -> u64 {
    let lg = u64::from(storage::floor_lg(len).max(1));
    lg * lg
}

impl BitVector {
    /// Creates a builder for a bit vector of `len` bits.
    ///
    /// Shorthand for [`Builder::new`](struct.Builder.html#method.new).
    pub fn builder(len: u64) -> Builder {
        Builder::new(len)
    }

    /// Computes the rank index over `words` and takes ownership of them.
    ///
    /// `words` must hold `ceil(len / 64) + 1` words with every bit at
    /// position `len` or beyond cleared.
    pub(super) fn from_words(len: u64, words: Vec<u64>) -> Self {
        debug_assert_eq!(storage::checked_word_len(len).map(|n| n + 1), Some(words.len()));

        let block_size = block_size_for(len);
        let block_count = (len / block_size) as usize + 1;
        let mut block_ranks = Vec::with_capacity(block_count);
        let mut current_rank: u64 = 0;

        for (index, &word) in words.iter().enumerate() {
            let word_start = storage::mul_word_bits(index);
            let word_end = word_start + WORD_BITS;

            // Record every block boundary that falls inside this word.
            while block_ranks.len() < block_count {
                let boundary = block_ranks.len() as u64 * block_size;
                if boundary >= word_end {
                    break;
                }
                let offset = (boundary - word_start) as u32;
                block_ranks.push(current_rank + broadword::count_ones_in(word, 0, offset));
            }

            current_rank += broadword::count_ones(word);
        }

        debug_assert_eq!(block_count, block_ranks.len());

        debug!(
            "built rank index: len={} block_size={} blocks={} ones={}",
            len, block_size, block_count, current_rank
        );

        BitVector {
            len,
            words,
            block_size,
            block_ranks,
            ones: current_rank,
        }
    }

    /// The length of the bit vector in bits.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Is the bit vector zero bits long?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of bits covered by each entry of the rank index.
    #[inline]
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Borrows the packed words: `ceil(len / 64) + 1` of them, least
    /// significant bit first, with bits past the end cleared.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// The total number of 1s.
    #[inline]
    pub fn count_ones(&self) -> u64 {
        self.ones
    }

    /// The total number of 0s.
    #[inline]
    pub fn count_zeros(&self) -> u64 {
        self.len - self.ones
    }

    fn count(&self, value: bool) -> u64 {
        if value {
            self.count_ones()
        } else {
            self.count_zeros()
        }
    }

    fn check_position(&self, position: u64) -> Result<()> {
        if position >= self.len {
            return Err(Error::out_of_range(position, self.len));
        }
        Ok(())
    }

    #[inline]
    fn bit(&self, position: u64) -> bool {
        let address = Address::new(position);
        self.words[address.word_index] & storage::nth_mask(address.bit_offset) != 0
    }

    /// Gets the bit at `position`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `position >= self.len()`.
    pub fn get(&self, position: u64) -> Result<bool> {
        self.check_position(position)?;
        Ok(self.bit(position))
    }

    /// Counts the 1s at positions `start .. end`, which lie in the same
    /// rank block.
    fn count_ones_between(&self, start: u64, end: u64) -> u64 {
        let first = Address::new(start);
        let last = Address::new(end);

        if first.word_index == last.word_index {
            let word = self.words[first.word_index];
            return broadword::count_ones_in(word, first.bit_offset, last.bit_offset);
        }

        let leading = broadword::count_ones_in(
            self.words[first.word_index],
            first.bit_offset,
            WORD_BITS as u32,
        );
        let interior: u64 = self.words[first.word_index + 1..last.word_index]
            .iter()
            .map(|&word| broadword::count_ones(word))
            .sum();
        let trailing = broadword::count_ones_in(self.words[last.word_index], 0, last.bit_offset);

        leading + interior + trailing
    }

    /// The number of 1s before `position`, for any `position <= len`.
    fn rank1_unchecked(&self, position: u64) -> u64 {
        debug_assert!(position <= self.len);

        let block = position / self.block_size;
        let block_start = block * self.block_size;

        self.block_ranks[block as usize] + self.count_ones_between(block_start, position)
    }

    fn rank_unchecked(&self, position: u64, value: bool) -> u64 {
        let ones = self.rank1_unchecked(position);
        if value {
            ones
        } else {
            position - ones
        }
    }

    /// The number of bits equal to `value` before `position`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `position >= self.len()`.
    pub fn rank(&self, position: u64, value: bool) -> Result<u64> {
        if value {
            self.rank1(position)
        } else {
            self.rank0(position)
        }
    }

    /// The number of 1s before `position`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `position >= self.len()`.
    pub fn rank1(&self, position: u64) -> Result<u64> {
        self.check_position(position)?;
        Ok(self.rank1_unchecked(position))
    }

    /// The number of 0s before `position`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `position >= self.len()`.
    pub fn rank0(&self, position: u64) -> Result<u64> {
        let ones = self.rank1(position)?;
        Ok(position - ones)
    }

    /// The position of the bit equal to `value` that has exactly `index`
    /// bits equal to `value` before it.
    ///
    /// # Errors
    ///
    /// `NotExist` if `index` is not less than the number of bits equal to
    /// `value`.
    pub fn select(&self, index: u64, value: bool) -> Result<u64> {
        if index >= self.count(value) {
            return Err(Error::not_exist(index, value));
        }

        // rank(0) = 0 <= index and rank(len) > index, so the last position
        // whose rank is at most `index` holds the bit we want.
        Ok(last_not_above(0, self.len + 1, index, |position| {
            self.rank_unchecked(position, value)
        }))
    }

    /// The position of the 1 that has exactly `index` 1s before it.
    ///
    /// # Errors
    ///
    /// `NotExist` if `index >= self.count_ones()`.
    pub fn select1(&self, index: u64) -> Result<u64> {
        self.select(index, true)
    }

    /// The position of the 0 that has exactly `index` 0s before it.
    ///
    /// # Errors
    ///
    /// `NotExist` if `index >= self.count_zeros()`.
    pub fn select0(&self, index: u64) -> Result<u64> {
        self.select(index, false)
    }

    /// Returns an iterator over the bits.
    pub fn iter(&self) -> Iter {
        Iter {
            bits: self,
            start: 0,
            end: self.len,
        }
    }
}

impl_bit_rank_select!(BitVector);

impl fmt::Binary for BitVector {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for bit in self {
            formatter.write_str(if bit { "1" } else { "0" })?;
        }

        Ok(())
    }
}

impl SpaceUsage for BitVector {
    #[inline]
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        self.words.heap_bytes() + self.block_ranks.heap_bytes()
    }
}

/// Iterator over the bits of a `BitVector`.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    bits: &'a BitVector,
    start: u64,
    end: u64,
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.start == self.end {
            return None;
        }
        let bit = self.bits.bit(self.start);
        self.start += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.start) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<bool> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        Some(self.bits.bit(self.end))
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
