//! Errors returned by bit vector queries.

use thiserror::Error;

/// The ways a query on a [`BitVector`](../bit_vector/struct.BitVector.html)
/// can fail.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum Error {
    /// The position is not less than the length of the bit vector.
    #[error("index {index} out of range for bit vector of length {len}")]
    OutOfRange {
        /// The rejected position.
        index: u64,
        /// The length of the bit vector.
        len: u64,
    },

    /// A select asked for a rank at or beyond the number of occurrences
    /// of the requested bit value.
    #[error("no bit with value {value} has rank {rank}")]
    NotExist {
        /// The requested rank.
        rank: u64,
        /// The requested bit value.
        value: bool,
    },
}

/// Result type for bit vector queries.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn out_of_range(index: u64, len: u64) -> Self {
        Error::OutOfRange { index, len }
    }

    pub(crate) fn not_exist(rank: u64, value: bool) -> Self {
        Error::NotExist { rank, value }
    }
}
