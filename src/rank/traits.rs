use crate::errors::Result;

/// Interface for types that support rank queries.
///
/// Associated type `Over` gives the type that we can query about. For
/// example, `RankSupport<Over=bool>` lets us rank `0` and `1`.
pub trait RankSupport {
    /// The type of value to rank.
    type Over: Copy;

    /// Returns the rank of the given value at a given position.
    ///
    /// This is the number of occurrences of `value` strictly before that
    /// position.
    ///
    /// # Errors
    ///
    /// Fails with `OutOfRange` if `position >= self.limit()`.
    fn rank(&self, position: u64, value: Self::Over) -> Result<u64>;

    /// The size of the vector being ranked.
    fn limit(&self) -> u64;
}

/// Convenience trait for `RankSupport` over `bool`.
pub trait BitRankSupport: RankSupport<Over = bool> {
    /// Returns the rank of 1 at the given position.
    ///
    /// This is the number of 1s strictly before that position.
    fn rank1(&self, position: u64) -> Result<u64>;

    /// Returns the rank of 0 at the given position.
    ///
    /// This is the number of 0s strictly before that position.
    fn rank0(&self, position: u64) -> Result<u64> {
        self.rank1(position).map(|ones| position - ones)
    }
}
