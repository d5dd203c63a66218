use crate::errors::Result;

/// Supports selecting for 1 bits.
pub trait Select1Support {
    /// Returns the position of the 1 bit preceded by exactly `index` 1s.
    fn select1(&self, index: u64) -> Result<u64>;
}

/// Supports selecting for 0 bits.
pub trait Select0Support {
    /// Returns the position of the 0 bit preceded by exactly `index` 0s.
    fn select0(&self, index: u64) -> Result<u64>;
}

/// Supports select queries over associated type `Over`.
pub trait SelectSupport {
    /// The type of value that we can search for.
    type Over: Copy;

    /// Returns the position of the `index`th occurrence of `value`,
    /// counting from zero.
    ///
    /// # Errors
    ///
    /// Fails with `NotExist` if there are `index` or fewer occurrences
    /// of `value`.
    fn select(&self, index: u64, value: Self::Over) -> Result<u64>;
}
