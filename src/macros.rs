//! Macros for export.

/// Implements `SpaceUsage` for a stack-only (`Copy`) type.
///
/// # Example
///
/// ```
/// # #[macro_use] extern crate bitrank;
/// use std::mem;
/// use bitrank::SpaceUsage;
///
/// # #[allow(dead_code)]
/// struct Span { start: u64, end: u64 }
///
/// impl_stack_only_space_usage!(Span);
///
/// fn main() {
///     let span = Span { start: 0, end: 64 };
///     assert_eq!(span.total_bytes(), mem::size_of::<Span>());
/// }
/// ```
#[macro_export]
macro_rules! impl_stack_only_space_usage {
    ( $t:ty ) => {
        impl $crate::SpaceUsage for $t {
            #[inline]
            fn is_stack_only() -> bool {
                true
            }
            #[inline]
            fn heap_bytes(&self) -> usize {
                0
            }
        }
    };
}

/// Implements the `bool`-valued rank and select traits for a type with
/// inherent `rank1`, `select0` and `select1` methods returning
/// `crate::Result<u64>`.
macro_rules! impl_bit_rank_select {
    ( $t:ty ) => {
        impl $crate::rank::RankSupport for $t {
            type Over = bool;

            fn rank(&self, position: u64, value: bool) -> $crate::Result<u64> {
                <$t>::rank(self, position, value)
            }

            fn limit(&self) -> u64 {
                self.len()
            }
        }

        impl $crate::rank::BitRankSupport for $t {
            fn rank1(&self, position: u64) -> $crate::Result<u64> {
                <$t>::rank1(self, position)
            }
        }

        impl $crate::select::SelectSupport for $t {
            type Over = bool;

            fn select(&self, index: u64, value: bool) -> $crate::Result<u64> {
                <$t>::select(self, index, value)
            }
        }

        impl $crate::select::Select1Support for $t {
            fn select1(&self, index: u64) -> $crate::Result<u64> {
                <$t>::select1(self, index)
            }
        }

        impl $crate::select::Select0Support for $t {
            fn select0(&self, index: u64) -> $crate::Result<u64> {
                <$t>::select0(self, index)
            }
        }
    };
}
