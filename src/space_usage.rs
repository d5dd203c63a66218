//! A trait for computing space usage.

use std::mem;

/// Computes the space usage of an object.
///
/// We calculate the space usage as split into two portions, the heap
/// portion (returned by `heap_bytes`) and the stack portion (returned by
/// `stack_bytes`). The stack portion is the statically-known size for
/// every object of its type as allocated on the stack; the dynamic
/// portion is the additional heap allocation that may depend on
/// run-time factors.
///
/// For a bit vector the heap portion is the packed words plus the rank
/// index, so comparing it against `len / 8` bytes shows the overhead of
/// the index.
pub trait SpaceUsage: Sized {
    /// Computes the size of the receiver in bytes.
    ///
    /// This includes not just the immediate stack object, but any heap
    /// memory that it owns.
    ///
    /// The default implementation returns
    /// `Self::stack_bytes() + self.heap_bytes()`.
    #[inline]
    fn total_bytes(&self) -> usize {
        Self::stack_bytes() + self.heap_bytes()
    }

    /// Is the size of this type known statically?
    ///
    /// If this method returns true then `heap_bytes` should always
    /// return 0.
    fn is_stack_only() -> bool;

    /// Calculates the stack portion of the size of this type.
    ///
    /// The default implementation returns `std::mem::size_of::<Self>()`.
    #[inline]
    fn stack_bytes() -> usize {
        mem::size_of::<Self>()
    }

    /// Calculates the heap portion of the size of an object.
    ///
    /// This is the memory owned by the object, not including any portion
    /// of its size that is included in `stack_bytes`.
    fn heap_bytes(&self) -> usize;
}

impl_stack_only_space_usage!(bool);
impl_stack_only_space_usage!(u64);

impl<A: SpaceUsage> SpaceUsage for Vec<A> {
    #[inline]
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        let mut result = self.capacity() * A::stack_bytes();

        if !A::is_stack_only() {
            for each in self {
                result += each.heap_bytes();
            }
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn is_stack_only() {
        assert!(u64::is_stack_only());
        assert!(bool::is_stack_only());
        assert!(!Vec::<u64>::is_stack_only());
    }

    #[test]
    fn scalar_size() {
        assert_eq!(1, true.total_bytes());
        assert_eq!(8, 0u64.total_bytes());
        assert_eq!(0, 0u64.heap_bytes());
    }

    #[test]
    fn vec_size() {
        let v = Vec::<u64>::with_capacity(8);
        assert_eq!(8, v.capacity());
        assert_eq!(64, v.heap_bytes());
        assert_eq!(64 + size_of::<Vec<u64>>(), v.total_bytes());
    }

    #[test]
    fn vec_vec_size() {
        let v1 = Vec::<u64>::with_capacity(8);
        let v2 = Vec::<u64>::with_capacity(8);
        let w = vec![v1, v2];
        assert_eq!(2, w.capacity());
        assert_eq!(
            128 + 2 * size_of::<Vec<u64>>() + size_of::<Vec<Vec<u64>>>(),
            w.total_bytes()
        );
    }
}
