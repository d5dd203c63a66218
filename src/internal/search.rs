use num_traits::PrimInt;

/// Averages two `PrimInt`s without overflowing.
pub fn average<P: PrimInt>(x: P, y: P) -> P {
    let almost_average = (x >> 1) + (y >> 1);
    let extra_bit = ((x & P::one()) + (y & P::one())) >> 1;

    almost_average + extra_bit
}

/// Finds the largest `d: D` in the interval `start .. limit` such that
/// `f(d) <= value`; requires that `f` be monotonically non-decreasing and
/// that `f(start) <= value`.
///
/// Only calls `f` on the open interval `start + 1 .. limit`, so `f(start)`
/// is assumed rather than checked. Returns `start` when `limit <= start + 1`.
pub fn last_not_above<D, R, F>(start: D, limit: D, value: R, f: F) -> D
where
    D: PrimInt,
    R: Ord,
    F: Fn(D) -> R,
{
    let mut low = start;
    let mut high = limit;

    while high > low && high - low > D::one() {
        let mid = average(low, high);

        if f(mid) > value {
            high = mid;
        } else {
            low = mid;
        }
    }

    low
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn avg_2_4() {
        assert_eq!(3, average(2, 4));
    }

    #[test]
    fn avg_2_5() {
        assert_eq!(3, average(2, 5));
    }

    #[test]
    fn avg_3_4() {
        assert_eq!(3, average(3, 4));
    }

    #[test]
    fn avg_3_5() {
        assert_eq!(4, average(3, 5));
    }

    #[test]
    fn avg_big() {
        let big: u64 = !0;
        assert_eq!(big - 1, average(big, big - 1));
        assert_eq!(big - 1, average(big, big - 2));
        assert_eq!(big - 1, average(big - 1, big - 1));
        assert_eq!(big - 2, average(big - 2, big - 1));
        assert_eq!(big - 2, average(big - 2, big - 2));
        assert_eq!(big - 2, average(big - 1, big - 3));
    }

    fn search_slice(value: usize, slice: &[usize]) -> usize {
        last_not_above(0, slice.len(), value, |index| slice[index])
    }

    const MAX_LEN: usize = 32;

    #[test]
    fn search_step() {
        let mut vec = Vec::<usize>::with_capacity(MAX_LEN);

        for len in 1..MAX_LEN + 1 {
            for result in 0..len {
                vec.clear();
                for _ in 0..result + 1 {
                    vec.push(0);
                }
                for _ in result + 1..len {
                    vec.push(1);
                }
                assert_eq!(result, search_slice(0, &vec));
            }
        }
    }

    #[test]
    fn search_iota() {
        let mut vec = Vec::<usize>::with_capacity(MAX_LEN);

        for len in 1..MAX_LEN + 1 {
            vec.clear();
            for i in 0..len {
                vec.push(i);
            }

            for i in 0..len {
                assert_eq!(i, search_slice(i, &vec));
            }

            assert_eq!(len - 1, search_slice(len + 5, &vec));
        }
    }

    #[test]
    fn search_plateaus() {
        // Each value repeats three times; the search lands on the last copy.
        let vec: Vec<usize> = (0..30).map(|i| i / 3).collect();
        for value in 0..10 {
            assert_eq!(3 * value + 2, search_slice(value, &vec));
        }
    }

    #[test]
    fn search_skips_start() {
        let calls = Cell::new(0);
        let found = last_not_above(0u64, 1, 0u64, |_| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(0, found);
        assert_eq!(0, calls.get());
    }
}
