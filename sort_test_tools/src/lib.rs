use std::cmp::Ordering;

/// A sort implementation under test or benchmark.
pub trait Sort {
    fn name() -> String;

    /// Longest input the test-suite feeds into this sort. Quadratic sorts override this to keep the
    /// suite fast.
    fn max_test_len() -> usize {
        usize::MAX
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Returns `true` if every adjacent pair satisfies `v[k] <= v[k + 1]`.
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by(v, |a, b| a.cmp(b))
}

/// Returns `true` if no adjacent pair compares as `Greater` under `compare`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

pub mod patterns;
pub mod test_types;
