//! Quicksort with median-of-three pivot selection and an insertion sort cutoff.

use core::cmp::Ordering;

use crate::insertion_sort::insertion_sort;

/// Ranges where `high - low` is below this value, i.e. slices of at most this many elements, are
/// sorted with insertion sort.
///
/// Must stay above 2, median-of-three relies on `low`, `middle` and `high` being distinct.
pub const INSERTION_SORT_CUTOFF: usize = 10;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case. The pivot is the median of the first,
/// middle and last element, which makes sorted and reverse sorted input behave like the average
/// case. Recursion depth is bounded by log2(*n*) for all inputs.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// See [`sort`]. If `compare` panics the slice still holds every element it held before, in
/// unspecified order, and the panic is propagated.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();

        if len <= INSERTION_SORT_CUTOFF {
            insertion_sort(v, is_less);
            return;
        }

        choose_pivot(v, is_less);
        let mid = partition(v, is_less);

        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the shorter side only in order to minimize the total number of recursive
        // calls and consume less stack space.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Orders the first, middle and last element, then moves the median to `len - 2`, where it serves
/// as pivot. Afterwards `v[0] <= pivot <= v[len - 1]`, which bounds both partition scans.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn choose_pivot<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len > INSERTION_SORT_CUTOFF);

    let low = 0;
    let high = len - 1;
    let middle = (low + high) / 2;

    if is_less(&v[middle], &v[low]) {
        v.swap(low, middle);
    }
    if is_less(&v[high], &v[low]) {
        v.swap(low, high);
    }
    if is_less(&v[high], &v[middle]) {
        v.swap(middle, high);
    }

    v.swap(middle, high - 1);
}

/// Partitions `v` around the pivot at `v.len() - 2`.
///
/// Returns the final position of the pivot. Elements before it are not greater than the pivot,
/// elements after it are not less than the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let pivot_pos = len - 2;

    let mut i = 0;
    let mut j = pivot_pos;

    {
        // The pivot stays in place while scanning, everything left of it is `body`.
        let (body, rest) = v.split_at_mut(pivot_pos);
        let pivot = &rest[0];

        loop {
            // `i == pivot_pos` stands for reaching the pivot itself, which is never less than the
            // pivot. The explicit bounds only matter for comparators that are not a total order.
            i += 1;
            while i < pivot_pos && is_less(&body[i], pivot) {
                i += 1;
            }

            j -= 1;
            while j > 0 && is_less(pivot, &body[j]) {
                j -= 1;
            }

            if i >= j {
                break;
            }

            body.swap(i, j);
        }
    }

    // Restore the pivot.
    v.swap(i, pivot_pos);

    i
}
