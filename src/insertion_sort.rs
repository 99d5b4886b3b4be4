//! Insertion sort.
//!
//! Grows a sorted prefix one element at a time, shifting larger elements one slot to the right
//! until the held element fits. Stable, in-place, *O*(*n*^2) worst-case and *O*(*n*) on already
//! sorted input.

use core::cmp::Ordering;

use crate::hole::Hole;

/// Sorts the slice, preserving the order of equal elements.
///
/// This sort is stable, in-place (i.e., does not allocate), and *O*(*n*^2) worst-case. On input
/// that is already sorted it performs exactly `n - 1` comparisons.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, preserving the order of equal elements.
///
/// See [`sort`]. If `compare` panics the slice still holds every element it held before, in
/// unspecified order, and the panic is propagated.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts all of `v`. Also used by quicksort to finish off small sub-slices.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Shift each element of the unsorted region v[i..] as far left as is needed to make v sorted.
    for i in 1..v.len() {
        // SAFETY: `i >= 1`, so the sub-slice has at least 2 elements.
        unsafe {
            insert_tail(&mut v[..=i], is_less);
        }
    }
}

/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
///
/// # Safety
///
/// `v.len()` must be at least 2.
unsafe fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let arr_ptr = v.as_mut_ptr();
    let i = v.len() - 1;

    // SAFETY: All accessed indices are in `0..=i`, which the caller guarantees to be in bounds.
    unsafe {
        let i_ptr = arr_ptr.add(i);

        // Compare the element in place first. If it is already in position nothing gets moved and
        // the comparison was observed by the element that stays in the slice.
        if !is_less(&*i_ptr, &*i_ptr.sub(1)) {
            return;
        }

        // From here on all comparisons are done against the held value, which is what gets written
        // back. If `is_less` panics the hole is dropped and refills the vacant slot.
        let mut hole = Hole::take(i_ptr);
        hole.fill_from(i_ptr.sub(1));

        for j in (0..(i - 1)).rev() {
            let j_ptr = arr_ptr.add(j);
            if !is_less(hole.value(), &*j_ptr) {
                break;
            }

            hole.fill_from(j_ptr);
        }
        // `hole` gets dropped and thus copies the held value into the remaining vacant slot.
    }
}
