//! Top-down merge sort with a single auxiliary buffer.

use core::cmp::Ordering;
use core::mem::MaybeUninit;
use core::ptr;

/// Sorts the slice, preserving the order of equal elements.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case. It allocates one auxiliary buffer of `v.len()` elements for the duration of the
/// call.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice with a comparator function, preserving the order of equal elements.
///
/// See [`sort`]. If `compare` panics the slice still holds every element it held before, in
/// unspecified order, the buffer is released and the panic is propagated.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The buffer never holds initialized elements once a merge has returned, its length stays 0 so
    // dropping it only frees the allocation.
    let mut buf = Vec::<T>::with_capacity(len);
    let scratch = &mut buf.spare_capacity_mut()[..len];

    merge_sort_range(v, scratch, is_less);
}

/// Sorts `v` using `scratch`, which must be exactly as long as `v`.
fn merge_sort_range<T, F>(v: &mut [T], scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert_eq!(len, scratch.len());

    if len < 2 {
        return;
    }

    // Left half is `[0, center]`, right half `[center + 1, len)`.
    let center = (len - 1) / 2;
    let mid = center + 1;

    {
        let (v_left, v_right) = v.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_sort_range(v_left, scratch_left, is_less);
        merge_sort_range(v_right, scratch_right, is_less);
    }

    merge(v, mid, scratch, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` into `scratch`, and copies the result back
/// into `v`.
///
/// `v` is only written after all comparisons are done, so if `is_less` panics `v` is left exactly
/// as it was.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge<T, F>(v: &mut [T], mid: usize, scratch: &mut [MaybeUninit<T>], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(mid > 0 && mid < len && scratch.len() >= len);

    let v_base = v.as_mut_ptr();
    let dst_base = scratch.as_mut_ptr() as *mut T;

    // SAFETY: `left < mid`, `right < len` and `out < len` are maintained by the loop conditions,
    // the remainder copies stay within `[0, len)` of both regions, and `scratch` is a separate
    // allocation so the copies never overlap.
    unsafe {
        let mut left = 0;
        let mut right = mid;
        let mut out = 0;

        while left < mid && right < len {
            // On a tie take from the left half, that's what makes the sort stable.
            let src = if is_less(&*v_base.add(right), &*v_base.add(left)) {
                right += 1;
                right - 1
            } else {
                left += 1;
                left - 1
            };

            ptr::copy_nonoverlapping(v_base.add(src), dst_base.add(out), 1);
            out += 1;
        }

        // At most one of the two halves has elements left.
        let left_rem = mid - left;
        ptr::copy_nonoverlapping(v_base.add(left), dst_base.add(out), left_rem);
        out += left_rem;

        let right_rem = len - right;
        ptr::copy_nonoverlapping(v_base.add(right), dst_base.add(out), right_rem);
        out += right_rem;

        debug_assert_eq!(out, len);

        ptr::copy_nonoverlapping(dst_base, v_base, len);
    }
}
