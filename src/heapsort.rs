//! Heapsort.

use core::cmp::Ordering;

use crate::hole::Hole;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// The slice is first arranged into a binary max-heap, then the maximum is repeatedly swapped to
/// the end of the shrinking heap.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(v, &mut |a: &T, b: &T| a.lt(b));
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
    heapsort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Build the heap in linear time. Nodes in `len / 2..` have no children.
    for i in (0..len / 2).rev() {
        sift_down(v, i, is_less);
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, is_less);
    }
}

// This binary heap respects the invariant `parent >= child` over all of `v`, which is the active
// part of the heap.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(node < len);

    let v_base = v.as_mut_ptr();

    // SAFETY: `node` was checked above, and every `child` is checked against `len` before it is
    // accessed. The hole refills the vacant slot on every exit path.
    unsafe {
        let mut hole = Hole::take(v_base.add(node));

        loop {
            // Children of `node`.
            let mut child = 2 * node + 1;
            if child >= len {
                break;
            }

            // Choose the greater child.
            if child + 1 < len && is_less(&*v_base.add(child), &*v_base.add(child + 1)) {
                child += 1;
            }

            // Stop if the invariant holds at `node`.
            if !is_less(hole.value(), &*v_base.add(child)) {
                break;
            }

            // Move the greater child up into the gap, move one step down, and continue sifting.
            hole.fill_from(v_base.add(child));
            node = child;
        }
        // `hole` gets dropped and places the held value at `node`.
    }
}
