//! Classic comparison sorts: heapsort, insertion sort, merge sort and quicksort.
//!
//! Every algorithm lives in its own module and exposes the same two entry points, `sort` for
//! `T: Ord` and `sort_by` for a user provided comparison. The algorithms are independent peers,
//! [`Algorithm`] allows picking one at runtime.
//!
//! All sorts are panic safe. If the comparison panics, the panic is propagated and the slice still
//! contains every element it held before the call, exactly once, in unspecified order. A
//! comparison that does not implement a total order never leads to out-of-bounds access, the
//! resulting order is unspecified.

mod algorithm;
mod hole;

pub mod heapsort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quicksort;

pub use algorithm::{Algorithm, ParseAlgorithmError};

/// Sorts `v` with [`heapsort::sort`].
#[inline]
pub fn heapsort<T: Ord>(v: &mut [T]) {
    heapsort::sort(v);
}

/// Sorts `v` with [`insertion_sort::sort`].
#[inline]
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort::sort(v);
}

/// Sorts `v` with [`merge_sort::sort`].
#[inline]
pub fn mergesort<T: Ord>(v: &mut [T]) {
    merge_sort::sort(v);
}

/// Sorts `v` with [`quicksort::sort`].
#[inline]
pub fn quicksort<T: Ord>(v: &mut [T]) {
    quicksort::sort(v);
}
