use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::{heapsort, insertion_sort, merge_sort, quicksort};

/// One of the sorting algorithms of this crate, for picking an implementation at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    HeapSort,
    InsertionSort,
    MergeSort,
    QuickSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::HeapSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::HeapSort => "heapsort",
            Algorithm::InsertionSort => "insertion_sort",
            Algorithm::MergeSort => "merge_sort",
            Algorithm::QuickSort => "quicksort",
        }
    }

    /// Whether the algorithm keeps equal elements in their original relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::InsertionSort | Algorithm::MergeSort)
    }

    pub fn sort<T: Ord>(self, v: &mut [T]) {
        match self {
            Algorithm::HeapSort => heapsort::sort(v),
            Algorithm::InsertionSort => insertion_sort::sort(v),
            Algorithm::MergeSort => merge_sort::sort(v),
            Algorithm::QuickSort => quicksort::sort(v),
        }
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::HeapSort => heapsort::sort_by(v, compare),
            Algorithm::InsertionSort => insertion_sort::sort_by(v, compare),
            Algorithm::MergeSort => merge_sort::sort_by(v, compare),
            Algorithm::QuickSort => quicksort::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names none of the [`Algorithm`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort algorithm '{}', expected one of: heapsort, insertion_sort, merge_sort, quicksort",
            self.name
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // CamelCase and dashed spellings are accepted too, eg. "MergeSort" or "quick-sort".
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");

        match normalized.as_str() {
            "heapsort" | "heap" => Ok(Algorithm::HeapSort),
            "insertionsort" | "insertion" => Ok(Algorithm::InsertionSort),
            "mergesort" | "merge" => Ok(Algorithm::MergeSort),
            "quicksort" | "quick" => Ok(Algorithm::QuickSort),
            _ => Err(ParseAlgorithmError { name: s.into() }),
        }
    }
}
