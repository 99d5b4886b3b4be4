//! Element types with properties plain integers lack.

use std::cell::Cell;
use std::cmp::Ordering;

/// Counts the comparisons it took part in. The count lives inside the element, so a sort that
/// compares a temporary copy and later discards it loses counts.
#[derive(Debug, Clone)]
pub struct Counted {
    key: i32,
    comparisons: Cell<u64>,
}

impl Counted {
    pub fn new(key: i32) -> Self {
        Self {
            key,
            comparisons: Cell::new(0),
        }
    }

    pub fn key(&self) -> i32 {
        self.key
    }

    /// Orders by key and bumps the count of both sides.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.comparisons.set(self.comparisons.get() + 1);
        other.comparisons.set(other.comparisons.get() + 1);

        self.key.cmp(&other.key)
    }

    /// Sum of the comparison counts in `v`. Twice the number of comparisons if none got lost.
    pub fn total(v: &[Counted]) -> u64 {
        v.iter().map(|elem| elem.comparisons.get()).sum()
    }
}

/// 1 KiB element ordered by its key. Every move is a large copy, which the merge buffer and the
/// gap guard have to get right.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Wide {
    key: i32,
    payload: [u8; 1020],
}

impl Wide {
    pub fn new(key: i32) -> Self {
        Self {
            key,
            payload: [key as u8; 1020],
        }
    }
}
