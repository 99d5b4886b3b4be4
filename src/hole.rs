use core::mem::ManuallyDrop;
use core::ptr;

/// A value taken out of a slice, together with the slot it has to go back into.
///
/// When dropped, copies the held value into `dest`. Both the insertion shift and the heap sift-down
/// move elements around a single vacant slot, and this guard makes sure the slot is filled again
/// on every exit path, including a panicking comparison.
pub(crate) struct Hole<T> {
    value: ManuallyDrop<T>,
    dest: *mut T,
}

impl<T> Hole<T> {
    /// Reads the element at `src` out of the slice, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads and writes and point into a slice that is not accessed
    /// through any other reference while the hole is alive.
    #[inline(always)]
    pub(crate) unsafe fn take(src: *mut T) -> Self {
        // SAFETY: See function safety.
        unsafe {
            Self {
                value: ManuallyDrop::new(ptr::read(src)),
                dest: src,
            }
        }
    }

    /// The held value. Comparisons must be done against this and not against a stale copy left in
    /// the slice, because this is the value that will be written back.
    #[inline(always)]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    /// Moves the element at `src` into the current vacant slot, `src` becomes the new vacant slot.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads, point into the same slice as the hole and not be the
    /// current vacant slot.
    #[inline(always)]
    pub(crate) unsafe fn fill_from(&mut self, src: *mut T) {
        // SAFETY: See function safety.
        unsafe {
            ptr::copy_nonoverlapping(src, self.dest, 1);
        }
        self.dest = src;
    }
}

impl<T> Drop for Hole<T> {
    fn drop(&mut self) {
        // SAFETY: `dest` is the vacant slot, which by construction holds a stale bitwise copy that
        // is overwritten without being dropped.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.dest, 1);
        }
    }
}
