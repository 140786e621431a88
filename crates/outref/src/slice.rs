//! Operations on write-only slices

use core::mem::{self, MaybeUninit};
use core::ptr::{self, NonNull};
use core::slice;

use crate::error::{OutRefError, Result};
use crate::out::OutRef;

impl<'a, T> OutRef<'a, [T]> {
    /// Forms an [`OutRef<'a, [T]>`](OutRef) over an initialized slice.
    #[inline(always)]
    #[must_use]
    pub fn from_slice(slice: &'a mut [T]) -> Self
    where
        T: Copy,
    {
        // SAFETY: a unique reference satisfies every requirement.
        unsafe { Self::from_raw(slice) }
    }

    /// Forms an [`OutRef<'a, [T]>`](OutRef) from an uninitialized slice.
    #[inline(always)]
    #[must_use]
    pub fn from_uninit_slice(slice: &'a mut [MaybeUninit<T>]) -> Self {
        let slice: *mut [T] = {
            let len = slice.len();
            let data = slice.as_mut_ptr().cast();
            ptr::slice_from_raw_parts_mut(data, len)
        };
        // SAFETY: derived from a unique reference of the same layout.
        unsafe { Self::from_raw(slice) }
    }

    /// Returns true if the slice has a length of 0.
    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the slice.
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        NonNull::len(self.data)
    }

    /// Returns an unsafe mutable pointer to the slice's buffer.
    #[inline(always)]
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr().cast()
    }

    /// Views the buffer as possibly-uninitialized memory.
    ///
    /// # Safety
    ///
    /// If this `OutRef` was formed over initialized memory, the caller must
    /// not write an uninitialized value through the returned slice.
    #[inline(always)]
    #[must_use]
    pub unsafe fn as_uninit(mut self) -> &'a mut [MaybeUninit<T>] {
        let len = self.len();
        let data = self.as_mut_ptr().cast::<MaybeUninit<T>>();
        // SAFETY: `MaybeUninit<T>` has the layout of `T`, and the buffer is
        // valid for `len` elements for `'a`.
        unsafe { slice::from_raw_parts_mut(data, len) }
    }

    /// Writes `val` into every element and returns the initialized slice.
    ///
    /// ```
    /// use outref::OutRef;
    ///
    /// let mut buf = [0_u16; 5];
    /// assert_eq!(OutRef::from_slice(&mut buf).fill(9), &[9; 5]);
    /// ```
    #[inline]
    pub fn fill(mut self, val: T) -> &'a mut [T]
    where
        T: Copy,
    {
        let len = self.len();
        let data = self.as_mut_ptr();
        // SAFETY: every write stays within `data[..len]`, and the slice is
        // fully initialized before it is formed. Copies never overlap:
        // the source is `data[..n]` and the destination starts at `n`.
        unsafe {
            if len > 0 {
                if mem::size_of::<T>() == 0 {
                    // zero-sized: nothing to write
                } else {
                    data.write(val);

                    let mut n = 1;
                    while n <= len / 2 {
                        ptr::copy_nonoverlapping(data, data.add(n), n);
                        n *= 2;
                    }

                    let count = len - n;
                    if count > 0 {
                        ptr::copy_nonoverlapping(data, data.add(n), count);
                    }
                }
            }
            slice::from_raw_parts_mut(data, len)
        }
    }

    /// Writes the values produced by `f`, front to back.
    ///
    /// If `f` panics, the elements already written are leaked.
    #[inline]
    pub fn fill_with<F>(self, mut f: F) -> &'a mut [T]
    where
        F: FnMut() -> T,
    {
        // SAFETY: only initialized values are written into the slots.
        let slots = unsafe { self.as_uninit() };
        for slot in slots.iter_mut() {
            *slot = MaybeUninit::new(f());
        }
        let len = slots.len();
        let data = slots.as_mut_ptr().cast::<T>();
        // SAFETY: all `len` slots were written above.
        unsafe { slice::from_raw_parts_mut(data, len) }
    }

    /// Copies `src` into the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the two slices have different lengths.
    #[inline]
    #[track_caller]
    pub fn copy_from_slice(self, src: &[T]) -> &'a mut [T]
    where
        T: Copy,
    {
        let len = self.len();
        match self.try_copy_from_slice(src) {
            Ok(init) => init,
            Err(_) => panic!(
                "source slice length ({}) does not match destination slice length ({})",
                src.len(),
                len
            ),
        }
    }

    /// Copies `src` into the buffer, failing on a length mismatch.
    #[inline]
    pub fn try_copy_from_slice(mut self, src: &[T]) -> Result<&'a mut [T]>
    where
        T: Copy,
    {
        let len = self.len();
        if src.len() != len {
            return Err(OutRefError::LengthMismatch {
                expected: len,
                actual: src.len(),
            });
        }
        let data = self.as_mut_ptr();
        // SAFETY: both sides hold `len` elements, and `src` is a shared
        // borrow so it cannot alias the unique destination.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), data, len);
            Ok(slice::from_raw_parts_mut(data, len))
        }
    }

    /// Divides the buffer into `[0, mid)` and `[mid, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > len`.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        match self.try_split_at(mid) {
            Ok(halves) => halves,
            Err(err) => panic!("{err}"),
        }
    }

    /// Divides the buffer into `[0, mid)` and `[mid, len)`, failing if
    /// `mid > len`.
    #[inline]
    pub fn try_split_at(mut self, mid: usize) -> Result<(Self, Self)> {
        let len = self.len();
        if mid > len {
            return Err(OutRefError::SplitOutOfBounds { mid, len });
        }
        let data = self.as_mut_ptr();
        // SAFETY: `mid <= len`, so both halves lie inside the original
        // buffer and do not overlap.
        unsafe {
            let left = ptr::slice_from_raw_parts_mut(data, mid);
            let right = ptr::slice_from_raw_parts_mut(data.add(mid), len - mid);
            Ok((Self::from_raw(left), Self::from_raw(right)))
        }
    }
}

impl<'a, T> From<&'a mut [MaybeUninit<T>]> for OutRef<'a, [T]> {
    #[inline(always)]
    fn from(slice: &'a mut [MaybeUninit<T>]) -> Self {
        Self::from_uninit_slice(slice)
    }
}
