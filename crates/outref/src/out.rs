//! The write-only reference type and its single-value operations

use core::fmt;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr::NonNull;

/// A write-only reference.
///
/// The pointee is never read through an `OutRef`, so it may start out
/// uninitialized. Safe constructors over initialized memory require
/// `T: Copy`: overwriting such a value never skips a destructor.
///
/// # Example
///
/// ```
/// use core::mem::MaybeUninit;
/// use outref::OutRef;
///
/// let mut slot = MaybeUninit::<String>::uninit();
/// let s: &mut String = OutRef::from_uninit(&mut slot).write(String::from("hi"));
/// s.push('!');
/// assert_eq!(s, "hi!");
/// # unsafe { slot.assume_init_drop() };
/// ```
#[repr(transparent)]
pub struct OutRef<'a, T: ?Sized> {
    pub(crate) data: NonNull<T>,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: an `OutRef` is a unique write handle, like `&mut T`.
unsafe impl<T: ?Sized + Send> Send for OutRef<'_, T> {}
// SAFETY: shared access to an `OutRef` grants no access to the pointee.
unsafe impl<T: ?Sized + Sync> Sync for OutRef<'_, T> {}

impl<'a, T: ?Sized> OutRef<'a, T> {
    /// Forms an [`OutRef<'a, T>`](OutRef) from a raw pointer.
    ///
    /// # Safety
    ///
    /// * `data` must be non-null.
    /// * `data` must be valid for writes for `'a`.
    /// * `data` must be properly aligned.
    /// * No other reference may access the pointee during `'a`.
    #[inline(always)]
    #[must_use]
    pub unsafe fn from_raw(data: *mut T) -> Self {
        Self {
            // SAFETY: the caller guarantees `data` is non-null.
            data: unsafe { NonNull::new_unchecked(data) },
            _marker: PhantomData,
        }
    }

    /// Reborrows for a shorter lifetime, leaving `self` usable afterwards.
    #[inline(always)]
    #[must_use]
    pub fn reborrow(&mut self) -> OutRef<'_, T> {
        OutRef {
            data: self.data,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> OutRef<'a, T> {
    /// Forms an [`OutRef<'a, T>`](OutRef) over an initialized value.
    #[inline(always)]
    #[must_use]
    pub fn from_mut(data: &'a mut T) -> Self
    where
        T: Copy,
    {
        // SAFETY: a unique reference satisfies every requirement.
        unsafe { Self::from_raw(data) }
    }

    /// Forms an [`OutRef<'a, T>`](OutRef) from an uninitialized value.
    #[inline(always)]
    #[must_use]
    pub fn from_uninit(data: &'a mut MaybeUninit<T>) -> Self {
        let data: *mut T = MaybeUninit::as_mut_ptr(data);
        // SAFETY: derived from a unique reference of the same layout.
        unsafe { Self::from_raw(data) }
    }

    /// Returns an unsafe mutable pointer to the value.
    #[inline(always)]
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Writes `val` and returns a reference to the initialized value.
    ///
    /// The previous contents are overwritten without being dropped.
    #[inline(always)]
    pub fn write(self, val: T) -> &'a mut T {
        let ptr = self.data.as_ptr();
        // SAFETY: `ptr` is valid for writes for `'a` and is initialized
        // right before the reference is formed.
        unsafe {
            ptr.write(val);
            &mut *ptr
        }
    }

    /// Views the pointee as possibly-uninitialized memory.
    ///
    /// # Safety
    ///
    /// If this `OutRef` was formed over initialized memory, the caller must
    /// not write an uninitialized value through the returned reference.
    #[inline(always)]
    #[must_use]
    pub unsafe fn as_uninit(self) -> &'a mut MaybeUninit<T> {
        // SAFETY: `MaybeUninit<T>` has the layout of `T`, and the pointer is
        // valid for `'a`.
        unsafe { &mut *self.data.as_ptr().cast::<MaybeUninit<T>>() }
    }
}

impl<'a, T> From<&'a mut MaybeUninit<T>> for OutRef<'a, T> {
    #[inline(always)]
    fn from(data: &'a mut MaybeUninit<T>) -> Self {
        Self::from_uninit(data)
    }
}

impl<T: ?Sized> fmt::Debug for OutRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The pointee may be uninitialized; only the address is shown.
        f.debug_struct("OutRef").field("data", &self.data).finish()
    }
}
