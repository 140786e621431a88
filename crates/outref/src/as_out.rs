//! Conversion into write-only references

use core::mem::MaybeUninit;

use crate::out::OutRef;

/// Borrows a place as an [`OutRef`].
///
/// Initialized places qualify only when their elements are `Copy`.
///
/// # Example
///
/// ```
/// use core::mem::MaybeUninit;
/// use outref::{AsOut, OutRef};
///
/// let mut buf = [MaybeUninit::<u8>::uninit(); 3];
/// let out: OutRef<'_, [u8]> = buf.as_out();
/// assert_eq!(out.copy_from_slice(b"abc"), b"abc");
/// ```
pub trait AsOut<T: ?Sized> {
    /// Returns a write-only reference to `self`.
    fn as_out(&mut self) -> OutRef<'_, T>;
}

impl<T: Copy> AsOut<T> for T {
    #[inline(always)]
    fn as_out(&mut self) -> OutRef<'_, T> {
        OutRef::from_mut(self)
    }
}

impl<T> AsOut<T> for MaybeUninit<T> {
    #[inline(always)]
    fn as_out(&mut self) -> OutRef<'_, T> {
        OutRef::from_uninit(self)
    }
}

impl<T: Copy> AsOut<[T]> for [T] {
    #[inline(always)]
    fn as_out(&mut self) -> OutRef<'_, [T]> {
        OutRef::from_slice(self)
    }
}

impl<T> AsOut<[T]> for [MaybeUninit<T>] {
    #[inline(always)]
    fn as_out(&mut self) -> OutRef<'_, [T]> {
        OutRef::from_uninit_slice(self)
    }
}

impl<T: Copy, const N: usize> AsOut<[T]> for [T; N] {
    #[inline(always)]
    fn as_out(&mut self) -> OutRef<'_, [T]> {
        OutRef::from_slice(self)
    }
}

impl<T, const N: usize> AsOut<[T]> for [MaybeUninit<T>; N] {
    #[inline(always)]
    fn as_out(&mut self) -> OutRef<'_, [T]> {
        OutRef::from_uninit_slice(self)
    }
}
