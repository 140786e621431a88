//! Writing into a `Vec`'s spare capacity

use alloc::vec::Vec;

use crate::error::{OutRefError, Result};
use crate::out::OutRef;

/// Returns a write-only view of `vec`'s spare capacity.
///
/// The length of `vec` is not changed; use [`append_with`] to grow it
/// over the elements written.
#[inline]
#[must_use]
pub fn spare_out<T>(vec: &mut Vec<T>) -> OutRef<'_, [T]> {
    OutRef::from_uninit_slice(vec.spare_capacity_mut())
}

/// Appends up to `additional` elements initialized by `f`.
///
/// `f` receives a write-only view of exactly `additional` elements of spare
/// capacity and returns the prefix it initialized. The vector grows by that
/// prefix, whose length is returned.
///
/// # Errors
///
/// Returns [`OutRefError::ForeignSlice`] if the returned slice does not
/// start at the lent buffer or is longer than it. The vector is left
/// unchanged in that case.
///
/// # Example
///
/// ```
/// let mut v = vec![1_u8, 2];
/// let added = outref::append_with(&mut v, 3, |out| out.fill(0)).unwrap();
/// assert_eq!(added, 3);
/// assert_eq!(v, [1, 2, 0, 0, 0]);
/// ```
pub fn append_with<T, F>(vec: &mut Vec<T>, additional: usize, f: F) -> Result<usize>
where
    F: for<'a> FnOnce(OutRef<'a, [T]>) -> &'a mut [T],
{
    vec.reserve(additional);
    let spare = &mut vec.spare_capacity_mut()[..additional];
    let start = spare.as_ptr().cast::<T>();

    let init = f(OutRef::from_uninit_slice(spare));
    if init.as_ptr() != start || init.len() > additional {
        return Err(OutRefError::ForeignSlice);
    }
    let added = init.len();

    // SAFETY: `init` is the first `added` elements of the spare capacity,
    // and only initializing operations can hand it back for `'a`.
    unsafe { vec.set_len(vec.len() + added) };
    Ok(added)
}
