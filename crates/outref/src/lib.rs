//! # outref
//!
//! Write-only references.
//!
//! An [`OutRef<'a, T>`](OutRef) points at memory that may be written but is
//! never read through the reference. That makes it usable over both
//! initialized `Copy` data and uninitialized memory such as
//! [`MaybeUninit<T>`](core::mem::MaybeUninit) or a `Vec`'s spare capacity.
//! Writing through it hands back an ordinary `&'a mut T` to the value that
//! is now initialized.
//!
//! ## Layout
//!
//! - **out**: the [`OutRef`] type and its single-value operations
//! - **slice**: operations on `OutRef<'a, [T]>` (fill, copy, split)
//! - **as_out**: the [`AsOut`] conversion trait
//! - **vec**: writing into a `Vec`'s spare capacity (feature `alloc`)
//! - **error**: [`OutRefError`] for the fallible operations
//!
//! ## Example
//!
//! ```
//! use core::mem::MaybeUninit;
//! use outref::OutRef;
//!
//! let mut buf = [MaybeUninit::<u32>::uninit(); 4];
//! let init: &mut [u32] = OutRef::from_uninit_slice(&mut buf).fill(7);
//! assert_eq!(init, &[7, 7, 7, 7]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod as_out;
pub mod error;
pub mod out;
pub mod slice;
#[cfg(feature = "alloc")]
pub mod vec;

// Re-export main types
pub use as_out::AsOut;
pub use error::{OutRefError, Result};
pub use out::OutRef;
#[cfg(feature = "alloc")]
pub use vec::{append_with, spare_out};

/// outref version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
