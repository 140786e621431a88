//! Error types for fallible writes

use thiserror::Error;

/// Errors returned by the non-panicking `OutRef` operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutRefError {
    /// Source and destination slices differ in length
    #[error("Length mismatch: destination holds {expected} elements, source has {actual}")]
    LengthMismatch {
        /// Length of the destination
        expected: usize,
        /// Length of the source
        actual: usize,
    },

    /// Split point past the end of the slice
    #[error("Split index {mid} out of bounds for slice of length {len}")]
    SplitOutOfBounds {
        /// Requested split index
        mid: usize,
        /// Length of the slice being split
        len: usize,
    },

    /// A slice handed back as "initialized" is not a prefix of the buffer
    /// that was lent out
    #[error("Initialized slice is not a prefix of the lent spare capacity")]
    ForeignSlice,
}

/// Result type alias for outref operations
pub type Result<T> = core::result::Result<T, OutRefError>;
