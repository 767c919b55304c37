//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing a buffer.
///
/// Contract violations — out-of-range indices and out-of-range copy
/// ranges — are caller programming errors and panic instead of returning
/// a variant here (see the `# Panics` sections on
/// [`VectorBuffer`](crate::VectorBuffer)). The variants below cover the
/// conditions a correct caller can still hit at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The backing allocator could not satisfy the requested region size.
    ///
    /// Also raised when the requested element count overflows the maximum
    /// allocation size. Never retried or shrunk internally — callers decide
    /// whether to reattempt with a smaller request.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// A raw byte source's length is not a whole number of f32 elements.
    UnalignedByteLength {
        /// Length of the offending byte source.
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "buffer allocation failed: requested {requested} bytes")
            }
            Self::UnalignedByteLength { len } => {
                write!(
                    f,
                    "byte source length {len} is not a multiple of 4 (f32 element size)"
                )
            }
        }
    }
}

impl Error for BufferError {}
