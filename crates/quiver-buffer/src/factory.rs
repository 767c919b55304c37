//! Runtime-kind construction of buffers.
//!
//! Callers that pick a representation from configuration rather than at
//! compile time construct through these functions and hold the result as
//! `Box<dyn VectorBuffer>`.

use quiver_core::{BufferError, BufferKind, VectorBuffer};

use crate::{ArrayBuffer, OffHeapBuffer};

/// Allocate a zero-filled buffer of `len` elements of the given kind.
pub fn zeroed(kind: BufferKind, len: usize) -> Result<Box<dyn VectorBuffer>, BufferError> {
    match kind {
        BufferKind::Array => Ok(Box::new(ArrayBuffer::zeroed(len)?)),
        BufferKind::OffHeap => Ok(Box::new(OffHeapBuffer::zeroed(len)?)),
    }
}

/// Allocate a buffer of the given kind holding a copy of `values`.
pub fn from_slice(
    kind: BufferKind,
    values: &[f32],
) -> Result<Box<dyn VectorBuffer>, BufferError> {
    match kind {
        BufferKind::Array => Ok(Box::new(ArrayBuffer::from_slice(values)?)),
        BufferKind::OffHeap => Ok(Box::new(OffHeapBuffer::from_slice(values)?)),
    }
}

/// Allocate a buffer of the given kind from raw bytes.
///
/// `raw.len()` must be a multiple of 4; otherwise
/// [`BufferError::UnalignedByteLength`] is returned.
pub fn from_bytes(kind: BufferKind, raw: &[u8]) -> Result<Box<dyn VectorBuffer>, BufferError> {
    match kind {
        BufferKind::Array => Ok(Box::new(ArrayBuffer::from_bytes(raw)?)),
        BufferKind::OffHeap => Ok(Box::new(OffHeapBuffer::from_bytes(raw)?)),
    }
}
