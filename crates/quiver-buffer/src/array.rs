//! The on-heap buffer variant.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use quiver_core::preview::write_preview;
use quiver_core::{BufferError, BufferKind, VectorBuffer};

use crate::region;

/// A [`VectorBuffer`] backed by a `Vec<f32>`.
///
/// The vector is sized exactly at construction (`len == capacity`) and is
/// never resized afterwards, so the element region stays contiguous and
/// stable for the buffer's lifetime. Operation-for-operation
/// interchangeable with [`crate::OffHeapBuffer`]; equality and hashing
/// are byte-exact over the element region, identically across kinds.
pub struct ArrayBuffer {
    data: Vec<f32>,
}

impl ArrayBuffer {
    /// Allocate a buffer of `len` zero-filled elements.
    ///
    /// Returns [`BufferError::AllocationFailed`] if the allocator cannot
    /// satisfy the request. Never retried or shrunk to fit.
    pub fn zeroed(len: usize) -> Result<Self, BufferError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailed {
                requested: len.saturating_mul(mem::size_of::<f32>()),
            })?;
        data.resize(len, 0.0);
        Ok(Self { data })
    }

    /// Allocate a buffer holding a copy of `values`, in order.
    pub fn from_slice(values: &[f32]) -> Result<Self, BufferError> {
        let mut data = Vec::new();
        data.try_reserve_exact(values.len())
            .map_err(|_| BufferError::AllocationFailed {
                requested: values.len().saturating_mul(mem::size_of::<f32>()),
            })?;
        data.extend_from_slice(values);
        Ok(Self { data })
    }

    /// Allocate a buffer of `raw.len() / 4` elements and bitwise-copy
    /// `raw` into it.
    ///
    /// Returns [`BufferError::UnalignedByteLength`] if `raw.len()` is not
    /// a whole number of f32 elements. Byte order is native, matching
    /// [`VectorBuffer::as_bytes`].
    pub fn from_bytes(raw: &[u8]) -> Result<Self, BufferError> {
        if raw.len() % mem::size_of::<f32>() != 0 {
            return Err(BufferError::UnalignedByteLength { len: raw.len() });
        }
        let len = raw.len() / mem::size_of::<f32>();
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailed { requested: raw.len() })?;
        data.extend(
            raw.chunks_exact(mem::size_of::<f32>())
                .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])),
        );
        Ok(Self { data })
    }
}

impl VectorBuffer for ArrayBuffer {
    fn kind(&self) -> BufferKind {
        BufferKind::Array
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_slice(&self) -> &[f32] {
        &self.data
    }

    fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    fn as_bytes(&self) -> &[u8] {
        region::float_bytes(&self.data)
    }

    fn boxed_clone(&self) -> Box<dyn VectorBuffer> {
        Box::new(self.clone())
    }
}

impl Clone for ArrayBuffer {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl PartialEq for ArrayBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ArrayBuffer {}

impl Hash for ArrayBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl fmt::Debug for ArrayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("len", &self.len())
            .finish()
    }
}

impl fmt::Display for ArrayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_preview(f, self.as_slice())
    }
}
