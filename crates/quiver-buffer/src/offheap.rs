//! The off-heap buffer variant.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use quiver_core::preview::write_preview;
use quiver_core::{BufferError, BufferKind, VectorBuffer};

use crate::region::RawRegion;

/// A [`VectorBuffer`] backed by an exclusively-owned raw memory region.
///
/// The region is allocated outside the `Vec` path, 4-byte aligned, sized
/// to exactly `len * 4` bytes, and released deterministically when the
/// buffer is dropped — there is no explicit free in the contract. This is
/// the variant index builders hand to bulk numeric kernels; the kernels
/// read it through [`VectorBuffer::as_slice`], whose validity is the
/// borrow's lifetime.
///
/// Equality and hashing are byte-exact over the region (see
/// [`VectorBuffer::content_eq`]), so buffers can be deduplicated or
/// indexed by content.
pub struct OffHeapBuffer {
    region: RawRegion,
}

impl OffHeapBuffer {
    /// Allocate a buffer of `len` zero-filled elements.
    ///
    /// Returns [`BufferError::AllocationFailed`] if the backing allocator
    /// cannot satisfy `len * 4` bytes, or if that byte size overflows the
    /// maximum allocation size. The failure is surfaced as-is — never
    /// retried or shrunk to fit.
    pub fn zeroed(len: usize) -> Result<Self, BufferError> {
        Ok(Self {
            region: RawRegion::alloc_zeroed(len)?,
        })
    }

    /// Allocate a buffer holding a copy of `values`, in order.
    pub fn from_slice(values: &[f32]) -> Result<Self, BufferError> {
        Ok(Self {
            region: RawRegion::from_slice(values)?,
        })
    }

    /// Allocate a buffer of `raw.len() / 4` elements and bitwise-copy
    /// `raw` into it.
    ///
    /// Returns [`BufferError::UnalignedByteLength`] if `raw.len()` is not
    /// a whole number of f32 elements. Byte order is native — this is the
    /// reconstruction half of the persistence round-trip through
    /// [`VectorBuffer::as_bytes`].
    pub fn from_bytes(raw: &[u8]) -> Result<Self, BufferError> {
        if raw.len() % mem::size_of::<f32>() != 0 {
            return Err(BufferError::UnalignedByteLength { len: raw.len() });
        }
        Ok(Self {
            region: RawRegion::from_bytes(raw)?,
        })
    }
}

impl VectorBuffer for OffHeapBuffer {
    fn kind(&self) -> BufferKind {
        BufferKind::OffHeap
    }

    fn len(&self) -> usize {
        self.region.len()
    }

    fn as_slice(&self) -> &[f32] {
        self.region.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [f32] {
        self.region.as_mut_slice()
    }

    fn as_bytes(&self) -> &[u8] {
        self.region.as_bytes()
    }

    fn boxed_clone(&self) -> Box<dyn VectorBuffer> {
        Box::new(self.clone())
    }
}

impl Clone for OffHeapBuffer {
    // Allocation failure during clone aborts, matching std container
    // semantics; the fallible paths are the constructors.
    fn clone(&self) -> Self {
        Self {
            region: self.region.duplicate(),
        }
    }
}

impl PartialEq for OffHeapBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for OffHeapBuffer {}

impl Hash for OffHeapBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl fmt::Debug for OffHeapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffHeapBuffer")
            .field("len", &self.len())
            .finish()
    }
}

impl fmt::Display for OffHeapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_preview(f, self.as_slice())
    }
}
