//! Classification of buffer backing representations.

use std::fmt;

/// Which concrete representation backs a buffer.
///
/// Both kinds satisfy the identical [`VectorBuffer`](crate::VectorBuffer)
/// operation set and are interchangeable behind trait objects. The kind
/// matters to callers that care about allocation behaviour: `Array` lives
/// on the managed `Vec` path, `OffHeap` is a manually laid-out raw region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// Backed by a `Vec<f32>`, fixed-length after construction.
    Array,
    /// Backed by an exclusively-owned raw memory region with manual
    /// layout and RAII deallocation.
    OffHeap,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array => write!(f, "array"),
            Self::OffHeap => write!(f, "off-heap"),
        }
    }
}
