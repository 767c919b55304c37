//! The [`VectorBuffer`] capability trait.
//!
//! Every buffer representation — on-heap or off-heap — satisfies this one
//! operation set, and consumers (distance kernels, index builders, the
//! persistence layer) program against it without knowing the concrete
//! kind. Bulk operations are defined once here over the slice and byte
//! views, so every kind combination behaves identically: there is no
//! same-kind fast path to miss and no byte reinterpretation across
//! representations.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::mem;

use crate::kind::BufferKind;

/// A fixed-length, contiguous store of f32 elements.
///
/// The length is set at construction and immutable thereafter — buffers
/// never grow or shrink. The physical layout is exactly `len() * 4` bytes,
/// 4-byte aligned, with no header and no padding between elements; that
/// layout is the implicit wire contract the persistence layer relies on
/// for byte-exact round-trips.
///
/// # Concurrency
///
/// A buffer is a passive value with no internal locking. Concurrent reads
/// are safe; any mutation requires exclusive access, which Rust's `&mut`
/// rules enforce naturally. Bulk copies are a single step with respect to
/// their own ranges but are not atomic with respect to other threads.
pub trait VectorBuffer {
    /// Which concrete representation backs this buffer.
    fn kind(&self) -> BufferKind;

    /// The fixed element count. O(1).
    fn len(&self) -> usize;

    /// View the elements as a flat f32 slice.
    ///
    /// This is the bulk-access surface for numeric kernels: it carries no
    /// per-element bounds checks and its validity is exactly the borrow's
    /// lifetime.
    fn as_slice(&self) -> &[f32];

    /// View the elements as a mutable flat f32 slice.
    fn as_mut_slice(&mut self) -> &mut [f32];

    /// View the region's raw bytes: exactly `len() * 4` bytes in native
    /// endianness, no padding.
    ///
    /// Equality, hashing, and persistence are all defined over this view.
    fn as_bytes(&self) -> &[u8];

    /// Allocate an independently-owned bitwise duplicate of the same
    /// concrete kind.
    ///
    /// After cloning, the two buffers share no backing memory.
    fn boxed_clone(&self) -> Box<dyn VectorBuffer>;

    /// Whether the buffer holds zero elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the element region in bytes: exactly `len() * 4`.
    ///
    /// Pure function of the length — never touches the region. Used by
    /// callers for memory accounting.
    fn memory_bytes(&self) -> usize {
        self.len() * mem::size_of::<f32>()
    }

    /// Byte offset of element `index` within the region: exactly
    /// `index * 4`.
    ///
    /// `index == len()` is permitted as an exclusive upper bound.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    fn byte_offset(&self, index: usize) -> usize {
        assert!(
            index <= self.len(),
            "byte_offset: index {index} out of range for length {}",
            self.len()
        );
        index * mem::size_of::<f32>()
    }

    /// Read the element at `index`. O(1), no allocation.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn get(&self, index: usize) -> f32 {
        self.as_slice()[index]
    }

    /// Overwrite the element at `index`. O(1), no allocation.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn set(&mut self, index: usize, value: f32) {
        self.as_mut_slice()[index] = value;
    }

    /// Overwrite the entire region with zero bytes in one bulk fill.
    ///
    /// IEEE-754 zero is all-zero bits, so afterwards every element reads
    /// as `0.0`. Idempotent.
    fn zero(&mut self) {
        self.as_mut_slice().fill(0.0);
    }

    /// Copy `count` elements from `src` starting at `src_offset` into this
    /// buffer starting at `dest_offset`.
    ///
    /// Works across any kind combination as a single bulk copy. Source and
    /// destination cannot alias: `&mut self` plus a shared `src` borrow
    /// makes a same-buffer call unrepresentable. For ranges within one
    /// buffer use [`VectorBuffer::copy_within`].
    ///
    /// # Panics
    ///
    /// Panics if `src_offset + count > src.len()` or
    /// `dest_offset + count > self.len()`.
    fn copy_from(
        &mut self,
        src: &dyn VectorBuffer,
        src_offset: usize,
        dest_offset: usize,
        count: usize,
    ) {
        let src_len = src.len();
        let dest_len = self.len();
        assert!(
            src_offset <= src_len && count <= src_len - src_offset,
            "copy_from: src_offset {src_offset} + count {count} exceeds source length {src_len}"
        );
        assert!(
            dest_offset <= dest_len && count <= dest_len - dest_offset,
            "copy_from: dest_offset {dest_offset} + count {count} exceeds destination length {dest_len}"
        );
        self.as_mut_slice()[dest_offset..dest_offset + count]
            .copy_from_slice(&src.as_slice()[src_offset..src_offset + count]);
    }

    /// Copy `count` elements within this buffer, from `src_offset` to
    /// `dest_offset`, with overlap-safe (memmove) semantics.
    ///
    /// # Panics
    ///
    /// Panics if either range exceeds `len()`.
    fn copy_within(&mut self, src_offset: usize, dest_offset: usize, count: usize) {
        let len = self.len();
        assert!(
            src_offset <= len && count <= len - src_offset,
            "copy_within: src_offset {src_offset} + count {count} exceeds length {len}"
        );
        assert!(
            dest_offset <= len && count <= len - dest_offset,
            "copy_within: dest_offset {dest_offset} + count {count} exceeds length {len}"
        );
        self.as_mut_slice()
            .copy_within(src_offset..src_offset + count, dest_offset);
    }

    /// Byte-exact equality: equal length and zero byte-level mismatch.
    ///
    /// Deliberately not tolerance equality — `-0.0` differs from `0.0`,
    /// and a NaN equals itself bit-for-bit. Buffers of different kinds
    /// with identical content compare equal.
    fn content_eq(&self, other: &dyn VectorBuffer) -> bool {
        self.len() == other.len() && self.as_bytes() == other.as_bytes()
    }

    /// Hash of the full byte content, consistent with
    /// [`VectorBuffer::content_eq`]: equal content hashes equal,
    /// independent of kind.
    fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        hasher.write(self.as_bytes());
        hasher.finish()
    }
}
