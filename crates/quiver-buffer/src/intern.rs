//! Content-addressed interning of vector contents.

use std::hash::{Hash, Hasher};

use indexmap::{Equivalent, IndexSet};
use quiver_core::{BufferError, BufferId, VectorBuffer};

use crate::array::ArrayBuffer;
use crate::region;

/// Lookup key over raw content bytes, hash-compatible with
/// [`ArrayBuffer`]'s byte-exact `Hash`/`Eq`.
struct ContentKey<'a>(&'a [u8]);

impl Hash for ContentKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.0);
    }
}

impl Equivalent<ArrayBuffer> for ContentKey<'_> {
    fn equivalent(&self, key: &ArrayBuffer) -> bool {
        self.0 == key.as_bytes()
    }
}

/// A content-addressed pool of vector contents.
///
/// Interning equal content returns the same [`BufferId`] regardless of
/// the source buffer's kind; distinct content receives the next dense id.
/// Ids are stable for the lifetime of the pool. Content identity is
/// byte-exact, so `-0.0` and `0.0` intern separately while equal NaN bit
/// patterns coalesce.
///
/// Lookups for already-interned content allocate nothing; the first sight
/// of a content copies it into a pool-owned [`ArrayBuffer`].
pub struct InternPool {
    buffers: IndexSet<ArrayBuffer>,
}

impl InternPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            buffers: IndexSet::new(),
        }
    }

    /// Intern the contents of `buffer`, of any kind.
    pub fn intern(&mut self, buffer: &dyn VectorBuffer) -> Result<BufferId, BufferError> {
        self.intern_slice(buffer.as_slice())
    }

    /// Intern raw contents.
    pub fn intern_slice(&mut self, values: &[f32]) -> Result<BufferId, BufferError> {
        let key = ContentKey(region::float_bytes(values));
        if let Some(index) = self.buffers.get_index_of(&key) {
            return Ok(BufferId(index as u32));
        }
        let buffer = ArrayBuffer::from_slice(values)?;
        let (index, _inserted) = self.buffers.insert_full(buffer);
        Ok(BufferId(index as u32))
    }

    /// Look up interned content by id.
    pub fn get(&self, id: BufferId) -> Option<&ArrayBuffer> {
        self.buffers.get_index(id.0 as usize)
    }

    /// Number of distinct contents interned.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Whether the pool holds no contents.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Total element-region bytes held by the pool.
    pub fn memory_bytes(&self) -> usize {
        self.buffers.iter().map(|b| b.memory_bytes()).sum()
    }
}

impl Default for InternPool {
    fn default() -> Self {
        Self::new()
    }
}
