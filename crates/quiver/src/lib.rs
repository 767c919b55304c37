//! Quiver: fixed-length f32 vector storage for similarity-search engines.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Quiver sub-crates. For most users, adding `quiver` as a single
//! dependency is sufficient.
//!
//! A buffer holds a fixed number of f32 elements in a contiguous,
//! 4-byte-aligned region with no header and no padding. Two
//! interchangeable representations satisfy the same capability trait: an
//! on-heap [`prelude::ArrayBuffer`] and an off-heap
//! [`prelude::OffHeapBuffer`] whose region lives outside the `Vec`
//! allocator path and is released when the buffer drops.
//!
//! # Quick start
//!
//! ```rust
//! use quiver::prelude::*;
//!
//! // A query vector off-heap, a stored vector on-heap.
//! let mut query = OffHeapBuffer::from_slice(&[0.5, 1.5, 2.5, 3.5]).unwrap();
//! let stored = ArrayBuffer::from_slice(&[0.5, 1.5, 2.5, 3.5]).unwrap();
//!
//! // The two kinds are interchangeable behind the capability trait:
//! // equality and hashing are byte-exact and kind-agnostic.
//! assert!(query.content_eq(&stored));
//! assert_eq!(query.content_hash(), stored.content_hash());
//!
//! // Element access and bulk range copies across kinds.
//! query.set(0, 9.0);
//! query.copy_from(&stored, 0, 0, 2);
//! assert_eq!(query.get(0), 0.5);
//!
//! // The byte view is the persistence wire contract.
//! let reloaded = OffHeapBuffer::from_bytes(stored.as_bytes()).unwrap();
//! assert!(reloaded.content_eq(&stored));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quiver-core` | The `VectorBuffer` trait, errors, ids, kinds |
//! | [`buffer`] | `quiver-buffer` | Buffer implementations, factory, intern pool |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the capability trait (`quiver-core`).
///
/// Contains [`types::VectorBuffer`], the error taxonomy
/// ([`types::BufferError`]), buffer ids, and kind classification.
pub use quiver_core as types;

/// Buffer implementations (`quiver-buffer`).
///
/// Contains [`buffer::ArrayBuffer`], [`buffer::OffHeapBuffer`], the
/// runtime-kind [`buffer::factory`], and the content-addressed
/// [`buffer::InternPool`].
pub use quiver_buffer as buffer;

/// Common imports for typical Quiver usage.
///
/// ```rust
/// use quiver::prelude::*;
/// ```
pub mod prelude {
    // Buffer implementations
    pub use quiver_buffer::{ArrayBuffer, InternPool, OffHeapBuffer};

    // Core types and the capability trait
    pub use quiver_core::{BufferError, BufferId, BufferKind, VectorBuffer};
}
