//! Buffer implementations for the Quiver vector storage layer.
//!
//! Provides the two concrete [`quiver_core::VectorBuffer`] variants —
//! [`ArrayBuffer`] on the managed `Vec` path and [`OffHeapBuffer`] on a
//! manually laid-out raw region — plus runtime-kind construction and a
//! content-addressed [`InternPool`].
//!
//! # Safety
//!
//! This is the only crate in the workspace that may contain `unsafe`
//! code. All of it lives in the private `region` module, each block with
//! a mandatory `// SAFETY:` comment. Everything above `region` is safe
//! slice manipulation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod factory;
pub mod intern;
pub mod offheap;
mod region;

// Public re-exports for the primary API surface.
pub use array::ArrayBuffer;
pub use intern::InternPool;
pub use offheap::OffHeapBuffer;
