//! Benchmark profiles and utilities for the Quiver vector storage layer.
//!
//! Provides shared data generation for the criterion benches:
//!
//! - [`EMBEDDING_DIM`]: a typical dense-embedding dimensionality
//! - [`random_values`]: uniformly random f32 vectors for buffer contents

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::RngExt;

/// A typical dense-embedding dimensionality used across the benches.
pub const EMBEDDING_DIM: usize = 1536;

/// Generate `len` uniformly random values in `[0, 1)`.
pub fn random_values(len: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random::<f32>()).collect()
}
