//! Strongly-typed buffer identifiers.

use std::fmt;

/// Identifies an interned buffer within a content-addressed pool.
///
/// Ids are dense and stable: the n-th distinct content interned receives
/// `BufferId(n)`, and ids remain valid for the lifetime of the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u32);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BufferId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
