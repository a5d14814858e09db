//! Guard that pins a snapshot while a value reference is held

use crate::trie::Trie;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A value reference pinned to the snapshot it was found in
///
/// The guard owns a handle to the snapshot's root, so the whole node
/// chain (and with it the value) stays alive for the guard's lifetime,
/// even after newer versions are appended or the store itself is
/// dropped.
pub struct ValueGuard<T> {
    snapshot: Trie,
    value: Arc<T>,
}

impl<T> ValueGuard<T> {
    pub(crate) fn new(snapshot: Trie, value: Arc<T>) -> Self {
        ValueGuard { snapshot, value }
    }

    /// The snapshot this value was read from
    pub fn snapshot(&self) -> &Trie {
        &self.snapshot
    }

    /// A reference to the guarded value
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Deref for ValueGuard<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueGuard").field(&self.value).finish()
    }
}
