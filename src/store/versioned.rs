//! MVCC wrapper around the persistent trie

use crate::ops::{diff_tries, Diff};
use crate::store::ValueGuard;
use crate::trie::Trie;
use crate::{Error, Result};
use parking_lot::{Mutex, RwLock};
use std::any::Any;

/// A thread-safe, versioned view over persistent tries
///
/// The store owns an append-only sequence of snapshots; indices are
/// version numbers and version 0 is the empty trie, present from
/// construction. Readers copy a snapshot handle under a brief shared
/// lock and traverse it with no lock held; writers are serialized by a
/// dedicated token and take the exclusive lock only for the O(1) append.
pub struct VersionedStore {
    /// Serializes put/remove so concurrent writes apply in one total order
    write_lock: Mutex<()>,
    /// All historical snapshots; only ever grows
    snapshots: RwLock<Vec<Trie>>,
}

impl VersionedStore {
    /// Create a store holding the empty trie at version 0
    pub fn new() -> Self {
        VersionedStore {
            write_lock: Mutex::new(()),
            snapshots: RwLock::new(vec![Trie::new()]),
        }
    }

    // === Read path ===

    /// Get the value for `key` in the newest snapshot
    ///
    /// The returned guard keeps that snapshot alive, so the reference
    /// stays valid however many versions are appended afterwards.
    pub fn get<T: Any + Send + Sync>(&self, key: &[u8]) -> Option<ValueGuard<T>> {
        let snapshot = self.latest_snapshot();
        let value = snapshot.get_shared::<T>(key)?;
        Some(ValueGuard::new(snapshot, value))
    }

    /// Get the value for `key` in a pinned version
    ///
    /// A version outside `[0, latest_version()]` is absence, not an
    /// error, exactly like a missing key or a value of another type.
    pub fn get_at<T: Any + Send + Sync>(&self, key: &[u8], version: usize) -> Option<ValueGuard<T>> {
        let snapshot = self.snapshot(version)?;
        let value = snapshot.get_shared::<T>(key)?;
        Some(ValueGuard::new(snapshot, value))
    }

    /// The newest version number
    pub fn latest_version(&self) -> usize {
        self.snapshots.read().len() - 1
    }

    /// Number of snapshots held (always `latest_version() + 1`)
    pub fn version_count(&self) -> usize {
        self.snapshots.read().len()
    }

    /// A pinned handle to the snapshot at `version`
    pub fn snapshot(&self, version: usize) -> Option<Trie> {
        self.snapshots.read().get(version).cloned()
    }

    /// A pinned handle to the newest snapshot
    pub fn latest_snapshot(&self) -> Trie {
        self.snapshots
            .read()
            .last()
            .cloned()
            .expect("store holds at least the initial snapshot")
    }

    // === Write path ===

    /// Insert or overwrite `key`, returning the new version number
    pub fn put<T: Any + Send + Sync>(&self, key: &[u8], value: T) -> usize {
        let _token = self.write_lock.lock();

        // Holding the token, no other writer can append, so this handle
        // stays the newest for the whole call. The path copy below runs
        // with no lock held.
        let current = self.latest_snapshot();
        let new_trie = current.put(key, value);

        let mut snapshots = self.snapshots.write();
        snapshots.push(new_trie);
        snapshots.len() - 1
    }

    /// Remove `key`, returning the version number after the operation
    ///
    /// Removing an absent key appends nothing and returns the unchanged
    /// latest version; no version number is spent on a no-op.
    pub fn remove(&self, key: &[u8]) -> usize {
        let _token = self.write_lock.lock();

        let current = self.latest_snapshot();
        let new_trie = current.remove(key);
        if new_trie.ptr_eq(&current) {
            return self.latest_version();
        }

        let mut snapshots = self.snapshots.write();
        snapshots.push(new_trie);
        snapshots.len() - 1
    }

    // === Cross-version operations ===

    /// Structural diff between two versions
    ///
    /// Unlike [`get_at`](Self::get_at), naming a version that does not
    /// exist here is a caller mistake and reported as an error.
    pub fn diff(&self, from: usize, to: usize) -> Result<Diff> {
        let (old, new) = {
            let snapshots = self.snapshots.read();
            let latest = snapshots.len() - 1;
            let old = snapshots.get(from).cloned().ok_or(Error::VersionNotFound {
                requested: from,
                latest,
            })?;
            let new = snapshots.get(to).cloned().ok_or(Error::VersionNotFound {
                requested: to,
                latest,
            })?;
            (old, new)
        };
        Ok(diff_tries(&old, &new))
    }
}

impl Default for VersionedStore {
    fn default() -> Self {
        Self::new()
    }
}
