//! Structural diff between trie snapshots

use crate::trie::{Trie, TrieNode};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Kind of change observed for one key
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffEntry {
    /// Key exists only in the newer snapshot
    Added { key: Vec<u8> },
    /// Key exists only in the older snapshot
    Removed { key: Vec<u8> },
    /// Key exists in both snapshots, bound to different value instances
    Changed { key: Vec<u8> },
}

impl DiffEntry {
    pub fn key(&self) -> &[u8] {
        match self {
            DiffEntry::Added { key }
            | DiffEntry::Removed { key }
            | DiffEntry::Changed { key } => key,
        }
    }
}

/// A diff between two snapshots, entries in key order
#[derive(Clone, Debug, Default)]
pub struct Diff {
    pub entries: Vec<DiffEntry>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn added_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Added { .. }))
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Removed { .. }))
            .count()
    }

    pub fn changed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Changed { .. }))
            .count()
    }
}

/// Compute the diff between two snapshots
///
/// Subtrees shared between the two tries (same node instance) are
/// skipped wholesale, so the cost is proportional to the differing
/// region, not to the trie size. Values are type-erased, so "changed"
/// means the two snapshots hold distinct value instances; every put
/// installs a fresh instance, including an overwrite with an equal
/// payload.
pub fn diff_tries(old: &Trie, new: &Trie) -> Diff {
    let mut entries = Vec::new();
    let mut prefix = Vec::new();
    diff_nodes(old.root(), new.root(), &mut prefix, &mut entries);
    Diff { entries }
}

fn diff_nodes(
    old: Option<&Arc<TrieNode>>,
    new: Option<&Arc<TrieNode>>,
    prefix: &mut Vec<u8>,
    entries: &mut Vec<DiffEntry>,
) {
    match (old, new) {
        (Some(old_node), Some(new_node)) if Arc::ptr_eq(old_node, new_node) => return,
        (None, None) => return,
        _ => {}
    }

    match (
        old.and_then(|node| node.value_handle()),
        new.and_then(|node| node.value_handle()),
    ) {
        (None, Some(_)) => entries.push(DiffEntry::Added {
            key: prefix.clone(),
        }),
        (Some(_), None) => entries.push(DiffEntry::Removed {
            key: prefix.clone(),
        }),
        (Some(a), Some(b)) if !Arc::ptr_eq(a, b) => entries.push(DiffEntry::Changed {
            key: prefix.clone(),
        }),
        _ => {}
    }

    // Sorted union of both child maps; pre-order over sorted bytes
    // yields entries in key order.
    let mut bytes: BTreeSet<u8> = BTreeSet::new();
    if let Some(node) = old {
        bytes.extend(node.children.keys().copied());
    }
    if let Some(node) = new {
        bytes.extend(node.children.keys().copied());
    }

    for byte in bytes {
        prefix.push(byte);
        diff_nodes(
            old.and_then(|node| node.child(byte)),
            new.and_then(|node| node.child(byte)),
            prefix,
            entries,
        );
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_identical_snapshots_is_empty() {
        assert!(diff_tries(&Trie::new(), &Trie::new()).is_empty());

        let trie = Trie::new().put(b"cat", 1u32);
        assert!(diff_tries(&trie, &trie.clone()).is_empty());
    }

    #[test]
    fn test_diff_reports_exactly_the_affected_key() {
        let old = Trie::new().put(b"cat", 1u32).put(b"car", 2u32);
        let new = old.put(b"dog", 3u32);

        let diff = diff_tries(&old, &new);
        assert_eq!(
            diff.entries,
            vec![DiffEntry::Added {
                key: b"dog".to_vec()
            }]
        );
    }

    #[test]
    fn test_diff_overwrite_is_changed() {
        let old = Trie::new().put(b"cat", 1u32);
        let new = old.put(b"cat", 1u32);

        let diff = diff_tries(&old, &new);
        assert_eq!(diff.changed_count(), 1);
        assert_eq!(diff.entries[0].key(), b"cat");
    }

    #[test]
    fn test_diff_remove_is_removed() {
        let old = Trie::new().put(b"a", 1u32).put(b"ab", 2u32);
        let new = old.remove(b"ab");

        let diff = diff_tries(&old, &new);
        assert_eq!(
            diff.entries,
            vec![DiffEntry::Removed {
                key: b"ab".to_vec()
            }]
        );
    }

    #[test]
    fn test_diff_from_empty_lists_every_key() {
        let new = Trie::new().put(b"b", 1u32).put(b"a", 2u32).put(b"ab", 3u32);

        let diff = diff_tries(&Trie::new(), &new);
        let keys: Vec<&[u8]> = diff.entries.iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec![&b"a"[..], &b"ab"[..], &b"b"[..]]);
        assert_eq!(diff.added_count(), 3);
    }

    #[test]
    fn test_diff_empty_key() {
        let old = Trie::new();
        let new = old.put(b"", 1u32);

        let diff = diff_tries(&old, &new);
        assert_eq!(diff.entries, vec![DiffEntry::Added { key: Vec::new() }]);
    }

    #[test]
    fn test_diff_mixed_changes_in_key_order() {
        let old = Trie::new().put(b"a", 1u32).put(b"b", 2u32);
        let new = old.remove(b"a").put(b"b", 9u32).put(b"c", 3u32);

        let diff = diff_tries(&old, &new);
        assert_eq!(
            diff.entries,
            vec![
                DiffEntry::Removed { key: b"a".to_vec() },
                DiffEntry::Changed { key: b"b".to_vec() },
                DiffEntry::Added { key: b"c".to_vec() },
            ]
        );
    }
}
