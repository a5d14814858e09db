//! Trie node type

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Type-erased, ownership-shared value payload
///
/// The `Any` vtable doubles as the runtime type tag checked by typed
/// lookups; the `Arc` lets any snapshot (or guard) that can still reach
/// the value keep it alive.
pub type ValueHandle = Arc<dyn Any + Send + Sync>;

/// A node in the persistent trie
///
/// Maps one key byte per edge to a shared child node, and optionally
/// terminates a stored key with a value. Once a node is reachable from a
/// published [`Trie`](crate::Trie) it is never mutated again; mutating
/// operations clone the nodes along the affected path and link in fresh
/// ones.
#[derive(Clone, Default)]
pub struct TrieNode {
    /// Children indexed by the next key byte
    pub(crate) children: BTreeMap<u8, Arc<TrieNode>>,
    /// Value stored at this exact key, if any
    pub(crate) value: Option<ValueHandle>,
}

impl TrieNode {
    /// Create a node with no children and no value
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Look up the child for a key byte
    pub fn child(&self, byte: u8) -> Option<&Arc<TrieNode>> {
        self.children.get(&byte)
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether this node terminates a stored key
    pub fn is_value_node(&self) -> bool {
        self.value.is_some()
    }

    /// Whether this node holds neither children nor a value
    ///
    /// Empty nodes are pruned on the way back up from a removal.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.value.is_none()
    }

    /// The raw type-erased value handle, if any
    pub fn value_handle(&self) -> Option<&ValueHandle> {
        self.value.as_ref()
    }

    /// The value stored at this node, downcast to `T`
    ///
    /// `None` when the node holds no value or the stored type is not `T`.
    pub fn value_ref<T: Any>(&self) -> Option<&T> {
        self.value.as_ref()?.downcast_ref::<T>()
    }

    /// The value stored at this node as a shared handle, downcast to `T`
    pub fn value_shared<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let handle = Arc::clone(self.value.as_ref()?);
        handle.downcast::<T>().ok()
    }
}
