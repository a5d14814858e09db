//! Persistent trie core
//!
//! This implements a byte-keyed trie where:
//! - Every mutation returns a new root and never touches published nodes
//! - Unchanged subtrees are shared across versions through `Arc`s
//! - Values are type-erased and checked against the requested type on lookup

mod debug;
mod node;
mod tree;

pub use node::{TrieNode, ValueHandle};
pub use tree::Trie;
