//! Debug utilities for trie troubleshooting
//!
//! Everything here is read-only diagnostic traversal and sits outside
//! the lookup contract.

use super::node::TrieNode;
use super::tree::Trie;
use std::fmt;
use std::fmt::Write;

impl Trie {
    /// Render the trie structure as an indented multi-line string
    ///
    /// One line per node, `*` marking value nodes. Printable key bytes
    /// are shown as characters, everything else as hex.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        match self.root() {
            None => out.push_str("(empty)\n"),
            Some(root) => {
                let _ = writeln!(out, "(root){}", value_marker(root));
                dump_children(root, 1, &mut out);
            }
        }
        out
    }

    /// Total number of nodes reachable from the root
    pub fn node_count(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            1 + node.children.values().map(|child| count(child)).sum::<usize>()
        }
        self.root().map_or(0, |root| count(root))
    }
}

fn dump_children(node: &TrieNode, depth: usize, out: &mut String) {
    for (byte, child) in &node.children {
        let _ = writeln!(
            out,
            "{}[{}]{}",
            "  ".repeat(depth),
            byte_repr(*byte),
            value_marker(child)
        );
        dump_children(child, depth + 1, out);
    }
}

fn byte_repr(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        (byte as char).to_string()
    } else {
        format!("0x{byte:02x}")
    }
}

fn value_marker(node: &TrieNode) -> &'static str {
    if node.is_value_node() {
        " *"
    } else {
        ""
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("nodes", &self.node_count())
            .finish()
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .field("has_value", &self.is_value_node())
            .finish()
    }
}
