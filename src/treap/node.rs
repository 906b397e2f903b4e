use crate::entry::Entry;
use crate::treap::tree::Tree;

/// A struct representing an internal node of a treap.
///
/// `priority` is drawn once when the node is created and never changes. `len` caches the number
/// of nodes in the subtree rooted at this node and must be refreshed with `update` whenever a
/// child is replaced.
#[derive(Clone)]
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub priority: u32,
    pub len: usize,
    pub left: Tree<T, U>,
    pub right: Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U, priority: u32) -> Self {
        Node {
            entry: Entry { key, value },
            priority,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            len, left, right, ..
        } = self;
        *len = 1;
        if let Some(left_node) = left {
            *len += left_node.len;
        }
        if let Some(right_node) = right {
            *len += right_node.len;
        }
    }
}
