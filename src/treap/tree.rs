use crate::entry::Entry;
use crate::treap::node::Node;
use std::cmp::Ordering;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn len<T, U>(tree: &Tree<T, U>) -> usize {
    tree.as_ref().map_or(0, |node| node.len)
}

/// Merges two trees into one. Every key in `l_tree` must be strictly less than every key in
/// `r_tree`; this is not checked.
pub fn merge<T, U>(l_tree: Tree<T, U>, r_tree: Tree<T, U>) -> Tree<T, U> {
    match (l_tree, r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                l_node.right = merge(l_node.right.take(), Some(r_node));
                l_node.update();
                Some(l_node)
            } else {
                r_node.left = merge(Some(l_node), r_node.left.take());
                r_node.update();
                Some(r_node)
            }
        },
        (new_tree, None) | (None, new_tree) => new_tree,
    }
}

/// Splits a tree into the nodes with keys less than `key` and the nodes with keys greater than
/// or equal to `key`.
pub fn split<T, U>(tree: Tree<T, U>, key: &T) -> (Tree<T, U>, Tree<T, U>)
where
    T: Ord,
{
    match tree {
        Some(mut node) => {
            if node.entry.key < *key {
                let (left, right) = split(node.right.take(), key);
                node.right = left;
                node.update();
                (Some(node), right)
            } else {
                let (left, right) = split(node.left.take(), key);
                node.left = right;
                node.update();
                (left, Some(node))
            }
        },
        None => (None, None),
    }
}

/// Inserts a node into the tree. The key of `new_node` must not already be in the tree.
pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>)
where
    T: Ord,
{
    let (left, right) = split(tree.take(), &new_node.entry.key);
    *tree = merge(merge(left, Some(Box::new(new_node))), right);
}

/// Detaches the node with the minimum key and returns it.
pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Tree<T, U> {
    let has_left = tree.as_ref().map_or(false, |node| node.left.is_some());
    if has_left {
        let node = tree.as_mut()?;
        let ret = remove_min(&mut node.left);
        node.update();
        ret
    } else {
        let mut node = tree.take()?;
        *tree = node.right.take();
        node.update();
        Some(node)
    }
}

pub fn remove<T, U>(tree: &mut Tree<T, U>, key: &T) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let (left, mut right) = split(tree.take(), key);
    let found = min(&right).map_or(false, |entry| entry.key == *key);
    let removed = if found { remove_min(&mut right) } else { None };
    *tree = merge(left, right);
    removed.map(|node| node.entry)
}

pub fn contains<T, U>(tree: &Tree<T, U>, key: &T) -> bool
where
    T: Ord,
{
    get(tree, key).is_some()
}

pub fn get<'a, T, U>(tree: &'a Tree<T, U>, key: &T) -> Option<&'a Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.entry.key) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn get_mut<'a, T, U>(tree: &'a mut Tree<T, U>, key: &T) -> Option<&'a mut Entry<T, U>>
where
    T: Ord,
{
    tree.as_mut().and_then(|node| match key.cmp(&node.entry.key) {
        Ordering::Less => get_mut(&mut node.left, key),
        Ordering::Greater => get_mut(&mut node.right, key),
        Ordering::Equal => Some(&mut node.entry),
    })
}

/// Returns the entry with the `index`-th smallest key (0-indexed), or `None` if `index` is not
/// less than the size of the tree.
pub fn select<T, U>(tree: &Tree<T, U>, mut index: usize) -> Option<&Entry<T, U>> {
    let mut curr = tree;
    while let Some(node) = curr {
        let left_len = len(&node.left);
        match index.cmp(&left_len) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                index -= left_len + 1;
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

/// Returns the number of keys in the tree that are strictly less than `key`.
pub fn rank<T, U>(tree: &Tree<T, U>, key: &T) -> usize
where
    T: Ord,
{
    let mut curr = tree;
    let mut ret = 0;
    while let Some(node) = curr {
        match key.cmp(&node.entry.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret += len(&node.left) + 1;
                curr = &node.right;
            },
            Ordering::Equal => return ret + len(&node.left),
        }
    }
    ret
}

pub fn ceil<'a, T, U>(tree: &'a Tree<T, U>, key: &T) -> Option<&'a Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.entry.key) {
        Ordering::Greater => ceil(&node.right, key),
        Ordering::Less => match ceil(&node.left, key) {
            None => Some(&node.entry),
            res => res,
        },
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn floor<'a, T, U>(tree: &'a Tree<T, U>, key: &T) -> Option<&'a Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.entry.key) {
        Ordering::Less => floor(&node.left, key),
        Ordering::Greater => match floor(&node.right, key) {
            None => Some(&node.entry),
            res => res,
        },
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}
