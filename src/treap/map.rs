use crate::entry::Entry;
use crate::treap::node::Node;
use crate::treap::tree;
use anyhow::{anyhow, Result};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// An ordered map implemented using a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key, a value, and a priority. The key of any node is greater than all keys in its
/// left subtree and less than all keys occuring in its right subtree. The priority of a node is
/// greater than the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of keys.
///
/// Every node also tracks the size of its subtree, so the map can find the `k`-th smallest key
/// and the rank of a key in `O(log N)` expected time.
///
/// # Examples
///
/// ```
/// use treap_collections::treap::TreapMap;
///
/// let mut map = TreapMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map.get(&0), Some(&1));
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.kth(1).unwrap(), (&3, &4));
/// assert_eq!(map.rank(&3), 1);
///
/// *map.get_mut(&0).unwrap() = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
#[derive(Clone)]
pub struct TreapMap<T, U> {
    root: tree::Tree<T, U>,
    rng: XorShiftRng,
}

impl<T, U> TreapMap<T, U>
where
    T: Ord,
{
    /// Constructs a new, empty `TreapMap<T, U>`. Priorities are drawn from a generator seeded by
    /// the thread-local random number generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let map: TreapMap<u32, u32> = TreapMap::new();
    /// ```
    pub fn new() -> Self {
        TreapMap {
            root: None,
            rng: rand::weak_rng(),
        }
    }

    /// Constructs a new, empty `TreapMap<T, U>` whose priorities are drawn from a generator with a
    /// fixed seed. Two maps with the same seed and the same sequence of operations have the same
    /// shape.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let map: TreapMap<u32, u32> = TreapMap::with_seed([1, 2, 3, 4]);
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        TreapMap {
            root: None,
            rng: SeedableRng::from_seed(seed),
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced and the old value is returned. The key itself and the shape of the tree are left
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U> {
        let TreapMap { root, rng } = self;
        if let Some(entry) = tree::get_mut(root, &key) {
            return Some(mem::replace(&mut entry.value, value));
        }
        tree::insert(root, Node::new(key, value, rng.next_u32()));
        None
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<(T, U)> {
        tree::remove(&mut self.root, key).map(|entry| {
            let Entry { key, value } = entry;
            (key, value)
        })
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &T) -> Option<&U> {
        tree::get(&self.root, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Option<&mut U> {
        tree::get_mut(&mut self.root, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.root)
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let map: TreapMap<u32, u32> = TreapMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns the key-value pair with the `index`-th smallest key (0-indexed).
    ///
    /// # Errors
    ///
    /// An error is returned if `index` is not less than the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(3, 1);
    /// map.insert(1, 2);
    /// assert_eq!(map.kth(0).unwrap(), (&1, &2));
    /// assert_eq!(map.kth(1).unwrap(), (&3, &1));
    /// assert!(map.kth(2).is_err());
    /// ```
    pub fn kth(&self, index: usize) -> Result<(&T, &U)> {
        tree::select(&self.root, index)
            .map(|entry| (&entry.key, &entry.value))
            .ok_or_else(|| {
                anyhow!(
                    "index must be less than self.len()={}, but got {}.",
                    self.len(),
                    index
                )
            })
    }

    /// Returns the number of keys in the map that are strictly less than `key`. The key does not
    /// have to exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.rank(&0), 0);
    /// assert_eq!(map.rank(&3), 1);
    /// assert_eq!(map.rank(&4), 2);
    /// ```
    pub fn rank(&self, key: &T) -> usize {
        tree::rank(&self.root, key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        tree::ceil(&self.root, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        tree::floor(&self.root, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root).map(|entry| &entry.key)
    }

    /// Splits the map in two at a key. Returns a map with every key-value pair whose key is greater
    /// than or equal to `key`; the pairs with smaller keys stay in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    ///
    /// let right = map.split_off(&2);
    /// assert_eq!(map.iter().collect::<Vec<(&u32, &u32)>>(), vec![(&1, &1)]);
    /// assert_eq!(right.iter().collect::<Vec<(&u32, &u32)>>(), vec![(&2, &2), (&3, &3)]);
    /// ```
    pub fn split_off(&mut self, key: &T) -> Self {
        let (left, right) = tree::split(self.root.take(), key);
        self.root = left;
        TreapMap {
            root: right,
            rng: self.rng.gen(),
        }
    }

    /// Moves every key-value pair of `other` into `self`, leaving `other` empty. Every key in
    /// `other` must be greater than every key in `self`.
    ///
    /// # Errors
    ///
    /// An error is returned if the key ranges of the two maps overlap. Neither map is modified in
    /// that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut left = TreapMap::new();
    /// left.insert(1, 1);
    /// let mut right = TreapMap::new();
    /// right.insert(2, 2);
    ///
    /// left.append(&mut right).unwrap();
    /// assert_eq!(left.len(), 2);
    /// assert!(right.is_empty());
    ///
    /// let mut overlapping = TreapMap::new();
    /// overlapping.insert(2, 2);
    /// assert!(left.append(&mut overlapping).is_err());
    /// ```
    pub fn append(&mut self, other: &mut Self) -> Result<()> {
        if let (Some(max), Some(min)) = (tree::max(&self.root), tree::min(&other.root)) {
            if max.key >= min.key {
                return Err(anyhow!(
                    "keys of other must be greater than self.max(), but other.min() is not."
                ));
            }
        }
        self.root = tree::merge(self.root.take(), other.root.take());
        Ok(())
    }
}

impl<T, U> TreapMap<T, U> {
    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapMapIter<'_, T, U> {
        TreapMapIter {
            current: &self.root,
            stack: Vec::new(),
            remaining: tree::len(&self.root),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal. Only the values can be modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (_, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &2)));
    /// assert_eq!(iterator.next(), Some((&2, &3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> TreapMapIterMut<'_, T, U> {
        let remaining = tree::len(&self.root);
        TreapMapIterMut {
            current: self.root.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
            remaining,
        }
    }
}

impl<T, U> IntoIterator for TreapMap<T, U> {
    type IntoIter = TreapMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        let remaining = tree::len(&self.root);
        Self::IntoIter {
            current: self.root,
            stack: Vec::new(),
            remaining,
        }
    }
}

impl<'a, T, U> IntoIterator for &'a TreapMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = TreapMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut TreapMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = TreapMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `TreapMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct TreapMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
    remaining: usize,
}

impl<T, U> Iterator for TreapMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            self.remaining -= 1;
            (key, value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, U> ExactSizeIterator for TreapMapIntoIter<T, U> {}

/// An iterator for `TreapMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct TreapMapIter<'a, T, U> {
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
    remaining: usize,
}

impl<'a, T, U> Iterator for TreapMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(&**node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { key, value },
                right,
                ..
            } = node;
            self.current = right;
            self.remaining -= 1;
            (key, value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U> ExactSizeIterator for TreapMapIter<'a, T, U> where T: 'a, U: 'a {}

type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

/// A mutable iterator for `TreapMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references to
/// keys and mutable references to values.
pub struct TreapMapIterMut<'a, T, U> {
    current: BorrowedTreeMut<'a, T, U>,
    stack: Vec<(&'a T, &'a mut U, BorrowedTreeMut<'a, T, U>)>,
    remaining: usize,
}

impl<'a, T, U> Iterator for TreapMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let TreapMapIterMut {
            current,
            stack,
            remaining,
        } = self;
        while let Some(node) = current.take() {
            let Node {
                entry: Entry { key, value },
                left,
                right,
                ..
            } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((&*key, value, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(key, value, right)| {
            *current = right;
            *remaining -= 1;
            (key, value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U> ExactSizeIterator for TreapMapIterMut<'a, T, U> where T: 'a, U: 'a {}

impl<T, U> Default for TreapMap<T, U>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> FromIterator<(T, U)> for TreapMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = TreapMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U> Extend<(T, U)> for TreapMap<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> PartialEq for TreapMap<T, U>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        tree::len(&self.root) == tree::len(&other.root) && self.iter().eq(other.iter())
    }
}

impl<T, U> Eq for TreapMap<T, U>
where
    T: Eq,
    U: Eq,
{
}

impl<T, U> fmt::Debug for TreapMap<T, U>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TreapMap;

    #[test]
    fn test_len_empty() {
        let map: TreapMap<u32, u32> = TreapMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: TreapMap<u32, u32> = TreapMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: TreapMap<u32, u32> = TreapMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut map = TreapMap::new();
        map.insert(1, 1);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = TreapMap::new();
        let ret_1 = map.insert(1, 1);
        let ret_2 = map.insert(1, 3);
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
        assert_eq!(ret_1, None);
        assert_eq!(ret_2, Some(1));
    }

    #[test]
    fn test_remove() {
        let mut map = TreapMap::new();
        map.insert(1, 1);
        let ret = map.remove(&1);
        assert!(!map.contains_key(&1));
        assert_eq!(ret, Some((1, 1)));
    }

    #[test]
    fn test_remove_missing() {
        let mut map = TreapMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        assert_eq!(map.remove(&2), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_get_mut() {
        let mut map = TreapMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_min_max() {
        let mut map = TreapMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.min(), Some(&1));
        assert_eq!(map.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = TreapMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), None);
        assert_eq!(map.floor(&2), Some(&1));
        assert_eq!(map.floor(&4), Some(&3));
        assert_eq!(map.floor(&6), Some(&5));

        assert_eq!(map.ceil(&0), Some(&1));
        assert_eq!(map.ceil(&2), Some(&3));
        assert_eq!(map.ceil(&4), Some(&5));
        assert_eq!(map.ceil(&6), None);
    }

    #[test]
    fn test_kth() {
        let mut map = TreapMap::new();
        map.insert(5, 50);
        map.insert(1, 10);
        map.insert(3, 30);

        assert_eq!(map.kth(0).unwrap(), (&1, &10));
        assert_eq!(map.kth(1).unwrap(), (&3, &30));
        assert_eq!(map.kth(2).unwrap(), (&5, &50));
    }

    #[test]
    fn test_kth_out_of_range() {
        let mut map: TreapMap<u32, u32> = TreapMap::new();
        assert!(map.kth(0).is_err());
        map.insert(1, 1);
        let err = map.kth(1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "index must be less than self.len()=1, but got 1."
        );
    }

    #[test]
    fn test_rank() {
        let mut map = TreapMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.rank(&0), 0);
        assert_eq!(map.rank(&1), 0);
        assert_eq!(map.rank(&4), 2);
        assert_eq!(map.rank(&5), 2);
        assert_eq!(map.rank(&6), 3);
    }

    #[test]
    fn test_split_off() {
        let mut map = TreapMap::with_seed([1, 1, 1, 1]);
        for key in 0..10 {
            map.insert(key, key * 10);
        }
        let right = map.split_off(&4);

        assert_eq!(map.len(), 4);
        assert_eq!(right.len(), 6);
        assert_eq!(map.max(), Some(&3));
        assert_eq!(right.min(), Some(&4));
        assert_eq!(right.kth(0).unwrap(), (&4, &40));
        assert_eq!(right.rank(&9), 5);
    }

    #[test]
    fn test_append() {
        let mut left = TreapMap::new();
        left.insert(1, 1);
        left.insert(2, 2);
        let mut right = TreapMap::new();
        right.insert(3, 3);
        right.insert(4, 4);

        left.append(&mut right).unwrap();
        assert!(right.is_empty());
        assert_eq!(
            left.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &1), (&2, &2), (&3, &3), (&4, &4)],
        );
        assert_eq!(left.kth(2).unwrap(), (&3, &3));
    }

    #[test]
    fn test_append_overlapping() {
        let mut left = TreapMap::new();
        left.insert(1, 1);
        left.insert(3, 3);
        let mut right = TreapMap::new();
        right.insert(3, 30);

        assert!(left.append(&mut right).is_err());
        assert_eq!(left.len(), 2);
        assert_eq!(right.get(&3), Some(&30));
    }

    #[test]
    fn test_split_off_append_round_trip() {
        let mut map: TreapMap<u32, u32> = (0..100).map(|key| (key, key)).collect();
        let mut right = map.split_off(&37);
        map.append(&mut right).unwrap();
        assert_eq!(map.len(), 100);
        assert_eq!(
            map.iter().map(|(key, _)| *key).collect::<Vec<u32>>(),
            (0..100).collect::<Vec<u32>>(),
        );
    }

    #[test]
    fn test_clear() {
        let mut map = TreapMap::new();
        map.insert(1, 1);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);
    }

    #[test]
    fn test_into_iter() {
        let mut map = TreapMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        let iter = map.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<(u32, u32)>>(), vec![(1, 2), (3, 4), (5, 6)]);
    }

    #[test]
    fn test_iter() {
        let mut map = TreapMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_iter_mut() {
        let mut map = TreapMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }

    #[test]
    fn test_eq_ignores_shape() {
        let left: TreapMap<u32, u32> = vec![(1, 1), (2, 2), (3, 3)].into_iter().collect();
        let mut right = TreapMap::with_seed([4, 3, 2, 1]);
        right.insert(3, 3);
        right.insert(2, 2);
        right.insert(1, 1);
        assert_eq!(left, right);

        right.insert(2, 20);
        assert_ne!(left, right);
    }

    #[test]
    fn test_debug() {
        let map: TreapMap<u32, u32> = vec![(2, 20), (1, 10)].into_iter().collect();
        assert_eq!(format!("{:?}", map), "{1: 10, 2: 20}");
    }
}
