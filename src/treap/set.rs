use crate::treap::map::{TreapMap, TreapMapIntoIter, TreapMapIter};
use anyhow::Result;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than all keys occuring in its right subtree. The priority of a node is greater than
/// the priority of all nodes in its subtrees. By randomly generating priorities, the expected
/// height of the tree is proportional to the logarithm of the number of keys.
///
/// Besides membership queries, the set answers order-statistic queries: the `k`-th smallest key
/// and the number of keys below a given key.
///
/// # Examples
///
/// ```
/// use treap_collections::treap::TreapSet;
///
/// let mut set = TreapSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
/// assert_eq!(set.kth(1).unwrap(), &3);
/// assert_eq!(set.rank(&3), 1);
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TreapSet<T> {
    map: TreapMap<T, ()>,
}

impl<T> TreapSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `TreapSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// ```
    pub fn new() -> Self {
        TreapSet {
            map: TreapMap::new(),
        }
    }

    /// Constructs a new, empty `TreapSet<T>` whose priorities are drawn from a generator with a
    /// fixed seed.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::with_seed([1, 2, 3, 4]);
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        TreapSet {
            map: TreapMap::with_seed(seed),
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was not already in the set. If the
    /// key already exists, the set is left unchanged and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.map.insert(key, ()).is_none()
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the `index`-th smallest key of the set (0-indexed).
    ///
    /// # Errors
    ///
    /// An error is returned if `index` is not less than the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.kth(0).unwrap(), &1);
    /// assert_eq!(set.kth(1).unwrap(), &3);
    /// assert!(set.kth(2).is_err());
    /// ```
    pub fn kth(&self, index: usize) -> Result<&T> {
        self.map.kth(index).map(|pair| pair.0)
    }

    /// Returns the number of keys in the set that are strictly less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.rank(&1), 0);
    /// assert_eq!(set.rank(&2), 1);
    /// assert_eq!(set.rank(&10), 2);
    /// ```
    pub fn rank(&self, key: &T) -> usize {
        self.map.rank(key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.map.ceil(key)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.map.floor(key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Splits the set in two at a key. Returns a set with every key greater than or equal to
    /// `key`; the smaller keys stay in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    ///
    /// let right = set.split_off(&2);
    /// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1]);
    /// assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
    /// ```
    pub fn split_off(&mut self, key: &T) -> Self {
        TreapSet {
            map: self.map.split_off(key),
        }
    }

    /// Moves every key of `other` into `self`, leaving `other` empty. Every key in `other` must be
    /// greater than every key in `self`.
    ///
    /// # Errors
    ///
    /// An error is returned if the key ranges of the two sets overlap. Neither set is modified in
    /// that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut left = TreapSet::new();
    /// left.insert(1);
    /// let mut right = TreapSet::new();
    /// right.insert(2);
    ///
    /// left.append(&mut right).unwrap();
    /// assert_eq!(left.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// assert!(right.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) -> Result<()> {
        self.map.append(&mut other.map)
    }
}

impl<T> TreapSet<T> {
    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapSetIter<'_, T> {
        TreapSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T> IntoIterator for TreapSet<T> {
    type IntoIter = TreapSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a TreapSet<T>
where
    T: 'a,
{
    type IntoIter = TreapSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreapSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct TreapSetIntoIter<T> {
    map_iter: TreapMapIntoIter<T, ()>,
}

impl<T> Iterator for TreapSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_iter.size_hint()
    }
}

impl<T> ExactSizeIterator for TreapSetIntoIter<T> {}

/// An iterator for `TreapSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct TreapSetIter<'a, T> {
    map_iter: TreapMapIter<'a, T, ()>,
}

impl<'a, T> Iterator for TreapSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for TreapSetIter<'a, T> where T: 'a {}

impl<T> Default for TreapSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for TreapSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = TreapSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for TreapSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> fmt::Debug for TreapSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TreapSet;

    #[test]
    fn test_len_empty() {
        let set: TreapSet<u32> = TreapSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: TreapSet<u32> = TreapSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: TreapSet<u32> = TreapSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = TreapSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_existing() {
        let mut set = TreapSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = TreapSet::new();
        set.insert(1);
        let ret = set.remove(&1);
        assert!(!set.contains(&1));
        assert_eq!(ret, Some(1));
    }

    #[test]
    fn test_min_max() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_kth_rank_string_keys() {
        let set: TreapSet<String> = vec!["pear", "apple", "fig", "banana"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(set.kth(0).unwrap(), "apple");
        assert_eq!(set.kth(3).unwrap(), "pear");
        assert!(set.kth(4).is_err());
        assert_eq!(set.rank(&String::from("cherry")), 2);
    }

    #[test]
    fn test_remove_string_key_has_no_successor() {
        let mut set: TreapSet<String> = vec!["a", "aa", "ab", "b"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(set.remove(&String::from("a")), Some(String::from("a")));
        assert_eq!(
            set.iter().map(String::as_str).collect::<Vec<&str>>(),
            vec!["aa", "ab", "b"],
        );
        assert_eq!(set.remove(&String::from("ab")), Some(String::from("ab")));
        assert_eq!(
            set.iter().map(String::as_str).collect::<Vec<&str>>(),
            vec!["aa", "b"],
        );
    }

    #[test]
    fn test_split_off() {
        let mut set: TreapSet<u32> = (0..10).collect();
        let right = set.split_off(&7);
        assert_eq!(set.len(), 7);
        assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&7, &8, &9]);
    }

    #[test]
    fn test_append_overlapping() {
        let mut left: TreapSet<u32> = (0..5).collect();
        let mut right: TreapSet<u32> = (4..8).collect();
        assert!(left.append(&mut right).is_err());
        assert_eq!(left.len(), 5);
        assert_eq!(right.len(), 4);
    }

    #[test]
    fn test_into_iter() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = TreapSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        let iter = set.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_debug() {
        let set: TreapSet<u32> = vec![3, 1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    }
}
