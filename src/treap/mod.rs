//! Probabilistic binary search tree where each node also maintains the heap invariant.
//!
//! Every node caches the size of its subtree, which lets the collections answer order-statistic
//! queries (`kth` and `rank`). All updates are built from two primitives: `split`, which cuts a
//! tree at a key boundary, and `merge`, which joins two trees whose key ranges do not overlap.

mod map;
mod node;
mod serialize;
mod set;
mod tree;

pub use self::map::{TreapMap, TreapMapIntoIter, TreapMapIter, TreapMapIterMut};
pub use self::set::{TreapSet, TreapSetIntoIter, TreapSetIter};
