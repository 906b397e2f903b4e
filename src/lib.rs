//! Ordered collections backed by a randomized treap with subtree-size augmentation.
//!
//! `TreapMap` and `TreapSet` support the usual ordered-container operations in `O(log N)`
//! expected time, plus order-statistic queries: `kth` (the `k`-th smallest key) and `rank`
//! (the number of keys below a given key).

mod entry;
pub mod stress;
pub mod treap;
