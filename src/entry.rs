/// A key-value pair stored in a tree node. Only the key takes part in ordering.
#[derive(Clone, Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}
