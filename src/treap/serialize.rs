use crate::treap::map::TreapMap;
use crate::treap::set::TreapSet;
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

// Only keys and values are serialized. Priorities are drawn again on deserialization.

impl<T, U> Serialize for TreapMap<T, U>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<T> Serialize for TreapSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct TreapMapVisitor<T, U> {
    marker: PhantomData<fn() -> TreapMap<T, U>>,
}

impl<'de, T, U> Visitor<'de> for TreapMapVisitor<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    type Value = TreapMap<T, U>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = TreapMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T, U> Deserialize<'de> for TreapMap<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TreapMapVisitor {
            marker: PhantomData,
        })
    }
}

struct TreapSetVisitor<T> {
    marker: PhantomData<fn() -> TreapSet<T>>,
}

impl<'de, T> Visitor<'de> for TreapSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = TreapSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = TreapSet::new();
        while let Some(key) = access.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for TreapSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreapSetVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::treap::{TreapMap, TreapSet};
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_map_tokens() {
        let mut map = TreapMap::new();
        map.insert(2u32, 'b');
        map.insert(1u32, 'a');

        assert_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::U32(1),
                Token::Char('a'),
                Token::U32(2),
                Token::Char('b'),
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_set_tokens() {
        let set: TreapSet<u32> = vec![3, 1, 2].into_iter().collect();

        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_empty_set_tokens() {
        let set: TreapSet<u32> = TreapSet::new();
        assert_tokens(&set, &[Token::Seq { len: Some(0) }, Token::SeqEnd]);
    }

    #[test]
    fn test_set_de_unsorted_with_duplicates() {
        let set: TreapSet<u32> = vec![1, 2, 3].into_iter().collect();

        assert_de_tokens(
            &set,
            &[
                Token::Seq { len: Some(4) },
                Token::U32(3),
                Token::U32(1),
                Token::U32(3),
                Token::U32(2),
                Token::SeqEnd,
            ],
        );
    }
}
