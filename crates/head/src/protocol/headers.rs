use std::collections::BTreeMap;
use std::collections::btree_map::{self, Entry};

use bytes::Bytes;

/// Header fields of a parsed request head, keyed by the raw header name.
///
/// Names are compared byte for byte, so `Host` and `host` are different keys.
/// A name that repeats keeps its first value: [`HeaderFields::insert_if_absent`]
/// never overwrites.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderFields {
    inner: BTreeMap<Bytes, Bytes>,
}

impl HeaderFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name` unless `name` is already present.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_if_absent(&mut self, name: Bytes, value: Bytes) -> bool {
        match self.inner.entry(name) {
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get<K: AsRef<[u8]>>(&self, name: K) -> Option<&Bytes> {
        self.inner.get(name.as_ref())
    }

    pub fn contains_key<K: AsRef<[u8]>>(&self, name: K) -> bool {
        self.inner.contains_key(name.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates the fields in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.inner.iter() }
    }
}

#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, Bytes, Bytes>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Bytes, &'a Bytes);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a HeaderFields {
    type Item = (&'a Bytes, &'a Bytes);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
