//! Separate-chaining hash table with string keys.
//!
//! The bucket count is fixed at construction and never changes. Each bucket
//! is an ordered chain of `(key, value)` pairs; a key appears at most once in
//! the whole table.

/// Maps a key to a bucket index in `0..buckets`.
pub trait KeyHasher {
    /// Bucket for `key`. `buckets` is never zero.
    fn bucket_of(&self, key: &str, buckets: usize) -> usize;
}

/// Position-weighted sum of UTF-16 code units.
///
/// `h = (h + code(c_i) * (i + 1)) mod buckets`, reduced at every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalHasher;

impl KeyHasher for PositionalHasher {
    fn bucket_of(&self, key: &str, buckets: usize) -> usize {
        let modulus = buckets as u64;
        let mut hash: u64 = 0;
        for (i, unit) in key.encode_utf16().enumerate() {
            hash = (hash + u64::from(unit) * (i as u64 + 1)) % modulus;
        }
        hash as usize
    }
}

type Chain<V> = Vec<(String, V)>;

/// Fixed-size chained hash table
#[derive(Debug, Clone)]
pub struct HashTable<V, H = PositionalHasher> {
    buckets: Vec<Chain<V>>,
    hasher: H,
    len: usize,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Table with the default bucket count
    pub fn new() -> Self {
        Self::with_buckets(crate::constants::DEFAULT_BUCKET_COUNT)
    }

    /// Table with `buckets` chains (at least one)
    pub fn with_buckets(buckets: usize) -> Self {
        Self::with_hasher(buckets, PositionalHasher)
    }
}

impl<V, H: KeyHasher> HashTable<V, H> {
    /// Table with a caller-supplied hash function
    pub fn with_hasher(buckets: usize, hasher: H) -> Self {
        let buckets = (0..buckets.max(1)).map(|_| Vec::new()).collect();
        Self { buckets, hasher, len: 0 }
    }

    #[inline]
    fn chain(&self, key: &str) -> &Chain<V> {
        &self.buckets[self.hasher.bucket_of(key, self.buckets.len())]
    }

    #[inline]
    fn chain_mut(&mut self, key: &str) -> &mut Chain<V> {
        let index = self.hasher.bucket_of(key, self.buckets.len());
        &mut self.buckets[index]
    }

    /// Insert or overwrite. Returns the previous value for the key, if any.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let chain = self.chain_mut(&key);
        if let Some((_, slot)) = chain.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        chain.push((key, value));
        self.len += 1;
        None
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key).iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutable value stored under `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.chain_mut(key).iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove the pair for `key`. Returns whether one was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let chain = self.chain_mut(key);
        match chain.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                // Chain order is observable through get_all, keep it stable
                chain.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Returns true if `key` is present
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Values in bucket-then-chain order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.buckets.iter().flatten().map(|(_, v)| v)
    }

    /// Number of stored pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no pairs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed number of buckets
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl<V: Clone, H: KeyHasher> HashTable<V, H> {
    /// Every pair in bucket-then-chain order
    pub fn get_all(&self) -> Vec<(String, V)> {
        self.buckets.iter().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn positional_hash_values() {
        let h = PositionalHasher;
        assert_eq!(h.bucket_of("", 31), 0);
        // 'a' = 97 -> 97 % 31
        assert_eq!(h.bucket_of("a", 31), 97 % 31);
        // "ab": (97*1 + 98*2) % 31
        assert_eq!(h.bucket_of("ab", 31), (97 + 98 * 2) % 31);
        assert_eq!(h.bucket_of("anything", 1), 0);
    }

    #[test]
    fn hash_uses_utf16_code_units() {
        let h = PositionalHasher;
        // U+1F355 is a surrogate pair: 0xD83C, 0xDF55
        let expected = ((0xD83C_u64 % 1009) + 0xDF55_u64 * 2) % 1009;
        assert_eq!(h.bucket_of("\u{1F355}", 1009), expected as usize);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut t = HashTable::new();
        assert_eq!(t.set("m1", 1), None);
        assert_eq!(t.set("m1", 2), Some(1));
        assert_eq!(t.get("m1"), Some(&2));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn remove_and_has() {
        let mut t = HashTable::new();
        t.set("a", 'a');
        assert!(t.has("a"));
        assert!(t.remove("a"));
        assert!(!t.remove("a"));
        assert!(!t.has("a"));
        assert!(t.is_empty());
    }

    #[test]
    fn collisions_chain_in_one_bucket() {
        // single bucket forces every key into one chain
        let mut t = HashTable::with_buckets(1);
        t.set("x", 1);
        t.set("y", 2);
        t.set("z", 3);
        assert_eq!(t.bucket_count(), 1);
        assert_eq!(t.get_all(), vec![("x".into(), 1), ("y".into(), 2), ("z".into(), 3)]);

        assert!(t.remove("y"));
        assert_eq!(t.get_all(), vec![("x".into(), 1), ("z".into(), 3)]);
        assert_eq!(t.get("z"), Some(&3));
    }

    #[test]
    fn zero_buckets_is_clamped() {
        let t: HashTable<u8> = HashTable::with_buckets(0);
        assert_eq!(t.bucket_count(), 1);
    }

    #[test]
    fn get_all_is_bucket_ordered() {
        let mut t = HashTable::with_buckets(7);
        for key in ["g", "a", "c", "f"] {
            t.set(key, ());
        }
        let keys: Vec<_> = t.get_all().into_iter().map(|(k, _)| k).collect();
        let mut by_bucket = keys.clone();
        by_bucket.sort_by_key(|k| PositionalHasher.bucket_of(k, 7));
        assert_eq!(keys, by_bucket);
    }

    #[test]
    fn custom_hasher_is_used() {
        struct FirstByte;
        impl KeyHasher for FirstByte {
            fn bucket_of(&self, key: &str, buckets: usize) -> usize {
                key.bytes().next().map_or(0, |b| b as usize % buckets)
            }
        }
        let mut t = HashTable::with_hasher(4, FirstByte);
        t.set("apple", 1);
        t.set("avocado", 2);
        assert_eq!(t.get("avocado"), Some(&2));
        assert_eq!(t.values().count(), 2);
    }

    #[test]
    fn get_mut_updates() {
        let mut t = HashTable::new();
        t.set("k", vec![1]);
        if let Some(v) = t.get_mut("k") {
            v.push(2);
        }
        assert_eq!(t.get("k"), Some(&vec![1, 2]));
        assert!(t.get_mut("missing").is_none());
    }

    proptest! {
        #[test]
        fn matches_std_hashmap(
            ops in proptest::collection::vec((0u8..3, "[a-e]{1,3}", any::<i32>()), 0..128),
            buckets in 1usize..40,
        ) {
            let mut t = HashTable::with_buckets(buckets);
            let mut model = HashMap::new();
            for (op, key, value) in ops {
                match op {
                    0 => {
                        prop_assert_eq!(t.set(key.clone(), value), model.insert(key, value));
                    }
                    1 => {
                        prop_assert_eq!(t.remove(&key), model.remove(&key).is_some());
                    }
                    _ => {
                        prop_assert_eq!(t.get(&key), model.get(&key));
                    }
                }
                prop_assert_eq!(t.len(), model.len());
            }
            for (k, v) in &model {
                prop_assert_eq!(t.get(k), Some(v));
            }
            prop_assert_eq!(t.get_all().len(), model.len());
        }
    }
}
