//! # Cache Trait Seam
//!
//! Minimal trait hierarchy for code that wants to stay generic over the
//! concrete cache type: universal operations in [`CoreCache`], arbitrary
//! keyed removal in [`MutableCache`].
//!
//! | Trait          | Extends     | Purpose                    |
//! |----------------|-------------|----------------------------|
//! | `CoreCache`    | -           | Universal cache operations |
//! | `MutableCache` | `CoreCache` | Adds keyed removal         |
//!
//! `get` takes `&mut self` throughout: a lookup is an access, and accesses
//! move eviction state (counts, recency, the decay increment).

/// Core cache operations that all caches support.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations typically require `Eq + Hash + Clone`)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use dlfu::policy::dlfu::DlfuCache;
/// use dlfu::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = DlfuCache::new(100, 4.0);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity, an entry may be evicted according to
    /// the cache's eviction policy before the new entry is inserted.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up a value by key, counting the access for eviction purposes.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if the key holds a cached value. Does not count as
    /// an access.
    fn contains(&self, key: &K) -> bool;

    /// Current number of cached entries.
    fn len(&self) -> usize;

    /// `true` if no entries are cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of cached entries.
    fn capacity(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Caches that support removing an arbitrary key.
///
/// # Example
///
/// ```
/// use dlfu::policy::dlfu::DlfuCache;
/// use dlfu::traits::{CoreCache, MutableCache};
///
/// fn invalidate<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = DlfuCache::new(10, 4.0);
/// cache.insert(1, "one".to_string());
/// invalidate(&mut cache, &[1]);
/// assert!(!cache.contains(&1));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a key, returning its value if it was cached.
    fn remove(&mut self, key: &K) -> Option<V>;
}
