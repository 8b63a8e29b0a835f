//! # Decaying-LFU Cache Implementation
//!
//! A bounded map whose eviction policy ranks entries by an exponentially
//! decaying reference count: an approximation of "accesses over the last
//! `T * size` lookups". The time constant `T` tunes the policy
//! continuously between pure LRU and pure LFU.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                        DlfuCache<K, V>                           │
//!   │                                                                  │
//!   │   values: FxHashMap<K, V>        (payloads of cache-tier keys)   │
//!   │                                                                  │
//!   │   cache: DictQueue<K>            capacity = size                 │
//!   │   ┌─────────┬───────────────┐                                    │
//!   │   │   key   │ decayed count │   top = eviction candidate         │
//!   │   ├─────────┼───────────────┤                                    │
//!   │   │ page_7  │     0.9  ◄────┼── lowest count, evicted first      │
//!   │   │ page_1  │     6.2       │                                    │
//!   │   └─────────┴───────────────┘                                    │
//!   │                                                                  │
//!   │   meta: DictQueue<K>             capacity = msize (no values)    │
//!   │   ┌─────────┬───────────────┐                                    │
//!   │   │ page_4  │     1.3       │   counts of recently evicted keys  │
//!   │   └─────────┴───────────────┘                                    │
//!   │                                                                  │
//!   │   increment: f64                 grows by α per counted access   │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Amortized decay
//!
//! Decaying every stored count per access would cost O(N). Instead the
//! per-access increment `C` grows geometrically: each counted access adds
//! the *current* `C` to the touched entry and then multiplies `C` by
//! `α = exp(1 / (T * size))`. Because the logical count of an entry is
//! `v / C`, growing `C` is identical to multiplying every logical count by
//! `1/α`: one O(1) update instead of an O(N) sweep.
//!
//! When `C` reaches 2.0 everything is halved (`C` and every stored
//! priority in both tiers). Halving is exact in binary floating point, so
//! relative order and logical counts are unaffected; the O(N) sweep runs
//! once per ~`T * size * ln 2` accesses, amortizing to O(1).
//!
//! ## The two limits
//!
//! | T     | α            | Behavior                                      |
//! |-------|--------------|-----------------------------------------------|
//! | `0`   | (structural) | Pure LRU: FIFO queues, counts pre-decayed to 0 |
//! | `t`   | `e^(1/(t*n))`| Sliding window of roughly `t * n` accesses     |
//! | `+∞`  | `1`          | Pure LFU with metadata retention               |
//!
//! ## Lookup protocol
//!
//! | Outcome    | Condition   | Effect                                          |
//! |------------|-------------|-------------------------------------------------|
//! | cache hit  | key in `c`  | value returned; count += C; C *= α              |
//! | meta hit   | key in `m`  | `None`; tracked count += C; C *= α              |
//! | total miss | neither     | `None`; counters only, tiers untouched          |
//!
//! The caller resolves a miss by producing the value and calling
//! [`insert`](DlfuCache::insert). Insertion of a key tracked in the
//! metadata tier promotes it back into the cache tier with its accumulated
//! history, which is what lets a warm key displaced by a scan regain
//! residency ahead of cold newcomers.
//!
//! ## Eviction
//!
//! Inserting into a full cache tier always evicts the minimum-count entry;
//! the evictee's key and count move to the metadata tier (displacing the
//! metadata minimum when that tier is full too). Scan resistance comes
//! from this retention, not from an admission filter.
//!
//! ## Example Usage
//!
//! ```
//! use dlfu::policy::dlfu::DlfuCache;
//!
//! let mut cache: DlfuCache<&str, u32> = DlfuCache::new(2, 4.0);
//!
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");
//! cache.get(&"a");
//!
//! // "b" has the lowest decayed count, so "c" displaces it...
//! cache.insert("c", 3);
//! assert_eq!(cache.get(&"b"), None);
//!
//! // ...but "b"'s count survives in the metadata tier, so re-inserting it
//! // promotes it back with its history intact.
//! assert!(cache.is_tracked(&"b"));
//! cache.insert("b", 2);
//! assert_eq!(cache.get(&"b"), Some(&2));
//! ```
//!
//! ## Thread Safety
//!
//! `DlfuCache` is single-owner and **not** thread-safe; wrap it in external
//! mutual exclusion for shared use.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::dict_queue::DictQueue;
use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::DlfuMetricsSnapshot;
use crate::traits::{CoreCache, MutableCache};

/// Where a key currently lives, as reported by [`DlfuCache::residency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Residency {
    /// The key holds a value in the cache tier.
    Cached,
    /// The key's count is retained in the metadata tier; no value.
    Tracked,
    /// The key is unknown to both tiers.
    Absent,
}

/// Decaying-LFU cache with metadata-tier retention.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Eq + Hash + Clone` (keys are indexed in both
///   a queue entry and a hash map)
/// - `V`: Value type (unconstrained)
///
/// # Example
///
/// ```
/// use dlfu::policy::dlfu::DlfuCache;
///
/// // T = ∞ gives classical LFU; msize = 0 disables metadata retention.
/// let mut lfu: DlfuCache<u64, &str> = DlfuCache::with_meta(2, f64::INFINITY, 0);
/// lfu.insert(1, "one");
/// lfu.insert(2, "two");
/// lfu.get(&1);
///
/// lfu.insert(3, "three"); // evicts key 2 (fewest accesses)
/// assert!(lfu.contains(&1));
/// assert!(!lfu.contains(&2));
/// ```
#[derive(Debug)]
pub struct DlfuCache<K, V> {
    size: usize,
    msize: usize,
    time_constant: f64,
    /// Per-access growth factor of the increment; 1.0 when no decay applies.
    alpha: f64,
    /// The current per-access count increment `C`; stays in `[1, 2)`.
    increment: f64,

    cache: DictQueue<K>,
    meta: DictQueue<K>,
    values: FxHashMap<K, V>,

    get_count: u64,
    set_count: u64,
    del_count: u64,
    hit_count: u64,
    mhit_count: u64,
    miss_count: u64,
}

impl<K, V> DlfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// The increment ceiling; reaching it triggers a rescale.
    const INCREMENT_CEILING: f64 = 2.0;

    /// Creates a cache holding `size` values, with a metadata tier of the
    /// same capacity.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `time_constant` is negative or NaN. Use
    /// [`try_new`](Self::try_new) to validate user-supplied parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use dlfu::policy::dlfu::DlfuCache;
    ///
    /// let cache: DlfuCache<u64, String> = DlfuCache::new(100, 4.0);
    /// assert_eq!(cache.capacity(), 100);
    /// assert_eq!(cache.meta_capacity(), 100);
    /// ```
    pub fn new(size: usize, time_constant: f64) -> Self {
        match Self::try_new(size, time_constant) {
            Ok(cache) => cache,
            Err(err) => panic!("invalid DLFU configuration: {err}"),
        }
    }

    /// Creates a cache with an explicit metadata-tier capacity.
    ///
    /// # Panics
    ///
    /// Panics on invalid parameters; see [`try_with_meta`](Self::try_with_meta).
    pub fn with_meta(size: usize, time_constant: f64, msize: usize) -> Self {
        match Self::try_with_meta(size, time_constant, msize) {
            Ok(cache) => cache,
            Err(err) => panic!("invalid DLFU configuration: {err}"),
        }
    }

    /// Fallible constructor; metadata tier defaults to `size` entries.
    ///
    /// # Example
    ///
    /// ```
    /// use dlfu::error::ConfigError;
    /// use dlfu::policy::dlfu::DlfuCache;
    ///
    /// assert!(DlfuCache::<u64, ()>::try_new(10, 0.0).is_ok());
    /// assert!(DlfuCache::<u64, ()>::try_new(10, f64::INFINITY).is_ok());
    /// assert!(matches!(
    ///     DlfuCache::<u64, ()>::try_new(10, -1.0),
    ///     Err(ConfigError::BadTimeConstant(v)) if v == -1.0
    /// ));
    /// ```
    pub fn try_new(size: usize, time_constant: f64) -> Result<Self, ConfigError> {
        Self::try_with_meta(size, time_constant, size)
    }

    /// Fallible constructor with an explicit metadata-tier capacity.
    ///
    /// `size` must be at least 1; `time_constant` must be `>= 0` or `+∞`;
    /// any `msize` (including 0, which disables retention) is valid.
    pub fn try_with_meta(
        size: usize,
        time_constant: f64,
        msize: usize,
    ) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if time_constant.is_nan() || time_constant < 0.0 {
            return Err(ConfigError::BadTimeConstant(time_constant));
        }

        // T = 0 degenerates to recency ordering: FIFO queues, no count
        // arithmetic. Any other T orders by decayed count in a heap, with
        // alpha = 1 (no growth, classical LFU) at T = ∞.
        let lru = time_constant == 0.0;
        let alpha = if lru || time_constant.is_infinite() {
            1.0
        } else {
            (1.0 / (time_constant * size as f64)).exp()
        };
        let (cache, meta) = if lru {
            (DictQueue::fifo(size), DictQueue::fifo(msize))
        } else {
            (DictQueue::heap(size), DictQueue::heap(msize))
        };

        Ok(Self {
            size,
            msize,
            time_constant,
            alpha,
            increment: 1.0,
            cache,
            meta,
            values: FxHashMap::with_capacity_and_hasher(size, Default::default()),
            get_count: 0,
            set_count: 0,
            del_count: 0,
            hit_count: 0,
            mhit_count: 0,
            miss_count: 0,
        })
    }

    // -- core operations ---------------------------------------------------

    /// Looks up `key`, counting the access.
    ///
    /// A cache hit returns the value and raises the key's decayed count. A
    /// lookup of a key tracked only in the metadata tier returns `None` but
    /// still raises its count (a "meta hit"); the caller is expected to
    /// produce the value and [`insert`](Self::insert) it, at which point
    /// the key is promoted with its history. A total miss touches nothing
    /// but the miss counter.
    ///
    /// # Example
    ///
    /// ```
    /// use dlfu::policy::dlfu::DlfuCache;
    ///
    /// let mut cache: DlfuCache<&str, u32> = DlfuCache::new(10, 4.0);
    /// cache.insert("key", 7);
    ///
    /// assert_eq!(cache.get(&"key"), Some(&7));
    /// assert_eq!(cache.get(&"missing"), None);
    /// assert_eq!(cache.hit_count(), 1);
    /// assert_eq!(cache.miss_count(), 1);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.get_count += 1;

        if self.cache.contains(key) {
            self.hit_count += 1;
            let inc = self.access_increment();
            self.cache.bump(key, inc);
            self.advance_decay();
            return self.values.get(key);
        }

        if self.meta.contains(key) {
            self.mhit_count += 1;
            let inc = self.access_increment();
            self.meta.bump(key, inc);
            self.advance_decay();
            return None;
        }

        self.miss_count += 1;
        None
    }

    /// Inserts or overwrites `key`, evicting the minimum-count entry if the
    /// cache tier is full. Returns the previous value for an overwrite.
    ///
    /// Overwriting a cached key is not a reference: the value changes, the
    /// count does not. A key tracked in the metadata tier is promoted with
    /// priority `tracked count + C`; an unknown key enters with priority
    /// `C` (a logical count of one). The evictee's count is retained in the
    /// metadata tier, displacing that tier's minimum when it is full.
    ///
    /// # Example
    ///
    /// ```
    /// use dlfu::policy::dlfu::DlfuCache;
    ///
    /// let mut cache: DlfuCache<&str, u32> = DlfuCache::new(2, 4.0);
    /// assert_eq!(cache.insert("a", 1), None);
    /// assert_eq!(cache.insert("a", 10), Some(1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.set_count += 1;

        if self.cache.contains(&key) {
            return self.values.insert(key, value);
        }

        let priority = match self.meta.remove(&key) {
            Some(history) => history + self.access_increment(),
            None => self.access_increment(),
        };

        if self.cache.len() < self.size {
            self.cache.insert(key.clone(), priority);
        } else if let Some((evicted, evicted_priority)) = self.cache.swap(key.clone(), priority) {
            self.values.remove(&evicted);
            self.retain_history(evicted, evicted_priority);
        }

        debug_assert!(self.cache.len() <= self.size, "cache tier over capacity");
        self.values.insert(key, value);
        None
    }

    /// Removes `key`, returning its value if it was cached.
    ///
    /// A key tracked only in the metadata tier is forgotten (and `None`
    /// returned). The freed cache slot is left empty until the next
    /// insertion; nothing is backfilled from the metadata tier.
    ///
    /// # Example
    ///
    /// ```
    /// use dlfu::policy::dlfu::DlfuCache;
    ///
    /// let mut cache: DlfuCache<&str, u32> = DlfuCache::new(10, 4.0);
    /// cache.insert("key", 42);
    ///
    /// assert_eq!(cache.remove(&"key"), Some(42));
    /// assert_eq!(cache.remove(&"key"), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.del_count += 1;
        if self.cache.remove(key).is_some() {
            return self.values.remove(key);
        }
        self.meta.remove(key);
        None
    }

    /// Reports which tier, if any, holds `key`. Read-only: does not count
    /// as an access and mutates nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use dlfu::policy::dlfu::{DlfuCache, Residency};
    ///
    /// let mut cache: DlfuCache<u32, u32> = DlfuCache::new(1, 4.0);
    /// cache.insert(1, 10);
    /// cache.insert(2, 20); // evicts key 1 into the metadata tier
    ///
    /// assert_eq!(cache.residency(&2), Residency::Cached);
    /// assert_eq!(cache.residency(&1), Residency::Tracked);
    /// assert_eq!(cache.residency(&3), Residency::Absent);
    /// ```
    pub fn residency(&self, key: &K) -> Residency {
        if self.cache.contains(key) {
            Residency::Cached
        } else if self.meta.contains(key) {
            Residency::Tracked
        } else {
            Residency::Absent
        }
    }

    /// Returns `true` if `key` holds a value in the cache tier. Read-only.
    pub fn contains(&self, key: &K) -> bool {
        self.cache.contains(key)
    }

    /// Returns `true` if `key` is retained in the metadata tier. Read-only.
    pub fn is_tracked(&self, key: &K) -> bool {
        self.meta.contains(key)
    }

    /// Iterates over cached `(&K, &V)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.values.iter()
    }

    /// Drops all entries, history, and statistics.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.meta.clear();
        self.values.clear();
        self.increment = 1.0;
        self.reset_stats();
    }

    /// Resets the operation and hit counters; entries and counts survive.
    pub fn reset_stats(&mut self) {
        self.get_count = 0;
        self.set_count = 0;
        self.del_count = 0;
        self.hit_count = 0;
        self.mhit_count = 0;
        self.miss_count = 0;
    }

    // -- decay bookkeeping -------------------------------------------------

    /// The amount a counted access adds to the touched entry.
    ///
    /// Zero in the T = 0 limit, where counts are pre-decayed and ordering
    /// is structural (a touch re-queues the entry instead).
    fn access_increment(&self) -> f64 {
        if self.time_constant == 0.0 {
            0.0
        } else {
            self.increment
        }
    }

    /// Grows the increment after a counted access; rescales on overflow.
    fn advance_decay(&mut self) {
        if self.alpha == 1.0 {
            return;
        }
        self.increment *= self.alpha;
        while self.increment >= Self::INCREMENT_CEILING {
            self.rescale();
        }
    }

    /// Halves the increment and every stored priority in both tiers.
    ///
    /// Exact in binary floating point, so relative order and logical
    /// counts (`v / C`) are unchanged.
    fn rescale(&mut self) {
        self.increment *= 0.5;
        self.cache.scale(0.5);
        self.meta.scale(0.5);
    }

    /// Retains an evicted key's count in the metadata tier.
    ///
    /// The evictee is always admitted; a full metadata tier drops its
    /// then-minimum to make room.
    fn retain_history(&mut self, key: K, priority: f64) {
        if self.msize == 0 {
            return;
        }
        if self.meta.len() < self.msize {
            self.meta.insert(key, priority);
        } else {
            self.meta.swap(key, priority);
        }
        debug_assert!(self.meta.len() <= self.msize, "metadata tier over capacity");
    }

    // -- introspection -----------------------------------------------------

    /// Maximum number of cached values.
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Maximum number of metadata-tier entries.
    pub fn meta_capacity(&self) -> usize {
        self.msize
    }

    /// The decay time constant `T`.
    pub fn time_constant(&self) -> f64 {
        self.time_constant
    }

    /// The current per-access increment `C`.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if no values are cached.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of keys tracked in the metadata tier.
    pub fn meta_len(&self) -> usize {
        self.meta.len()
    }

    /// Lookups performed.
    pub fn get_count(&self) -> u64 {
        self.get_count
    }

    /// Insertions performed.
    pub fn set_count(&self) -> u64 {
        self.set_count
    }

    /// Removals performed.
    pub fn del_count(&self) -> u64 {
        self.del_count
    }

    /// Lookups that found a cached value.
    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    /// Lookups that found only metadata-tier history.
    pub fn meta_hit_count(&self) -> u64 {
        self.mhit_count
    }

    /// Lookups that found nothing in either tier.
    pub fn miss_count(&self) -> u64 {
        self.miss_count
    }

    /// Fraction of lookups that hit the cache tier; NaN before any lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.get_count == 0 {
            f64::NAN
        } else {
            self.hit_count as f64 / self.get_count as f64
        }
    }

    /// Fraction of lookups that hit only the metadata tier; NaN before any
    /// lookup.
    pub fn meta_hit_rate(&self) -> f64 {
        if self.get_count == 0 {
            f64::NAN
        } else {
            self.mhit_count as f64 / self.get_count as f64
        }
    }

    /// Fraction of lookups that hit either tier; NaN before any lookup.
    pub fn total_hit_rate(&self) -> f64 {
        if self.get_count == 0 {
            f64::NAN
        } else {
            (self.hit_count + self.mhit_count) as f64 / self.get_count as f64
        }
    }

    /// The logical (decayed) access count of `key` in either tier, or 0.0
    /// for an unknown key. Read-only.
    ///
    /// # Example
    ///
    /// ```
    /// use dlfu::policy::dlfu::DlfuCache;
    ///
    /// let mut cache: DlfuCache<&str, u32> = DlfuCache::new(4, f64::INFINITY);
    /// cache.insert("a", 1);
    /// cache.get(&"a");
    /// cache.get(&"a");
    ///
    /// // One insertion + two hits, no decay at T = ∞.
    /// assert_eq!(cache.count(&"a"), 3.0);
    /// assert_eq!(cache.count(&"missing"), 0.0);
    /// ```
    pub fn count(&self, key: &K) -> f64 {
        self.cache
            .priority(key)
            .or_else(|| self.meta.priority(key))
            .map(|priority| priority / self.increment)
            .unwrap_or(0.0)
    }

    /// The key next in line for eviction and its logical count, or `None`
    /// when the cache tier is empty. Read-only, O(1).
    pub fn eviction_candidate(&self) -> Option<(&K, f64)> {
        self.cache.peek().map(|(k, p)| (k, p / self.increment))
    }

    /// The smallest logical count in the cache tier (the eviction
    /// candidate's), or `None` when empty. O(1).
    pub fn count_min(&self) -> Option<f64> {
        self.cache.peek().map(|(_, p)| p / self.increment)
    }

    /// The mean logical count over cached entries, or `None` when empty.
    /// O(len).
    pub fn count_avg(&self) -> Option<f64> {
        if self.cache.is_empty() {
            return None;
        }
        let mut sum = 0.0;
        self.cache.for_each(|_, p| sum += p);
        Some(sum / (self.increment * self.cache.len() as f64))
    }

    /// The smallest logical count in the metadata tier, or `None` when
    /// empty. O(1).
    pub fn meta_count_min(&self) -> Option<f64> {
        self.meta.peek().map(|(_, p)| p / self.increment)
    }

    /// The mean logical count over metadata-tier entries, or `None` when
    /// empty. O(meta_len).
    pub fn meta_count_avg(&self) -> Option<f64> {
        if self.meta.is_empty() {
            return None;
        }
        let mut sum = 0.0;
        self.meta.for_each(|_, p| sum += p);
        Some(sum / (self.increment * self.meta.len() as f64))
    }

    /// Packages the counters and gauges into a snapshot.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> DlfuMetricsSnapshot {
        DlfuMetricsSnapshot {
            get_calls: self.get_count,
            set_calls: self.set_count,
            del_calls: self.del_count,
            hits: self.hit_count,
            meta_hits: self.mhit_count,
            misses: self.miss_count,
            cache_len: self.values.len(),
            meta_len: self.meta.len(),
            capacity: self.size,
            meta_capacity: self.msize,
            increment: self.increment,
        }
    }

    // -- debug-only checks -------------------------------------------------

    /// Forces a rescale outside the normal overflow trigger.
    ///
    /// Observable state (relative order, lookup results, logical counts)
    /// must be unchanged by this; the increment may temporarily leave its
    /// steady-state range. Exists so tests can verify rescale idempotence.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_force_rescale(&mut self) {
        self.rescale();
    }

    /// Validates the structural invariants of both tiers.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.cache.len() > self.size {
            return Err(InvariantError::new("cache tier over capacity"));
        }
        if self.meta.len() > self.msize {
            return Err(InvariantError::new("metadata tier over capacity"));
        }
        if self.values.len() != self.cache.len() {
            return Err(InvariantError::new("value map diverged from cache tier"));
        }
        if !(1.0..Self::INCREMENT_CEILING).contains(&self.increment) {
            return Err(InvariantError::new(format!(
                "increment {} outside [1, 2)",
                self.increment
            )));
        }
        if self.hit_count + self.mhit_count + self.miss_count != self.get_count {
            return Err(InvariantError::new("lookup outcomes do not sum to lookups"));
        }

        let mut bad_priority = false;
        let mut overlap = false;
        let mut missing_value = false;
        self.cache.for_each(|key, priority| {
            bad_priority |= !priority.is_finite() || priority < 0.0;
            missing_value |= !self.values.contains_key(key);
        });
        self.meta.for_each(|key, priority| {
            bad_priority |= !priority.is_finite() || priority < 0.0;
            overlap |= self.cache.contains(key);
        });
        if bad_priority {
            return Err(InvariantError::new("non-finite or negative priority"));
        }
        if overlap {
            return Err(InvariantError::new("key resident in both tiers"));
        }
        if missing_value {
            return Err(InvariantError::new("cached key without a value"));
        }

        self.cache.debug_validate_invariants();
        self.meta.debug_validate_invariants();
        Ok(())
    }
}

/// Core cache operations for the decaying-LFU cache.
impl<K, V> CoreCache<K, V> for DlfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        DlfuCache::insert(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        DlfuCache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        DlfuCache::contains(self, key)
    }

    fn len(&self) -> usize {
        DlfuCache::len(self)
    }

    fn capacity(&self) -> usize {
        DlfuCache::capacity(self)
    }

    fn clear(&mut self) {
        DlfuCache::clear(self)
    }
}

/// Keyed removal for the decaying-LFU cache.
impl<K, V> MutableCache<K, V> for DlfuCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        DlfuCache::remove(self, key)
    }
}

// ==============================================
// DLFU CACHE TESTS
// ==============================================
