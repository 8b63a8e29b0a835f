//! Key-addressed view over a priority queue.
//!
//! A [`DictQueue`] pairs a [`QueueBackend`] with an `FxHashMap` from key to
//! entry handle, so any key can be peeked, re-prioritized, or removed
//! directly while the queue keeps the eviction candidate at the top. This
//! is the layer both cache tiers are built from: the cache tier tracks the
//! decayed count of every resident key, the metadata tier tracks the counts
//! of recently evicted keys.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────┐    ┌────────────────────────────────┐
//!   │ index: FxHashMap<K, SlotId> │    │ queue: QueueBackend<K>         │
//!   │                             │    │                                │
//!   │   "a" ──► id_0 ────────────────────► (a, 0.9)  ◄─ top (min)       │
//!   │   "b" ──► id_1 ────────────────────► (b, 2.3)                     │
//!   │   "c" ──► id_2 ────────────────────► (c, 7.1)                     │
//!   └─────────────────────────────┘    └────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation  | Description                                  | Complexity |
//! |------------|----------------------------------------------|------------|
//! | `insert`   | Push, or set priority + re-position if known | O(log n)   |
//! | `bump`     | Add to a key's priority and re-position      | O(log n)   |
//! | `priority` | Read a key's priority                        | O(1)       |
//! | `pull`     | Remove the top entry                         | O(log n)   |
//! | `remove`   | Remove by key                                | O(log n)   |
//! | `swap`     | Replace the top entry with a new key         | O(log n)   |
//! | `scale`    | Multiply all priorities (order kept)         | O(n)       |
//!
//! Capacity is deliberately not enforced here: bounding the tiers is the
//! cache's job, so pushing an extra entry is always allowed.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::queue::{PriorityQueue, QueueBackend};
use crate::ds::slot_arena::SlotId;

/// Priority queue with O(1) key-to-entry addressing.
///
/// # Example
///
/// ```
/// use dlfu::ds::dict_queue::DictQueue;
///
/// let mut queue = DictQueue::heap(8);
/// queue.insert("a", 1.0);
/// queue.insert("b", 4.0);
///
/// assert_eq!(queue.priority(&"a"), Some(1.0));
/// assert_eq!(queue.peek(), Some((&"a", 1.0)));
///
/// // A hit adds the current increment to the touched key.
/// queue.bump(&"a", 5.0);
/// assert_eq!(queue.peek(), Some((&"b", 4.0)));
///
/// // Replacing the top admits a newcomer and reports the evictee.
/// assert_eq!(queue.swap("c", 2.0), Some(("b", 4.0)));
/// assert!(queue.contains(&"c"));
/// ```
#[derive(Debug)]
pub struct DictQueue<K> {
    queue: QueueBackend<K>,
    index: FxHashMap<K, SlotId>,
}

impl<K> DictQueue<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a heap-ordered queue with reserved capacity.
    pub fn heap(capacity: usize) -> Self {
        Self {
            queue: QueueBackend::heap(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Creates a FIFO-ordered queue with reserved capacity.
    pub fn fifo(capacity: usize) -> Self {
        Self {
            queue: QueueBackend::fifo(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns `key`'s priority, if present.
    pub fn priority(&self, key: &K) -> Option<f64> {
        let id = *self.index.get(key)?;
        self.queue.entry(id).map(|(_, priority)| priority)
    }

    /// Returns the top `(key, priority)` without removing it.
    pub fn peek(&self) -> Option<(&K, f64)> {
        self.queue.peek()
    }

    /// Inserts `key` at `priority`, or re-prioritizes it if already present.
    pub fn insert(&mut self, key: K, priority: f64) {
        if let Some(&id) = self.index.get(&key) {
            self.queue.reprioritize(id, priority);
        } else {
            let id = self.queue.push(key.clone(), priority);
            self.index.insert(key, id);
        }
    }

    /// Adds `delta` to `key`'s priority, re-positioning it, and returns the
    /// new priority. `None` if the key is absent.
    ///
    /// A zero delta still counts as a touch: the entry is re-positioned,
    /// which moves it to the back of a FIFO-ordered queue.
    pub fn bump(&mut self, key: &K, delta: f64) -> Option<f64> {
        let id = *self.index.get(key)?;
        let (_, priority) = self.queue.entry(id)?;
        let updated = priority + delta;
        self.queue.reprioritize(id, updated);
        Some(updated)
    }

    /// Removes and returns the top entry.
    pub fn pull(&mut self) -> Option<(K, f64)> {
        let (key, priority) = self.queue.pull()?;
        self.index.remove(&key);
        Some((key, priority))
    }

    /// Removes `key`'s entry and returns its priority.
    pub fn remove(&mut self, key: &K) -> Option<f64> {
        let id = self.index.remove(key)?;
        self.queue.pull_entry(id).map(|(_, priority)| priority)
    }

    /// Replaces the top entry with `(key, priority)` and returns the
    /// removed `(key, priority)`.
    ///
    /// Never holds more than one extra entry. `key` must not already be
    /// present; callers route known keys through [`insert`](Self::insert).
    pub fn swap(&mut self, key: K, priority: f64) -> Option<(K, f64)> {
        debug_assert!(!self.contains(&key), "swap with resident key");
        let (id, old_key, old_priority) = self.queue.swap_top(key.clone(), priority)?;
        self.index.remove(&old_key);
        self.index.insert(key, id);
        Some((old_key, old_priority))
    }

    /// Multiplies every priority by a positive `factor`; order-preserving.
    pub fn scale(&mut self, factor: f64) {
        self.queue.scale(factor);
    }

    /// Visits every `(key, priority)` in unspecified order.
    pub fn for_each(&self, mut f: impl FnMut(&K, f64)) {
        self.queue.for_each(&mut f);
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.queue.debug_validate_invariants();
        assert_eq!(self.index.len(), self.queue.len());
        for (key, &id) in &self.index {
            let (stored, _) = self.queue.entry(id).expect("index refers to live entry");
            assert!(stored == key, "index key does not match queue entry");
        }
    }
}
