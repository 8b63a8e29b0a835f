//! Priority-queue capability set and runtime backend selection.
//!
//! Both eviction tiers are written against [`PriorityQueue`], the small
//! capability set the decaying-count bookkeeping actually needs: top-peek,
//! push, pull (top or by handle), swap-at-top, targeted re-prioritization,
//! and a uniform positive rescale. [`QueueBackend`] packages the two
//! shipped strategies behind one concrete type so the backend can be picked
//! per cache instance:
//!
//! | Backend | Ordering                 | Used when                        |
//! |---------|--------------------------|----------------------------------|
//! | `Heap`  | `(priority, insertion)`  | any positive or infinite decay   |
//! | `Fifo`  | queue position           | time constant 0 (pure recency)   |
//!
//! The heap keeps both hot-path shapes at O(log n): a small bump of a
//! mid-queue entry after a hit, and replacing the minimum with an entry
//! whose priority lands near the minimum. The FIFO list does the same
//! operations at O(1) where ordering is structural.

use crate::ds::fifo_queue::FifoQueue;
use crate::ds::min_heap::MinHeap;
use crate::ds::slot_arena::SlotId;

/// Operations an eviction queue must provide.
///
/// Entries are `(key, priority)` pairs addressed by the stable [`SlotId`]
/// returned from [`push`](Self::push); a handle stays valid until the entry
/// is pulled. The "top" is always the current eviction candidate.
pub trait PriorityQueue<K> {
    /// Number of entries.
    fn len(&self) -> usize;

    /// `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);

    /// Top `(key, priority)` without removing it.
    fn peek(&self) -> Option<(&K, f64)>;

    /// `(key, priority)` under `id`, if live.
    fn entry(&self, id: SlotId) -> Option<(&K, f64)>;

    /// Inserts an entry, returning its stable handle.
    fn push(&mut self, key: K, priority: f64) -> SlotId;

    /// Removes and returns the top entry.
    fn pull(&mut self) -> Option<(K, f64)>;

    /// Removes and returns the entry under `id`, invalidating the handle.
    fn pull_entry(&mut self, id: SlotId) -> Option<(K, f64)>;

    /// Atomically replaces the top entry with a new one.
    ///
    /// At least as cheap as a push followed by a pull; never holds more
    /// than one extra entry. Returns the new handle and the removed
    /// `(key, priority)`, or `None` on an empty queue.
    fn swap_top(&mut self, key: K, priority: f64) -> Option<(SlotId, K, f64)>;

    /// Sets the priority under `id` and locally restores order.
    fn reprioritize(&mut self, id: SlotId, priority: f64);

    /// Multiplies every priority by a positive `factor`; order-preserving.
    fn scale(&mut self, factor: f64);

    /// Visits every `(key, priority)` in unspecified order.
    fn for_each(&self, f: &mut dyn FnMut(&K, f64));
}

impl<K> PriorityQueue<K> for MinHeap<K> {
    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn clear(&mut self) {
        MinHeap::clear(self)
    }

    fn peek(&self) -> Option<(&K, f64)> {
        MinHeap::peek(self)
    }

    fn entry(&self, id: SlotId) -> Option<(&K, f64)> {
        MinHeap::entry(self, id)
    }

    fn push(&mut self, key: K, priority: f64) -> SlotId {
        MinHeap::push(self, key, priority)
    }

    fn pull(&mut self) -> Option<(K, f64)> {
        MinHeap::pull(self)
    }

    fn pull_entry(&mut self, id: SlotId) -> Option<(K, f64)> {
        MinHeap::pull_entry(self, id)
    }

    fn swap_top(&mut self, key: K, priority: f64) -> Option<(SlotId, K, f64)> {
        MinHeap::swap_top(self, key, priority)
    }

    fn reprioritize(&mut self, id: SlotId, priority: f64) {
        MinHeap::reprioritize(self, id, priority)
    }

    fn scale(&mut self, factor: f64) {
        MinHeap::scale(self, factor)
    }

    fn for_each(&self, f: &mut dyn FnMut(&K, f64)) {
        MinHeap::for_each(self, f)
    }
}

impl<K> PriorityQueue<K> for FifoQueue<K> {
    fn len(&self) -> usize {
        FifoQueue::len(self)
    }

    fn clear(&mut self) {
        FifoQueue::clear(self)
    }

    fn peek(&self) -> Option<(&K, f64)> {
        FifoQueue::peek(self)
    }

    fn entry(&self, id: SlotId) -> Option<(&K, f64)> {
        FifoQueue::entry(self, id)
    }

    fn push(&mut self, key: K, priority: f64) -> SlotId {
        FifoQueue::push(self, key, priority)
    }

    fn pull(&mut self) -> Option<(K, f64)> {
        FifoQueue::pull(self)
    }

    fn pull_entry(&mut self, id: SlotId) -> Option<(K, f64)> {
        FifoQueue::pull_entry(self, id)
    }

    fn swap_top(&mut self, key: K, priority: f64) -> Option<(SlotId, K, f64)> {
        FifoQueue::swap_top(self, key, priority)
    }

    fn reprioritize(&mut self, id: SlotId, priority: f64) {
        FifoQueue::reprioritize(self, id, priority)
    }

    fn scale(&mut self, factor: f64) {
        FifoQueue::scale(self, factor)
    }

    fn for_each(&self, f: &mut dyn FnMut(&K, f64)) {
        FifoQueue::for_each(self, f)
    }
}

/// A queue strategy chosen at cache construction time.
#[derive(Debug)]
pub enum QueueBackend<K> {
    /// Binary min-heap ordered by `(priority, insertion sequence)`.
    Heap(MinHeap<K>),
    /// FIFO list; ordering is queue position, priorities are carried only.
    Fifo(FifoQueue<K>),
}

impl<K> QueueBackend<K> {
    /// Creates a heap-ordered backend with reserved capacity.
    pub fn heap(capacity: usize) -> Self {
        QueueBackend::Heap(MinHeap::with_capacity(capacity))
    }

    /// Creates a FIFO backend with reserved capacity.
    pub fn fifo(capacity: usize) -> Self {
        QueueBackend::Fifo(FifoQueue::with_capacity(capacity))
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        match self {
            QueueBackend::Heap(heap) => heap.debug_validate_invariants(),
            QueueBackend::Fifo(fifo) => fifo.debug_validate_invariants(),
        }
    }
}

macro_rules! delegate {
    ($self:ident, $queue:ident => $body:expr) => {
        match $self {
            QueueBackend::Heap($queue) => $body,
            QueueBackend::Fifo($queue) => $body,
        }
    };
}

impl<K> PriorityQueue<K> for QueueBackend<K> {
    fn len(&self) -> usize {
        delegate!(self, q => q.len())
    }

    fn clear(&mut self) {
        delegate!(self, q => q.clear())
    }

    fn peek(&self) -> Option<(&K, f64)> {
        delegate!(self, q => q.peek())
    }

    fn entry(&self, id: SlotId) -> Option<(&K, f64)> {
        delegate!(self, q => q.entry(id))
    }

    fn push(&mut self, key: K, priority: f64) -> SlotId {
        delegate!(self, q => q.push(key, priority))
    }

    fn pull(&mut self) -> Option<(K, f64)> {
        delegate!(self, q => q.pull())
    }

    fn pull_entry(&mut self, id: SlotId) -> Option<(K, f64)> {
        delegate!(self, q => q.pull_entry(id))
    }

    fn swap_top(&mut self, key: K, priority: f64) -> Option<(SlotId, K, f64)> {
        delegate!(self, q => q.swap_top(key, priority))
    }

    fn reprioritize(&mut self, id: SlotId, priority: f64) {
        delegate!(self, q => q.reprioritize(id, priority))
    }

    fn scale(&mut self, factor: f64) {
        delegate!(self, q => q.scale(factor))
    }

    fn for_each(&self, f: &mut dyn FnMut(&K, f64)) {
        delegate!(self, q => q.for_each(f))
    }
}
