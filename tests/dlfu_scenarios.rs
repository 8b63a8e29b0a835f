// ==============================================
// END-TO-END CACHE BEHAVIOR (integration)
// ==============================================
//
// Scenario tests that drive the full cache through its public API: the
// LFU and LRU limits, metadata retention and promotion, decay stability
// under sustained load, deletion semantics, and scan behavior. These span
// the queue layers and the decay bookkeeping together and belong here
// rather than in any single source file.

use dlfu::policy::dlfu::{DlfuCache, Residency};

// ==============================================
// Policy Limits
// ==============================================

#[test]
fn lfu_limit_displaces_fewest_accessed() {
    // T = ∞, no metadata: classical LFU.
    let mut cache: DlfuCache<&str, u32> = DlfuCache::with_meta(2, f64::INFINITY, 0);

    cache.insert("a", 1);
    cache.insert("b", 2);
    for _ in 0..3 {
        cache.get(&"a");
    }
    cache.get(&"b");

    cache.insert("c", 3);

    assert_eq!(cache.get(&"a"), Some(&1));
    assert_eq!(cache.get(&"c"), Some(&3));
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.residency(&"b"), Residency::Absent);
}

#[test]
fn lfu_limit_breaks_ties_by_insertion_order() {
    let mut cache: DlfuCache<u32, u32> = DlfuCache::with_meta(3, f64::INFINITY, 0);
    cache.insert(1, 10);
    cache.insert(2, 20);
    cache.insert(3, 30);

    // Equal counts everywhere: eviction order must be insertion order.
    cache.insert(4, 40);
    assert!(!cache.contains(&1));
    cache.insert(5, 50);
    assert!(!cache.contains(&2));
    assert!(cache.contains(&3));
    assert!(cache.contains(&4));
    assert!(cache.contains(&5));
}

#[test]
fn lru_limit_displaces_least_recent() {
    // T = 0, no metadata: pure LRU.
    let mut cache: DlfuCache<&str, u32> = DlfuCache::with_meta(2, 0.0, 0);

    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.get(&"a");

    cache.insert("c", 3);

    assert_eq!(cache.get(&"a"), Some(&1));
    assert_eq!(cache.get(&"c"), Some(&3));
    assert_eq!(cache.get(&"b"), None);
}

#[test]
fn lru_limit_matches_reference_deque() {
    // Drive the T = 0 cache and a VecDeque recency model with the same
    // accesses; eviction order must match exactly.
    use std::collections::VecDeque;

    let capacity = 4usize;
    let mut cache: DlfuCache<u32, u32> = DlfuCache::with_meta(capacity, 0.0, 0);
    let mut reference: VecDeque<u32> = VecDeque::new();

    let accesses: Vec<u32> = vec![
        1, 2, 3, 4, 1, 5, 2, 6, 6, 3, 7, 1, 8, 2, 9, 4, 4, 1, 10, 3,
    ];
    for key in accesses {
        if cache.get(&key).is_none() {
            cache.insert(key, key * 10);
        }
        if let Some(pos) = reference.iter().position(|&k| k == key) {
            reference.remove(pos);
        } else if reference.len() >= capacity {
            reference.pop_front();
        }
        reference.push_back(key);

        assert_eq!(cache.len(), reference.len());
        for &resident in &reference {
            assert!(cache.contains(&resident), "missing key {resident}");
        }
        // The eviction candidate is the least recently used key.
        let (candidate, _) = cache.eviction_candidate().unwrap();
        assert_eq!(*candidate, reference[0]);
    }
}

// ==============================================
// Metadata Retention
// ==============================================

#[test]
fn metadata_retention_and_promotion() {
    let mut cache: DlfuCache<&str, u32> = DlfuCache::with_meta(2, 4.0, 2);

    cache.insert("a", 1);
    cache.insert("b", 2);
    for _ in 0..5 {
        assert_eq!(cache.get(&"a"), Some(&1));
    }

    cache.insert("c", 3); // evicts b (count 1) into the metadata tier
    assert_eq!(cache.residency(&"b"), Residency::Tracked);

    cache.insert("d", 4); // evicts c (fresher but lower count than a)
    assert_eq!(cache.residency(&"c"), Residency::Tracked);
    assert_eq!(cache.residency(&"a"), Residency::Cached);
    assert_eq!(cache.meta_len(), 2);

    // Meta hit: the lookup misses but the history is credited.
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.hit_count(), 5);
    assert_eq!(cache.meta_hit_count(), 1);
    assert_eq!(cache.miss_count(), 0);

    // Promotion carries the accumulated count back into the cache tier,
    // displacing the weakest resident (d).
    cache.insert("b", 2);
    assert_eq!(cache.residency(&"b"), Residency::Cached);
    assert_eq!(cache.residency(&"a"), Residency::Cached);
    assert_eq!(cache.residency(&"d"), Residency::Tracked);
    cache.check_invariants().unwrap();
}

#[test]
fn tier_round_trip_of_an_untouched_key() {
    // size = 1, msize = 1: one insertion pushes a key to the metadata
    // tier, a second pushes it out entirely.
    let mut cache: DlfuCache<u32, u32> = DlfuCache::new(1, 4.0);

    cache.insert(1, 10);
    assert_eq!(cache.residency(&1), Residency::Cached);

    cache.insert(2, 20);
    assert_eq!(cache.residency(&1), Residency::Tracked);

    cache.insert(3, 30);
    assert_eq!(cache.residency(&1), Residency::Absent);
    assert_eq!(cache.residency(&2), Residency::Tracked);
    assert_eq!(cache.residency(&3), Residency::Cached);
}

#[test]
fn deletion_frees_slot_without_backfill() {
    let mut cache: DlfuCache<&str, u32> = DlfuCache::with_meta(2, 4.0, 2);

    cache.insert("a", 1);
    cache.insert("b", 2);
    let meta_before = cache.meta_len();

    assert_eq!(cache.remove(&"a"), Some(1));
    assert_eq!(cache.len(), 1);
    // Removal discards the entry: nothing moves into the metadata tier.
    assert_eq!(cache.meta_len(), meta_before);
    assert_eq!(cache.residency(&"a"), Residency::Absent);

    cache.insert("c", 3);
    assert_eq!(cache.len(), 2);
    assert!(cache.contains(&"b"));
    assert!(cache.contains(&"c"));
    cache.check_invariants().unwrap();
}

// ==============================================
// Scan Behavior
// ==============================================

#[test]
fn scan_preserves_warm_set_across_tiers() {
    // Warm four keys, then stream distinct cold keys through. Each scan
    // key enters at the minimum count and is displaced by its successor;
    // the warm set survives: three keys stay cached and the first-displaced
    // one rides out the scan in the metadata tier.
    let warm: [u32; 4] = [0, 1, 2, 3];
    let mut cache: DlfuCache<u32, u32> = DlfuCache::with_meta(4, 16.0, 4);

    for &key in &warm {
        cache.insert(key, key);
    }
    for _ in 0..3 {
        for &key in &warm {
            assert_eq!(cache.get(&key), Some(&key));
        }
    }

    for i in 0..200u32 {
        let scan_key = 100 + i;
        assert_eq!(cache.get(&scan_key), None);
        cache.insert(scan_key, scan_key);

        // The newcomer is cached but immediately the next eviction victim.
        assert!(cache.contains(&scan_key));
        let (candidate, _) = cache.eviction_candidate().unwrap();
        assert_eq!(*candidate, scan_key);

        let cached = warm.iter().filter(|k| cache.contains(k)).count();
        let tracked = warm.iter().filter(|k| cache.is_tracked(k)).count();
        if i == 0 {
            // First scan insertion displaces exactly one warm key into m.
            assert_eq!(cached, 3);
            assert_eq!(tracked, 1);
        } else {
            // Steady state, for arbitrarily long scans.
            assert_eq!(cached, 3, "warm keys fell out of the cache at i={i}");
            assert_eq!(tracked, 1, "warm key fell out of the metadata at i={i}");
            // The previous scan key was displaced into the metadata tier.
            assert!(cache.is_tracked(&(scan_key - 1)));
        }
    }
    cache.check_invariants().unwrap();
}

// ==============================================
// Decay Stability
// ==============================================

#[test]
fn sustained_load_keeps_decay_stable() {
    // Hammer two keys for 10k rounds; the increment must stay inside
    // [1, 2), counts must stay non-negative, and the amortized count of
    // the hot key must track the eagerly computed expectation.
    let size = 64usize;
    let t = 1.0f64;
    let alpha = (1.0 / (t * size as f64)).exp();

    let mut cache: DlfuCache<u32, u32> = DlfuCache::new(size, t);
    cache.insert(0, 0);
    cache.insert(1, 1);

    // Key 0 enters with a logical count of 1.
    let mut expected = 1.0f64;

    for round in 0..10_000 {
        assert_eq!(cache.get(&0), Some(&0));
        expected = (expected + 1.0) / alpha;

        // A hit on the other key decays key 0 by one more step.
        assert_eq!(cache.get(&1), Some(&1));
        expected /= alpha;

        let c = cache.increment();
        assert!((1.0..2.0).contains(&c), "increment {c} escaped [1, 2)");
        let count = cache.count(&0);
        assert!(count >= 0.0);
        assert!(
            (count - expected).abs() < 1e-9,
            "round {round}: amortized {count} vs eager {expected}"
        );
    }
    cache.check_invariants().unwrap();
}

#[test]
fn forced_rescale_is_unobservable() {
    // Two caches, identical op streams; one gets an extra rescale in the
    // middle. All later observable behavior must coincide.
    let drive = |cache: &mut DlfuCache<u32, u32>, ops: &[u32]| {
        for &key in ops {
            if cache.get(&key).is_none() {
                cache.insert(key, key * 10);
            }
        }
    };

    let mut plain: DlfuCache<u32, u32> = DlfuCache::with_meta(4, 4.0, 4);
    let mut rescaled: DlfuCache<u32, u32> = DlfuCache::with_meta(4, 4.0, 4);

    let head: Vec<u32> = vec![1, 2, 3, 4, 1, 1, 2, 5, 6, 1, 3];
    drive(&mut plain, &head);
    drive(&mut rescaled, &head);

    rescaled.debug_force_rescale();

    let tail: Vec<u32> = vec![7, 1, 8, 2, 9, 1, 5, 5, 3, 10, 1, 2];
    drive(&mut plain, &tail);
    drive(&mut rescaled, &tail);

    for key in 0..12u32 {
        assert_eq!(plain.residency(&key), rescaled.residency(&key), "key {key}");
        let (a, b) = (plain.count(&key), rescaled.count(&key));
        assert!((a - b).abs() < 1e-9, "key {key}: {a} vs {b}");
    }
    assert_eq!(plain.hit_count(), rescaled.hit_count());
    assert_eq!(plain.meta_hit_count(), rescaled.meta_hit_count());
    assert_eq!(plain.miss_count(), rescaled.miss_count());
}

// ==============================================
// Counter Accounting
// ==============================================

#[test]
fn lookup_outcomes_partition_lookups() {
    let mut cache: DlfuCache<u32, u32> = DlfuCache::new(2, 4.0);
    cache.insert(1, 1);
    cache.insert(2, 2);
    cache.insert(3, 3); // 1 tracked

    for key in [1, 2, 3, 4, 5, 1, 2, 99] {
        cache.get(&key);
    }

    assert_eq!(
        cache.hit_count() + cache.meta_hit_count() + cache.miss_count(),
        cache.get_count()
    );
    assert_eq!(cache.get_count(), 8);
    cache.check_invariants().unwrap();
}
