//! Builder for configuring a decaying-LFU cache.
//!
//! Collects the tuning knobs (capacity, decay time constant, metadata-tier
//! capacity) behind a fluent API and validates them in one place.
//!
//! ## Example
//!
//! ```rust
//! use dlfu::builder::DlfuBuilder;
//!
//! let mut cache = DlfuBuilder::new(100)
//!     .time_constant(8.0)
//!     .meta_capacity(200)
//!     .build::<u64, String>();
//!
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use crate::error::ConfigError;
use crate::policy::dlfu::DlfuCache;

/// Default decay time constant: a history window of roughly four cache
/// sizes' worth of accesses.
pub const DEFAULT_TIME_CONSTANT: f64 = 4.0;

/// Builder for [`DlfuCache`] instances.
#[derive(Debug, Clone)]
pub struct DlfuBuilder {
    size: usize,
    time_constant: f64,
    meta_capacity: Option<usize>,
}

impl DlfuBuilder {
    /// Creates a builder for a cache holding `size` values.
    ///
    /// The time constant defaults to [`DEFAULT_TIME_CONSTANT`] and the
    /// metadata tier defaults to `size` entries.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            time_constant: DEFAULT_TIME_CONSTANT,
            meta_capacity: None,
        }
    }

    /// Sets the decay time constant `T`.
    ///
    /// `0` behaves as pure LRU, `f64::INFINITY` as pure LFU; values in
    /// between weight roughly the last `T * size` accesses.
    pub fn time_constant(mut self, t: f64) -> Self {
        self.time_constant = t;
        self
    }

    /// Sets the metadata-tier capacity; `0` disables retention.
    pub fn meta_capacity(mut self, msize: usize) -> Self {
        self.meta_capacity = Some(msize);
        self
    }

    /// Builds the cache.
    ///
    /// # Panics
    ///
    /// Panics on an invalid configuration; use
    /// [`try_build`](Self::try_build) for user-supplied parameters.
    pub fn build<K, V>(self) -> DlfuCache<K, V>
    where
        K: Eq + std::hash::Hash + Clone,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(err) => panic!("invalid DLFU configuration: {err}"),
        }
    }

    /// Builds the cache, reporting configuration errors.
    ///
    /// # Example
    ///
    /// ```
    /// use dlfu::builder::DlfuBuilder;
    /// use dlfu::error::ConfigError;
    ///
    /// let err = DlfuBuilder::new(0).try_build::<u64, u64>().unwrap_err();
    /// assert_eq!(err, ConfigError::ZeroSize);
    /// ```
    pub fn try_build<K, V>(self) -> Result<DlfuCache<K, V>, ConfigError>
    where
        K: Eq + std::hash::Hash + Clone,
    {
        let msize = self.meta_capacity.unwrap_or(self.size);
        DlfuCache::try_with_meta(self.size, self.time_constant, msize)
    }
}
