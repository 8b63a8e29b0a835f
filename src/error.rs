//! Error types for the dlfu library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache construction parameters are
//!   invalid (zero capacity, negative or NaN time constant).
//! - [`InvariantError`]: Returned when internal data-structure invariants
//!   are violated (debug-only `check_invariants` methods).
//!
//! Expected absence of a key is not an error: lookups return `Option`, as
//! everywhere else in the crate.
//!
//! ## Example Usage
//!
//! ```
//! use dlfu::error::ConfigError;
//! use dlfu::policy::dlfu::DlfuCache;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<DlfuCache<u64, String>, ConfigError> = DlfuCache::try_new(100, 4.0);
//! assert!(cache.is_ok());
//!
//! // Invalid parameters are caught without panicking
//! let bad = DlfuCache::<u64, String>::try_new(0, 4.0);
//! assert_eq!(bad.unwrap_err(), ConfigError::ZeroSize);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache construction parameters are invalid.
///
/// Produced by [`DlfuCache::try_new`](crate::policy::dlfu::DlfuCache::try_new),
/// [`DlfuCache::try_with_meta`](crate::policy::dlfu::DlfuCache::try_with_meta)
/// and [`DlfuBuilder::try_build`](crate::builder::DlfuBuilder::try_build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The cache tier must hold at least one entry.
    ZeroSize,
    /// The decay time constant must be a non-negative number or `+∞`.
    ///
    /// Carries the rejected value; NaN and negative values land here.
    BadTimeConstant(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize => f.write_str("cache size must be at least 1"),
            ConfigError::BadTimeConstant(t) => {
                write!(f, "decay time constant must be >= 0 or +inf, got {t}")
            },
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by debug-only `check_invariants` methods on
/// [`DlfuCache`](crate::policy::dlfu::DlfuCache) and the queue types.
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_names_parameter() {
        assert!(ConfigError::ZeroSize.to_string().contains("size"));
        let err = ConfigError::BadTimeConstant(-1.0);
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn config_nan_time_constant_displays() {
        let err = ConfigError::BadTimeConstant(f64::NAN);
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("tier lengths diverged");
        assert_eq!(err.to_string(), "tier lengths diverged");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
