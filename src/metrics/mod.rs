//! Point-in-time metrics for the cache (feature = "metrics").

pub mod snapshot;

pub use snapshot::DlfuMetricsSnapshot;
