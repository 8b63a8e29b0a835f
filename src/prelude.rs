pub use crate::builder::DlfuBuilder;
pub use crate::ds::{DictQueue, FifoQueue, MinHeap, PriorityQueue, QueueBackend, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::dlfu::{DlfuCache, Residency};
pub use crate::traits::{CoreCache, MutableCache};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::DlfuMetricsSnapshot;
