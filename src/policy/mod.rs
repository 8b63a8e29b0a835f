pub mod dlfu;

pub use dlfu::{DlfuCache, Residency};
