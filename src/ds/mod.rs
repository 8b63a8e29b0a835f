pub mod dict_queue;
pub mod fifo_queue;
pub mod min_heap;
pub mod queue;
pub mod slot_arena;

pub use dict_queue::DictQueue;
pub use fifo_queue::FifoQueue;
pub use min_heap::MinHeap;
pub use queue::{PriorityQueue, QueueBackend};
pub use slot_arena::{SlotArena, SlotId};
