//! File System Implementations
//!
//! - `LocalFs` - local disk, atomic writes
//! - `MemoryFs` - in-memory, for tests

mod local;
mod memory;

pub use local::{atomic_write, LocalFs};
pub use memory::MemoryFs;
