//! Storage module
//!
//! Contains the storage contract and its implementations:
//! - `traits` - the [`LogStore`] contract all backends satisfy
//! - `memory` - the mutex-guarded, map-backed in-memory backend

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::LogStore;
