//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory natively)
//! - Wall-clock timestamps

pub mod storage;
pub mod time;

pub use storage::{MemoryStorage, StorageBackend};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use time::timestamp;
