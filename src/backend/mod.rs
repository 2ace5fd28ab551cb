//! Durable key-value backend abstraction.
//!
//! The workspace store persists every collection through this interface and
//! never assumes synchronous access. Two adapters ship with the crate: an
//! in-memory map and a file-per-key directory.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by a backend adapter
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A durable string-keyed, string-valued storage medium.
///
/// Values are the canonical serialized form of one collection. The store is
/// the sole writer of its keys; adapters only need to be safe for the
/// single-writer, many-reader access the store performs.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Delete `key`. Removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), BackendError>;

    /// Delete several keys as one call
    async fn remove_many(&self, keys: &[&str]) -> Result<(), BackendError>;
}
