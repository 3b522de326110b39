//! Persistent key/value boundary shared by every view of the document.
//!
//! Editing and presentation surfaces never hold the document between
//! requests; they read and write it here under fixed keys, and learn
//! about each other's writes through [`PersistentStore::subscribe`].

pub mod keys;
pub mod memory;
pub mod records;
pub mod redis_store;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::broadcast;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Buffered notifications per subscriber before the slowest one starts lagging.
pub const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A change another view may want to react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    Set { key: String },
    Removed { key: String },
    Cleared,
}

/// Durable storage for the document, its presentation choices and step markers.
///
/// Implementations must give read-your-own-writes ordering: a `get` issued
/// after a completed `set` observes that value.
#[async_trait]
pub trait PersistentStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Removes every key this system owns in one step. Observers never see a
    /// partially cleared state.
    async fn clear(&self) -> Result<(), StoreError>;

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;

    /// Backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
