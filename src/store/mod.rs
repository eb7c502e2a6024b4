//! Key-value storage backends.
//!
//! Handlers never talk to a backend directly; they go through [`KvStore`] so
//! Redis and the in-memory map are interchangeable.

mod memory;
mod redis_store;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Config, StoreBackend};

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// A flat string-to-string key-value namespace.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Atomically increment the integer under `key` and return the new value.
    ///
    /// A missing key counts as 0, so the first call returns 1.
    async fn incr(&self, key: &str) -> Result<i64>;

    /// Remove `key`. Returns `false` when there was nothing to remove.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Every key currently in the store, in no particular order.
    async fn keys(&self) -> Result<Vec<String>>;

    /// Verify the backend is reachable.
    async fn ping(&self) -> Result<()>;
}

pub type SharedStore = Arc<dyn KvStore>;

/// Build the backend selected by the configuration
pub async fn from_config(config: &Config) -> Result<SharedStore> {
    match config.store_backend {
        StoreBackend::Redis => Ok(Arc::new(RedisStore::connect(&config.redis_url).await?)),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; TODOs are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
