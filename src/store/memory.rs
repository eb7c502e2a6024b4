use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::KvStore;

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("In-memory store lock poisoned"))
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        let mut entries = self.lock()?;
        let current = match entries.get(key) {
            Some(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("Value under {} is not an integer", key))?,
            None => 0,
        };
        let next = current + 1;
        entries.insert(key.to_string(), next.to_string());
        Ok(next)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<()> {
        self.lock().map(|_| ())
    }
}
