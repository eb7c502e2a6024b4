use anyhow::Result;
use std::collections::BTreeMap;

use crate::store::SharedStore;

/// Key holding the ID counter. Not numeric, so it never collides with a TODO key.
pub const COUNTER_KEY: &str = "todo_id";

/// TODO list kept as one store entry per item
#[derive(Clone)]
pub struct TodoRepository {
    store: SharedStore,
}

impl TodoRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Every TODO as `"[<id>] <text>"`, keyed by ID
    ///
    /// Entries deleted between the key scan and the read are skipped.
    pub async fn list(&self) -> Result<BTreeMap<String, String>> {
        let mut todos = BTreeMap::new();
        for key in self.store.keys().await? {
            if key == COUNTER_KEY {
                continue;
            }
            if let Some(text) = self.store.get(&key).await? {
                let display = format!("[{}] {}", key, text);
                todos.insert(key, display);
            }
        }

        tracing::debug!("Listed {} todos", todos.len());
        Ok(todos)
    }

    /// Read a TODO's text
    ///
    /// # Returns
    /// * `Ok(Some(text))` - TODO exists
    /// * `Ok(None)` - no TODO with that ID
    pub async fn get(&self, id: i64) -> Result<Option<String>> {
        self.store.get(&id.to_string()).await
    }

    /// Store a new TODO under the next counter value and return its ID
    ///
    /// The counter is advanced before the text is written; if the write fails
    /// the ID is skipped, never reused.
    pub async fn create(&self, text: &str) -> Result<i64> {
        let id = self.store.incr(COUNTER_KEY).await?;
        self.store.set(&id.to_string(), text).await?;

        tracing::debug!("Created todo {}", id);
        Ok(id)
    }

    /// Remove a TODO. Returns `false` if it did not exist.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.store.delete(&id.to_string()).await
    }
}
