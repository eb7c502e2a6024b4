use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};

use super::KvStore;

/// Keys fetched per SCAN round trip
const SCAN_BATCH: usize = 100;

/// Redis-backed store
///
/// `ConnectionManager` reconnects on its own and is cheap to clone, so every
/// call works on a clone instead of holding a lock.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis at `redis_url` (`redis://host:port/db`)
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = Client::open(redis_url)
            .with_context(|| format!("Invalid Redis URL: {}", redis_url))?;
        let conn = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;

        tracing::info!("Successfully connected to Redis: {}", redis_url);
        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .with_context(|| format!("Failed to GET {}", key))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set(key, value)
            .await
            .with_context(|| format!("Failed to SET {}", key))?;
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = conn
            .incr(key, 1)
            .await
            .with_context(|| format!("Failed to INCR {}", key))?;
        Ok(value)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn
            .del(key)
            .await
            .with_context(|| format!("Failed to DEL {}", key))?;
        Ok(removed > 0)
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let mut keys = Vec::new();
        let mut cursor = 0u64;

        // SCAN instead of KEYS so a large keyspace never blocks the server
        loop {
            let (next_cursor, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .context("Failed to SCAN keys")?;

            keys.extend(batch);

            cursor = next_cursor;
            if cursor == 0 {
                break;
            }
        }

        // SCAN may report a key more than once
        keys.sort_unstable();
        keys.dedup();

        tracing::debug!("Scanned {} keys", keys.len());
        Ok(keys)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("Failed to PING Redis")?;
        Ok(())
    }
}
