use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::cache::{ttl_delta, CacheEntry, CacheTier};
use crate::nft::types::NftRecord;

/// Durable tier backed by a sqlite table indexed by write time.
#[derive(Clone)]
pub struct SqliteTier {
    pool: SqlitePool,
    ttl: Duration,
}

impl SqliteTier {
    pub async fn init(database_url: &str, ttl: Duration) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let in_memory = database_url.contains(":memory:");
        // Every connection to an in-memory database sees its own empty copy.
        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS nft_cache (\
                token_id TEXT PRIMARY KEY,\
                record_json TEXT NOT NULL,\
                cached_at INTEGER NOT NULL\
            );",
        )
        .execute(&pool)
        .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_nft_cache_cached_at ON nft_cache(cached_at);")
            .execute(&pool)
            .await?;

        info!("NFT cache table ready (in_memory={})", in_memory);
        Ok(SqliteTier { pool, ttl })
    }

    fn cutoff_millis(&self) -> i64 {
        (Utc::now() - ttl_delta(self.ttl)).timestamp_millis()
    }

    fn decode_row(&self, key: &str, record_json: &str, cached_at: i64) -> Option<CacheEntry> {
        let record = match serde_json::from_str::<NftRecord>(record_json) {
            Ok(record) => record,
            Err(err) => {
                warn!("Discarding unreadable cache row for token {}: {}", key, err);
                return None;
            }
        };
        let cached_at: DateTime<Utc> = Utc.timestamp_millis_opt(cached_at).single()?;
        Some(CacheEntry::new(record, cached_at, self.ttl))
    }
}

#[async_trait]
impl CacheTier for SqliteTier {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        let row = sqlx::query_as::<_, (String, i64)>(
            "SELECT record_json, cached_at FROM nft_cache WHERE token_id = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        let Some((record_json, cached_at)) = row else {
            return Ok(None);
        };
        match self.decode_row(key, &record_json, cached_at) {
            Some(entry) if !entry.is_expired_at(Utc::now()) => Ok(Some(entry)),
            _ => {
                self.remove(key).await?;
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, record: &NftRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO nft_cache (token_id, record_json, cached_at) VALUES (?, ?, ?) \
             ON CONFLICT(token_id) DO UPDATE SET record_json = excluded.record_json, cached_at = excluded.cached_at",
        )
        .bind(key)
        .bind(serde_json::to_string(record)?)
        .bind(Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_many(&self, keys: &[String]) -> Result<HashMap<String, CacheEntry>> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }
        let placeholders = vec!["?"; keys.len()].join(", ");
        let query = format!(
            "SELECT token_id, record_json, cached_at FROM nft_cache WHERE token_id IN ({})",
            placeholders
        );
        let mut statement = sqlx::query_as::<_, (String, String, i64)>(&query);
        for key in keys {
            statement = statement.bind(key);
        }
        let rows = statement.fetch_all(&self.pool).await?;

        let now = Utc::now();
        let mut found = HashMap::new();
        let mut stale = Vec::new();
        for (token_id, record_json, cached_at) in rows {
            match self.decode_row(&token_id, &record_json, cached_at) {
                Some(entry) if !entry.is_expired_at(now) => {
                    found.insert(token_id, entry);
                }
                _ => stale.push(token_id),
            }
        }
        for token_id in stale {
            self.remove(&token_id).await?;
        }
        Ok(found)
    }

    async fn put_many(&self, records: &[(String, NftRecord)]) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        let mut tx = self.pool.begin().await?;
        for (key, record) in records {
            sqlx::query(
                "INSERT INTO nft_cache (token_id, record_json, cached_at) VALUES (?, ?, ?) \
                 ON CONFLICT(token_id) DO UPDATE SET record_json = excluded.record_json, cached_at = excluded.cached_at",
            )
            .bind(key)
            .bind(serde_json::to_string(record)?)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM nft_cache WHERE token_id = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn clear_expired(&self) -> Result<usize> {
        let result = sqlx::query("DELETE FROM nft_cache WHERE cached_at <= ?")
            .bind(self.cutoff_millis())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() as usize)
    }

    async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM nft_cache").execute(&self.pool).await?;
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM nft_cache")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as usize)
    }
}
