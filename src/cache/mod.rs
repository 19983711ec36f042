pub mod layered;
pub mod memory;
pub mod sqlite;

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::nft::types::NftRecord;

pub use layered::LayeredCache;
pub use memory::MemoryTier;
pub use sqlite::SqliteTier;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub record: NftRecord,
    pub cached_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(record: NftRecord, cached_at: DateTime<Utc>, ttl: Duration) -> Self {
        CacheEntry {
            expires_at: cached_at + ttl_delta(ttl),
            record,
            cached_at,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

pub(crate) fn ttl_delta(ttl: Duration) -> chrono::Duration {
    chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::days(365 * 100))
}

/// One storage level of the NFT read cache. Expired entries are removed by
/// the tier when they are read and reported as misses.
#[async_trait]
pub trait CacheTier: Send + Sync {
    fn name(&self) -> &'static str;

    fn capacity(&self) -> Option<usize>;

    async fn get(&self, key: &str) -> Result<Option<CacheEntry>>;

    async fn put(&self, key: &str, record: &NftRecord) -> Result<()>;

    async fn get_many(&self, keys: &[String]) -> Result<HashMap<String, CacheEntry>> {
        let mut found = HashMap::new();
        for key in keys {
            if let Some(entry) = self.get(key).await? {
                found.insert(key.clone(), entry);
            }
        }
        Ok(found)
    }

    async fn put_many(&self, records: &[(String, NftRecord)]) -> Result<()> {
        for (key, record) in records {
            self.put(key, record).await?;
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()>;

    /// Deletes every expired entry and returns how many were removed.
    async fn clear_expired(&self) -> Result<usize>;

    async fn clear(&self) -> Result<()>;

    async fn len(&self) -> Result<usize>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub count: usize,
    pub capacity: Option<usize>,
    pub persistent_count: usize,
}

/// Runs `clear_expired` on both tiers every `interval`. A zero interval
/// disables the loop.
pub fn spawn_sweep_task(cache: LayeredCache, interval: Duration) {
    if interval.is_zero() {
        info!("Cache sweep loop disabled via CACHE_SWEEP_INTERVAL_SECONDS=0");
        return;
    }

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            cache.clear_expired().await;
        }
    });
}
