use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheTier};
use crate::error::AppError;
use crate::nft::types::NftRecord;

/// Read-through cache over a fast tier and a durable tier. Tier failures are
/// logged and treated as misses so callers always fall back to a live read.
#[derive(Clone)]
pub struct LayeredCache {
    fast: Arc<dyn CacheTier>,
    durable: Arc<dyn CacheTier>,
}

impl LayeredCache {
    pub fn new(fast: Arc<dyn CacheTier>, durable: Arc<dyn CacheTier>) -> Self {
        LayeredCache { fast, durable }
    }

    fn soft<T>(tier: &dyn CacheTier, operation: &str, result: anyhow::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("{} cache {} failed: {}", tier.name(), operation, err);
                None
            }
        }
    }

    pub async fn get(&self, key: &str) -> Option<NftRecord> {
        if let Some(Some(entry)) = Self::soft(self.fast.as_ref(), "get", self.fast.get(key).await) {
            return Some(entry.record);
        }

        let entry = Self::soft(self.durable.as_ref(), "get", self.durable.get(key).await)??;
        debug!("Promoting token {} from {} cache", key, self.durable.name());
        Self::soft(
            self.fast.as_ref(),
            "promote",
            self.fast.put(key, &entry.record).await,
        );
        Some(entry.record)
    }

    pub async fn set(&self, key: &str, record: &NftRecord) {
        Self::soft(self.fast.as_ref(), "set", self.fast.put(key, record).await);
        Self::soft(self.durable.as_ref(), "set", self.durable.put(key, record).await);
    }

    /// Returns the subset of `keys` found in either tier.
    pub async fn get_batch(&self, keys: &[String]) -> HashMap<String, NftRecord> {
        let mut found: HashMap<String, NftRecord> =
            Self::soft(self.fast.as_ref(), "get_batch", self.fast.get_many(keys).await)
                .unwrap_or_default()
                .into_iter()
                .map(|(key, entry)| (key, entry.record))
                .collect();

        let missing: Vec<String> = keys
            .iter()
            .filter(|key| !found.contains_key(*key))
            .cloned()
            .collect();
        if missing.is_empty() {
            return found;
        }

        let promoted: Vec<(String, NftRecord)> = Self::soft(
            self.durable.as_ref(),
            "get_batch",
            self.durable.get_many(&missing).await,
        )
        .unwrap_or_default()
        .into_iter()
        .map(|(key, entry)| (key, entry.record))
        .collect();
        if !promoted.is_empty() {
            Self::soft(
                self.fast.as_ref(),
                "promote",
                self.fast.put_many(&promoted).await,
            );
        }
        found.extend(promoted);
        found
    }

    pub async fn set_batch(&self, records: &[(String, NftRecord)]) {
        if records.is_empty() {
            return;
        }
        Self::soft(self.fast.as_ref(), "set_batch", self.fast.put_many(records).await);
        Self::soft(
            self.durable.as_ref(),
            "set_batch",
            self.durable.put_many(records).await,
        );
    }

    pub async fn invalidate(&self, key: &str) {
        Self::soft(self.fast.as_ref(), "invalidate", self.fast.remove(key).await);
        Self::soft(self.durable.as_ref(), "invalidate", self.durable.remove(key).await);
        debug!("Invalidated cached token {}", key);
    }

    pub async fn clear_expired(&self) -> usize {
        let fast = Self::soft(self.fast.as_ref(), "clear_expired", self.fast.clear_expired().await)
            .unwrap_or(0);
        let durable = Self::soft(
            self.durable.as_ref(),
            "clear_expired",
            self.durable.clear_expired().await,
        )
        .unwrap_or(0);
        if fast + durable > 0 {
            info!("Cache sweep removed {} memory and {} persistent entries", fast, durable);
        }
        fast + durable
    }

    pub async fn clear_all(&self) {
        Self::soft(self.fast.as_ref(), "clear", self.fast.clear().await);
        Self::soft(self.durable.as_ref(), "clear", self.durable.clear().await);
    }

    pub async fn stats(&self) -> Result<CacheStats, AppError> {
        let count = self
            .fast
            .len()
            .await
            .map_err(|err| AppError::Cache(err.to_string()))?;
        let persistent_count = self
            .durable
            .len()
            .await
            .map_err(|err| AppError::Cache(err.to_string()))?;
        Ok(CacheStats {
            count,
            capacity: self.fast.capacity(),
            persistent_count,
        })
    }
}
