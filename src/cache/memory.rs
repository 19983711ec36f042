use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheTier};
use crate::nft::types::NftRecord;

#[derive(Default)]
struct MemoryState {
    entries: HashMap<String, CacheEntry>,
    // insertion order, oldest first
    order: VecDeque<String>,
}

impl MemoryState {
    fn remove(&mut self, key: &str) -> Option<CacheEntry> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.order.retain(|queued| queued != key);
        }
        removed
    }
}

/// Bounded in-process tier with first-in-first-out eviction.
pub struct MemoryTier {
    state: Mutex<MemoryState>,
    ttl: Duration,
    capacity: usize,
}

impl MemoryTier {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        MemoryTier {
            state: Mutex::new(MemoryState::default()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    fn insert(&self, key: &str, record: &NftRecord) {
        let entry = CacheEntry::new(record.clone(), Utc::now(), self.ttl);
        let mut state = self.state.lock();
        if state.remove(key).is_none() {
            while state.entries.len() >= self.capacity {
                let Some(oldest) = state.order.pop_front() else {
                    break;
                };
                state.entries.remove(&oldest);
                debug!("Memory cache evicted token {}", oldest);
            }
        }
        state.order.push_back(key.to_string());
        state.entries.insert(key.to_string(), entry);
    }
}

#[async_trait]
impl CacheTier for MemoryTier {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        let now = Utc::now();
        let mut state = self.state.lock();
        let Some(entry) = state.entries.get(key).cloned() else {
            return Ok(None);
        };
        if entry.is_expired_at(now) {
            state.remove(key);
            return Ok(None);
        }
        Ok(Some(entry))
    }

    async fn put(&self, key: &str, record: &NftRecord) -> Result<()> {
        self.insert(key, record);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.state.lock().remove(key);
        Ok(())
    }

    async fn clear_expired(&self) -> Result<usize> {
        let now = Utc::now();
        let mut state = self.state.lock();
        let expired: Vec<String> = state
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            state.remove(key);
        }
        Ok(expired.len())
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.state.lock().entries.len())
    }
}
