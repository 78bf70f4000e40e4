use crate::cache::{CacheError, CacheStore};
use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
struct CachedBytes {
    bytes: Arc<Vec<u8>>,
    ttl: Duration
}

/// Expires each entry after the TTL it was written with; an overwrite restarts the clock.
struct WrittenTtl;

impl Expiry<String, CachedBytes> for WrittenTtl {
    fn expire_after_create(&self, _key: &String, value: &CachedBytes, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedBytes,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// In-process [`CacheStore`] backed by moka with per-entry expiration and bounded capacity.
pub struct MokaCacheStore {
    entries: Cache<String, CachedBytes>
}

impl MokaCacheStore {
    pub fn new(capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(capacity)
                .expire_after(WrittenTtl)
                .build()
        }
    }
}

#[async_trait]
impl CacheStore for MokaCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.get(key).await.map(|cached| cached.bytes.to_vec()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let cached = CachedBytes {
            bytes: Arc::new(value),
            ttl
        };

        self.entries.insert(key.to_string(), cached).await;

        Ok(())
    }
}
