use crate::cache::{CacheError, CacheStore};
use crate::models::TransactionSet;
use crate::types::Fingerprint;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Maps a source [`Fingerprint`] to the transaction set read from that exact source version.
///
/// Sets are stored as JSON. Every access holds one local lock so encode/decode never interleaves,
/// even when the backing store is itself safe for concurrent use.
pub struct TransactionCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    lock: Mutex<()>
}

impl TransactionCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            ttl: DEFAULT_TTL,
            lock: Mutex::new(())
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns `Ok(None)` on a miss, whether the key was never written or has expired.
    pub async fn get(&self, fingerprint: &Fingerprint) -> Result<Option<TransactionSet>, CacheError> {
        let _guard = self.lock.lock().await;

        let Some(bytes) = self.store.get(fingerprint.as_str()).await? else {
            debug!("Cache miss for [{fingerprint}]");
            return Ok(None)
        };

        let transactions = serde_json::from_slice(&bytes)
            .map_err(|source| CacheError::Decode { key: fingerprint.to_string(), source })?;

        Ok(Some(transactions))
    }

    pub async fn set(&self, fingerprint: &Fingerprint, transactions: &TransactionSet) -> Result<(), CacheError> {
        let _guard = self.lock.lock().await;

        let bytes = serde_json::to_vec(transactions)
            .map_err(|source| CacheError::Encode { key: fingerprint.to_string(), source })?;

        self.store.set(fingerprint.as_str(), bytes, self.ttl).await?;

        debug!("Cached [{}] transactions for [{fingerprint}] with ttl {:?}", transactions.len(), self.ttl);

        Ok(())
    }
}
