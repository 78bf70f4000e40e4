mod errors;
mod moka_cache_store;
mod transaction_cache;

use std::time::Duration;

use async_trait::async_trait;

pub use errors::CacheError;
pub use moka_cache_store::MokaCacheStore;
pub use transaction_cache::TransactionCache;

/// Byte-level key/value store backing the transaction cache.
///
/// An absent or expired key is `Ok(None)`; `Err` is reserved for failing to reach the store.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;
}
