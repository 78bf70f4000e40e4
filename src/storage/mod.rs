mod csv_source_store;
mod errors;
mod transaction_ledger;

use async_trait::async_trait;

use crate::models::TransactionSet;
use crate::source::SourceError;
use crate::types::RawRow;

pub use csv_source_store::CsvSourceStore;
pub use errors::PersistenceError;
pub use transaction_ledger::TransactionLedger;

/// Where transactions come from and where freshly read sets are persisted.
#[async_trait]
pub trait SourceStore: Send + Sync + 'static {
    /// Returns every row at `locator`, header included, in source order.
    async fn read_all(&self, locator: &str) -> Result<Vec<RawRow>, SourceError>;

    /// Persists a set under newly assigned identities; incoming ids are never stored.
    async fn persist(&self, transactions: &TransactionSet) -> Result<(), PersistenceError>;
}
