use crate::models::TransactionSet;
use crate::source::SourceError;
use crate::storage::{PersistenceError, SourceStore, TransactionLedger};
use crate::types::RawRow;
use async_trait::async_trait;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::debug;

/// Reads transactions from CSV files on disk and persists them into a [`TransactionLedger`].
pub struct CsvSourceStore {
    ledger: Arc<TransactionLedger>
}

impl CsvSourceStore {
    pub fn new(ledger: Arc<TransactionLedger>) -> Self {
        Self {
            ledger
        }
    }
}

#[async_trait]
impl SourceStore for CsvSourceStore {
    async fn read_all(&self, locator: &str) -> Result<Vec<RawRow>, SourceError> {
        let path = locator.to_string();
        let rows = spawn_blocking(move || read_rows(&path)).await??;

        debug!("Read [{}] rows from [{locator}]", rows.len());

        Ok(rows)
    }

    async fn persist(&self, transactions: &TransactionSet) -> Result<(), PersistenceError> {
        let ledger_ids = self.ledger.append(transactions);

        debug!("Persisted [{}] transactions, ledger now holds [{}]", ledger_ids.len(), self.ledger.len());

        Ok(())
    }
}

//NOTE: Fields are kept verbatim (no trimming) so that whitespace edits still change the fingerprint.
fn read_rows(path: &str) -> Result<Vec<RawRow>, SourceError> {
    let file = File::open(path).map_err(|error| SourceError::io(path, error))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    reader.records()
        .map(|result| {
            result
                .map(|record| record.iter().map(str::to_string).collect::<RawRow>())
                .map_err(|error| SourceError::csv(path, error))
        })
        .collect()
}
