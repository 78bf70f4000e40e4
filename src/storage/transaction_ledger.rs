use crate::models::{PersistedTransaction, TransactionRecord};
use crate::types::LedgerId;
use dashmap::iter::Iter;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory persistence target that assigns its own identity to every stored transaction.
pub struct TransactionLedger {
    entries: DashMap<LedgerId, PersistedTransaction>,
    next_id: AtomicU64
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicU64::new(1)
        }
    }

    /// Stores every record under a fresh ledger id and returns the ids in record order.
    pub fn append(&self, records: &[TransactionRecord]) -> Vec<LedgerId> {
        records.iter().map(|record| {
            let ledger_id = self.next_id.fetch_add(1, Ordering::Relaxed);
            self.entries.insert(ledger_id, PersistedTransaction::from_record(ledger_id, record));
            ledger_id
        }).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> Iter<'_, LedgerId, PersistedTransaction> {
        self.entries.iter()
    }
}
