use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{LedgerId, TransactionId};

/// Represents a single row from the transaction source.
///
/// A positive `amount` is a credit and a negative `amount` is a debit.
/// The `id` is only unique within one read of the source.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    /// Date in `M/D` form, e.g. `7/15`.
    pub date: String,
    pub amount: Decimal
}

/// Records in source read order.
pub type TransactionSet = Vec<TransactionRecord>;

/// A transaction as held by the ledger, identified by the ledger rather than by the source.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PersistedTransaction {
    pub ledger_id: LedgerId,
    pub date: String,
    pub amount: Decimal
}

impl PersistedTransaction {
    pub fn from_record(ledger_id: LedgerId, record: &TransactionRecord) -> Self {
        Self {
            ledger_id,
            date: record.date.clone(),
            amount: record.amount
        }
    }
}
