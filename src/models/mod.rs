mod summary;
mod transaction;

pub use summary::{MonthlySummary, Summary};
pub use transaction::{PersistedTransaction, TransactionRecord, TransactionSet};
