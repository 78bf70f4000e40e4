use crate::models::{TransactionRecord, TransactionSet};
use crate::source::SourceError;
use crate::storage::SourceStore;
use crate::types::{RawRow, TransactionId};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::debug;

/// Lines are 1-based and the first line is the header.
const FIRST_DATA_LINE: usize = 2;

/// Parses the delimited source into an ordered [`TransactionSet`].
pub struct SourceReader {
    store: Arc<dyn SourceStore>
}

impl SourceReader {
    pub fn new(store: Arc<dyn SourceStore>) -> Self {
        Self {
            store
        }
    }

    /// Reads every data row at `locator`, parsing each row in its own task.
    ///
    /// Each task owns the slot of its row index, so records come back in source order regardless of
    /// completion order. All tasks are joined before returning.
    ///
    /// # Errors
    /// Returns `SourceError` if the source cannot be read or any row fails to parse; in the latter case
    /// the error for the earliest offending line is reported and nothing is returned.
    pub async fn read(&self, locator: &str) -> Result<TransactionSet, SourceError> {
        let rows = self.store.read_all(locator).await?;
        let data_rows: Vec<RawRow> = rows.into_iter().skip(1).collect();

        let mut slots: Vec<Option<Result<TransactionRecord, SourceError>>> =
            std::iter::repeat_with(|| None).take(data_rows.len()).collect();

        let mut tasks = JoinSet::new();

        for (index, row) in data_rows.into_iter().enumerate() {
            tasks.spawn(async move { (index, parse_row(index + FIRST_DATA_LINE, &row)) });
        }

        while let Some(joined) = tasks.join_next().await {
            let (index, parsed) = joined?;
            slots[index] = Some(parsed);
        }

        let transactions = slots.into_iter().flatten().collect::<Result<TransactionSet, SourceError>>()?;

        debug!("Parsed [{}] transactions from [{locator}]", transactions.len());

        Ok(transactions)
    }
}

fn parse_row(line: usize, row: &[String]) -> Result<TransactionRecord, SourceError> {
    let [id, date, amount, ..] = row else {
        return Err(SourceError::malformed_row(line, format!("has [{}] fields, expected id, date and amount", row.len())))
    };

    let id: TransactionId = id.trim().parse()
        .map_err(|error| SourceError::malformed_row(line, format!("has an invalid id '{id}': {error}")))?;

    let amount = parse_amount(amount.trim())
        .map_err(|error| SourceError::malformed_row(line, format!("has an invalid amount '{amount}': {error}")))?;

    Ok(TransactionRecord {
        id,
        date: date.trim().to_string(),
        amount
    })
}

/// Accepts plain decimals with an optional sign (`+60.5`, `-10.3`) and exponent forms (`1e3`).
fn parse_amount(amount: &str) -> Result<Decimal, rust_decimal::Error> {
    //NOTE: A leading '+' is only dropped when a digit follows, so "+-5" stays invalid
    let unsigned = match amount.strip_prefix('+') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => amount
    };

    if unsigned.contains(['e', 'E']) {
        Decimal::from_scientific(unsigned)
    } else {
        Decimal::from_str(unsigned)
    }
}
