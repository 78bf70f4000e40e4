use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::Month;

const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Credit and debit statistics for the transactions dated within one month.
///
/// Averages are zero when the respective count is zero.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: Month,
    pub transaction_count: usize,
    pub debit_sum: Decimal,
    pub debit_count: usize,
    pub credit_sum: Decimal,
    pub credit_count: usize,
    pub average_debit: Decimal,
    pub average_credit: Decimal
}

/// Financial summary of a transaction set.
///
/// `monthly_breakdown` is in calendar order and only holds months that have at least one transaction.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub total_balance: Decimal,
    pub monthly_breakdown: Vec<MonthlySummary>
}

impl Display for Summary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Total balance: {}", format_amount(self.total_balance))?;

        for monthly in &self.monthly_breakdown {
            writeln!(formatter, "Number of transactions in {}: {}", monthly.month, monthly.transaction_count)?;

            if monthly.debit_count > 0 {
                writeln!(formatter, "Average debit amount: {}", format_amount(monthly.average_debit))?;
            }

            if monthly.credit_count > 0 {
                writeln!(formatter, "Average credit amount: {}", format_amount(monthly.average_credit))?;
            }
        }

        Ok(())
    }
}

fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.width$}", rounded, width = DISPLAY_DECIMAL_PLACES as usize)
}
