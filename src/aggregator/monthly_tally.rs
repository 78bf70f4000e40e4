use rust_decimal::Decimal;

use crate::aggregator::AggregationError;
use crate::models::MonthlySummary;
use crate::types::Month;

/// Partial credit/debit statistics, mergeable in any order.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MonthlyTally {
    pub transaction_count: usize,
    pub debit_sum: Decimal,
    pub debit_count: usize,
    pub credit_sum: Decimal,
    pub credit_count: usize
}

impl MonthlyTally {
    /// Tally of a single transaction. A zero amount is counted but is neither a debit nor a credit.
    pub fn from_amount(amount: Decimal) -> Self {
        let mut tally = Self { transaction_count: 1, ..Self::default() };

        if amount > Decimal::ZERO {
            tally.credit_sum = amount;
            tally.credit_count = 1;
        } else if amount < Decimal::ZERO {
            tally.debit_sum = amount;
            tally.debit_count = 1;
        }

        tally
    }

    /// Folds `other` into this tally. On overflow this tally is left unchanged.
    pub fn merge(&mut self, other: MonthlyTally) -> Result<(), AggregationError> {
        let debit_sum = self.debit_sum.checked_add(other.debit_sum)
            .ok_or(AggregationError::Overflow("monthly debit sum"))?;
        let credit_sum = self.credit_sum.checked_add(other.credit_sum)
            .ok_or(AggregationError::Overflow("monthly credit sum"))?;

        self.transaction_count += other.transaction_count;
        self.debit_sum = debit_sum;
        self.debit_count += other.debit_count;
        self.credit_sum = credit_sum;
        self.credit_count += other.credit_count;

        Ok(())
    }

    pub fn finalize(self, month: Month) -> MonthlySummary {
        MonthlySummary {
            month,
            transaction_count: self.transaction_count,
            debit_sum: self.debit_sum,
            debit_count: self.debit_count,
            credit_sum: self.credit_sum,
            credit_count: self.credit_count,
            average_debit: average(self.debit_sum, self.debit_count),
            average_credit: average(self.credit_sum, self.credit_count)
        }
    }
}

fn average(sum: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO
    }

    sum / Decimal::from(count)
}
