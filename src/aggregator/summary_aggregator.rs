use crate::aggregator::{AggregationError, MonthlyTally};
use crate::models::{MonthlySummary, Summary, TransactionRecord};
use crate::types::Month;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::task::JoinSet;
use tracing::{debug, trace};

/// Computes the total balance and the per-month credit/debit breakdown of a transaction set.
#[derive(Debug, Default, Clone, Copy)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Aggregator
    }

    /// Summarizes `transactions`.
    ///
    /// Every dated record is tallied in its own task; tasks return their partial tally and the partials
    /// are merged per month once every task has been joined, so the result does not depend on
    /// completion order. Records whose date has no valid month still count toward the total balance.
    ///
    /// Dropping the returned future aborts any tally tasks still running.
    ///
    /// # Errors
    /// Returns `AggregationError::Overflow` if the total or a monthly sum leaves the `Decimal` range.
    pub async fn summarize(&self, transactions: &[TransactionRecord]) -> Result<Summary, AggregationError> {
        let total_balance = transactions.iter()
            .try_fold(Decimal::ZERO, |balance, transaction| balance.checked_add(transaction.amount))
            .ok_or(AggregationError::Overflow("total balance"))?;

        let mut tasks = JoinSet::new();
        let mut undated = 0usize;

        for transaction in transactions {
            match Month::from_date(&transaction.date) {
                Ok(month) => {
                    let amount = transaction.amount;
                    tasks.spawn(async move { (month, MonthlyTally::from_amount(amount)) });
                }
                Err(error) => {
                    undated += 1;
                    trace!("Transaction [{}] left out of monthly breakdown: {error}", transaction.id);
                }
            }
        }

        if undated > 0 {
            debug!("[{undated}] transactions had no valid month and only count toward the total balance");
        }

        let mut partitions = HashMap::<Month, MonthlyTally>::new();

        while let Some(joined) = tasks.join_next().await {
            let (month, partial) = joined?;
            partitions.entry(month).or_default().merge(partial)?;
        }

        let mut months: Vec<Month> = partitions.keys().copied().collect();
        months.sort();

        let monthly_breakdown: Vec<MonthlySummary> = months.into_iter()
            .filter_map(|month| partitions.remove(&month).map(|tally| tally.finalize(month)))
            .collect();

        Ok(Summary {
            total_balance,
            monthly_breakdown
        })
    }
}
