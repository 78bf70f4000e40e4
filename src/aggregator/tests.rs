use super::{AggregationError, Aggregator, MonthlyTally};

use std::future::{poll_fn, Future};
use std::str::FromStr;
use std::task::Poll;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::models::{TransactionRecord, TransactionSet};
use crate::types::Month;

fn create_transactions(rows: &[(i64, &str, &str)]) -> Result<TransactionSet> {
    rows.iter()
        .map(|(id, date, amount)| Ok(TransactionRecord {
            id: *id,
            date: date.to_string(),
            amount: Decimal::from_str(amount)?
        }))
        .collect()
}

fn create_random_transactions(seed: u64, count: i64) -> TransactionSet {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|id| {
            let date = match rng.gen_range(0..10) {
                0 => "not-a-date".to_string(),
                1 => format!("{}/1", rng.gen_range(13..40)),
                _ => format!("{}/{}", rng.gen_range(1..=12), rng.gen_range(1..=28))
            };

            TransactionRecord {
                id,
                date,
                amount: Decimal::new(rng.gen_range(-100_000..=100_000), 2)
            }
        })
        .collect()
}

#[tokio::test]
async fn test_summary_of_two_months_matches_expected_statistics() -> Result<()> {
    let transactions = create_transactions(&[
        (1, "1/1", "100"),
        (2, "1/2", "-50"),
        (3, "2/1", "200"),
        (4, "2/2", "-150"),
    ])?;

    let summary = Aggregator::new().summarize(&transactions).await?;

    assert_eq!(summary.total_balance, Decimal::from_str("100.00")?);
    assert_eq!(summary.monthly_breakdown.len(), 2);

    let january = &summary.monthly_breakdown[0];

    assert_eq!(january.month, Month::January);
    assert_eq!(january.transaction_count, 2);
    assert_eq!(january.average_debit, Decimal::from_str("-50.00")?);
    assert_eq!(january.average_credit, Decimal::from_str("100.00")?);

    let february = &summary.monthly_breakdown[1];

    assert_eq!(february.month, Month::February);
    assert_eq!(february.transaction_count, 2);
    assert_eq!(february.average_debit, Decimal::from_str("-150.00")?);
    assert_eq!(february.average_credit, Decimal::from_str("200.00")?);

    Ok(())
}

#[tokio::test]
async fn test_summary_of_empty_set_is_zero_with_no_months() -> Result<()> {
    let summary = Aggregator::new().summarize(&[]).await?;

    assert!(summary.total_balance.is_zero());
    assert!(summary.monthly_breakdown.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_all_credit_month_reports_zero_average_debit() -> Result<()> {
    let transactions = create_transactions(&[(1, "3/1", "10"), (2, "3/5", "30")])?;

    let summary = Aggregator::new().summarize(&transactions).await?;
    let march = summary.monthly_breakdown.first().ok_or_else(|| anyhow!("March missing from breakdown"))?;

    assert_eq!(march.debit_count, 0);
    assert!(march.average_debit.is_zero());
    assert_eq!(march.average_credit, Decimal::from_str("20")?);

    Ok(())
}

#[tokio::test]
async fn test_zero_amount_counts_as_transaction_but_neither_debit_nor_credit() -> Result<()> {
    let transactions = create_transactions(&[(1, "4/1", "0"), (2, "4/2", "-8"), (3, "4/3", "0.00")])?;

    let summary = Aggregator::new().summarize(&transactions).await?;
    let april = &summary.monthly_breakdown[0];

    assert_eq!(april.transaction_count, 3);
    assert_eq!(april.debit_count, 1);
    assert_eq!(april.credit_count, 0);
    assert_eq!(april.average_debit, Decimal::from_str("-8")?);

    Ok(())
}

#[tokio::test]
async fn test_undated_records_only_count_toward_total_balance() -> Result<()> {
    let transactions = create_transactions(&[
        (1, "5/1", "10"),
        (2, "13/1", "20"),
        (3, "bogus", "-5"),
        (4, "", "1"),
    ])?;

    let summary = Aggregator::new().summarize(&transactions).await?;

    assert_eq!(summary.total_balance, Decimal::from_str("26")?);
    assert_eq!(summary.monthly_breakdown.len(), 1);
    assert_eq!(summary.monthly_breakdown[0].month, Month::May);
    assert_eq!(summary.monthly_breakdown[0].transaction_count, 1);

    Ok(())
}

#[tokio::test]
async fn test_months_without_records_are_not_emitted() -> Result<()> {
    let transactions = create_transactions(&[(1, "1/1", "1"), (2, "12/1", "-1")])?;

    let summary = Aggregator::new().summarize(&transactions).await?;
    let months: Vec<_> = summary.monthly_breakdown.iter().map(|monthly| monthly.month).collect();

    assert_eq!(months, vec![Month::January, Month::December]);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_breakdown_is_calendar_ordered_regardless_of_input_order() -> Result<()> {
    let mut transactions = create_random_transactions(7, 1_500);
    let expected = Aggregator::new().summarize(&transactions).await?;

    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..3 {
        transactions.shuffle(&mut rng);

        let summary = Aggregator::new().summarize(&transactions).await?;
        let months: Vec<_> = summary.monthly_breakdown.iter().map(|monthly| monthly.month).collect();

        assert!(months.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(summary, expected);
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_monthly_sums_conserve_balance_of_dated_records() -> Result<()> {
    for seed in 0..5 {
        let transactions = create_random_transactions(seed, 800);
        let summary = Aggregator::new().summarize(&transactions).await?;

        let all_amounts: Decimal = transactions.iter().map(|transaction| transaction.amount).sum();
        let dated_amounts: Decimal = transactions.iter()
            .filter(|transaction| Month::from_date(&transaction.date).is_ok())
            .map(|transaction| transaction.amount)
            .sum();
        let monthly_amounts: Decimal = summary.monthly_breakdown.iter()
            .map(|monthly| monthly.debit_sum + monthly.credit_sum)
            .sum();
        let dated_count = transactions.iter().filter(|transaction| Month::from_date(&transaction.date).is_ok()).count();
        let monthly_count: usize = summary.monthly_breakdown.iter().map(|monthly| monthly.transaction_count).sum();

        assert_eq!(summary.total_balance, all_amounts);
        assert_eq!(monthly_amounts, dated_amounts);
        assert_eq!(monthly_count, dated_count);
    }

    Ok(())
}

#[test]
fn test_tally_merge_is_order_independent() -> Result<()> {
    let amounts = ["12.5", "-3", "0", "7.25", "-0.75"];
    let partials = amounts.iter()
        .map(|amount| Ok(MonthlyTally::from_amount(Decimal::from_str(amount)?)))
        .collect::<Result<Vec<_>>>()?;

    let mut forward = MonthlyTally::default();
    for partial in &partials {
        forward.merge(*partial)?;
    }

    let mut backward = MonthlyTally::default();
    for partial in partials.iter().rev() {
        backward.merge(*partial)?;
    }

    assert_eq!(forward, backward);
    assert_eq!(forward.transaction_count, 5);
    assert_eq!(forward.credit_count, 2);
    assert_eq!(forward.debit_count, 2);
    assert_eq!(forward.credit_sum, Decimal::from_str("19.75")?);
    assert_eq!(forward.debit_sum, Decimal::from_str("-3.75")?);

    Ok(())
}

#[tokio::test]
async fn test_total_balance_overflow_is_reported_as_error() -> Result<()> {
    let transactions = create_transactions(&[
        (1, "not-a-date", "79228162514264337593543950335"),
        (2, "also-not-a-date", "79228162514264337593543950335"),
    ])?;

    let result = Aggregator::new().summarize(&transactions).await;

    assert!(matches!(result, Err(AggregationError::Overflow("total balance"))));

    Ok(())
}

#[tokio::test]
async fn test_monthly_sum_overflow_is_reported_as_error() -> Result<()> {
    // The total cancels out, only the January credit sum overflows.
    let transactions = create_transactions(&[
        (1, "1/1", "79228162514264337593543950335"),
        (2, "2/1", "-79228162514264337593543950335"),
        (3, "1/2", "79228162514264337593543950335"),
        (4, "2/2", "-79228162514264337593543950335"),
    ])?;

    let result = Aggregator::new().summarize(&transactions).await;

    assert!(matches!(result, Err(AggregationError::Overflow(_))));

    Ok(())
}

#[test]
fn test_tally_merge_overflow_leaves_tally_unchanged() -> Result<()> {
    let mut tally = MonthlyTally::from_amount(Decimal::MAX);
    let before = tally;

    let result = tally.merge(MonthlyTally::from_amount(Decimal::ONE));

    assert!(matches!(result, Err(AggregationError::Overflow("monthly credit sum"))));
    assert_eq!(tally, before);

    Ok(())
}

#[tokio::test]
async fn test_dropping_summary_in_flight_aborts_tally_tasks() -> Result<()> {
    let transactions = create_random_transactions(11, 500);
    let dated = transactions.iter().filter(|transaction| Month::from_date(&transaction.date).is_ok()).count();
    let metrics = tokio::runtime::Handle::current().metrics();
    let aggregator = Aggregator::new();

    let mut summary = Box::pin(aggregator.summarize(&transactions));

    // Single threaded runtime: spawned tallies cannot run until this task yields.
    let first_poll = poll_fn(|context| Poll::Ready(summary.as_mut().poll(context))).await;

    assert!(first_poll.is_pending());
    assert_eq!(metrics.num_alive_tasks(), dated);

    drop(summary);

    for _ in 0..10 {
        if metrics.num_alive_tasks() == 0 {
            break
        }
        tokio::task::yield_now().await;
    }

    assert_eq!(metrics.num_alive_tasks(), 0);

    Ok(())
}
