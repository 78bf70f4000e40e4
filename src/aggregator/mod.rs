mod errors;
mod monthly_tally;
mod summary_aggregator;
#[cfg(test)]
mod tests;

pub use errors::AggregationError;
pub use monthly_tally::MonthlyTally;
pub use summary_aggregator::Aggregator;
