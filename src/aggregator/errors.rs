use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("Aggregation error: summary task failed | {0}")]
    Task(#[from] JoinError),
    #[error("Aggregation error: {0} exceeds the representable amount range")]
    Overflow(&'static str)
}
