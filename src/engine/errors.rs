use std::time::Duration;

use thiserror::Error;

use crate::aggregator::AggregationError;
use crate::cache::CacheError;
use crate::notifier::NotifyError;
use crate::source::SourceError;
use crate::storage::PersistenceError;

/// Everything `SummaryPipeline::process_transactions` can fail with. The pipeline never retries.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Too many requests: admission budget exhausted")]
    AdmissionRejected,
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error("Timed out after {0:?}")]
    Timeout(Duration)
}
