use crate::aggregator::Aggregator;
use crate::cache::{CacheStore, TransactionCache};
use crate::engine::PipelineError;
use crate::limiter::AdmissionController;
use crate::models::{Summary, TransactionSet};
use crate::notifier::Notifier;
use crate::source::{ContentFingerprinter, SourceReader};
use crate::storage::SourceStore;
use crate::types::Fingerprint;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, info_span, warn, Instrument};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Summarizes a transaction source and notifies the recipient, skipping the source read and persistence
/// whenever the source content is unchanged since a cached read.
pub struct SummaryPipeline {
    locator: String,
    limiter: Arc<AdmissionController>,
    fingerprinter: ContentFingerprinter,
    reader: SourceReader,
    store: Arc<dyn SourceStore>,
    cache: TransactionCache,
    aggregator: Aggregator,
    notifier: Arc<dyn Notifier>,
    timeout: Duration
}

impl SummaryPipeline {
    /// Creates a pipeline over the source at `locator`.
    ///
    /// The limiter is shared: every pipeline holding the same controller draws from one budget.
    pub fn new(
        locator: impl Into<String>,
        store: Arc<dyn SourceStore>,
        cache_store: Arc<dyn CacheStore>,
        notifier: Arc<dyn Notifier>,
        limiter: Arc<AdmissionController>
    ) -> Self {
        Self {
            locator: locator.into(),
            limiter,
            fingerprinter: ContentFingerprinter::new(store.clone()),
            reader: SourceReader::new(store.clone()),
            store,
            cache: TransactionCache::new(cache_store),
            aggregator: Aggregator::new(),
            notifier,
            timeout: DEFAULT_TIMEOUT
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = self.cache.with_ttl(ttl);
        self
    }

    /// Runs one invocation end to end and returns the summary that was delivered.
    ///
    /// Admission is checked first and a rejection touches nothing else. Everything after admission
    /// runs under the time budget; on expiry the in-flight step is dropped, which also aborts any
    /// parsing or tally tasks it had spawned.
    ///
    /// # Errors
    /// Returns `PipelineError` for the first step that fails; nothing is retried.
    pub async fn process_transactions(&self) -> Result<Summary, PipelineError> {
        if !self.limiter.allow() {
            warn!("Admission rejected for source [{}]", self.locator);
            return Err(PipelineError::AdmissionRejected)
        }

        let span = info_span!("process_transactions", source = %self.locator);

        timeout(self.timeout, self.run_admitted().instrument(span)).await
            .map_err(|_| PipelineError::Timeout(self.timeout))?
    }

    async fn run_admitted(&self) -> Result<Summary, PipelineError> {
        let fingerprint = self.fingerprinter.fingerprint(&self.locator).await?;

        let transactions = match self.cache.get(&fingerprint).await {
            Ok(Some(transactions)) => {
                info!("Cache hit for [{fingerprint}], [{}] transactions", transactions.len());
                transactions
            }
            Ok(None) => {
                info!("Cache miss for [{fingerprint}], reading source");
                self.refresh(&fingerprint).await?
            }
            Err(error) => {
                warn!("Cache lookup failed, reading source: {error}");
                self.refresh(&fingerprint).await?
            }
        };

        let summary = self.aggregator.summarize(&transactions).await?;

        self.notifier.deliver(&summary).await?;

        debug!("Summary delivered: balance {} over [{}] months", summary.total_balance, summary.monthly_breakdown.len());

        Ok(summary)
    }

    async fn refresh(&self, fingerprint: &Fingerprint) -> Result<TransactionSet, PipelineError> {
        let transactions = self.reader.read(&self.locator).await?;

        self.store.persist(&transactions).await?;
        self.cache.set(fingerprint, &transactions).await?;

        Ok(transactions)
    }
}
