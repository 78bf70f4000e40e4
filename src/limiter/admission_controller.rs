use crate::limiter::{Clock, SystemClock};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;
use tracing::trace;

const INVOCATION_COST: f64 = 1.0;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AdmissionConfig {
    /// Tokens restored per second.
    pub requests_per_second: u32,
    /// Maximum tokens held at once; the bucket starts full.
    pub burst: u32
}

impl AdmissionConfig {
    pub fn per_second(requests_per_second: u32) -> Self {
        Self {
            requests_per_second,
            burst: requests_per_second
        }
    }
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last_refill: Instant
}

/// Token bucket gate in front of the pipeline.
///
/// `allow` never blocks or queues: it either consumes one token or reports the budget as exhausted.
/// One instance is shared by every invocation in the process.
pub struct AdmissionController {
    bucket: Mutex<Bucket>,
    config: AdmissionConfig,
    clock: Box<dyn Clock>
}

impl AdmissionController {
    pub fn new(config: AdmissionConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock<C: Clock>(config: AdmissionConfig, clock: C) -> Self {
        let bucket = Bucket {
            tokens: f64::from(config.burst),
            last_refill: clock.now()
        };

        Self {
            bucket: Mutex::new(bucket),
            config,
            clock: Box::new(clock)
        }
    }

    pub fn allow(&self) -> bool {
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
        self.refill(&mut bucket);

        if bucket.tokens < INVOCATION_COST {
            trace!("Admission budget exhausted ({:.3} tokens)", bucket.tokens);
            return false
        }

        bucket.tokens -= INVOCATION_COST;
        true
    }

    /// Whole tokens currently available.
    pub fn available(&self) -> u32 {
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
        self.refill(&mut bucket);
        bucket.tokens.floor() as u32
    }

    pub fn config(&self) -> AdmissionConfig {
        self.config
    }

    fn refill(&self, bucket: &mut Bucket) {
        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(bucket.last_refill);

        if elapsed.is_zero() {
            return
        }

        let restored = elapsed.as_secs_f64() * f64::from(self.config.requests_per_second);

        bucket.tokens = (bucket.tokens + restored).min(f64::from(self.config.burst));
        bucket.last_refill = now;
    }
}
