use crate::config::ConfigError;
use crate::limiter::AdmissionConfig;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const SOURCE_PATH: &str = "CSV_FILE_PATH";
const RATE_LIMIT: &str = "RATE_LIMIT";
const RATE_BURST: &str = "RATE_BURST";
const CONTEXT_TIMEOUT: &str = "CONTEXT_TIMEOUT";
const CACHE_DURATION: &str = "CACHE_DURATION_SEC";
const CACHE_CAPACITY: &str = "CACHE_CAPACITY";
const OUTPUT_PATH: &str = "SUMMARY_OUTPUT_PATH";

const DEFAULT_RATE_LIMIT: u32 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CACHE_DURATION_SECS: u64 = 600;
const DEFAULT_CACHE_CAPACITY: u64 = 1024;

/// Process settings for the summary pipeline.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PipelineConfig {
    pub source_path: Option<String>,
    pub admission: AdmissionConfig,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_capacity: u64,
    pub output_path: Option<PathBuf>
}

impl PipelineConfig {
    /// Loads `.env` when present, then reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for absent or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let requests_per_second = parse_positive(&lookup, RATE_LIMIT, DEFAULT_RATE_LIMIT)?;
        let burst = parse_positive(&lookup, RATE_BURST, requests_per_second)?;
        let timeout_secs = parse_positive(&lookup, CONTEXT_TIMEOUT, DEFAULT_TIMEOUT_SECS)?;
        let cache_secs = parse_positive(&lookup, CACHE_DURATION, DEFAULT_CACHE_DURATION_SECS)?;
        let cache_capacity = parse_positive(&lookup, CACHE_CAPACITY, DEFAULT_CACHE_CAPACITY)?;

        Ok(Self {
            source_path: lookup(SOURCE_PATH),
            admission: AdmissionConfig { burst, ..AdmissionConfig::per_second(requests_per_second) },
            timeout: Duration::from_secs(timeout_secs),
            cache_ttl: Duration::from_secs(cache_secs),
            cache_capacity,
            output_path: lookup(OUTPUT_PATH).map(PathBuf::from)
        })
    }
}

fn parse_positive<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
    T::Err: Display,
    F: Fn(&str) -> Option<String>
{
    let Some(value) = lookup(key) else {
        return Ok(default)
    };

    let parsed: T = value.trim().parse()
        .map_err(|error: T::Err| ConfigError::invalid(key, value.as_str(), error.to_string()))?;

    if parsed <= T::default() {
        return Err(ConfigError::invalid(key, value, "must be greater than zero"))
    }

    Ok(parsed)
}
