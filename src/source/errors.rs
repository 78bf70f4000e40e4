use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source error: unable to read [{locator}] | {source}")]
    Io {
        locator: String,
        source: std::io::Error
    },
    #[error("Source error: malformed CSV in [{locator}] | {source}")]
    Csv {
        locator: String,
        source: csv::Error
    },
    #[error("Source error: line [{line}] {reason}")]
    MalformedRow {
        line: usize,
        reason: String
    },
    #[error("Source error: parsing task failed | {0}")]
    Task(#[from] JoinError)
}

impl SourceError {
    pub fn io(locator: &str, source: std::io::Error) -> Self {
        Self::Io { locator: locator.to_string(), source }
    }

    pub fn csv(locator: &str, source: csv::Error) -> Self {
        Self::Csv { locator: locator.to_string(), source }
    }

    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow { line, reason: reason.into() }
    }
}
