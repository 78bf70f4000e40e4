use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notify error: unable to write summary to stdout | {0}")]
    Console(#[from] std::io::Error),
    #[error("Notify error: unable to write summary to [{}] | {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Notify error: recipient rejected the summary | {0}")]
    Rejected(String)
}
