use crate::models::Summary;
use crate::notifier::{Notifier, NotifyError};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Writes the rendered summary to a file, replacing the previous delivery.
pub struct FileNotifier {
    path: PathBuf
}

impl FileNotifier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }
}

#[async_trait]
impl Notifier for FileNotifier {
    async fn deliver(&self, summary: &Summary) -> Result<(), NotifyError> {
        tokio::fs::write(&self.path, summary.to_string()).await
            .map_err(|source| NotifyError::File { path: self.path.clone(), source })?;

        debug!("Summary written to [{}]", self.path.display());

        Ok(())
    }
}
