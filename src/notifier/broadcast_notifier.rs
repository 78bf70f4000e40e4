use crate::models::Summary;
use crate::notifier::{Notifier, NotifyError};
use async_trait::async_trait;

/// Delivers to every target in order, stopping at the first failure.
pub struct BroadcastNotifier {
    targets: Vec<Box<dyn Notifier>>
}

impl BroadcastNotifier {
    pub fn new() -> Self {
        Self {
            targets: Vec::new()
        }
    }

    pub fn with_target(mut self, target: impl Notifier) -> Self {
        self.targets.push(Box::new(target));
        self
    }
}

#[async_trait]
impl Notifier for BroadcastNotifier {
    async fn deliver(&self, summary: &Summary) -> Result<(), NotifyError> {
        for target in &self.targets {
            target.deliver(summary).await?;
        }

        Ok(())
    }
}
