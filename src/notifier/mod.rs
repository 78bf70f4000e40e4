mod broadcast_notifier;
mod console_notifier;
mod errors;
mod file_notifier;

use async_trait::async_trait;

use crate::models::Summary;

pub use broadcast_notifier::BroadcastNotifier;
pub use console_notifier::ConsoleNotifier;
pub use errors::NotifyError;
pub use file_notifier::FileNotifier;

/// Hands a finished summary to its recipient.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn deliver(&self, summary: &Summary) -> Result<(), NotifyError>;
}
