use crate::models::Summary;
use crate::notifier::{Notifier, NotifyError};
use async_trait::async_trait;
use std::io::{stdout, BufWriter, Write};

/// Writes the rendered summary to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn deliver(&self, summary: &Summary) -> Result<(), NotifyError> {
        let mut output = BufWriter::new(stdout().lock());

        write!(output, "{summary}")?;
        output.flush()?;

        Ok(())
    }
}
