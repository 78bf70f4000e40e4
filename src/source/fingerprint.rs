use crate::source::SourceError;
use crate::storage::SourceStore;
use crate::types::{Fingerprint, RawRow};
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Derives a [`Fingerprint`] from a source's locator and full content.
pub struct ContentFingerprinter {
    store: Arc<dyn SourceStore>
}

impl ContentFingerprinter {
    pub fn new(store: Arc<dyn SourceStore>) -> Self {
        Self {
            store
        }
    }

    pub async fn fingerprint(&self, locator: &str) -> Result<Fingerprint, SourceError> {
        let rows = self.store.read_all(locator).await?;
        Ok(digest(locator, &rows))
    }
}

/// Hashes the locator, then every field of every row in read order.
///
/// Each item is length-prefixed so that moving a delimiter changes the digest.
pub fn digest(locator: &str, rows: &[RawRow]) -> Fingerprint {
    let mut hasher = Sha256::new();

    feed(&mut hasher, locator.as_bytes());

    for row in rows {
        hasher.update((row.len() as u64).to_le_bytes());

        for field in row {
            feed(&mut hasher, field.as_bytes());
        }
    }

    Fingerprint::from_digest(&hasher.finalize())
}

fn feed(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
