use std::fmt;
use std::fmt::{Display, Formatter};

/// Hex encoded digest identifying one exact version of a transaction source.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn from_digest(digest: &[u8]) -> Self {
        Fingerprint(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Fingerprint {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
