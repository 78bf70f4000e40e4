mod errors;
mod fingerprint;
mod reader;

pub use errors::SourceError;
pub use fingerprint::{digest, ContentFingerprinter};
pub use reader::SourceReader;
