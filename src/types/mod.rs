mod errors;
mod fingerprint;
mod month;

pub use errors::MonthError;
pub use fingerprint::Fingerprint;
pub use month::Month;

pub type TransactionId = i64;
pub type LedgerId = u64;

/// A single unparsed row of the delimited source, one string per field.
pub type RawRow = Vec<String>;
