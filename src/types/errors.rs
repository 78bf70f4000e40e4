use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthError {
    #[error("Month error: '{0}' is not a M/D date")]
    InvalidDate(String),
    #[error("Month error: {0} is not a calendar month")]
    OutOfRange(u8)
}
