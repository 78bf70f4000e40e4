use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Persistence error: ledger is unavailable | {0}")]
    Unavailable(String)
}
