use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache error: store is unavailable | {0}")]
    Unavailable(String),
    #[error("Cache error: unable to encode transactions for [{key}] | {source}")]
    Encode {
        key: String,
        source: serde_json::Error
    },
    #[error("Cache error: unable to decode entry [{key}] | {source}")]
    Decode {
        key: String,
        source: serde_json::Error
    }
}
