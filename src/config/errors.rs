use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config error: {key}='{value}' is not valid | {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String
    }
}

impl ConfigError {
    pub fn invalid(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid { key, value: value.into(), reason: reason.into() }
    }
}
