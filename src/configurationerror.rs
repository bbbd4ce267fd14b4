use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String }
}

impl ConfigurationError {
    pub fn invalid_value(field: &'static str, reason: &str) -> ConfigurationError {
        ConfigurationError::InvalidValue { field, reason: reason.to_owned() }
    }
}
