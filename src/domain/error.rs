use std::io;

use thiserror::Error;

/// Library-wide error type for shopify-app-toml operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Environment could not be provisioned (dotenv file missing, unreadable or malformed).
    #[error("{0}")]
    Environment(String),

    /// `SHOPIFY_API_VERSION` is not one of the supported webhook API versions.
    #[error("Invalid SHOPIFY_API_VERSION: {0}")]
    InvalidApiVersion(String),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn environment<S: Into<String>>(message: S) -> Self {
        AppError::Environment(message.into())
    }
}
