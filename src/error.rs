//! Error handling module
//!
//! Request-rejection errors raised by validation, and storage failures.

use std::path::PathBuf;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Reasons a command is rejected before anything is read or written.
///
/// `Display` is the bare message so callers can show it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidPostalCode(String),

    #[error("{0}")]
    InvalidPrice(String),

    #[error("{0}")]
    InvalidAlertType(String),

    #[error("{0}")]
    InvalidUserId(String),
}

impl ValidationError {
    pub fn invalid_postal_code(value: &str) -> Self {
        Self::InvalidPostalCode(format!("{value} is not a valid postal code"))
    }

    pub fn negative_price() -> Self {
        Self::InvalidPrice("Price cannot be negative".to_string())
    }

    pub fn inverted_price_range() -> Self {
        Self::InvalidPrice("The minimum price should be bigger than the maximum price".to_string())
    }

    pub fn invalid_alert_type(value: &str) -> Self {
        Self::InvalidAlertType(format!("The alert type {value} does not exist"))
    }

    pub fn unknown_user(id: u64) -> Self {
        Self::InvalidUserId(format!("The user {id} does not exist"))
    }

    pub fn unknown_owner(id: u64) -> Self {
        Self::InvalidUserId(format!("The owner {id} does not exist"))
    }

    /// The message carried by any variant
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidPostalCode(msg)
            | Self::InvalidPrice(msg)
            | Self::InvalidAlertType(msg)
            | Self::InvalidUserId(msg) => msg,
        }
    }
}

/// Collection failures on write paths
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// The validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Validation(err) => Some(err),
            AppError::Store(_) => None,
        }
    }
}
