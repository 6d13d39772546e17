use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Book with id {0} not found")]
    NotFound(u64),

    #[error("Storage is corrupt: {0}")]
    StorageCorrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ShelfError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Validation and lookup failures: nothing was persisted and the caller may retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShelfError::InvalidField { .. } | ShelfError::NotFound(_) | ShelfError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
