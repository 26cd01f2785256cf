use thiserror::Error;

/// Data store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: collection={collection}, id={id}")]
    NotFound { collection: String, id: uuid::Uuid },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
