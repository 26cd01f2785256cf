use thiserror::Error;

/// Command-line layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] furrow_service::error::ServiceError),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(serde_json::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
