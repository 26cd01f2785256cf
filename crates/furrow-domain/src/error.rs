use thiserror::Error;

/// Errors raised while interpreting stored domain codes
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
