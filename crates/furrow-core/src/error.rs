use thiserror::Error;

/// Errors raised while validating loaded settings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Configuration error: `{key}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
