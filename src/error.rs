use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid amount '{input}': {source}")]
    AmountParseError {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;
