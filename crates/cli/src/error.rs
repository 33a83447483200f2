use connectors::error::SourceError;
use engine_core::error::StoreError;
use engine_processing::error::GenerationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cursor store error: {0}")]
    Store(#[from] StoreError),

    #[error("Sheet fetch error: {0}")]
    Source(#[from] SourceError),

    #[error("Generation client error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
