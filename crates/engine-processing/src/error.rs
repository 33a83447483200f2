use connectors::error::SourceError;
use engine_core::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The backend could not be reached at the transport level.
    #[error("Generation backend unreachable: {0}")]
    BackendUnreachable(String),

    /// The generation call exceeded its timeout.
    #[error("Generation request timed out: {0}")]
    BackendTimeout(String),

    /// The backend answered with an error payload.
    #[error("Generation rejected by backend: {0}")]
    Rejected(String),
}

/// Everything that can end a processing attempt early. All variants are
/// folded into the `Failed` outcome at the orchestrator boundary; only
/// `ConfigInvalid` recurs deterministically until the caller's configuration
/// changes.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Invalid processing config: {0}")]
    ConfigInvalid(String),

    #[error("Failed to fetch sheet: {0}")]
    Source(#[from] SourceError),

    #[error("Failed to fetch sheet, retries exhausted: {0}")]
    FetchRetriesExhausted(String),

    #[error("Cursor store failure: {0}")]
    Store(#[from] StoreError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}
