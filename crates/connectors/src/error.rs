use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure, timeout, or a non-2xx response from the sheet
    /// export endpoint. Transient; retried by the next poll.
    #[error("Sheet source unreachable: {0}")]
    Unreachable(String),

    /// The response body could not be parsed as tabular CSV data.
    #[error("Sheet data malformed: {0}")]
    Malformed(String),
}
