use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not serve the request; neither the old nor a partial
    /// new cursor value may be assumed authoritative by the caller.
    #[error("Cursor store unavailable: {0}")]
    Unavailable(String),

    #[error("Stored cursor for sheet '{sheet_id}' is corrupt: {detail}")]
    Corrupt { sheet_id: String, detail: String },
}
