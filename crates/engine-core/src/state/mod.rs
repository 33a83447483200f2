use crate::error::StoreError;
use async_trait::async_trait;

pub mod sled_store;

/// Durable mapping from a sheet identity to the count of rows already
/// committed as processed.
///
/// The cursor is read at the start of a processing call and written exactly
/// once, at the very end, after generation has succeeded. A single logical
/// caller per sheet id is assumed, so no compare-and-set primitive is
/// exposed.
#[async_trait]
pub trait CursorStore: Send + Sync {
    /// Last committed row count for a sheet; 0 when the sheet has never been
    /// processed. Absence is not an error.
    async fn get(&self, sheet_id: &str) -> Result<usize, StoreError>;

    /// Unconditional overwrite. Must be durable before returning.
    async fn set(&self, sheet_id: &str, value: usize) -> Result<(), StoreError>;

    /// Equivalent to `set(sheet_id, 0)`.
    async fn reset(&self, sheet_id: &str) -> Result<(), StoreError> {
        self.set(sheet_id, 0).await
    }
}
