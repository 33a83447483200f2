use crate::{error::StoreError, state::CursorStore};
use async_trait::async_trait;
use std::path::Path;

/// Sled-backed cursor store. One key per sheet, flushed on every write so a
/// returned `set` means the value survives a crash.
pub struct SledCursorStore {
    db: sled::Db,
}

impl SledCursorStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(path.as_ref())
            .map_err(|e| StoreError::Unavailable(format!("failed to open store: {e}")))?;
        Ok(Self { db })
    }

    #[inline]
    fn cursor_key(sheet_id: &str) -> String {
        format!("state:{sheet_id}:last_row")
    }
}

#[async_trait]
impl CursorStore for SledCursorStore {
    async fn get(&self, sheet_id: &str) -> Result<usize, StoreError> {
        let key = Self::cursor_key(sheet_id);
        match self
            .db
            .get(&key)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?
        {
            Some(bytes) => {
                let value: u64 =
                    bincode::deserialize(&bytes).map_err(|e| StoreError::Corrupt {
                        sheet_id: sheet_id.to_string(),
                        detail: e.to_string(),
                    })?;
                Ok(value as usize)
            }
            None => Ok(0),
        }
    }

    async fn set(&self, sheet_id: &str, value: usize) -> Result<(), StoreError> {
        let key = Self::cursor_key(sheet_id);
        let bytes = bincode::serialize(&(value as u64))
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        self.db
            .insert(key.as_bytes(), bytes)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        self.db
            .flush_async()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn absent_cursor_reads_as_zero() {
        let dir = tempdir().unwrap();
        let store = SledCursorStore::open(dir.path()).unwrap();

        assert_eq!(store.get("sheet-a").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let store = SledCursorStore::open(dir.path()).unwrap();

        store.set("sheet-a", 12).await.unwrap();
        assert_eq!(store.get("sheet-a").await.unwrap(), 12);

        // Overwrite is unconditional.
        store.set("sheet-a", 3).await.unwrap();
        assert_eq!(store.get("sheet-a").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn cursors_are_independent_per_sheet() {
        let dir = tempdir().unwrap();
        let store = SledCursorStore::open(dir.path()).unwrap();

        store.set("sheet-a", 9).await.unwrap();
        assert_eq!(store.get("sheet-b").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reset_zeroes_the_cursor() {
        let dir = tempdir().unwrap();
        let store = SledCursorStore::open(dir.path()).unwrap();

        store.set("sheet-a", 30).await.unwrap();
        store.reset("sheet-a").await.unwrap();
        assert_eq!(store.get("sheet-a").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn cursor_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = SledCursorStore::open(dir.path()).unwrap();
            store.set("sheet-a", 21).await.unwrap();
        }

        let store = SledCursorStore::open(dir.path()).unwrap();
        assert_eq!(store.get("sheet-a").await.unwrap(), 21);
    }
}
