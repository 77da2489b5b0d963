use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::RecordStore;
use crate::core::models::Item;
use crate::errors::BoardError;

/// Process-local store keeping every table in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Item>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the items currently stored in `table`.
    #[must_use]
    pub fn items(&self, table: &str) -> Vec<Item> {
        self.tables
            .lock()
            .map(|tables| tables.get(table).cloned().unwrap_or_default())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put_item(&self, table: &str, item: Item) -> Result<(), BoardError> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|e| BoardError::StorageWriteError(format!("{table}: {e}")))?;
        tables.entry(table.to_string()).or_default().push(item);
        Ok(())
    }

    async fn scan_table(&self, table: &str) -> Result<Vec<Item>, BoardError> {
        let tables = self
            .tables
            .lock()
            .map_err(|e| BoardError::StorageReadError(format!("{table}: {e}")))?;
        Ok(tables.get(table).cloned().unwrap_or_default())
    }
}
