//! Storage client for submitted records.
//!
//! Each entity kind lives in its own table. The backend is abstracted behind
//! [`RecordStore`] so the same [`StorageClient`] runs against DynamoDB in
//! production and against [`MemoryStore`] locally and in tests.

pub mod dynamo;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::config::TableNames;
use crate::core::models::{EntityKind, Item, Record};
use crate::errors::BoardError;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

/// Raw table access offered by a storage backend.
///
/// Implementations report write failures as
/// [`BoardError::StorageWriteError`] and read failures as
/// [`BoardError::StorageReadError`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put_item(&self, table: &str, item: Item) -> Result<(), BoardError>;

    async fn scan_table(&self, table: &str) -> Result<Vec<Item>, BoardError>;
}

#[derive(Clone)]
pub struct StorageClient {
    store: Arc<dyn RecordStore>,
    tables: TableNames,
}

impl StorageClient {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, tables: TableNames) -> Self {
        Self { store, tables }
    }

    #[must_use]
    pub fn table_for(&self, kind: EntityKind) -> &str {
        self.tables.for_kind(kind)
    }

    /// Writes `attributes` as a new record of `kind` under a fresh random id.
    ///
    /// Returns the generated id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageWriteError`] if the backend rejects the write.
    pub async fn insert(&self, kind: EntityKind, attributes: Item) -> Result<String, BoardError> {
        let id = Uuid::new_v4().to_string();
        let mut item = attributes;
        item.insert(kind.key_attribute().to_string(), id.clone());

        self.store.put_item(self.table_for(kind), item).await?;
        Ok(id)
    }

    /// Returns every stored item of `kind`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageReadError`] if the backend scan fails.
    pub async fn scan_all(&self, kind: EntityKind) -> Result<Vec<Item>, BoardError> {
        self.store.scan_table(self.table_for(kind)).await
    }

    /// Typed variant of [`StorageClient::scan_all`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageReadError`] if the backend scan fails.
    pub async fn list<R: Record>(&self) -> Result<Vec<R>, BoardError> {
        let items = self.scan_all(R::KIND).await?;
        Ok(items.into_iter().map(R::from_item).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Question;

    fn client() -> (StorageClient, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (StorageClient::new(store.clone(), TableNames::default()), store)
    }

    #[tokio::test]
    async fn insert_assigns_key_attribute() {
        let (storage, store) = client();
        let mut attributes = Item::new();
        attributes.insert("question".into(), "How?".into());

        let id = storage.insert(EntityKind::Question, attributes).await.unwrap();

        let items = store.items("Questions");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].get("questionid"), Some(&id));
        assert_eq!(items[0].get("question").map(String::as_str), Some("How?"));
    }

    #[tokio::test]
    async fn generated_id_wins_over_submitted_key() {
        let (storage, store) = client();
        let mut attributes = Item::new();
        attributes.insert("emailid".into(), "chosen-by-client".into());

        let id = storage.insert(EntityKind::Email, attributes).await.unwrap();

        assert_ne!(id, "chosen-by-client");
        assert_eq!(store.items("Emails")[0].get("emailid"), Some(&id));
    }

    #[tokio::test]
    async fn custom_table_names_are_used() {
        let store = Arc::new(MemoryStore::new());
        let tables = TableNames {
            answers: "staging-answers".into(),
            ..TableNames::default()
        };
        let storage = StorageClient::new(store.clone(), tables);

        storage.insert(EntityKind::Answer, Item::new()).await.unwrap();

        assert_eq!(store.items("staging-answers").len(), 1);
        assert!(store.items("Answers").is_empty());
    }

    #[tokio::test]
    async fn list_converts_items_to_records() {
        let (storage, _) = client();
        let mut attributes = Item::new();
        attributes.insert("question".into(), "Where?".into());
        let id = storage.insert(EntityKind::Question, attributes).await.unwrap();

        let questions: Vec<Question> = storage.list().await.unwrap();

        assert_eq!(
            questions,
            vec![Question {
                questionid: id,
                question: Some("Where?".into()),
            }]
        );
    }
}
