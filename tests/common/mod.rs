#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use qaboard::AppState;
use qaboard::api::parsing::HttpRequest;
use qaboard::core::config::AppConfig;
use qaboard::core::models::Item;
use qaboard::errors::BoardError;
use qaboard::notify::Notifier;
use qaboard::storage::{MemoryStore, RecordStore};

/// Backend that rejects every read and write.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn put_item(&self, table: &str, _item: Item) -> Result<(), BoardError> {
        Err(BoardError::StorageWriteError(format!("{table} unavailable")))
    }

    async fn scan_table(&self, table: &str) -> Result<Vec<Item>, BoardError> {
        Err(BoardError::StorageReadError(format!("{table} unavailable")))
    }
}

/// Notifier that remembers every published message.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, message: &str) -> Result<(), BoardError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Notifier whose every publish fails.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn publish(&self, _message: &str) -> Result<(), BoardError> {
        Err(BoardError::NotificationError("topic unreachable".to_string()))
    }
}

pub fn config() -> AppConfig {
    AppConfig::from_lookup(|_| None).unwrap()
}

pub fn config_with_dirs(pages_dir: &Path, public_dir: &Path) -> AppConfig {
    AppConfig {
        pages_dir: pages_dir.to_path_buf(),
        public_dir: public_dir.to_path_buf(),
        ..config()
    }
}

pub fn state(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> AppState {
    AppState::new(config(), store, notifier)
}

/// Memory-backed state plus handles on its store and notifier.
pub fn memory_state() -> (AppState, Arc<MemoryStore>, Arc<RecordingNotifier>) {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    (state(store.clone(), notifier.clone()), store, notifier)
}

pub fn post_form(path: &str, body: &str) -> HttpRequest {
    HttpRequest {
        method: "POST".to_string(),
        path: path.to_string(),
        content_type: Some("application/x-www-form-urlencoded".to_string()),
        body: body.to_string(),
    }
}

pub fn post_json(path: &str, body: &str) -> HttpRequest {
    HttpRequest {
        content_type: Some("application/json".to_string()),
        ..post_form(path, body)
    }
}

pub fn get(path: &str) -> HttpRequest {
    HttpRequest {
        method: "GET".to_string(),
        path: path.to_string(),
        content_type: None,
        body: String::new(),
    }
}
