use std::sync::Arc;

use tracing::{info, warn};

use super::config::AppConfig;
use crate::notify::{NotificationPublisher, Notifier, SnsNotifier};
use crate::storage::{DynamoStore, RecordStore, StorageClient};

/// Clients shared by every request, built once before the first invocation.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: StorageClient,
    pub notifier: NotificationPublisher,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: AppConfig,
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let storage = StorageClient::new(store, config.tables.clone());
        Self {
            config,
            storage,
            notifier: NotificationPublisher::new(notifier),
        }
    }

    /// Builds DynamoDB and SNS clients from the default AWS provider chain.
    pub async fn from_config(config: AppConfig) -> Self {
        let shared_config = aws_config::from_env().load().await;

        if config.sns_topic_arn.is_none() {
            warn!("SNS_TOPIC_ARN is not set; submission notifications will fail and be logged");
        }
        info!(tables = ?config.tables, "Initialized storage and notification clients");

        let store = Arc::new(DynamoStore::new(&shared_config));
        let notifier = Arc::new(SnsNotifier::new(&shared_config, config.sns_topic_arn.clone()));
        Self::new(config, store, notifier)
    }
}
