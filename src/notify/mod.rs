//! Best-effort submission notifications.

pub mod sns;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::errors::BoardError;

pub use sns::SnsNotifier;

/// A transport able to deliver one notification message.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, message: &str) -> Result<(), BoardError>;
}

/// Publishes notifications without ever failing the caller.
#[derive(Clone)]
pub struct NotificationPublisher {
    notifier: Arc<dyn Notifier>,
}

impl NotificationPublisher {
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Attempts delivery once. Failures are logged and dropped.
    pub async fn publish(&self, message: &str) {
        match self.notifier.publish(message).await {
            Ok(()) => info!(message = %message, "Notification published"),
            Err(e) => error!(error = %e, "Error publishing notification"),
        }
    }
}
