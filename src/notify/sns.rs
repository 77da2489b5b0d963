use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sns::error::DisplayErrorContext;

use super::Notifier;
use crate::errors::BoardError;

#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: SnsClient,
    topic_arn: Option<String>,
}

impl SnsNotifier {
    #[must_use]
    pub fn new(shared_config: &SdkConfig, topic_arn: Option<String>) -> Self {
        Self {
            client: SnsClient::new(shared_config),
            topic_arn,
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, message: &str) -> Result<(), BoardError> {
        let Some(topic_arn) = &self.topic_arn else {
            return Err(BoardError::NotificationError(
                "SNS_TOPIC_ARN is not configured".to_string(),
            ));
        };

        self.client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .send()
            .await
            .map_err(|e| {
                BoardError::NotificationError(format!("sns publish: {}", DisplayErrorContext(&e)))
            })?;
        Ok(())
    }
}
