use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use super::RecordStore;
use crate::core::models::Item;
use crate::errors::BoardError;

/// DynamoDB-backed store; one DynamoDB table per entity kind.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamoClient,
}

impl DynamoStore {
    #[must_use]
    pub fn new(shared_config: &SdkConfig) -> Self {
        Self::from_client(DynamoClient::new(shared_config))
    }

    #[must_use]
    pub fn from_client(client: DynamoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for DynamoStore {
    async fn put_item(&self, table: &str, item: Item) -> Result<(), BoardError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(to_attributes(item)))
            .send()
            .await
            .map_err(|e| {
                BoardError::StorageWriteError(format!(
                    "dynamodb put_item into {table}: {}",
                    DisplayErrorContext(&e)
                ))
            })?;
        Ok(())
    }

    async fn scan_table(&self, table: &str) -> Result<Vec<Item>, BoardError> {
        let mut items = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let page = self
                .client
                .scan()
                .table_name(table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| {
                    BoardError::StorageReadError(format!(
                        "dynamodb scan of {table}: {}",
                        DisplayErrorContext(&e)
                    ))
                })?;

            items.extend(page.items.unwrap_or_default().into_iter().map(from_attributes));

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => {
                    debug!(table = %table, scanned = items.len(), "Continuing paginated scan");
                    start_key = Some(key);
                }
                _ => break,
            }
        }

        Ok(items)
    }
}

fn to_attributes(item: Item) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(name, value)| (name, AttributeValue::S(value)))
        .collect()
}

fn from_attributes(attributes: HashMap<String, AttributeValue>) -> Item {
    attributes
        .into_iter()
        .filter_map(|(name, value)| match value {
            AttributeValue::S(s) | AttributeValue::N(s) => Some((name, s)),
            AttributeValue::Bool(b) => Some((name, b.to_string())),
            _ => None,
        })
        .collect()
}
