//! DynamoDB repository implementation.
//!
//! Implements [`ItemRepository`] from `inventory_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use inventory_core::item::{Attributes, Item, ID_ATTRIBUTE};
use inventory_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::{dynamo_to_attributes, dynamo_to_item, item_to_dynamo};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use super::expressions::build_update_expression;

/// DynamoDB-based repository implementation.
///
/// The client is created once at startup and shared by every request.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository using the AWS SDK default credential chain.
    ///
    /// `AWS_REGION`, `AWS_PROFILE` and `AWS_ENDPOINT_URL` (for local
    /// DynamoDB) are honored by the SDK loader.
    pub async fn from_env(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, Self::key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(dynamo_to_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn scan_items(&self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items() {
                items.push(dynamo_to_item(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_dynamo(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_item(&self, id: &str, changes: &Attributes) -> Result<Attributes> {
        let update = build_update_expression(changes)
            .ok_or_else(|| RepositoryError::InvalidData("no attributes to update".to_string()))?;

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, Self::key(id))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        match result.attributes {
            Some(attributes) => dynamo_to_attributes(&attributes),
            None => Ok(Attributes::new()),
        }
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, Self::key(id))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
