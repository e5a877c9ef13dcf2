//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `booking_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use booking_core::booking::{Booking, BookingKey};
use booking_core::storage::{BookingRepository, Result};

use super::conversions::{booking_to_item, items_to_bookings};
use super::error::{map_delete_item_error, map_put_item_error, map_query_error, map_scan_error};
use super::keys;

type Item = HashMap<String, AttributeValue>;

/// DynamoDB-based repository implementation.
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

    /// Creates a repository using the AWS SDK default credential chain.
    ///
    /// `endpoint` overrides the service endpoint, e.g. `http://localhost:8000`
    /// for DynamoDB Local.
    pub async fn connect(table_name: impl Into<String>, endpoint: Option<&str>) -> Self {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = endpoint {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Scans the whole table, optionally filtered by category.
    ///
    /// The filter is applied server-side after reading each page, so the
    /// cost is that of a full scan either way.
    async fn scan_all(&self, category: Option<&str>) -> Result<Vec<Booking>> {
        let mut items: Vec<Item> = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let mut request = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take());

            if let Some(category) = category {
                request = request
                    .filter_expression(keys::category_filter())
                    .expression_attribute_names(keys::SORT_KEY_NAME, keys::SORT_KEY)
                    .expression_attribute_values(
                        ":category",
                        AttributeValue::S(category.to_string()),
                    );
            }

            let output = request.send().await.map_err(map_scan_error)?;
            items.extend(output.items.unwrap_or_default());

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::trace!(
            table = %self.table_name,
            items = items.len(),
            "Scanned bookings table"
        );

        items_to_bookings(&items)
    }
}

#[async_trait]
impl BookingRepository for DynamoDbRepository {
    async fn put_booking(&self, booking: &Booking) -> Result<Booking> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(booking_to_item(booking)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(booking.clone())
    }

    async fn get_all_bookings(&self) -> Result<Vec<Booking>> {
        self.scan_all(None).await
    }

    async fn get_bookings_by_email(&self, email: &str) -> Result<Vec<Booking>> {
        let mut items: Vec<Item> = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(keys::partition_condition())
                .expression_attribute_names(keys::PARTITION_KEY_NAME, keys::PARTITION_KEY)
                .expression_attribute_values(":email", AttributeValue::S(email.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            items.extend(output.items.unwrap_or_default());

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        items_to_bookings(&items)
    }

    async fn get_bookings_by_category(&self, category: &str) -> Result<Vec<Booking>> {
        self.scan_all(Some(category)).await
    }

    async fn delete_booking(&self, email: &str, category: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(email, category)))
            .condition_expression(keys::exists_condition())
            .expression_attribute_names(keys::PARTITION_KEY_NAME, keys::PARTITION_KEY)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, BookingKey::new(email, category).to_string()))?;

        Ok(())
    }
}
