//! DynamoDB implementation of [`ReadingStore`].

use std::{collections::HashMap, fmt::Display, future::Future, str::FromStr, time::Duration};

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{config::Region, error::DisplayErrorContext, types::AttributeValue, Client};
use tracing::debug;

use super::ReadingStore;
use crate::{Config, RangeReading, Reading, StoreError};

type Item = HashMap<String, AttributeValue>;

// ---

/// Store handle over one DynamoDB table.
///
/// The partition key is `Type` and the sort key is `Date`.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    // ---
    client: Client,
    table_name: String,
    timeout: Duration,
}

impl DynamoStore {
    /// Build a client from the ambient AWS environment and `cfg`.
    pub async fn connect(cfg: &Config) -> Self {
        // ---
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(cfg.region.clone()));
        if let Some(url) = &cfg.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), cfg)
    }

    pub fn new(client: Client, cfg: &Config) -> Self {
        Self {
            client,
            table_name: cfg.table_name.clone(),
            timeout: cfg.store_timeout,
        }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        // ---
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }
}

impl ReadingStore for DynamoStore {
    async fn latest(&self, reading_type: &str) -> Result<Reading, StoreError> {
        // ---
        let output = self
            .bounded(async {
                self.client
                    .query()
                    .table_name(&self.table_name)
                    .key_condition_expression("#t = :t")
                    .expression_attribute_names("#t", "Type")
                    .expression_attribute_values(":t", AttributeValue::S(reading_type.to_owned()))
                    .scan_index_forward(false)
                    .limit(1)
                    .send()
                    .await
                    .map_err(backend_error)
            })
            .await?;

        debug!("Query on '{}' returned {} items", reading_type, output.items().len());

        let item = output
            .items()
            .first()
            .ok_or_else(|| StoreError::NotFound(reading_type.to_owned()))?;

        reading_from_item(item)
    }

    async fn range(&self, start: i64, end: i64) -> Result<Vec<RangeReading>, StoreError> {
        // ---
        // DynamoDB rejects BETWEEN with inverted bounds; nothing can match anyway.
        if start > end {
            debug!("Inverted range {}..{}, skipping scan", start, end);
            return Ok(Vec::new());
        }

        let output = self
            .bounded(async {
                self.client
                    .scan()
                    .table_name(&self.table_name)
                    .filter_expression("#d BETWEEN :start AND :end")
                    .projection_expression("#d, #i, #v")
                    .expression_attribute_names("#d", "Date")
                    .expression_attribute_names("#i", "Id")
                    .expression_attribute_names("#v", "Value")
                    .expression_attribute_values(":start", AttributeValue::N(start.to_string()))
                    .expression_attribute_values(":end", AttributeValue::N(end.to_string()))
                    .send()
                    .await
                    .map_err(backend_error)
            })
            .await?;

        debug!("Scan {}..{} returned {} items", start, end, output.items().len());

        output.items().iter().map(range_reading_from_item).collect()
    }
}

fn backend_error<E>(err: E) -> StoreError
where
    E: std::error::Error,
{
    StoreError::Backend(DisplayErrorContext(err).to_string())
}

// ---

fn reading_from_item(item: &Item) -> Result<Reading, StoreError> {
    // ---
    Ok(Reading {
        id: string_attr(item, "Id")?,
        date: number_attr(item, "Date")?,
        value: number_attr(item, "Value")?,
        reading_type: string_attr(item, "Type")?,
    })
}

fn range_reading_from_item(item: &Item) -> Result<RangeReading, StoreError> {
    // ---
    Ok(RangeReading {
        date: number_attr(item, "Date")?,
        id: string_attr(item, "Id")?,
        value: number_attr(item, "Value")?,
    })
}

/// Missing and NULL attributes decode to an empty string.
fn string_attr(item: &Item, name: &str) -> Result<String, StoreError> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(String::new()),
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(other) => Err(unexpected_kind(name, "string", other)),
    }
}

/// Missing and NULL attributes decode to zero.
fn number_attr<T>(item: &Item, name: &str) -> Result<T, StoreError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(T::default()),
        Some(AttributeValue::N(n)) => n
            .parse()
            .map_err(|e| StoreError::MalformedItem(format!("attribute '{name}' = {n}: {e}"))),
        Some(other) => Err(unexpected_kind(name, "number", other)),
    }
}

fn unexpected_kind(name: &str, expected: &str, got: &AttributeValue) -> StoreError {
    StoreError::MalformedItem(format!("attribute '{name}': expected {expected}, got {got:?}"))
}
