//! In-memory [`ReadingStore`] for route tests.

use std::sync::Arc;

use super::ReadingStore;
use crate::{RangeReading, Reading, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    readings: Arc<Vec<Reading>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self {
            readings: Arc::new(readings),
            failure: None,
        }
    }

    /// A store whose every call fails with a backend error.
    pub fn failing(message: &str) -> Self {
        Self {
            readings: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(msg) => Err(StoreError::Backend(msg.clone())),
            None => Ok(()),
        }
    }
}

impl ReadingStore for MemoryStore {
    async fn latest(&self, reading_type: &str) -> Result<Reading, StoreError> {
        self.check()?;
        self.readings
            .iter()
            .filter(|r| r.reading_type == reading_type)
            .max_by_key(|r| r.date)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(reading_type.to_owned()))
    }

    async fn range(&self, start: i64, end: i64) -> Result<Vec<RangeReading>, StoreError> {
        self.check()?;
        Ok(self
            .readings
            .iter()
            .filter(|r| start <= r.date && r.date <= end)
            .map(RangeReading::from)
            .collect())
    }
}
