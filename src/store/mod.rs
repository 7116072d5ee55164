//! Database gateway for the readings table.
//!
//! Handlers only see the [`ReadingStore`] trait; the production
//! implementation is [`DynamoStore`], constructed once at startup and handed
//! to the router as state.
use std::future::Future;

use crate::{RangeReading, Reading, StoreError};

mod dynamo;
#[cfg(test)]
pub mod memory;

pub use dynamo::DynamoStore;

// ---

/// Read access to the stored sensor readings.
pub trait ReadingStore: Clone + Send + Sync + 'static {
    /// Newest reading of `reading_type`, or [`StoreError::NotFound`].
    fn latest(
        &self,
        reading_type: &str,
    ) -> impl Future<Output = Result<Reading, StoreError>> + Send;

    /// Every reading with `start <= date <= end`, in store order.
    ///
    /// An empty result is not an error.
    fn range(
        &self,
        start: i64,
        end: i64,
    ) -> impl Future<Output = Result<Vec<RangeReading>, StoreError>> + Send;
}
