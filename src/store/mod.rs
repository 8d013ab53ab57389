//! Classification store abstraction.
//!
//! The lookups only ever need "fetch the rows matching this filter"; the
//! distinct/blank handling happens above the store in
//! [`crate::lookup::LookupService`]. Backends report failures as
//! [`EngineError::StorageFailure`](crate::error::EngineError::StorageFailure).

mod memory;

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{ClassificationRecord, RecordFilter};

pub use memory::InMemoryStore;

/// Read-only source of classification records.
#[async_trait]
pub trait ClassificationStore: Send + Sync {
    /// Returns every record matching `filter`, in storage order.
    async fn fetch(&self, filter: &RecordFilter) -> EngineResult<Vec<ClassificationRecord>>;
}
