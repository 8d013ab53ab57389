//! In-memory classification store seeded from configuration.

use async_trait::async_trait;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClassificationRecord, RecordFilter};

use super::ClassificationStore;

/// Classification store holding its rows in a `Vec`.
///
/// Rows are validated once on construction; queries never fail.
///
/// # Example
///
/// ```
/// use practitioner_salary::models::ClassificationRecord;
/// use practitioner_salary::store::InMemoryStore;
///
/// let store = InMemoryStore::new(vec![
///     ClassificationRecord::new("Nurse", None, Some("Head Nurse")),
/// ])
/// .unwrap();
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<ClassificationRecord>,
}

impl InMemoryStore {
    /// Creates a store, rejecting rows with a blank main category.
    pub fn new(records: Vec<ClassificationRecord>) -> EngineResult<Self> {
        if let Some(index) = records
            .iter()
            .position(|r| r.main_category.trim().is_empty())
        {
            return Err(EngineError::validation(
                "mainCategory",
                format!("is blank in record {}", index),
            ));
        }
        Ok(Self { records })
    }

    /// Number of stored rows, duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ClassificationStore for InMemoryStore {
    async fn fetch(&self, filter: &RecordFilter) -> EngineResult<Vec<ClassificationRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.matches(filter))
            .cloned()
            .collect())
    }
}
