//! Lookup service over a classification store.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{is_blank, RecordFilter};
use crate::store::ClassificationStore;

use super::SubCategoryResolution;

/// Answers the cascading classification queries.
///
/// Every list is distinct and keeps the store's first-seen order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use practitioner_salary::lookup::LookupService;
/// use practitioner_salary::models::ClassificationRecord;
/// use practitioner_salary::store::InMemoryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::new(vec![
///     ClassificationRecord::new("Nurse", None, Some("Head Nurse")),
///     ClassificationRecord::new("Nurse", None, Some(" ")),
/// ])
/// .unwrap();
/// let lookup = LookupService::new(Arc::new(store));
///
/// let ranks = lookup.list_ranks("Nurse", None).await.unwrap();
/// assert_eq!(ranks, vec!["Head Nurse".to_string()]);
/// # });
/// ```
#[derive(Clone)]
pub struct LookupService {
    store: Arc<dyn ClassificationStore>,
}

impl LookupService {
    /// Creates a lookup service over the given store.
    pub fn new(store: Arc<dyn ClassificationStore>) -> Self {
        Self { store }
    }

    /// Lists the distinct main categories present in the store.
    pub async fn list_main_categories(&self) -> EngineResult<Vec<String>> {
        let records = self.store.fetch(&RecordFilter::all()).await?;
        let categories = distinct(records.into_iter().map(|r| Some(r.main_category)));
        debug!(count = categories.len(), "Listed main categories");
        Ok(categories)
    }

    /// Lists the distinct, non-blank sub-categories recorded for `main_category`.
    ///
    /// Fails with `InvalidArgument` if `main_category` is blank.
    pub async fn list_sub_categories(&self, main_category: &str) -> EngineResult<Vec<String>> {
        require_main_category(main_category)?;

        let records = self.store.fetch(&RecordFilter::main(main_category)).await?;
        let sub_categories = distinct(records.into_iter().map(|r| r.sub_category));
        debug!(
            main_category,
            count = sub_categories.len(),
            "Listed sub-categories"
        );
        Ok(sub_categories)
    }

    /// Lists the distinct, non-blank ranks for `main_category`, narrowed to
    /// `sub_category` when one is given.
    ///
    /// A blank `sub_category` is treated as absent. Fails with
    /// `InvalidArgument` if `main_category` is blank.
    pub async fn list_ranks(
        &self,
        main_category: &str,
        sub_category: Option<&str>,
    ) -> EngineResult<Vec<String>> {
        require_main_category(main_category)?;

        let mut filter = RecordFilter::main(main_category);
        if let Some(sub) = sub_category.filter(|s| !s.trim().is_empty()) {
            filter = filter.with_sub(sub);
        }

        let records = self.store.fetch(&filter).await?;
        let ranks = distinct(records.into_iter().map(|r| r.rank));
        debug!(
            main_category,
            sub_category = sub_category.unwrap_or_default(),
            count = ranks.len(),
            "Listed ranks"
        );
        Ok(ranks)
    }

    /// Lists sub-categories for `main_category` and applies the skip policy,
    /// taking records without a sub-category into account.
    pub async fn resolve_sub_categories(
        &self,
        main_category: &str,
    ) -> EngineResult<SubCategoryResolution> {
        require_main_category(main_category)?;

        let records = self.store.fetch(&RecordFilter::main(main_category)).await?;
        let has_unclassified = records
            .iter()
            .any(|r| is_blank(r.sub_category.as_deref()));
        let sub_categories = distinct(records.into_iter().map(|r| r.sub_category));
        debug!(
            main_category,
            count = sub_categories.len(),
            has_unclassified,
            "Resolved sub-categories"
        );
        Ok(SubCategoryResolution::from_listing(
            main_category,
            sub_categories,
            has_unclassified,
        ))
    }
}

fn require_main_category(main_category: &str) -> EngineResult<()> {
    if main_category.trim().is_empty() {
        return Err(EngineError::invalid_argument(
            "mainCategory",
            "Main category is required",
        ));
    }
    Ok(())
}

/// Drops blank values and duplicates, keeping first-seen order.
fn distinct(values: impl Iterator<Item = Option<String>>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .flatten()
        .filter(|v| !v.trim().is_empty())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
