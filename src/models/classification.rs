//! Classification records and the query shapes returned by the lookups.
//!
//! A [`ClassificationRecord`] is one row of the practitioner classification
//! table. The `*Entry` types are the single-field JSON objects the lookup
//! endpoints return, e.g. `{"mainCategory": "Physician"}`.

use serde::{Deserialize, Serialize};

/// Returns true if the value is absent, empty, or whitespace-only.
///
/// # Example
///
/// ```
/// use practitioner_salary::models::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some("   ")));
/// assert!(!is_blank(Some("Consultant")));
/// ```
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// One row of the practitioner classification table.
///
/// Uniqueness is not enforced; the same (main, sub, rank) triple may appear
/// more than once and distinctness is computed at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Top-level practitioner classification.
    pub main_category: String,
    /// Optional refinement of the main category.
    #[serde(default)]
    pub sub_category: Option<String>,
    /// Practitioner grade within the (main, sub) classification.
    #[serde(default)]
    pub rank: Option<String>,
}

impl ClassificationRecord {
    /// Creates a record from borrowed parts.
    pub fn new(main_category: &str, sub_category: Option<&str>, rank: Option<&str>) -> Self {
        Self {
            main_category: main_category.to_string(),
            sub_category: sub_category.map(str::to_string),
            rank: rank.map(str::to_string),
        }
    }

    /// Returns true if this record satisfies the filter.
    pub fn matches(&self, filter: &RecordFilter) -> bool {
        let main_ok = filter
            .main_category
            .as_ref()
            .is_none_or(|m| *m == self.main_category);
        let sub_ok = filter
            .sub_category
            .as_ref()
            .is_none_or(|s| self.sub_category.as_ref() == Some(s));
        main_ok && sub_ok
    }
}

/// Equality filter applied by a classification store.
///
/// `None` fields match every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Match records with exactly this main category.
    pub main_category: Option<String>,
    /// Match records with exactly this sub-category.
    pub sub_category: Option<String>,
}

impl RecordFilter {
    /// A filter matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter on main category only.
    pub fn main(main_category: &str) -> Self {
        Self {
            main_category: Some(main_category.to_string()),
            sub_category: None,
        }
    }

    /// Narrows the filter to a sub-category.
    pub fn with_sub(mut self, sub_category: &str) -> Self {
        self.sub_category = Some(sub_category.to_string());
        self
    }
}

/// Item of the `/mainCategories` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainCategoryEntry {
    /// The main category value.
    pub main_category: String,
}

/// Item of the `/subCategories` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryEntry {
    /// The sub-category value.
    pub sub_category: String,
}

/// Item of the `/ranks` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    /// The rank value.
    pub rank: String,
}
