//! Request types for the practitioner salary API.
//!
//! This module defines the query-string parameters of the lookup endpoints
//! and the JSON body of the `/calculateSalary` endpoint.

use serde::{Deserialize, Serialize};

use crate::calculation::validate_experience_years;
use crate::config::SalaryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::ContagionAllowance;

/// Query parameters for `/subCategories` and `/ranks`.
///
/// Both are optional at the extractor level so that a missing
/// `mainCategory` produces this API's own 400 body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    /// The main category to filter on.
    #[serde(default)]
    pub main_category: Option<String>,
    /// The sub-category to filter on (ranks only).
    #[serde(default)]
    pub sub_category: Option<String>,
}

impl LookupQuery {
    /// Returns the main category, or `InvalidArgument` if missing or blank.
    pub fn require_main_category(&self) -> EngineResult<&str> {
        self.main_category
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| {
                EngineError::invalid_argument("mainCategory", "Main category is required")
            })
    }
}

/// Request body for the `/calculateSalary` endpoint.
///
/// Fields are taken as raw numbers and validated by [`SalaryRequest::validate`]
/// so range errors carry a field name rather than a serde message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRequest {
    /// Years of experience.
    pub experience_years: i64,
    /// Contagion allowance amount; must be one of the fixed tiers.
    pub contagion_allowance: u32,
}

impl SalaryRequest {
    /// Checks both fields against the configured limits.
    pub fn validate(&self, config: &SalaryConfig) -> EngineResult<(u8, ContagionAllowance)> {
        let years = validate_experience_years(self.experience_years, config)?;
        let tier = ContagionAllowance::try_from(self.contagion_allowance)?;
        Ok((years, tier))
    }
}
