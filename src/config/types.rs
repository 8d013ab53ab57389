//! Configuration types for the practitioner salary service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::ClassificationRecord;

fn default_max_experience_years() -> u8 {
    12
}

fn default_currency() -> String {
    "SAR".to_string()
}

/// Salary formula constants from `salary.yaml`.
///
/// The formula itself is a placeholder until real pay rules are defined,
/// so every constant lives here rather than in code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalaryConfig {
    /// Fixed monthly base amount.
    pub base_salary: Decimal,
    /// Amount added per year of experience.
    pub per_year_bonus: Decimal,
    /// Highest accepted experience value (inclusive).
    #[serde(default = "default_max_experience_years")]
    pub max_experience_years: u8,
    /// Currency code reported with every salary breakdown.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            base_salary: Decimal::new(10000, 0),
            per_year_bonus: Decimal::new(500, 0),
            max_experience_years: default_max_experience_years(),
            currency: default_currency(),
        }
    }
}

/// Classification table file structure from `classifications.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationsConfig {
    /// Seed rows of the classification store.
    pub records: Vec<ClassificationRecord>,
}
