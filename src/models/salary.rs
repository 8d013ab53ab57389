//! Salary result models.
//!
//! This module contains the [`SalaryBreakdown`] produced by the salary
//! calculator and the [`SalaryStatement`] shown at the end of the wizard.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ContagionAllowance;

/// Monthly salary components.
///
/// Derived, never persisted. `basic_salary` is `base_salary + experience_bonus`
/// and `total` is `basic_salary + contagion_allowance`.
///
/// # Example
///
/// ```
/// use practitioner_salary::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     base_salary: Decimal::new(10000, 0),
///     experience_bonus: Decimal::new(1500, 0),
///     basic_salary: Decimal::new(11500, 0),
///     contagion_allowance: Decimal::new(2500, 0),
///     total: Decimal::new(14000, 0),
///     currency: "SAR".to_string(),
/// };
/// assert!(breakdown.is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBreakdown {
    /// The fixed base amount.
    pub base_salary: Decimal,
    /// Experience years times the per-year bonus.
    pub experience_bonus: Decimal,
    /// Base salary plus experience bonus.
    pub basic_salary: Decimal,
    /// The chosen contagion allowance tier amount.
    pub contagion_allowance: Decimal,
    /// Basic salary plus contagion allowance.
    pub total: Decimal,
    /// Currency code the amounts are expressed in.
    pub currency: String,
}

impl SalaryBreakdown {
    /// Returns true if the derived fields agree with their components.
    pub fn is_consistent(&self) -> bool {
        self.basic_salary == self.base_salary + self.experience_bonus
            && self.total == self.basic_salary + self.contagion_allowance
    }
}

/// What the result step of the wizard shows: the classification the user
/// picked, the details they entered, and the computed breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStatement {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The main category.
    pub main_category: String,
    /// The sub-category, omitted when the classification has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// The rank, omitted when the classification has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    /// Years of experience entered.
    pub experience_years: u8,
    /// The contagion allowance tier chosen.
    pub contagion_tier: ContagionAllowance,
    /// The computed salary components.
    pub breakdown: SalaryBreakdown,
}
