//! Contagion allowance tiers.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The fixed tiers of contagion allowance.
///
/// Serialized as the monthly amount, e.g. `2500`. Any amount outside the
/// tier set is rejected on deserialization.
///
/// # Example
///
/// ```
/// use practitioner_salary::models::ContagionAllowance;
///
/// let tier: ContagionAllowance = serde_json::from_str("4000").unwrap();
/// assert_eq!(tier, ContagionAllowance::Medium);
/// assert!(serde_json::from_str::<ContagionAllowance>("3000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ContagionAllowance {
    /// No exposure allowance.
    None,
    /// 2500 per month.
    Low,
    /// 4000 per month.
    Medium,
    /// 5800 per month.
    High,
    /// 7200 per month.
    VeryHigh,
}

impl ContagionAllowance {
    /// Every tier, lowest first.
    pub const ALL: [ContagionAllowance; 5] = [
        ContagionAllowance::None,
        ContagionAllowance::Low,
        ContagionAllowance::Medium,
        ContagionAllowance::High,
        ContagionAllowance::VeryHigh,
    ];

    /// The monthly amount as an integer.
    pub fn units(self) -> u32 {
        match self {
            ContagionAllowance::None => 0,
            ContagionAllowance::Low => 2500,
            ContagionAllowance::Medium => 4000,
            ContagionAllowance::High => 5800,
            ContagionAllowance::VeryHigh => 7200,
        }
    }

    /// The monthly amount.
    pub fn amount(self) -> Decimal {
        Decimal::from(self.units())
    }

    /// Looks up the tier paying exactly `units`.
    pub fn from_units(units: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.units() == units)
    }
}

impl TryFrom<u32> for ContagionAllowance {
    type Error = EngineError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Self::from_units(units).ok_or_else(|| {
            EngineError::validation(
                "contagionAllowance",
                format!("{} is not one of 0, 2500, 4000, 5800, 7200", units),
            )
        })
    }
}

impl From<ContagionAllowance> for u32 {
    fn from(tier: ContagionAllowance) -> Self {
        tier.units()
    }
}

impl fmt::Display for ContagionAllowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units())
    }
}
