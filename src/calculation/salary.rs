//! Monthly salary calculation.
//!
//! The formula is a placeholder pending real pay rules:
//! `basic = base_salary + experience_years * per_year_bonus` and
//! `total = basic + contagion_allowance`. All constants come from
//! [`SalaryConfig`].

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::SalaryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ContagionAllowance, SalaryBreakdown, SalaryStatement, Selection};

/// Field name used in experience validation errors.
pub const EXPERIENCE_FIELD: &str = "experienceYears";

/// Checks that `years` lies in `[0, config.max_experience_years]`.
///
/// # Example
///
/// ```
/// use practitioner_salary::calculation::validate_experience_years;
/// use practitioner_salary::config::SalaryConfig;
///
/// let config = SalaryConfig::default();
/// assert_eq!(validate_experience_years(12, &config).unwrap(), 12);
/// assert!(validate_experience_years(13, &config).is_err());
/// assert!(validate_experience_years(-1, &config).is_err());
/// ```
pub fn validate_experience_years(years: i64, config: &SalaryConfig) -> EngineResult<u8> {
    let max = config.max_experience_years;
    u8::try_from(years)
        .ok()
        .filter(|y| *y <= max)
        .ok_or_else(|| {
            EngineError::validation(
                EXPERIENCE_FIELD,
                format!("must be between 0 and {}, got {}", max, years),
            )
        })
}

/// Parses free-text experience input, rejecting anything non-numeric or
/// out of range before it reaches the calculator.
pub fn parse_experience_years(input: &str, config: &SalaryConfig) -> EngineResult<u8> {
    let trimmed = input.trim();
    let years: i64 = trimmed.parse().map_err(|_| {
        EngineError::validation(
            EXPERIENCE_FIELD,
            format!("'{}' is not a whole number of years", trimmed),
        )
    })?;
    validate_experience_years(years, config)
}

/// Computes the monthly salary breakdown.
///
/// # Returns
///
/// The breakdown, or `ValidationError` if `experience_years` exceeds the
/// configured maximum.
///
/// # Example
///
/// ```
/// use practitioner_salary::calculation::calculate_salary;
/// use practitioner_salary::config::SalaryConfig;
/// use practitioner_salary::models::ContagionAllowance;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_salary(3, ContagionAllowance::Low, &SalaryConfig::default()).unwrap();
/// assert_eq!(breakdown.basic_salary, Decimal::new(11500, 0));
/// assert_eq!(breakdown.total, Decimal::new(14000, 0));
/// ```
pub fn calculate_salary(
    experience_years: u8,
    allowance: ContagionAllowance,
    config: &SalaryConfig,
) -> EngineResult<SalaryBreakdown> {
    let years = validate_experience_years(i64::from(experience_years), config)?;

    let experience_bonus = Decimal::from(years) * config.per_year_bonus;
    let basic_salary = config.base_salary + experience_bonus;
    let contagion_allowance = allowance.amount();

    Ok(SalaryBreakdown {
        base_salary: config.base_salary,
        experience_bonus,
        basic_salary,
        contagion_allowance,
        total: basic_salary + contagion_allowance,
        currency: config.currency.clone(),
    })
}

/// Builds the result-step statement for a completed selection.
///
/// Fails with `ValidationError` if experience or allowance has not been
/// entered yet.
pub fn build_statement(
    selection: &Selection,
    config: &SalaryConfig,
) -> EngineResult<SalaryStatement> {
    let experience_years = selection
        .experience_years
        .ok_or_else(|| EngineError::validation(EXPERIENCE_FIELD, "has not been entered"))?;
    let contagion_tier = selection
        .contagion_allowance
        .ok_or_else(|| EngineError::validation("contagionAllowance", "has not been chosen"))?;

    let breakdown = calculate_salary(experience_years, contagion_tier, config)?;

    Ok(SalaryStatement {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        main_category: selection.main_category.clone(),
        sub_category: selection.sub_category.clone(),
        rank: selection.rank.clone(),
        experience_years,
        contagion_tier,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn test_three_years_with_low_allowance() {
        let breakdown = calculate_salary(3, ContagionAllowance::Low, &SalaryConfig::default())
            .unwrap();

        assert_eq!(breakdown.base_salary, dec(10000));
        assert_eq!(breakdown.experience_bonus, dec(1500));
        assert_eq!(breakdown.basic_salary, dec(11500));
        assert_eq!(breakdown.contagion_allowance, dec(2500));
        assert_eq!(breakdown.total, dec(14000));
    }

    #[test]
    fn test_zero_experience_no_allowance() {
        let breakdown = calculate_salary(0, ContagionAllowance::None, &SalaryConfig::default())
            .unwrap();
        assert_eq!(breakdown.basic_salary, dec(10000));
        assert_eq!(breakdown.total, dec(10000));
    }

    #[test]
    fn test_max_experience_highest_allowance() {
        let breakdown =
            calculate_salary(12, ContagionAllowance::VeryHigh, &SalaryConfig::default()).unwrap();
        assert_eq!(breakdown.experience_bonus, dec(6000));
        assert_eq!(breakdown.total, dec(23200));
    }

    #[test]
    fn test_constants_come_from_config() {
        let config = SalaryConfig {
            base_salary: Decimal::new(800050, 2),
            per_year_bonus: dec(100),
            currency: "USD".to_string(),
            ..SalaryConfig::default()
        };
        let breakdown = calculate_salary(2, ContagionAllowance::Medium, &config).unwrap();
        assert_eq!(breakdown.basic_salary, Decimal::new(820050, 2));
        assert_eq!(breakdown.total, Decimal::new(1220050, 2));
        assert_eq!(breakdown.currency, "USD");
    }

    #[test]
    fn test_experience_above_max_rejected_by_calculator() {
        let result = calculate_salary(13, ContagionAllowance::None, &SalaryConfig::default());
        assert!(matches!(result, Err(EngineError::ValidationError { .. })));
    }

    #[test]
    fn test_validate_rejects_thirteen_and_negative_one() {
        let config = SalaryConfig::default();
        assert!(validate_experience_years(13, &config).is_err());
        assert!(validate_experience_years(-1, &config).is_err());
        assert_eq!(validate_experience_years(0, &config).unwrap(), 0);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let config = SalaryConfig::default();
        match parse_experience_years("three", &config) {
            Err(EngineError::ValidationError { field, message }) => {
                assert_eq!(field, EXPERIENCE_FIELD);
                assert!(message.contains("three"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
        assert!(parse_experience_years("2.5", &config).is_err());
        assert!(parse_experience_years("", &config).is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_experience_years(" 7 ", &SalaryConfig::default()).unwrap(),
            7
        );
    }

    #[test]
    fn test_build_statement_requires_details() {
        let selection = Selection {
            main_category: "Nurse".to_string(),
            experience_years: Some(3),
            ..Default::default()
        };
        match build_statement(&selection, &SalaryConfig::default()) {
            Err(EngineError::ValidationError { field, .. }) => {
                assert_eq!(field, "contagionAllowance")
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_build_statement_copies_selection() {
        let selection = Selection {
            main_category: "Physician".to_string(),
            sub_category: Some("Specialist".to_string()),
            rank: Some("Senior Specialist".to_string()),
            experience_years: Some(3),
            contagion_allowance: Some(ContagionAllowance::Low),
        };
        let statement = build_statement(&selection, &SalaryConfig::default()).unwrap();

        assert_eq!(statement.main_category, "Physician");
        assert_eq!(statement.sub_category.as_deref(), Some("Specialist"));
        assert_eq!(statement.rank.as_deref(), Some("Senior Specialist"));
        assert_eq!(statement.breakdown.total, dec(14000));
    }

    proptest! {
        #[test]
        fn prop_breakdown_is_consistent(
            years in 0u8..=12,
            tier in prop::sample::select(ContagionAllowance::ALL.to_vec()),
        ) {
            let breakdown = calculate_salary(years, tier, &SalaryConfig::default()).unwrap();
            prop_assert!(breakdown.is_consistent());
            prop_assert_eq!(breakdown.contagion_allowance, tier.amount());
        }

        #[test]
        fn prop_out_of_range_experience_rejected(
            years in prop_oneof![i64::MIN..0i64, 13i64..i64::MAX],
        ) {
            prop_assert!(validate_experience_years(years, &SalaryConfig::default()).is_err());
        }
    }
}
