//! Calculation logic for the practitioner salary service.
//!
//! This module contains the salary formula, the experience validation that
//! gates it, and the assembly of the result-step statement.

mod salary;

pub use salary::{
    build_statement, calculate_salary, parse_experience_years, validate_experience_years,
    EXPERIENCE_FIELD,
};
