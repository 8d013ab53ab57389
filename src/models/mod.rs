//! Core data models for the practitioner salary service.
//!
//! This module contains all the domain models used throughout the crate.

mod allowance;
mod classification;
mod salary;
mod selection;

pub use allowance::ContagionAllowance;
pub use classification::{
    is_blank, ClassificationRecord, MainCategoryEntry, RankEntry, RecordFilter, SubCategoryEntry,
};
pub use salary::{SalaryBreakdown, SalaryStatement};
pub use selection::Selection;
