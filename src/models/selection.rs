//! The user's in-progress selection.

use serde::{Deserialize, Serialize};

use super::ContagionAllowance;

/// Everything the user has picked so far, built up across the two wizard steps.
///
/// Changing an upstream field clears the fields downstream of it; see
/// [`Selection::set_main_category`] and [`Selection::set_sub_category`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Chosen main category, empty until chosen.
    pub main_category: String,
    /// Chosen (or auto-resolved) sub-category.
    pub sub_category: Option<String>,
    /// Chosen rank.
    pub rank: Option<String>,
    /// Years of experience, once entered and valid.
    pub experience_years: Option<u8>,
    /// Contagion allowance tier, once chosen.
    pub contagion_allowance: Option<ContagionAllowance>,
}

impl Selection {
    /// Sets the main category and clears sub-category and rank.
    pub fn set_main_category(&mut self, main_category: &str) {
        self.main_category = main_category.to_string();
        self.sub_category = None;
        self.rank = None;
    }

    /// Sets the sub-category and clears rank.
    pub fn set_sub_category(&mut self, sub_category: Option<&str>) {
        self.sub_category = sub_category.map(str::to_string);
        self.rank = None;
    }

    /// Returns true once a main category has been chosen.
    pub fn has_main_category(&self) -> bool {
        !self.main_category.trim().is_empty()
    }
}
