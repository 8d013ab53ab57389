//! Sub-category skip policy.

/// How the sub-category step should proceed for a main category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubCategoryResolution {
    /// There is a real choice; the user must pick one of these.
    Choose(Vec<String>),
    /// Some records carry one of these sub-categories and some carry none.
    /// Ranks are resolved without a sub filter until the user narrows them
    /// by picking one.
    Optional(Vec<String>),
    /// No real sub-category exists. Resolve ranks directly, filtering on
    /// `rank_sub_key` when present.
    Skip {
        /// Sub-category to use as the rank lookup key.
        rank_sub_key: Option<String>,
    },
}

impl SubCategoryResolution {
    /// Applies the skip policy to a sub-category list for `main_category`
    /// whose records all carry a sub-category.
    ///
    /// An empty list skips without a sub key. A single entry equal to the
    /// main category itself skips and uses that value as the sub key.
    ///
    /// # Example
    ///
    /// ```
    /// use practitioner_salary::lookup::SubCategoryResolution;
    ///
    /// let resolution = SubCategoryResolution::from_list(
    ///     "Pharmacist",
    ///     vec!["Pharmacist".to_string()],
    /// );
    /// assert_eq!(
    ///     resolution,
    ///     SubCategoryResolution::Skip { rank_sub_key: Some("Pharmacist".to_string()) }
    /// );
    /// ```
    pub fn from_list(main_category: &str, sub_categories: Vec<String>) -> Self {
        Self::from_listing(main_category, sub_categories, false)
    }

    /// Applies the skip policy when `has_unclassified` says whether any
    /// record of `main_category` has a blank sub-category.
    ///
    /// Unclassified records must stay reachable, so they never force a
    /// choice and never narrow the rank lookup to a sub key.
    pub fn from_listing(
        main_category: &str,
        sub_categories: Vec<String>,
        has_unclassified: bool,
    ) -> Self {
        match (sub_categories.as_slice(), has_unclassified) {
            ([], _) => SubCategoryResolution::Skip { rank_sub_key: None },
            ([only], false) if only == main_category => SubCategoryResolution::Skip {
                rank_sub_key: Some(only.clone()),
            },
            ([only], true) if only == main_category => {
                SubCategoryResolution::Skip { rank_sub_key: None }
            }
            (_, true) => SubCategoryResolution::Optional(sub_categories),
            (_, false) => SubCategoryResolution::Choose(sub_categories),
        }
    }

    /// Returns true if the user has to pick a sub-category.
    pub fn requires_choice(&self) -> bool {
        matches!(self, SubCategoryResolution::Choose(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_skips_without_key() {
        assert_eq!(
            SubCategoryResolution::from_list("Nurse", vec![]),
            SubCategoryResolution::Skip { rank_sub_key: None }
        );
    }

    #[test]
    fn test_single_different_entry_is_a_choice() {
        let resolution =
            SubCategoryResolution::from_list("Physician", vec!["Specialist".to_string()]);
        assert!(resolution.requires_choice());
    }

    #[test]
    fn test_self_match_among_others_is_a_choice() {
        let resolution = SubCategoryResolution::from_list(
            "Dentist",
            vec!["Dentist".to_string(), "Orthodontist".to_string()],
        );
        assert_eq!(
            resolution,
            SubCategoryResolution::Choose(vec![
                "Dentist".to_string(),
                "Orthodontist".to_string()
            ])
        );
    }

    #[test]
    fn test_unclassified_records_make_choice_optional() {
        assert_eq!(
            SubCategoryResolution::from_listing("Nurse", vec!["ICU".to_string()], true),
            SubCategoryResolution::Optional(vec!["ICU".to_string()])
        );
        assert!(!SubCategoryResolution::Optional(vec!["ICU".to_string()]).requires_choice());
    }

    #[test]
    fn test_self_match_with_unclassified_skips_without_key() {
        assert_eq!(
            SubCategoryResolution::from_listing(
                "Pharmacist",
                vec!["Pharmacist".to_string()],
                true
            ),
            SubCategoryResolution::Skip { rank_sub_key: None }
        );
    }
}
