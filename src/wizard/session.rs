//! Per-session wizard state and its guarded transitions.
//!
//! A [`WizardSession`] never performs I/O. Selecting something returns a
//! [`LookupRequest`]; whoever owns the session runs the lookup and hands the
//! result back through [`WizardSession::apply`]. Each request carries a
//! [`LookupTicket`], and a result is only applied if its ticket is still the
//! newest one issued for that field.

use std::fmt;

use tracing::{debug, warn};

use crate::calculation::{build_statement, parse_experience_years, validate_experience_years};
use crate::config::SalaryConfig;
use crate::error::{EngineError, EngineResult};
use crate::lookup::SubCategoryResolution;
use crate::models::{is_blank, ContagionAllowance, SalaryStatement, Selection};

/// The wizard's steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Picking main category, sub-category and rank.
    SelectingClassification,
    /// Entering experience and contagion allowance.
    EnteringDetails,
    /// Showing the computed salary.
    ShowingResult,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::SelectingClassification => "selecting classification",
            WizardStep::EnteringDetails => "entering details",
            WizardStep::ShowingResult => "showing result",
        };
        f.write_str(name)
    }
}

/// The option list a lookup fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupField {
    /// The main category list.
    MainCategories,
    /// The sub-category list.
    SubCategories,
    /// The rank list.
    Ranks,
}

impl LookupField {
    fn index(self) -> usize {
        match self {
            LookupField::MainCategories => 0,
            LookupField::SubCategories => 1,
            LookupField::Ranks => 2,
        }
    }
}

/// Identifies one issued lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupTicket {
    /// The field the lookup fills.
    pub field: LookupField,
    /// Monotonic per-field counter; higher supersedes lower.
    pub generation: u64,
}

/// A lookup the session wants run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// List all main categories.
    MainCategories {
        /// Ticket to return with the result.
        ticket: LookupTicket,
    },
    /// List sub-categories of a main category.
    SubCategories {
        /// Ticket to return with the result.
        ticket: LookupTicket,
        /// The main category to query.
        main_category: String,
    },
    /// List ranks of a main (+ optional sub) category.
    Ranks {
        /// Ticket to return with the result.
        ticket: LookupTicket,
        /// The main category to query.
        main_category: String,
        /// The sub-category key, if any.
        sub_category: Option<String>,
    },
}

impl LookupRequest {
    /// The ticket to pass back to [`WizardSession::apply`].
    pub fn ticket(&self) -> LookupTicket {
        match self {
            LookupRequest::MainCategories { ticket }
            | LookupRequest::SubCategories { ticket, .. }
            | LookupRequest::Ranks { ticket, .. } => *ticket,
        }
    }
}

/// The result of running a [`LookupRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A plain option list. For a sub-category lookup this means every
    /// record of the main category carries a sub-category.
    Options(Vec<String>),
    /// A sub-category lookup with the skip policy already applied.
    SubCategories(SubCategoryResolution),
}

impl From<Vec<String>> for LookupOutcome {
    fn from(values: Vec<String>) -> Self {
        LookupOutcome::Options(values)
    }
}

impl From<SubCategoryResolution> for LookupOutcome {
    fn from(resolution: SubCategoryResolution) -> Self {
        LookupOutcome::SubCategories(resolution)
    }
}

/// State of one user's pass through the wizard.
#[derive(Debug, Clone)]
pub struct WizardSession {
    step: WizardStep,
    selection: Selection,
    main_categories: Vec<String>,
    sub_categories: Vec<String>,
    ranks: Vec<String>,
    sub_category_required: bool,
    ranks_loaded: bool,
    generations: [u64; 3],
    statement: Option<SalaryStatement>,
    salary_config: SalaryConfig,
}

impl WizardSession {
    /// Creates a session at the classification step with nothing selected.
    pub fn new(salary_config: SalaryConfig) -> Self {
        Self {
            step: WizardStep::SelectingClassification,
            selection: Selection::default(),
            main_categories: Vec::new(),
            sub_categories: Vec::new(),
            ranks: Vec::new(),
            sub_category_required: false,
            ranks_loaded: false,
            generations: [0; 3],
            statement: None,
            salary_config,
        }
    }

    /// Current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Everything selected so far.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Main category options.
    pub fn main_categories(&self) -> &[String] {
        &self.main_categories
    }

    /// Sub-category options; empty when the sub-category step is skipped.
    pub fn sub_categories(&self) -> &[String] {
        &self.sub_categories
    }

    /// Rank options.
    pub fn ranks(&self) -> &[String] {
        &self.ranks
    }

    /// Whether the user has to pick a sub-category.
    pub fn sub_category_required(&self) -> bool {
        self.sub_category_required
    }

    /// The computed statement, present only at [`WizardStep::ShowingResult`].
    pub fn statement(&self) -> Option<&SalaryStatement> {
        self.statement.as_ref()
    }

    /// Returns true once the rank question is settled: a rank was chosen, or
    /// the rank lookup came back with nothing to choose from.
    pub fn rank_resolved(&self) -> bool {
        self.ranks_loaded && (self.selection.rank.is_some() || self.ranks.is_empty())
    }

    /// Returns true if `ticket` is the newest one issued for its field.
    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.generations[ticket.field.index()] == ticket.generation
    }

    fn issue(&mut self, field: LookupField) -> LookupTicket {
        let slot = &mut self.generations[field.index()];
        *slot += 1;
        LookupTicket {
            field,
            generation: *slot,
        }
    }

    fn require_step(&self, expected: WizardStep, action: &str) -> EngineResult<()> {
        if self.step != expected {
            return Err(EngineError::InvalidTransition {
                from: self.step.to_string(),
                action: action.to_string(),
            });
        }
        Ok(())
    }

    /// Requests the main category list.
    pub fn load_main_categories(&mut self) -> LookupRequest {
        LookupRequest::MainCategories {
            ticket: self.issue(LookupField::MainCategories),
        }
    }

    fn request_ranks(&mut self, sub_category: Option<String>) -> LookupRequest {
        self.ranks.clear();
        self.ranks_loaded = false;
        LookupRequest::Ranks {
            ticket: self.issue(LookupField::Ranks),
            main_category: self.selection.main_category.clone(),
            sub_category,
        }
    }

    /// Picks a main category.
    ///
    /// Clears sub-category and rank along with their option lists, and
    /// supersedes any in-flight sub-category or rank lookup.
    pub fn select_main_category(&mut self, main_category: &str) -> EngineResult<LookupRequest> {
        self.require_step(WizardStep::SelectingClassification, "select a main category")?;
        if !self.main_categories.iter().any(|m| m == main_category) {
            return Err(EngineError::validation(
                "mainCategory",
                format!("'{}' is not an available main category", main_category),
            ));
        }

        self.selection.set_main_category(main_category);
        self.sub_categories.clear();
        self.sub_category_required = false;
        self.ranks.clear();
        self.ranks_loaded = false;
        // Invalidate rank responses that belong to the previous main category.
        self.issue(LookupField::Ranks);

        Ok(LookupRequest::SubCategories {
            ticket: self.issue(LookupField::SubCategories),
            main_category: main_category.to_string(),
        })
    }

    /// Picks a sub-category from the current option list and requests ranks.
    pub fn select_sub_category(&mut self, sub_category: &str) -> EngineResult<LookupRequest> {
        self.require_step(WizardStep::SelectingClassification, "select a sub-category")?;
        if !self.sub_categories.iter().any(|s| s == sub_category) {
            return Err(EngineError::validation(
                "subCategory",
                format!("'{}' is not an available sub-category", sub_category),
            ));
        }

        self.selection.set_sub_category(Some(sub_category));
        Ok(self.request_ranks(Some(sub_category.to_string())))
    }

    /// Drops an optional sub-category and requests the unfiltered ranks.
    ///
    /// Only valid when records without a sub-category exist for the main
    /// category, i.e. the sub-category list is offered but not required.
    pub fn clear_sub_category(&mut self) -> EngineResult<LookupRequest> {
        self.require_step(WizardStep::SelectingClassification, "clear the sub-category")?;
        if self.sub_category_required || self.sub_categories.is_empty() {
            return Err(EngineError::validation(
                "subCategory",
                "cannot be left empty for this main category",
            ));
        }
        self.selection.set_sub_category(None);
        Ok(self.request_ranks(None))
    }

    /// Picks a rank from the current option list.
    pub fn select_rank(&mut self, rank: &str) -> EngineResult<()> {
        self.require_step(WizardStep::SelectingClassification, "select a rank")?;
        if !self.ranks.iter().any(|r| r == rank) {
            return Err(EngineError::validation(
                "rank",
                format!("'{}' is not an available rank", rank),
            ));
        }
        self.selection.rank = Some(rank.to_string());
        Ok(())
    }

    /// Applies a lookup result.
    ///
    /// Stale results are dropped. A failed lookup leaves its option list
    /// empty; the user retries by selecting again. Returns a follow-up
    /// request when the sub-category step is skipped or optional and ranks
    /// are needed.
    pub fn apply(
        &mut self,
        ticket: LookupTicket,
        result: EngineResult<LookupOutcome>,
    ) -> Option<LookupRequest> {
        if !self.is_current(ticket) {
            debug!(
                field = ?ticket.field,
                generation = ticket.generation,
                "Dropping stale lookup response"
            );
            return None;
        }

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(field = ?ticket.field, error = %err, "Lookup failed; showing no options");
                match ticket.field {
                    LookupField::MainCategories => self.main_categories.clear(),
                    LookupField::SubCategories => self.sub_categories.clear(),
                    LookupField::Ranks => {
                        self.ranks.clear();
                        self.ranks_loaded = false;
                    }
                }
                return None;
            }
        };

        match (ticket.field, outcome) {
            (LookupField::MainCategories, LookupOutcome::Options(values)) => {
                self.main_categories = values;
                None
            }
            (LookupField::SubCategories, LookupOutcome::Options(values)) => {
                let resolution =
                    SubCategoryResolution::from_list(&self.selection.main_category, values);
                self.apply_resolution(resolution)
            }
            (LookupField::SubCategories, LookupOutcome::SubCategories(resolution)) => {
                self.apply_resolution(resolution)
            }
            (LookupField::Ranks, LookupOutcome::Options(values)) => {
                self.ranks = values;
                self.ranks_loaded = true;
                None
            }
            (field, LookupOutcome::SubCategories(_)) => {
                warn!(field = ?field, "Sub-category resolution returned for another field");
                None
            }
        }
    }

    fn apply_resolution(&mut self, resolution: SubCategoryResolution) -> Option<LookupRequest> {
        match resolution {
            SubCategoryResolution::Choose(options) => {
                self.sub_categories = options;
                self.sub_category_required = true;
                None
            }
            SubCategoryResolution::Optional(options) => {
                self.sub_categories = options;
                self.sub_category_required = false;
                self.selection.set_sub_category(None);
                Some(self.request_ranks(None))
            }
            SubCategoryResolution::Skip { rank_sub_key } => {
                // The key only narrows the rank lookup; it is not a real
                // sub-category the user picked.
                self.sub_categories.clear();
                self.sub_category_required = false;
                self.selection.set_sub_category(None);
                Some(self.request_ranks(rank_sub_key))
            }
        }
    }

    /// Checks the gate out of the classification step.
    pub fn check_classification(&self) -> EngineResult<()> {
        if !self.selection.has_main_category() {
            return Err(EngineError::validation("mainCategory", "has not been chosen"));
        }
        if self.sub_category_required && is_blank(self.selection.sub_category.as_deref()) {
            return Err(EngineError::validation("subCategory", "has not been chosen"));
        }
        if !self.rank_resolved() {
            return Err(EngineError::validation("rank", "has not been resolved"));
        }
        Ok(())
    }

    /// Checks the gate out of the details step.
    pub fn check_details(&self) -> EngineResult<()> {
        let years = self
            .selection
            .experience_years
            .ok_or_else(|| EngineError::validation("experienceYears", "has not been entered"))?;
        validate_experience_years(i64::from(years), &self.salary_config)?;
        if self.selection.contagion_allowance.is_none() {
            return Err(EngineError::validation(
                "contagionAllowance",
                "has not been chosen",
            ));
        }
        Ok(())
    }

    /// Returns true if [`WizardSession::advance`] would succeed.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::SelectingClassification => self.check_classification().is_ok(),
            WizardStep::EnteringDetails => self.check_details().is_ok(),
            WizardStep::ShowingResult => false,
        }
    }

    /// Records years of experience. Out-of-range values are rejected and
    /// clear any previously entered value.
    pub fn set_experience_years(&mut self, years: i64) -> EngineResult<()> {
        self.require_step(WizardStep::EnteringDetails, "enter experience")?;
        let checked = validate_experience_years(years, &self.salary_config);
        self.selection.experience_years = checked.as_ref().ok().copied();
        checked.map(|_| ())
    }

    /// Records years of experience from free-text input.
    pub fn set_experience_input(&mut self, input: &str) -> EngineResult<()> {
        self.require_step(WizardStep::EnteringDetails, "enter experience")?;
        let checked = parse_experience_years(input, &self.salary_config);
        self.selection.experience_years = checked.as_ref().ok().copied();
        checked.map(|_| ())
    }

    /// Records the contagion allowance tier.
    pub fn set_contagion_allowance(&mut self, tier: ContagionAllowance) -> EngineResult<()> {
        self.require_step(WizardStep::EnteringDetails, "choose a contagion allowance")?;
        self.selection.contagion_allowance = Some(tier);
        Ok(())
    }

    /// Moves to the next step if its gate is satisfied.
    ///
    /// Leaving the details step computes the salary statement.
    pub fn advance(&mut self) -> EngineResult<WizardStep> {
        match self.step {
            WizardStep::SelectingClassification => {
                self.check_classification()?;
                self.step = WizardStep::EnteringDetails;
            }
            WizardStep::EnteringDetails => {
                self.check_details()?;
                let statement = build_statement(&self.selection, &self.salary_config)?;
                debug!(
                    calculation_id = %statement.calculation_id,
                    total = %statement.breakdown.total,
                    "Salary computed"
                );
                self.statement = Some(statement);
                self.step = WizardStep::ShowingResult;
            }
            WizardStep::ShowingResult => {
                return Err(EngineError::InvalidTransition {
                    from: self.step.to_string(),
                    action: "advance".to_string(),
                });
            }
        }
        Ok(self.step)
    }

    /// Returns to the classification step, keeping every selection.
    pub fn back(&mut self) -> EngineResult<WizardStep> {
        if self.step == WizardStep::SelectingClassification {
            return Err(EngineError::InvalidTransition {
                from: self.step.to_string(),
                action: "go back".to_string(),
            });
        }
        self.statement = None;
        self.step = WizardStep::SelectingClassification;
        Ok(self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn options(values: &[&str]) -> EngineResult<LookupOutcome> {
        Ok(LookupOutcome::Options(strings(values)))
    }

    fn session_with_mains() -> WizardSession {
        let mut session = WizardSession::new(SalaryConfig::default());
        let request = session.load_main_categories();
        session.apply(
            request.ticket(),
            options(&["Physician", "Pharmacist", "Nurse", "Technician"]),
        );
        session
    }

    /// Drives Physician → Specialist → Senior Specialist.
    fn session_with_physician_rank() -> WizardSession {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Physician").unwrap();
        assert!(
            session
                .apply(subs.ticket(), options(&["Specialist", "Consultant"]))
                .is_none()
        );
        let ranks = session.select_sub_category("Specialist").unwrap();
        session.apply(
            ranks.ticket(),
            options(&["Specialist", "Senior Specialist"]),
        );
        session.select_rank("Senior Specialist").unwrap();
        session
    }

    #[test]
    fn test_new_session_starts_at_classification() {
        let session = WizardSession::new(SalaryConfig::default());
        assert_eq!(session.step(), WizardStep::SelectingClassification);
        assert!(!session.can_advance());
    }

    #[test]
    fn test_select_unknown_main_category_rejected() {
        let mut session = session_with_mains();
        assert!(matches!(
            session.select_main_category("Astronaut"),
            Err(EngineError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_select_main_category_issues_sub_category_lookup() {
        let mut session = session_with_mains();
        let request = session.select_main_category("Physician").unwrap();
        match request {
            LookupRequest::SubCategories { main_category, .. } => {
                assert_eq!(main_category, "Physician")
            }
            other => panic!("Expected SubCategories request, got {:?}", other),
        }
    }

    #[test]
    fn test_full_flow_to_result() {
        let mut session = session_with_physician_rank();
        assert!(session.can_advance());
        assert_eq!(session.advance().unwrap(), WizardStep::EnteringDetails);

        session.set_experience_years(3).unwrap();
        assert!(!session.can_advance());
        session
            .set_contagion_allowance(ContagionAllowance::Low)
            .unwrap();
        assert!(session.can_advance());

        assert_eq!(session.advance().unwrap(), WizardStep::ShowingResult);
        let statement = session.statement().unwrap();
        assert_eq!(statement.rank.as_deref(), Some("Senior Specialist"));
        assert_eq!(statement.breakdown.basic_salary.to_string(), "11500");
        assert_eq!(statement.breakdown.total.to_string(), "14000");
    }

    #[test]
    fn test_reselecting_main_clears_sub_and_rank() {
        let mut session = session_with_physician_rank();
        session.select_main_category("Nurse").unwrap();

        assert_eq!(session.selection().sub_category, None);
        assert_eq!(session.selection().rank, None);
        assert!(session.sub_categories().is_empty());
        assert!(session.ranks().is_empty());
        assert!(!session.can_advance());
    }

    #[test]
    fn test_reselecting_sub_clears_rank() {
        let mut session = session_with_physician_rank();
        session.select_sub_category("Consultant").unwrap();
        assert_eq!(session.selection().rank, None);
        assert!(!session.rank_resolved());
    }

    #[test]
    fn test_sub_category_required_before_advance() {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Physician").unwrap();
        session.apply(subs.ticket(), options(&["Specialist", "Consultant"]));

        match session.advance() {
            Err(EngineError::ValidationError { field, .. }) => assert_eq!(field, "subCategory"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
        assert_eq!(session.step(), WizardStep::SelectingClassification);
    }

    #[test]
    fn test_empty_sub_categories_skip_to_ranks_without_key() {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Nurse").unwrap();
        let follow_up = session.apply(subs.ticket(), options(&[])).unwrap();

        match &follow_up {
            LookupRequest::Ranks {
                main_category,
                sub_category,
                ..
            } => {
                assert_eq!(main_category, "Nurse");
                assert_eq!(*sub_category, None);
            }
            other => panic!("Expected Ranks request, got {:?}", other),
        }
        assert!(!session.sub_category_required());

        session.apply(follow_up.ticket(), options(&["Head Nurse"]));
        assert!(!session.can_advance());
        session.select_rank("Head Nurse").unwrap();
        assert!(session.can_advance());
    }

    #[test]
    fn test_self_matching_sub_category_used_as_key() {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Pharmacist").unwrap();
        let follow_up = session
            .apply(subs.ticket(), options(&["Pharmacist"]))
            .unwrap();

        match follow_up {
            LookupRequest::Ranks { sub_category, .. } => {
                assert_eq!(sub_category.as_deref(), Some("Pharmacist"))
            }
            other => panic!("Expected Ranks request, got {:?}", other),
        }
        assert_eq!(session.selection().sub_category, None);
        assert!(session.sub_categories().is_empty());
    }

    #[test]
    fn test_self_matching_sub_category_hidden_from_statement() {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Pharmacist").unwrap();
        let ranks = session
            .apply(subs.ticket(), options(&["Pharmacist"]))
            .unwrap();
        session.apply(ranks.ticket(), options(&["Senior Pharmacist"]));
        session.select_rank("Senior Pharmacist").unwrap();
        session.advance().unwrap();
        session.set_experience_years(1).unwrap();
        session
            .set_contagion_allowance(ContagionAllowance::None)
            .unwrap();
        session.advance().unwrap();

        let statement = session.statement().unwrap();
        assert_eq!(statement.main_category, "Pharmacist");
        assert_eq!(statement.sub_category, None);
        assert_eq!(statement.rank.as_deref(), Some("Senior Pharmacist"));
    }

    /// Nurse has records without a sub-category next to ICU records.
    fn session_with_optional_sub_category() -> (WizardSession, LookupRequest) {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Nurse").unwrap();
        let resolution = SubCategoryResolution::Optional(strings(&["ICU"]));
        let ranks = session.apply(subs.ticket(), Ok(resolution.into())).unwrap();
        (session, ranks)
    }

    #[test]
    fn test_optional_sub_category_loads_unfiltered_ranks() {
        let (mut session, ranks) = session_with_optional_sub_category();
        match &ranks {
            LookupRequest::Ranks { sub_category, .. } => assert_eq!(*sub_category, None),
            other => panic!("Expected Ranks request, got {:?}", other),
        }
        assert!(!session.sub_category_required());
        assert_eq!(session.sub_categories(), &["ICU".to_string()]);

        session.apply(ranks.ticket(), options(&["Staff Nurse", "ICU Nurse"]));
        session.select_rank("Staff Nurse").unwrap();
        assert!(session.can_advance());
        assert_eq!(session.advance().unwrap(), WizardStep::EnteringDetails);
        assert_eq!(session.selection().sub_category, None);
    }

    #[test]
    fn test_optional_sub_category_can_narrow_and_clear() {
        let (mut session, ranks) = session_with_optional_sub_category();
        session.apply(ranks.ticket(), options(&["Staff Nurse", "ICU Nurse"]));

        let narrowed = session.select_sub_category("ICU").unwrap();
        match &narrowed {
            LookupRequest::Ranks { sub_category, .. } => {
                assert_eq!(sub_category.as_deref(), Some("ICU"))
            }
            other => panic!("Expected Ranks request, got {:?}", other),
        }
        session.apply(narrowed.ticket(), options(&["ICU Nurse"]));
        assert!(session.select_rank("Staff Nurse").is_err());

        let widened = session.clear_sub_category().unwrap();
        session.apply(widened.ticket(), options(&["Staff Nurse", "ICU Nurse"]));
        session.select_rank("Staff Nurse").unwrap();
        assert_eq!(session.selection().sub_category, None);
        assert!(session.can_advance());
    }

    #[test]
    fn test_clear_required_sub_category_rejected() {
        let mut session = session_with_physician_rank();
        assert!(matches!(
            session.clear_sub_category(),
            Err(EngineError::ValidationError { .. })
        ));
        assert_eq!(session.selection().sub_category.as_deref(), Some("Specialist"));
    }

    #[test]
    fn test_no_ranks_counts_as_resolved() {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Technician").unwrap();
        let ranks = session.apply(subs.ticket(), options(&[])).unwrap();
        assert!(!session.can_advance());

        session.apply(ranks.ticket(), options(&[]));
        assert!(session.rank_resolved());
        assert!(session.can_advance());
    }

    #[test]
    fn test_stale_sub_category_response_ignored() {
        let mut session = session_with_mains();
        let first = session.select_main_category("Physician").unwrap();
        let second = session.select_main_category("Nurse").unwrap();

        // Newer response lands first, then the older one.
        let ranks = session.apply(second.ticket(), options(&[])).unwrap();
        assert!(
            session
                .apply(first.ticket(), options(&["Specialist", "Consultant"]))
                .is_none()
        );

        assert!(!session.sub_category_required());
        assert!(session.sub_categories().is_empty());
        assert!(session.is_current(ranks.ticket()));
    }

    #[test]
    fn test_rank_response_for_previous_main_ignored() {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Nurse").unwrap();
        let nurse_ranks = session.apply(subs.ticket(), options(&[])).unwrap();

        session.select_main_category("Physician").unwrap();
        session.apply(nurse_ranks.ticket(), options(&["Head Nurse"]));

        assert!(session.ranks().is_empty());
        assert!(!session.rank_resolved());
    }

    #[test]
    fn test_failed_lookup_leaves_empty_options() {
        let mut session = session_with_mains();
        let subs = session.select_main_category("Physician").unwrap();
        let follow_up = session.apply(
            subs.ticket(),
            Err(EngineError::StorageFailure {
                message: "timeout".to_string(),
            }),
        );

        assert!(follow_up.is_none());
        assert!(session.sub_categories().is_empty());
        assert!(!session.can_advance());
    }

    #[test]
    fn test_select_rank_not_in_list_rejected() {
        let mut session = session_with_physician_rank();
        assert!(session.select_rank("Chief").is_err());
        assert_eq!(
            session.selection().rank.as_deref(),
            Some("Senior Specialist")
        );
    }

    #[test]
    fn test_experience_out_of_range_blocks_advance() {
        let mut session = session_with_physician_rank();
        session.advance().unwrap();
        session
            .set_contagion_allowance(ContagionAllowance::None)
            .unwrap();

        assert!(session.set_experience_years(13).is_err());
        assert!(!session.can_advance());
        assert!(session.set_experience_years(-1).is_err());
        assert!(!session.can_advance());
        assert!(session.set_experience_input("abc").is_err());
        assert!(!session.can_advance());

        session.set_experience_input("12").unwrap();
        assert!(session.can_advance());
    }

    #[test]
    fn test_details_rejected_outside_details_step() {
        let mut session = session_with_physician_rank();
        assert!(matches!(
            session.set_experience_years(3),
            Err(EngineError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_back_preserves_selection() {
        let mut session = session_with_physician_rank();
        session.advance().unwrap();
        session.set_experience_years(5).unwrap();
        session
            .set_contagion_allowance(ContagionAllowance::High)
            .unwrap();
        session.advance().unwrap();

        assert_eq!(session.back().unwrap(), WizardStep::SelectingClassification);
        assert!(session.statement().is_none());
        assert_eq!(session.selection().main_category, "Physician");
        assert_eq!(session.selection().sub_category.as_deref(), Some("Specialist"));
        assert_eq!(session.selection().experience_years, Some(5));
        assert!(session.can_advance());
    }

    #[test]
    fn test_back_from_first_step_is_invalid() {
        let mut session = session_with_mains();
        assert!(matches!(
            session.back(),
            Err(EngineError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_advance_from_result_is_invalid() {
        let mut session = session_with_physician_rank();
        session.advance().unwrap();
        session.set_experience_years(0).unwrap();
        session
            .set_contagion_allowance(ContagionAllowance::None)
            .unwrap();
        session.advance().unwrap();
        assert!(session.advance().is_err());
    }

    proptest! {
        #[test]
        fn prop_selecting_main_always_clears_downstream(
            picks in prop::collection::vec(
                prop::sample::select(vec!["Physician", "Pharmacist", "Nurse", "Technician"]),
                1..8,
            ),
        ) {
            let mut session = session_with_physician_rank();
            for main in picks {
                session.select_main_category(main).unwrap();
                prop_assert_eq!(session.selection().sub_category.clone(), None);
                prop_assert_eq!(session.selection().rank.clone(), None);
                prop_assert!(!session.can_advance());
            }
        }
    }
}
