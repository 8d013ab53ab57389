//! Async driver connecting a [`WizardSession`] to a [`LookupService`].

use crate::error::EngineResult;
use crate::lookup::LookupService;

use super::session::{LookupOutcome, LookupRequest, WizardSession};

/// Runs a session's lookups to completion, one at a time.
///
/// Callers that need interleaved or concurrent responses should use
/// [`WizardSession::apply`] directly; the stale-response guard lives there.
#[derive(Clone)]
pub struct WizardController {
    lookup: LookupService,
}

impl WizardController {
    /// Creates a controller over the given lookup service.
    pub fn new(lookup: LookupService) -> Self {
        Self { lookup }
    }

    /// Runs one lookup request against the service.
    pub async fn execute(&self, request: &LookupRequest) -> EngineResult<LookupOutcome> {
        match request {
            LookupRequest::MainCategories { .. } => {
                self.lookup.list_main_categories().await.map(Into::into)
            }
            LookupRequest::SubCategories { main_category, .. } => self
                .lookup
                .resolve_sub_categories(main_category)
                .await
                .map(Into::into),
            LookupRequest::Ranks {
                main_category,
                sub_category,
                ..
            } => self
                .lookup
                .list_ranks(main_category, sub_category.as_deref())
                .await
                .map(Into::into),
        }
    }

    /// Executes `request` and any follow-up it triggers.
    pub async fn run(&self, session: &mut WizardSession, request: LookupRequest) {
        let mut next = Some(request);
        while let Some(request) = next {
            let result = self.execute(&request).await;
            next = session.apply(request.ticket(), result);
        }
    }

    /// Loads the main category list into the session.
    pub async fn start(&self, session: &mut WizardSession) {
        let request = session.load_main_categories();
        self.run(session, request).await;
    }

    /// Selects a main category and resolves its sub-categories (and ranks,
    /// when the sub-category step is skipped).
    pub async fn select_main_category(
        &self,
        session: &mut WizardSession,
        main_category: &str,
    ) -> EngineResult<()> {
        let request = session.select_main_category(main_category)?;
        self.run(session, request).await;
        Ok(())
    }

    /// Selects a sub-category and resolves its ranks.
    pub async fn select_sub_category(
        &self,
        session: &mut WizardSession,
        sub_category: &str,
    ) -> EngineResult<()> {
        let request = session.select_sub_category(sub_category)?;
        self.run(session, request).await;
        Ok(())
    }

    /// Drops an optional sub-category and reloads the unfiltered ranks.
    pub async fn clear_sub_category(&self, session: &mut WizardSession) -> EngineResult<()> {
        let request = session.clear_sub_category()?;
        self.run(session, request).await;
        Ok(())
    }
}
