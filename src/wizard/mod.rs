//! The three-step classification and salary wizard.
//!
//! [`WizardSession`] holds one user's state and enforces the step gates;
//! [`WizardController`] runs the session's lookups against a
//! [`LookupService`](crate::lookup::LookupService).

mod controller;
mod session;

pub use controller::WizardController;
pub use session::{
    LookupField, LookupOutcome, LookupRequest, LookupTicket, WizardSession, WizardStep,
};
