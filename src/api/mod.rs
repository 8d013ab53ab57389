//! HTTP API module for the practitioner salary service.
//!
//! This module provides the REST endpoints the classification form calls:
//! the three cascading lookups, the allowance tiers, and the salary
//! calculation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LookupQuery, SalaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
