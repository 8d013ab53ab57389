//! Cascading classification lookups.
//!
//! This module answers the three questions the classification step asks:
//! which main categories exist, which sub-categories refine a main category,
//! and which ranks exist for a (main, sub) pair. It also decides when the
//! sub-category question can be skipped.

mod resolution;
mod service;

pub use resolution::SubCategoryResolution;
pub use service::LookupService;
