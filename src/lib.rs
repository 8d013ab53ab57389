//! Practitioner Classification and Salary Service
//!
//! This crate provides the cascading classification lookups (main category,
//! sub-category, rank) for medical practitioners, the three-step salary
//! wizard that drives them, and the salary calculation behind its result.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod store;
pub mod wizard;
