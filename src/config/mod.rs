//! Configuration loading and management for the practitioner salary service.
//!
//! This module provides functionality to load the service configuration from
//! YAML files: the salary formula constants and the seed classification table.
//!
//! # Example
//!
//! ```no_run
//! use practitioner_salary::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Base salary: {}", config.salary().base_salary);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ClassificationsConfig, SalaryConfig};
