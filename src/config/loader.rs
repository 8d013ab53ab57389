//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ClassificationRecord;

use super::types::{ClassificationsConfig, SalaryConfig};

/// Loads and provides access to the service configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates them before anything is served.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── salary.yaml           # Salary formula constants
/// └── classifications.yaml  # Seed rows for the classification store
/// ```
///
/// # Example
///
/// ```no_run
/// use practitioner_salary::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("{} classification rows", loader.records().len());
/// # Ok::<(), practitioner_salary::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    salary: SalaryConfig,
    records: Vec<ClassificationRecord>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - A classification row has a blank main category, or a salary
    ///   constant is negative (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let salary_path = path.join("salary.yaml");
        let salary = Self::load_yaml::<SalaryConfig>(&salary_path)?;
        Self::validate_salary(&salary, &salary_path)?;

        let classifications_path = path.join("classifications.yaml");
        let classifications = Self::load_yaml::<ClassificationsConfig>(&classifications_path)?;
        Self::validate_records(&classifications.records, &classifications_path)?;

        debug!(
            config_dir = %path.display(),
            records = classifications.records.len(),
            "Loaded service configuration"
        );

        Ok(Self {
            salary,
            records: classifications.records,
        })
    }

    /// Builds a loader from already-parsed parts, skipping the filesystem.
    pub fn from_parts(salary: SalaryConfig, records: Vec<ClassificationRecord>) -> Self {
        Self { salary, records }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_salary(salary: &SalaryConfig, path: &Path) -> EngineResult<()> {
        if salary.base_salary < Decimal::ZERO || salary.per_year_bonus < Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "salary constants must not be negative".to_string(),
            });
        }
        Ok(())
    }

    fn validate_records(records: &[ClassificationRecord], path: &Path) -> EngineResult<()> {
        if let Some(index) = records
            .iter()
            .position(|r| r.main_category.trim().is_empty())
        {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("record {} has a blank main_category", index),
            });
        }
        Ok(())
    }

    /// Returns the salary constants.
    pub fn salary(&self) -> &SalaryConfig {
        &self.salary
    }

    /// Returns the classification table rows.
    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }
}
