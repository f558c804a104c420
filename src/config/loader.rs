//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! settings and seed data from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{HrError, HrResult};

use super::types::{
    AbsenceTypesConfig, AppSettings, HrConfig, PayrollParametersConfig,
};

/// Directory used when `HR_CONFIG_DIR` is not set.
pub const DEFAULT_CONFIG_DIR: &str = "./config/default";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "HR_CONFIG_DIR";

/// Loads and provides access to the HR engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── app.yaml                 # Service name, environment, server address
/// ├── absence_types.yaml       # Absence types seeded at startup
/// └── payroll_parameters.yaml  # Payroll parameters seeded at startup
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Starting {}", loader.settings().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HrConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with [`HrError::ConfigNotFound`] when a file is missing and with
    /// [`HrError::ConfigParseError`] when a file is not valid YAML, lacks a
    /// required field, or holds a seed record that fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> HrResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<AppSettings>(&path.join("app.yaml"))?;

        let absence_types_path = path.join("absence_types.yaml");
        let absence_types =
            Self::load_yaml::<AbsenceTypesConfig>(&absence_types_path)?.absence_types;
        for absence_type in &absence_types {
            absence_type
                .validate()
                .map_err(|e| Self::invalid_seed(&absence_types_path, e))?;
        }

        let parameters_path = path.join("payroll_parameters.yaml");
        let payroll_parameters =
            Self::load_yaml::<PayrollParametersConfig>(&parameters_path)?.payroll_parameters;
        for parameter in &payroll_parameters {
            parameter
                .validate()
                .map_err(|e| Self::invalid_seed(&parameters_path, e))?;
        }

        Ok(Self {
            config: HrConfig::new(settings, absence_types, payroll_parameters),
        })
    }

    /// Loads from `HR_CONFIG_DIR`, falling back to [`DEFAULT_CONFIG_DIR`].
    pub fn from_env() -> HrResult<Self> {
        let dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
        Self::load(dir)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> HrResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| HrError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| HrError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn invalid_seed(path: &Path, error: HrError) -> HrError {
        HrError::ConfigParseError {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &HrConfig {
        &self.config
    }

    /// Returns the application settings.
    pub fn settings(&self) -> &AppSettings {
        self.config.settings()
    }
}
