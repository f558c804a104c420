//! Configuration types for the HR engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::{NewAbsenceType, NewPayrollParameter};

/// The deployment environment; controls how much error detail clients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Internal error messages are returned verbatim.
    #[default]
    Development,
    /// Internal error messages are replaced by a generic message.
    Production,
}

impl Environment {
    /// Returns true in production.
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ServerSettings {
    /// The `host:port` string to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application settings from `app.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Service name reported by the health check.
    pub name: String,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "hr-engine".to_string(),
            environment: Environment::default(),
            server: ServerSettings::default(),
        }
    }
}

/// Contents of `absence_types.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AbsenceTypesConfig {
    /// Absence types seeded into a fresh store.
    pub absence_types: Vec<NewAbsenceType>,
}

/// Contents of `payroll_parameters.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollParametersConfig {
    /// Payroll parameters seeded into a fresh store.
    pub payroll_parameters: Vec<NewPayrollParameter>,
}

/// Everything loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct HrConfig {
    settings: AppSettings,
    absence_types: Vec<NewAbsenceType>,
    payroll_parameters: Vec<NewPayrollParameter>,
}

impl HrConfig {
    /// Creates a new configuration from its loaded parts.
    pub fn new(
        settings: AppSettings,
        absence_types: Vec<NewAbsenceType>,
        payroll_parameters: Vec<NewPayrollParameter>,
    ) -> Self {
        Self {
            settings,
            absence_types,
            payroll_parameters,
        }
    }

    /// Returns the application settings.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Returns the absence types to seed.
    pub fn absence_types(&self) -> &[NewAbsenceType] {
        &self.absence_types
    }

    /// Returns the payroll parameters to seed.
    pub fn payroll_parameters(&self) -> &[NewPayrollParameter] {
        &self.payroll_parameters
    }
}
