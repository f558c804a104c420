//! Configuration loading and management for the HR engine.
//!
//! This module loads the service settings and the seed data (absence types
//! and payroll parameters) from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hr_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Listening on {}", config.settings().server.address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_DIR_ENV, ConfigLoader, DEFAULT_CONFIG_DIR};
pub use types::{
    AbsenceTypesConfig, AppSettings, Environment, HrConfig, PayrollParametersConfig,
    ServerSettings,
};
