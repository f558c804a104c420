//! HR backend engine
//!
//! Employee records, departments, payroll calculation with an audit trace,
//! absences and leave balances, contracts, recruitment and dashboard
//! reporting, served over a JSON REST API.

pub mod api;
pub mod auth;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;
