//! Error types for the HR engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the record services, the payroll engine and the
//! configuration loader can report.

use thiserror::Error;

/// The main error type for the HR engine.
///
/// All operations return this error type; the API layer translates each
/// variant into an HTTP status and a structured body.
///
/// # Example
///
/// ```
/// use hr_engine::error::HrError;
///
/// let error = HrError::NotFound {
///     entity: "employee",
///     id: "42".to_string(),
/// };
/// assert_eq!(error.to_string(), "employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum HrError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of record (e.g. "employee").
        entity: &'static str,
        /// The identifier that did not resolve.
        id: String,
    },

    /// A field failed validation.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A unique key is already taken.
    #[error("Conflict: {message}")]
    Conflict {
        /// A description of the duplicate.
        message: String,
    },

    /// A record references a related record that does not exist.
    #[error("Invalid reference: {entity} {id} does not exist")]
    ForeignKeyViolation {
        /// The kind of the referenced record.
        entity: &'static str,
        /// The dangling identifier.
        id: String,
    },

    /// A status change is not allowed from the record's current status.
    #[error("Cannot move {entity} {id} from '{from}' to '{to}'")]
    InvalidTransition {
        /// The kind of record.
        entity: &'static str,
        /// The record id.
        id: String,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },

    /// A payslip cannot be paid because it is missing or not approved.
    #[error("Payslip not found or not approved: {id}")]
    PayslipNotPayable {
        /// The payslip id.
        id: String,
    },

    /// The request carries no usable identity.
    #[error("Authentication required: {message}")]
    Unauthorized {
        /// Why the identity was rejected.
        message: String,
    },

    /// The caller's role does not grant the required capability.
    #[error("Role '{role}' is not allowed to {capability}")]
    Forbidden {
        /// The caller's role.
        role: String,
        /// The capability that was required.
        capability: String,
    },

    /// An unexpected failure.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the failure.
        message: String,
    },
}

impl HrError {
    /// Shorthand for a [`HrError::Validation`] error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        HrError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`HrError::NotFound`] error.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        HrError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// A type alias for Results that return HrError.
pub type HrResult<T> = Result<T, HrError>;
