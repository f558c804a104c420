//! Payroll parameter model.
//!
//! Parameters are named, coded values (allowances, contribution rates...)
//! that apply during an effective window. The calculation engine only reads
//! the codes it knows through [`ParameterCode`]; other codes are stored and
//! listed but never consulted.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::MAX_MONTHLY_AMOUNT;
use crate::error::{HrError, HrResult};

/// The category a payroll parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// Adds to gross pay.
    Earning,
    /// Subtracted from gross pay.
    Deduction,
    /// A tax rate or amount.
    Tax,
    /// A social contribution rate.
    Contribution,
    /// A bonus amount.
    Bonus,
}

/// Parameter codes the payroll engine understands.
///
/// # Example
///
/// ```
/// use hr_engine::models::ParameterCode;
///
/// let code: ParameterCode = "CNSS_EMP".parse().unwrap();
/// assert_eq!(code, ParameterCode::CnssEmployee);
/// assert_eq!(code.as_str(), "CNSS_EMP");
/// assert!("TRANSPROT".parse::<ParameterCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterCode {
    /// Monthly transport allowance (`TRANSPORT`).
    Transport,
    /// Monthly presence bonus (`PRESENCE`).
    Presence,
    /// Employee social-security contribution rate in percent (`CNSS_EMP`).
    CnssEmployee,
}

impl ParameterCode {
    /// Every known code.
    pub const ALL: [ParameterCode; 3] = [
        ParameterCode::Transport,
        ParameterCode::Presence,
        ParameterCode::CnssEmployee,
    ];

    /// The code as stored on the parameter record.
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterCode::Transport => "TRANSPORT",
            ParameterCode::Presence => "PRESENCE",
            ParameterCode::CnssEmployee => "CNSS_EMP",
        }
    }
}

impl fmt::Display for ParameterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("Unknown payroll parameter code: {}", s))
    }
}

/// A payroll parameter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollParameter {
    pub id: Uuid,
    pub name: String,
    /// Short lookup key (e.g. `TRANSPORT`).
    pub code: String,
    pub param_type: ParameterType,
    pub value: Decimal,
    /// Whether `value` is a percentage rather than an amount.
    pub is_percentage: bool,
    pub description: Option<String>,
    /// First day the value applies.
    pub effective_date: NaiveDate,
    /// Last day the value applies; open-ended when `None`.
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PayrollParameter {
    /// Returns true if the parameter is active and its window covers `date`.
    ///
    /// Both ends of the window are inclusive.
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self.effective_date <= date
            && self.end_date.is_none_or(|end| end >= date)
    }

    /// The typed code, when the engine knows it.
    pub fn known_code(&self) -> Option<ParameterCode> {
        self.code.parse().ok()
    }
}

/// Input for creating a payroll parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayrollParameter {
    pub name: String,
    pub code: String,
    pub param_type: ParameterType,
    pub value: Decimal,
    #[serde(default)]
    pub is_percentage: bool,
    #[serde(default)]
    pub description: Option<String>,
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl NewPayrollParameter {
    /// Checks the required fields, the value bound and the window.
    pub fn validate(&self) -> HrResult<()> {
        if self.name.trim().is_empty() {
            return Err(HrError::validation("name", "is required"));
        }
        if self.code.trim().is_empty() {
            return Err(HrError::validation("code", "is required"));
        }
        if self.value.abs() > MAX_MONTHLY_AMOUNT {
            return Err(HrError::validation(
                "value",
                format!("must not exceed {}", MAX_MONTHLY_AMOUNT),
            ));
        }
        if self.end_date.is_some_and(|end| end < self.effective_date) {
            return Err(HrError::validation(
                "end_date",
                "must not be before effective_date",
            ));
        }
        Ok(())
    }

    /// Builds the parameter record.
    pub fn into_parameter(self, id: Uuid, now: DateTime<Utc>) -> PayrollParameter {
        PayrollParameter {
            id,
            name: self.name.trim().to_string(),
            code: self.code.trim().to_uppercase(),
            param_type: self.param_type,
            value: self.value,
            is_percentage: self.is_percentage,
            description: self.description,
            effective_date: self.effective_date,
            end_date: self.end_date,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
