//! Employment contract model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::round_money;
use crate::error::{HrError, HrResult};

/// Weekly hours recorded when a contract does not specify them.
pub const DEFAULT_WORKING_HOURS_PER_WEEK: u32 = 40;

/// The legal form of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Open-ended contract.
    Cdi,
    /// Fixed-term contract.
    Cdd,
    Internship,
    Freelance,
    Temp,
}

/// Status of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Draft,
    #[default]
    Active,
    Expired,
    Terminated,
}

/// An employment contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub contract_type: ContractType,
    pub contract_number: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub probation_end_date: Option<NaiveDate>,
    pub salary: Decimal,
    pub working_hours_per_week: u32,
    pub terms: Option<String>,
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Applies a partial update; fields left as `None` are unchanged.
    pub fn apply(&mut self, changes: ContractUpdate) -> HrResult<()> {
        if let Some(end_date) = changes.end_date {
            if end_date < self.start_date {
                return Err(HrError::validation(
                    "end_date",
                    "must not be before start_date",
                ));
            }
            self.end_date = Some(end_date);
        }
        if let Some(contract_type) = changes.contract_type {
            self.contract_type = contract_type;
        }
        if let Some(salary) = changes.salary {
            self.salary = round_money(salary);
        }
        if let Some(hours) = changes.working_hours_per_week {
            self.working_hours_per_week = hours;
        }
        if let Some(terms) = changes.terms {
            self.terms = Some(terms);
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        Ok(())
    }

    /// Returns true if the contract is active and ends within `[from, until]`.
    pub fn expires_between(&self, from: NaiveDate, until: NaiveDate) -> bool {
        self.status == ContractStatus::Active
            && self.end_date.is_some_and(|end| end >= from && end <= until)
    }
}

/// Input for creating a contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContract {
    pub employee_id: Uuid,
    pub contract_type: ContractType,
    #[serde(default)]
    pub contract_number: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub probation_end_date: Option<NaiveDate>,
    pub salary: Decimal,
    #[serde(default)]
    pub working_hours_per_week: Option<u32>,
    #[serde(default)]
    pub terms: Option<String>,
}

impl NewContract {
    /// Checks the salary and the dates.
    pub fn validate(&self) -> HrResult<()> {
        if self.salary < Decimal::ZERO {
            return Err(HrError::validation("salary", "must not be negative"));
        }
        if self.end_date.is_some_and(|end| end < self.start_date) {
            return Err(HrError::validation(
                "end_date",
                "must not be before start_date",
            ));
        }
        if self.probation_end_date.is_some_and(|end| end < self.start_date) {
            return Err(HrError::validation(
                "probation_end_date",
                "must not be before start_date",
            ));
        }
        if self.working_hours_per_week == Some(0) {
            return Err(HrError::validation(
                "working_hours_per_week",
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Builds an active contract.
    pub fn into_contract(self, id: Uuid, now: DateTime<Utc>) -> Contract {
        Contract {
            id,
            employee_id: self.employee_id,
            contract_type: self.contract_type,
            contract_number: self.contract_number,
            start_date: self.start_date,
            end_date: self.end_date,
            probation_end_date: self.probation_end_date,
            salary: round_money(self.salary),
            working_hours_per_week: self
                .working_hours_per_week
                .unwrap_or(DEFAULT_WORKING_HOURS_PER_WEEK),
            terms: self.terms,
            status: ContractStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractUpdate {
    pub contract_type: Option<ContractType>,
    pub end_date: Option<NaiveDate>,
    pub salary: Option<Decimal>,
    pub working_hours_per_week: Option<u32>,
    pub terms: Option<String>,
    pub status: Option<ContractStatus>,
}
