//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, its status and employment
//! type enums, and the input shapes used to create and update employees.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::MAX_MONTHLY_AMOUNT;
use crate::error::{HrError, HrResult};

/// Prefix of auto-generated employee numbers.
pub const EMPLOYEE_NUMBER_PREFIX: &str = "EMP";

/// Country recorded when none is supplied.
pub const DEFAULT_COUNTRY: &str = "Tunisie";

/// Where an employee stands in their employment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently working.
    #[default]
    Active,
    /// Temporarily away (long leave).
    OnLeave,
    /// No longer employed; the soft-delete state.
    Terminated,
    /// Suspended pending a decision.
    Suspended,
}

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment.
    #[default]
    FullTime,
    /// Part-time employment.
    PartTime,
    /// Fixed-term contractor.
    Contract,
    /// Intern.
    Intern,
}

/// Gender as recorded on the employee file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Other or undisclosed.
    Other,
}

/// An employee of the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// Human-facing number, `EMP001` style when generated.
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub nationality: Option<String>,
    pub national_id: Option<String>,
    pub social_security_number: Option<String>,
    pub marital_status: Option<String>,
    pub number_of_children: u32,
    /// Unique across employees when present.
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub department_id: Option<Uuid>,
    pub position: Option<String>,
    pub hire_date: NaiveDate,
    /// Stamped when the employee is terminated.
    pub termination_date: Option<NaiveDate>,
    pub employment_status: EmploymentStatus,
    pub employment_type: EmploymentType,
    /// Monthly base salary.
    pub base_salary: Decimal,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    pub rib: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the employee's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is currently active.
    pub fn is_active(&self) -> bool {
        self.employment_status == EmploymentStatus::Active
    }

    /// Soft-deletes the employee.
    ///
    /// Moves the employee to [`EmploymentStatus::Terminated`] and stamps the
    /// termination date. Terminating an already terminated employee keeps the
    /// original termination date.
    pub fn terminate(&mut self, on: NaiveDate) {
        if self.employment_status == EmploymentStatus::Terminated
            && self.termination_date.is_some()
        {
            return;
        }
        self.employment_status = EmploymentStatus::Terminated;
        self.termination_date = Some(on);
    }

    /// Applies a partial update; fields left as `None` are unchanged.
    ///
    /// A status change to terminated goes through [`Employee::terminate`]
    /// with `today`. Any other status clears the termination date.
    pub fn apply(&mut self, changes: EmployeeUpdate, today: NaiveDate) {
        macro_rules! set {
            (opt $field:ident) => {
                if let Some(value) = changes.$field {
                    self.$field = Some(value);
                }
            };
            ($field:ident) => {
                if let Some(value) = changes.$field {
                    self.$field = value;
                }
            };
        }

        set!(first_name);
        set!(last_name);
        set!(opt date_of_birth);
        set!(opt gender);
        set!(opt nationality);
        set!(opt national_id);
        set!(opt social_security_number);
        set!(opt marital_status);
        set!(number_of_children);
        set!(opt email);
        set!(opt phone);
        set!(opt address);
        set!(opt city);
        set!(opt postal_code);
        set!(country);
        set!(opt emergency_contact_name);
        set!(opt emergency_contact_phone);
        set!(opt department_id);
        set!(opt position);
        match changes.employment_status {
            Some(EmploymentStatus::Terminated) => self.terminate(today),
            Some(status) => {
                self.employment_status = status;
                self.termination_date = None;
            }
            None => {}
        }
        set!(employment_type);
        set!(base_salary);
        set!(opt bank_name);
        set!(opt bank_account);
        set!(opt rib);
    }
}

/// Formats the generated employee number for a sequence value.
///
/// # Example
///
/// ```
/// use hr_engine::models::format_employee_number;
///
/// assert_eq!(format_employee_number(7), "EMP007");
/// assert_eq!(format_employee_number(1234), "EMP1234");
/// ```
pub fn format_employee_number(sequence: u64) -> String {
    format!("{}{:03}", EMPLOYEE_NUMBER_PREFIX, sequence)
}

/// Input for creating an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Generated by the store when absent.
    #[serde(default)]
    pub employee_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub social_security_number: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub number_of_children: Option<u32>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
    #[serde(default)]
    pub department_id: Option<Uuid>,
    #[serde(default)]
    pub position: Option<String>,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub rib: Option<String>,
}

impl NewEmployee {
    /// Checks the required fields.
    pub fn validate(&self) -> HrResult<()> {
        if self.first_name.trim().is_empty() {
            return Err(HrError::validation("first_name", "is required"));
        }
        if self.last_name.trim().is_empty() {
            return Err(HrError::validation("last_name", "is required"));
        }
        if let Some(number) = &self.employee_number {
            if number.trim().is_empty() {
                return Err(HrError::validation("employee_number", "must not be blank"));
            }
        }
        validate_email(self.email.as_deref())?;
        validate_salary(self.base_salary)?;
        Ok(())
    }

    /// Builds the employee record once the store has settled the number.
    pub fn into_employee(
        self,
        id: Uuid,
        employee_number: String,
        now: DateTime<Utc>,
    ) -> Employee {
        Employee {
            id,
            employee_number,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            nationality: self.nationality,
            national_id: self.national_id,
            social_security_number: self.social_security_number,
            marital_status: self.marital_status,
            number_of_children: self.number_of_children.unwrap_or(0),
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            postal_code: self.postal_code,
            country: self
                .country
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_phone: self.emergency_contact_phone,
            department_id: self.department_id,
            position: self.position,
            hire_date: self.hire_date,
            termination_date: None,
            employment_status: EmploymentStatus::Active,
            employment_type: self.employment_type.unwrap_or_default(),
            base_salary: crate::calculation::round_money(self.base_salary.unwrap_or(Decimal::ZERO)),
            bank_name: self.bank_name,
            bank_account: self.bank_account,
            rib: self.rib,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of an employee; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub nationality: Option<String>,
    pub national_id: Option<String>,
    pub social_security_number: Option<String>,
    pub marital_status: Option<String>,
    pub number_of_children: Option<u32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub department_id: Option<Uuid>,
    pub position: Option<String>,
    pub employment_status: Option<EmploymentStatus>,
    pub employment_type: Option<EmploymentType>,
    pub base_salary: Option<Decimal>,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    pub rib: Option<String>,
}

impl EmployeeUpdate {
    /// Checks the fields that are present.
    pub fn validate(&self) -> HrResult<()> {
        for (field, value) in [("first_name", &self.first_name), ("last_name", &self.last_name)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(HrError::validation(field, "must not be blank"));
            }
        }
        validate_email(self.email.as_deref())?;
        validate_salary(self.base_salary)?;
        Ok(())
    }

    /// Returns the update with the salary rounded to cents.
    pub fn normalized(mut self) -> Self {
        self.base_salary = self.base_salary.map(crate::calculation::round_money);
        self
    }
}

fn validate_email(email: Option<&str>) -> HrResult<()> {
    match email {
        Some(email) if !email.contains('@') || email.starts_with('@') || email.ends_with('@') => {
            Err(HrError::validation("email", "is not a valid email address"))
        }
        _ => Ok(()),
    }
}

fn validate_salary(salary: Option<Decimal>) -> HrResult<()> {
    match salary {
        Some(salary) if salary < Decimal::ZERO => {
            Err(HrError::validation("base_salary", "must not be negative"))
        }
        Some(salary) if salary > MAX_MONTHLY_AMOUNT => Err(HrError::validation(
            "base_salary",
            format!("must not exceed {}", MAX_MONTHLY_AMOUNT),
        )),
        _ => Ok(()),
    }
}
