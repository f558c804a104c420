//! Department model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::round_money;
use super::Employee;
use crate::error::{HrError, HrResult};

/// An organizational unit employees belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    /// Unique short code (e.g. "FIN").
    pub code: String,
    pub description: Option<String>,
    /// Employee managing the department.
    pub manager_id: Option<Uuid>,
    pub parent_department_id: Option<Uuid>,
    pub budget: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    /// Applies a partial update; fields left as `None` are unchanged.
    pub fn apply(&mut self, changes: DepartmentUpdate) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(code) = changes.code {
            self.code = code;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(manager_id) = changes.manager_id {
            self.manager_id = Some(manager_id);
        }
        if let Some(parent) = changes.parent_department_id {
            self.parent_department_id = Some(parent);
        }
        if let Some(budget) = changes.budget {
            self.budget = round_money(budget);
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
    }
}

/// Input for creating a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manager_id: Option<Uuid>,
    #[serde(default)]
    pub parent_department_id: Option<Uuid>,
    #[serde(default)]
    pub budget: Option<Decimal>,
}

impl NewDepartment {
    /// Checks the required fields.
    pub fn validate(&self) -> HrResult<()> {
        if self.name.trim().is_empty() {
            return Err(HrError::validation("name", "is required"));
        }
        if self.code.trim().is_empty() {
            return Err(HrError::validation("code", "is required"));
        }
        if self.budget.is_some_and(|b| b < Decimal::ZERO) {
            return Err(HrError::validation("budget", "must not be negative"));
        }
        Ok(())
    }

    /// Builds the department record.
    pub fn into_department(self, id: Uuid, now: DateTime<Utc>) -> Department {
        Department {
            id,
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            description: self.description,
            manager_id: self.manager_id,
            parent_department_id: self.parent_department_id,
            budget: round_money(self.budget.unwrap_or(Decimal::ZERO)),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub manager_id: Option<Uuid>,
    pub parent_department_id: Option<Uuid>,
    pub budget: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl DepartmentUpdate {
    /// Checks the fields that are present.
    pub fn validate(&self) -> HrResult<()> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(HrError::validation("name", "must not be blank"));
        }
        if self.code.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(HrError::validation("code", "must not be blank"));
        }
        if self.budget.is_some_and(|b| b < Decimal::ZERO) {
            return Err(HrError::validation("budget", "must not be negative"));
        }
        Ok(())
    }
}

/// A department with the employees assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDetail {
    #[serde(flatten)]
    pub department: Department,
    /// Every employee of the department, whatever their status.
    pub employees: Vec<Employee>,
}

/// A department with its live headcount, as listed on the departments page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    #[serde(flatten)]
    pub department: Department,
    /// Active employees in the department.
    pub employee_count: u64,
    /// Sum of the active employees' base salaries.
    pub total_salary_budget: Decimal,
}
