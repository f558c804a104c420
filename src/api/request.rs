//! Request types for the HR API.
//!
//! Query strings and bodies that do not map one-to-one onto a model type.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::PayslipInput;
use crate::error::{HrError, HrResult};
use crate::models::{
    AbsenceStatus, ContractStatus, ContractType, EmploymentStatus, PageRequest, PayslipStatus,
    Priority, RecruitmentStatus,
};
use crate::services::{EmployeeQuery, EmployeeSort, SortOrder};
use crate::store::{AbsenceFilter, ContractFilter, EmployeeFilter, PayslipFilter, RecruitmentFilter};

/// Query string of `GET /employees`.
///
/// Unknown sort columns fall back to creation date and any order other than
/// `asc` sorts descending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub department: Option<Uuid>,
    #[serde(default)]
    pub status: Option<EmploymentStatus>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl EmployeeListQuery {
    pub fn into_query(self) -> HrResult<EmployeeQuery> {
        let sort = match self.sort.as_deref() {
            Some("first_name") => EmployeeSort::FirstName,
            Some("last_name") => EmployeeSort::LastName,
            Some("hire_date") => EmployeeSort::HireDate,
            Some("base_salary") => EmployeeSort::BaseSalary,
            _ => EmployeeSort::CreatedAt,
        };
        let order = match self.order.as_deref() {
            Some(order) if order.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        };
        Ok(EmployeeQuery {
            filter: EmployeeFilter {
                search: self.search,
                department_id: self.department,
                status: self.status,
            },
            sort,
            order,
            page: PageRequest::new(self.page, self.limit)?,
        })
    }
}

/// Query string of `GET /payroll`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollListQuery {
    #[serde(default)]
    pub employee_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<PayslipStatus>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PayrollListQuery {
    /// The month filter applies only when both month and year are given.
    pub fn into_filter(self) -> HrResult<(PayslipFilter, PageRequest)> {
        if self.month.is_some_and(|m| !(1..=12).contains(&m)) {
            return Err(HrError::validation("month", "must be between 1 and 12"));
        }
        let filter = PayslipFilter {
            employee_id: self.employee_id,
            status: self.status,
            period: self.year.zip(self.month),
        };
        Ok((filter, PageRequest::new(self.page, self.limit)?))
    }
}

/// Query string of `GET /absences`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbsenceListQuery {
    #[serde(default)]
    pub employee_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<AbsenceStatus>,
    #[serde(default, alias = "type")]
    pub absence_type_id: Option<Uuid>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl AbsenceListQuery {
    pub fn into_filter(self) -> HrResult<(AbsenceFilter, PageRequest)> {
        let filter = AbsenceFilter {
            employee_id: self.employee_id,
            status: self.status,
            absence_type_id: self.absence_type_id,
            starting_from: None,
        };
        Ok((filter, PageRequest::new(self.page, self.limit)?))
    }
}

/// Query string of `GET /contracts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractListQuery {
    #[serde(default)]
    pub employee_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<ContractStatus>,
    #[serde(default, alias = "type")]
    pub contract_type: Option<ContractType>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl ContractListQuery {
    pub fn into_filter(self) -> HrResult<(ContractFilter, PageRequest)> {
        let filter = ContractFilter {
            employee_id: self.employee_id,
            status: self.status,
            contract_type: self.contract_type,
        };
        Ok((filter, PageRequest::new(self.page, self.limit)?))
    }
}

/// Query string of `GET /recruitment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecruitmentListQuery {
    #[serde(default)]
    pub status: Option<RecruitmentStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl From<RecruitmentListQuery> for RecruitmentFilter {
    fn from(query: RecruitmentListQuery) -> Self {
        RecruitmentFilter {
            status: query.status,
            priority: query.priority,
        }
    }
}

/// Request body for `POST /payroll/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatePayslipRequest {
    /// The employee to pay.
    pub employee_id: Uuid,
    /// First day of the pay period (inclusive).
    pub pay_period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub pay_period_end: NaiveDate,
    /// Defaults to the last day of the period.
    #[serde(default)]
    pub pay_date: Option<NaiveDate>,
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    #[serde(default)]
    pub bonuses: Option<Decimal>,
}

impl CalculatePayslipRequest {
    /// Splits the request into the employee and the engine input.
    pub fn into_input(self) -> (Uuid, PayslipInput) {
        let input = PayslipInput {
            pay_period_start: self.pay_period_start,
            pay_period_end: self.pay_period_end,
            pay_date: self.pay_date.unwrap_or(self.pay_period_end),
            overtime_hours: self.overtime_hours.unwrap_or(Decimal::ZERO),
            bonuses: self.bonuses.unwrap_or(Decimal::ZERO),
        };
        (self.employee_id, input)
    }
}
