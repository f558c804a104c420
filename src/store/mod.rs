//! Record storage.
//!
//! [`HrStore`] is the seam between the services and whatever holds the
//! records. Lists come back in insertion order, already narrowed by the
//! given filter; ordering and paging are the caller's job. Updates are
//! expressed as [`Mutation`] closures so that the read-check-write of a
//! status transition happens atomically inside the store.

mod memory;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::error::HrResult;
use crate::models::{
    Absence, AbsenceStatus, AbsenceType, Candidate, Contract, ContractStatus, ContractType,
    Department, Employee, EmploymentStatus, NewEmployee, Payslip, PayslipStatus, Priority,
    PayrollParameter, RecruitmentPosting, RecruitmentStatus,
};

pub use memory::MemoryStore;

/// A change applied to one record under the store's write lock.
///
/// Returning an error discards the change.
pub type Mutation<T> = Box<dyn FnOnce(&mut T) -> HrResult<()> + Send>;

/// Narrows an employee list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Case-insensitive match on first name, last name, email or number.
    pub search: Option<String>,
    pub department_id: Option<Uuid>,
    pub status: Option<EmploymentStatus>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        if self.department_id.is_some() && employee.department_id != self.department_id {
            return false;
        }
        if self.status.is_some_and(|s| s != employee.employment_status) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                [
                    Some(employee.first_name.as_str()),
                    Some(employee.last_name.as_str()),
                    employee.email.as_deref(),
                    Some(employee.employee_number.as_str()),
                ]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&term))
            }
            _ => true,
        }
    }
}

/// Narrows a payslip list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayslipFilter {
    pub employee_id: Option<Uuid>,
    pub status: Option<PayslipStatus>,
    /// `(year, month)` the pay period starts in.
    pub period: Option<(i32, u32)>,
}

impl PayslipFilter {
    pub fn matches(&self, payslip: &Payslip) -> bool {
        self.employee_id.is_none_or(|id| id == payslip.employee_id)
            && self.status.is_none_or(|s| s == payslip.status)
            && self.period.is_none_or(|(year, month)| {
                payslip.pay_period_start.year() == year && payslip.pay_period_start.month() == month
            })
    }
}

/// Narrows an absence list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsenceFilter {
    pub employee_id: Option<Uuid>,
    pub status: Option<AbsenceStatus>,
    pub absence_type_id: Option<Uuid>,
    /// Only absences starting on or after this date.
    pub starting_from: Option<NaiveDate>,
}

impl AbsenceFilter {
    pub fn matches(&self, absence: &Absence) -> bool {
        self.employee_id.is_none_or(|id| id == absence.employee_id)
            && self.status.is_none_or(|s| s == absence.status)
            && self
                .absence_type_id
                .is_none_or(|id| id == absence.absence_type_id)
            && self.starting_from.is_none_or(|d| absence.start_date >= d)
    }
}

/// Narrows a contract list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractFilter {
    pub employee_id: Option<Uuid>,
    pub status: Option<ContractStatus>,
    pub contract_type: Option<ContractType>,
}

impl ContractFilter {
    pub fn matches(&self, contract: &Contract) -> bool {
        self.employee_id.is_none_or(|id| id == contract.employee_id)
            && self.status.is_none_or(|s| s == contract.status)
            && self.contract_type.is_none_or(|t| t == contract.contract_type)
    }
}

/// Narrows a recruitment posting list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecruitmentFilter {
    pub status: Option<RecruitmentStatus>,
    pub priority: Option<Priority>,
}

impl RecruitmentFilter {
    pub fn matches(&self, posting: &RecruitmentPosting) -> bool {
        self.status.is_none_or(|s| s == posting.status)
            && self.priority.is_none_or(|p| p == posting.priority)
    }
}

/// Storage for every HR record.
///
/// Inserts and updates enforce the store-level invariants: unique employee
/// numbers, emails and department codes, one payslip per employee and
/// period, and that referenced employees, departments, absence types and
/// postings exist.
#[async_trait]
pub trait HrStore: Send + Sync {
    // Employees

    /// Creates an employee, generating `EMP` + sequence when no number is given.
    async fn create_employee(&self, new: NewEmployee) -> HrResult<Employee>;

    async fn get_employee(&self, id: Uuid) -> HrResult<Employee>;

    async fn list_employees(&self, filter: &EmployeeFilter) -> HrResult<Vec<Employee>>;

    async fn update_employee(&self, id: Uuid, mutation: Mutation<Employee>) -> HrResult<Employee>;

    // Departments

    async fn insert_department(&self, department: Department) -> HrResult<Department>;

    async fn get_department(&self, id: Uuid) -> HrResult<Department>;

    async fn list_departments(&self) -> HrResult<Vec<Department>>;

    async fn update_department(
        &self,
        id: Uuid,
        mutation: Mutation<Department>,
    ) -> HrResult<Department>;

    // Payroll

    async fn insert_payroll_parameter(
        &self,
        parameter: PayrollParameter,
    ) -> HrResult<PayrollParameter>;

    async fn list_payroll_parameters(&self) -> HrResult<Vec<PayrollParameter>>;

    /// Stores a payslip; fails with Conflict if the employee already has one
    /// for the same period.
    async fn insert_payslip(&self, payslip: Payslip) -> HrResult<Payslip>;

    async fn get_payslip(&self, id: Uuid) -> HrResult<Payslip>;

    async fn list_payslips(&self, filter: &PayslipFilter) -> HrResult<Vec<Payslip>>;

    async fn update_payslip(&self, id: Uuid, mutation: Mutation<Payslip>) -> HrResult<Payslip>;

    // Absences

    async fn insert_absence_type(&self, absence_type: AbsenceType) -> HrResult<AbsenceType>;

    async fn list_absence_types(&self) -> HrResult<Vec<AbsenceType>>;

    async fn insert_absence(&self, absence: Absence) -> HrResult<Absence>;

    async fn get_absence(&self, id: Uuid) -> HrResult<Absence>;

    async fn list_absences(&self, filter: &AbsenceFilter) -> HrResult<Vec<Absence>>;

    async fn update_absence(&self, id: Uuid, mutation: Mutation<Absence>) -> HrResult<Absence>;

    // Contracts

    async fn insert_contract(&self, contract: Contract) -> HrResult<Contract>;

    async fn get_contract(&self, id: Uuid) -> HrResult<Contract>;

    async fn list_contracts(&self, filter: &ContractFilter) -> HrResult<Vec<Contract>>;

    async fn update_contract(&self, id: Uuid, mutation: Mutation<Contract>) -> HrResult<Contract>;

    // Recruitment

    async fn insert_posting(&self, posting: RecruitmentPosting) -> HrResult<RecruitmentPosting>;

    async fn get_posting(&self, id: Uuid) -> HrResult<RecruitmentPosting>;

    async fn list_postings(&self, filter: &RecruitmentFilter) -> HrResult<Vec<RecruitmentPosting>>;

    async fn update_posting(
        &self,
        id: Uuid,
        mutation: Mutation<RecruitmentPosting>,
    ) -> HrResult<RecruitmentPosting>;

    async fn insert_candidate(&self, candidate: Candidate) -> HrResult<Candidate>;

    /// Candidates of one posting, or of every posting when `None`.
    async fn list_candidates(&self, recruitment_id: Option<Uuid>) -> HrResult<Vec<Candidate>>;

    async fn update_candidate(&self, id: Uuid, mutation: Mutation<Candidate>)
    -> HrResult<Candidate>;
}
