//! Core data models for the HR engine.
//!
//! This module contains the records the store keeps, the input shapes used
//! to create and update them, and the status lifecycles they follow.

mod absence;
mod calculation_result;
mod contract;
mod department;
mod employee;
mod page;
mod payroll_parameter;
mod payslip;
mod recruitment;

pub use absence::{
    Absence, AbsenceDecision, AbsenceStatus, AbsenceType, NewAbsence, NewAbsenceType,
    inclusive_days,
};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, PayslipBreakdown,
};
pub use contract::{
    Contract, ContractStatus, ContractType, ContractUpdate, DEFAULT_WORKING_HOURS_PER_WEEK,
    NewContract,
};
pub use department::{
    Department, DepartmentDetail, DepartmentSummary, DepartmentUpdate, NewDepartment,
};
pub use employee::{
    DEFAULT_COUNTRY, EMPLOYEE_NUMBER_PREFIX, Employee, EmployeeUpdate, EmploymentStatus,
    EmploymentType, Gender, NewEmployee, format_employee_number,
};
pub use page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, PageRequest, Pagination};
pub use payroll_parameter::{NewPayrollParameter, ParameterCode, ParameterType, PayrollParameter};
pub use payslip::{Payslip, PayslipStatus};
pub use recruitment::{
    Candidate, CandidateStatus, CandidateUpdate, NewCandidate, NewRecruitment, Priority,
    RecruitmentDetail, RecruitmentPosting, RecruitmentStatus, RecruitmentSummary,
    RecruitmentUpdate,
};
