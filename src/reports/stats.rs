//! Dashboard statistics.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{month_start, months_before, whole_years_between, year_start};
use crate::calculation::round_money;
use crate::models::{
    Absence, AbsenceStatus, AbsenceType, Contract, ContractStatus, ContractType, Department,
    Employee, EmploymentStatus, Gender, Payslip, RecruitmentPosting, RecruitmentStatus,
};

/// Salary band labels, lowest first.
pub const SALARY_BANDS: [&str; 5] = ["< 1500", "1500-2500", "2501-4000", "4001-6000", "> 6000"];

/// Seniority band labels, newest first.
pub const SENIORITY_BANDS: [&str; 4] = ["< 1 year", "1-3 years", "4-7 years", "> 7 years"];

/// How far back the monthly series reach.
const SERIES_MONTHS: u32 = 6;

/// Window for contracts reported as expiring.
const EXPIRY_WINDOW_DAYS: u64 = 30;

/// Everything the dashboard is computed from.
#[derive(Debug, Clone, Copy)]
pub struct DashboardSources<'a> {
    pub employees: &'a [Employee],
    pub departments: &'a [Department],
    pub payslips: &'a [Payslip],
    pub absence_types: &'a [AbsenceType],
    pub absences: &'a [Absence],
    pub contracts: &'a [Contract],
    pub postings: &'a [RecruitmentPosting],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCounts {
    pub total: u64,
    pub active: u64,
    pub on_leave: u64,
    pub terminated: u64,
    pub male: u64,
    pub female: u64,
    pub average_salary: Decimal,
    pub total_salary_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentHeadcount {
    pub department_id: Uuid,
    pub name: String,
    /// Active employees only.
    pub count: u64,
    pub total_salary: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// First day of the month.
    pub month: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayroll {
    pub month: NaiveDate,
    pub total_gross: Decimal,
    pub total_net: Decimal,
    pub total_deductions: Decimal,
    pub payslip_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceTypeUsage {
    pub absence_type_id: Uuid,
    pub name: String,
    pub color: String,
    pub count: u64,
    pub total_days: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitmentCounts {
    pub total: u64,
    pub open: u64,
    pub in_review: u64,
    pub interviewing: u64,
    pub filled: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTypeCount {
    pub contract_type: ContractType,
    pub count: u64,
}

/// An active contract ending soon, with the holder's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringContract {
    #[serde(flatten)]
    pub contract: Contract,
    pub first_name: String,
    pub last_name: String,
    pub employee_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCount {
    pub range: String,
    pub count: u64,
}

/// The full dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub employees: EmployeeCounts,
    pub department_distribution: Vec<DepartmentHeadcount>,
    pub recent_hires: Vec<MonthlyCount>,
    pub payroll_summary: Vec<MonthlyPayroll>,
    pub absence_stats: Vec<AbsenceTypeUsage>,
    pub pending_absences: u64,
    pub recruitment: RecruitmentCounts,
    pub contract_distribution: Vec<ContractTypeCount>,
    pub expiring_contracts: Vec<ExpiringContract>,
    pub salary_distribution: Vec<BandCount>,
    pub seniority_distribution: Vec<BandCount>,
}

/// Computes the dashboard as of `today`.
pub fn dashboard_stats(sources: DashboardSources<'_>, today: NaiveDate) -> DashboardStats {
    let active: Vec<&Employee> = sources.employees.iter().filter(|e| e.is_active()).collect();
    let pending = sources
        .absences
        .iter()
        .filter(|a| a.status == AbsenceStatus::Pending);

    DashboardStats {
        employees: employee_counts(sources.employees),
        department_distribution: department_distribution(sources.departments, &active),
        recent_hires: recent_hires(sources.employees, today),
        payroll_summary: payroll_summary(sources.payslips, today),
        absence_stats: absence_stats(sources.absence_types, sources.absences, today),
        pending_absences: count(pending),
        recruitment: recruitment_counts(sources.postings),
        contract_distribution: contract_distribution(sources.contracts),
        expiring_contracts: expiring_contracts(sources.contracts, sources.employees, today),
        salary_distribution: salary_distribution(&active),
        seniority_distribution: seniority_distribution(&active, today),
    }
}

fn count<I: Iterator>(iter: I) -> u64 {
    iter.count() as u64
}

fn employee_counts(employees: &[Employee]) -> EmployeeCounts {
    let by_status = |status: EmploymentStatus| {
        count(employees.iter().filter(|e| e.employment_status == status))
    };
    let by_gender = |gender: Gender| count(employees.iter().filter(|e| e.gender == Some(gender)));
    let total_salary_cost: Decimal = employees.iter().map(|e| e.base_salary).sum();
    let average_salary = if employees.is_empty() {
        Decimal::ZERO
    } else {
        total_salary_cost / Decimal::from(employees.len() as u64)
    };

    EmployeeCounts {
        total: employees.len() as u64,
        active: by_status(EmploymentStatus::Active),
        on_leave: by_status(EmploymentStatus::OnLeave),
        terminated: by_status(EmploymentStatus::Terminated),
        male: by_gender(Gender::Male),
        female: by_gender(Gender::Female),
        average_salary: round_money(average_salary),
        total_salary_cost: round_money(total_salary_cost),
    }
}

fn department_distribution(
    departments: &[Department],
    active: &[&Employee],
) -> Vec<DepartmentHeadcount> {
    let mut rows: Vec<DepartmentHeadcount> = departments
        .iter()
        .filter(|d| d.is_active)
        .map(|d| {
            let members = active.iter().filter(|e| e.department_id == Some(d.id));
            DepartmentHeadcount {
                department_id: d.id,
                name: d.name.clone(),
                count: count(members.clone()),
                total_salary: round_money(members.map(|e| e.base_salary).sum()),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    rows
}

fn recent_hires(employees: &[Employee], today: NaiveDate) -> Vec<MonthlyCount> {
    let since = months_before(today, SERIES_MONTHS);
    let mut months: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for employee in employees.iter().filter(|e| e.hire_date >= since) {
        *months.entry(month_start(employee.hire_date)).or_default() += 1;
    }
    months
        .into_iter()
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

fn payroll_summary(payslips: &[Payslip], today: NaiveDate) -> Vec<MonthlyPayroll> {
    let since = months_before(today, SERIES_MONTHS);
    let mut months: BTreeMap<NaiveDate, MonthlyPayroll> = BTreeMap::new();
    for payslip in payslips.iter().filter(|p| p.pay_period_start >= since) {
        let month = month_start(payslip.pay_period_start);
        let row = months.entry(month).or_insert_with(|| MonthlyPayroll {
            month,
            total_gross: Decimal::ZERO,
            total_net: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            payslip_count: 0,
        });
        row.total_gross += payslip.gross_salary;
        row.total_net += payslip.net_salary;
        row.total_deductions += payslip.total_deductions;
        row.payslip_count += 1;
    }
    months.into_values().collect()
}

fn absence_stats(
    absence_types: &[AbsenceType],
    absences: &[Absence],
    today: NaiveDate,
) -> Vec<AbsenceTypeUsage> {
    let since = year_start(today);
    let mut rows: Vec<AbsenceTypeUsage> = absence_types
        .iter()
        .map(|t| {
            let taken: Vec<&Absence> = absences
                .iter()
                .filter(|a| {
                    a.absence_type_id == t.id
                        && a.status == AbsenceStatus::Approved
                        && a.start_date >= since
                })
                .collect();
            AbsenceTypeUsage {
                absence_type_id: t.id,
                name: t.name.clone(),
                color: t.color.clone(),
                count: taken.len() as u64,
                total_days: taken.iter().map(|a| a.total_days).sum(),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_days
            .cmp(&a.total_days)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

fn recruitment_counts(postings: &[RecruitmentPosting]) -> RecruitmentCounts {
    let by_status =
        |status: RecruitmentStatus| count(postings.iter().filter(|p| p.status == status));
    RecruitmentCounts {
        total: postings.len() as u64,
        open: by_status(RecruitmentStatus::Open),
        in_review: by_status(RecruitmentStatus::InReview),
        interviewing: by_status(RecruitmentStatus::Interviewing),
        filled: by_status(RecruitmentStatus::Filled),
    }
}

fn contract_distribution(contracts: &[Contract]) -> Vec<ContractTypeCount> {
    let mut counts: BTreeMap<ContractType, u64> = BTreeMap::new();
    for contract in contracts.iter().filter(|c| c.status == ContractStatus::Active) {
        *counts.entry(contract.contract_type).or_default() += 1;
    }
    let mut rows: Vec<ContractTypeCount> = counts
        .into_iter()
        .map(|(contract_type, count)| ContractTypeCount {
            contract_type,
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

fn expiring_contracts(
    contracts: &[Contract],
    employees: &[Employee],
    today: NaiveDate,
) -> Vec<ExpiringContract> {
    let until = today
        .checked_add_days(Days::new(EXPIRY_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    let mut rows: Vec<ExpiringContract> = contracts
        .iter()
        .filter(|c| c.expires_between(today, until))
        .filter_map(|c| {
            let holder = employees.iter().find(|e| e.id == c.employee_id)?;
            Some(ExpiringContract {
                contract: c.clone(),
                first_name: holder.first_name.clone(),
                last_name: holder.last_name.clone(),
                employee_number: holder.employee_number.clone(),
            })
        })
        .collect();
    rows.sort_by_key(|row| row.contract.end_date);
    rows
}

fn salary_band(salary: Decimal) -> usize {
    if salary < Decimal::from(1500) {
        0
    } else if salary <= Decimal::from(2500) {
        1
    } else if salary <= Decimal::from(4000) {
        2
    } else if salary <= Decimal::from(6000) {
        3
    } else {
        4
    }
}

fn seniority_band(years: u32) -> usize {
    match years {
        0 => 0,
        1..=3 => 1,
        4..=7 => 2,
        _ => 3,
    }
}

fn bands(labels: &[&str], indices: impl Iterator<Item = usize>) -> Vec<BandCount> {
    let mut counts = vec![0u64; labels.len()];
    for index in indices {
        counts[index] += 1;
    }
    labels
        .iter()
        .zip(counts)
        .map(|(label, count)| BandCount {
            range: label.to_string(),
            count,
        })
        .collect()
}

fn salary_distribution(active: &[&Employee]) -> Vec<BandCount> {
    bands(&SALARY_BANDS, active.iter().map(|e| salary_band(e.base_salary)))
}

fn seniority_distribution(active: &[&Employee], today: NaiveDate) -> Vec<BandCount> {
    bands(
        &SENIORITY_BANDS,
        active
            .iter()
            .map(|e| seniority_band(whole_years_between(e.hire_date, today))),
    )
}
