//! Headline HR indicators.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{month_start, months_before, whole_years_between};
use crate::calculation::{round_money, round_to};
use crate::models::{Absence, AbsenceStatus, Employee, EmploymentStatus, Payslip};

/// Working days assumed per employee per month for absenteeism.
pub const WORKING_DAYS_PER_MONTH: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Key performance indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    /// Terminations in the last 12 months per active employee, in percent.
    pub turnover_rate: Decimal,
    /// Mean whole years of service of active employees.
    pub average_tenure_years: Decimal,
    /// Approved absence days starting this month over available days, in percent.
    pub absenteeism_rate: Decimal,
    /// Mean gross salary of payslips from the previous month onwards.
    pub average_cost_per_employee: Decimal,
}

/// Computes the indicators as of `today`.
///
/// Rates and tenure are rounded to one decimal, cost to cents. A zero
/// denominator yields zero rather than an error.
pub fn compute_kpis(
    employees: &[Employee],
    absences: &[Absence],
    payslips: &[Payslip],
    today: NaiveDate,
) -> Kpis {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();
    let active_count = Decimal::from(active.len() as u64);

    let turnover_since = months_before(today, 12);
    let recent_terminations = employees
        .iter()
        .filter(|e| {
            e.employment_status == EmploymentStatus::Terminated
                && e.termination_date.is_some_and(|d| d >= turnover_since)
        })
        .count();
    let turnover_rate = percentage(Decimal::from(recent_terminations as u64), active_count);

    let tenure_years: u64 = active
        .iter()
        .map(|e| u64::from(whole_years_between(e.hire_date, today)))
        .sum();
    let average_tenure_years = ratio(Decimal::from(tenure_years), active_count);

    let this_month = month_start(today);
    let absent_days: Decimal = absences
        .iter()
        .filter(|a| a.status == AbsenceStatus::Approved && a.start_date >= this_month)
        .map(|a| a.total_days)
        .sum();
    let absenteeism_rate = percentage(absent_days, active_count * WORKING_DAYS_PER_MONTH);

    let cost_since = months_before(this_month, 1);
    let recent: Vec<Decimal> = payslips
        .iter()
        .filter(|p| p.pay_period_start >= cost_since)
        .map(|p| p.gross_salary)
        .collect();
    let average_cost = if recent.is_empty() {
        Decimal::ZERO
    } else {
        recent.iter().copied().sum::<Decimal>() / Decimal::from(recent.len() as u64)
    };

    Kpis {
        turnover_rate: round_to(turnover_rate, 1),
        average_tenure_years: round_to(average_tenure_years, 1),
        absenteeism_rate: round_to(absenteeism_rate, 1),
        average_cost_per_employee: round_money(average_cost),
    }
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

fn percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    ratio(numerator, denominator) * Decimal::ONE_HUNDRED
}
