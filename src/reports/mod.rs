//! Read-only aggregations over the stored records.
//!
//! Every report is recomputed from plain slices and an explicit `today`, so
//! the same records and date always give the same answer.

mod kpi;
mod leave_balance;
mod stats;

use chrono::{Datelike, Months, NaiveDate};

pub use kpi::{Kpis, WORKING_DAYS_PER_MONTH, compute_kpis};
pub use leave_balance::{LeaveBalance, leave_balance};
pub use stats::{
    AbsenceTypeUsage, BandCount, ContractTypeCount, DashboardStats, DashboardSources,
    DepartmentHeadcount, EmployeeCounts, ExpiringContract, MonthlyCount, MonthlyPayroll,
    RecruitmentCounts, SALARY_BANDS, SENIORITY_BANDS, dashboard_stats,
};

/// Whole years elapsed from `from` to `to`; zero when `to` is earlier.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hr_engine::reports::whole_years_between;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
/// assert_eq!(whole_years_between(hired, NaiveDate::from_ymd_opt(2026, 6, 14).unwrap()), 5);
/// assert_eq!(whole_years_between(hired, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()), 6);
/// ```
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// `date` moved back `months` calendar months, clamped to the month's end.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// First day of the calendar year containing `date`.
pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}
