//! Per-type leave balance for one employee.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Absence, AbsenceType};

/// Days used and left of one absence type in the current year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub absence_type_id: Uuid,
    pub name: String,
    pub code: String,
    pub color: String,
    pub max_days_per_year: Option<Decimal>,
    /// Approved and pending days starting this calendar year.
    pub used_days: Decimal,
    /// `max_days_per_year - used_days`; `None` for uncapped types.
    pub remaining_days: Option<Decimal>,
}

/// Builds the leave balance of `employee_id` for the year containing `today`.
///
/// Every absence type gets a row, ordered by name, even when nothing was
/// taken. Remaining days may go negative when requests exceed the cap.
pub fn leave_balance(
    absence_types: &[AbsenceType],
    absences: &[Absence],
    employee_id: Uuid,
    today: NaiveDate,
) -> Vec<LeaveBalance> {
    let year = today.year();
    let mut balances: Vec<LeaveBalance> = absence_types
        .iter()
        .map(|absence_type| {
            let used_days: Decimal = absences
                .iter()
                .filter(|a| {
                    a.employee_id == employee_id
                        && a.absence_type_id == absence_type.id
                        && a.status.counts_against_balance()
                        && a.start_date.year() == year
                })
                .map(|a| a.total_days)
                .sum();

            LeaveBalance {
                absence_type_id: absence_type.id,
                name: absence_type.name.clone(),
                code: absence_type.code.clone(),
                color: absence_type.color.clone(),
                max_days_per_year: absence_type.max_days_per_year,
                used_days,
                remaining_days: absence_type.max_days_per_year.map(|max| max - used_days),
            }
        })
        .collect();

    balances.sort_by(|a, b| a.name.cmp(&b.name));
    balances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbsenceStatus, NewAbsence, NewAbsenceType};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn absence_type(name: &str, max: Option<i64>) -> AbsenceType {
        NewAbsenceType {
            name: name.to_string(),
            code: name[..3].to_uppercase(),
            color: "#000000".to_string(),
            max_days_per_year: max.map(Decimal::from),
        }
        .into_absence_type(Uuid::new_v4(), Utc::now())
    }

    fn absence(
        employee_id: Uuid,
        type_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        status: AbsenceStatus,
    ) -> Absence {
        let mut absence = NewAbsence {
            employee_id,
            absence_type_id: type_id,
            start_date: start,
            end_date: end,
            total_days: None,
            reason: None,
        }
        .into_absence(Uuid::new_v4(), Utc::now());
        absence.status = status;
        absence
    }

    #[test]
    fn test_counts_approved_and_pending_this_year() {
        let employee = Uuid::new_v4();
        let annual = absence_type("Annual", Some(30));
        let absences = vec![
            absence(employee, annual.id, date(2026, 2, 2), date(2026, 2, 6), AbsenceStatus::Approved),
            absence(employee, annual.id, date(2026, 4, 1), date(2026, 4, 2), AbsenceStatus::Pending),
            absence(employee, annual.id, date(2026, 5, 1), date(2026, 5, 3), AbsenceStatus::Rejected),
            absence(employee, annual.id, date(2025, 12, 1), date(2025, 12, 5), AbsenceStatus::Approved),
            absence(Uuid::new_v4(), annual.id, date(2026, 2, 2), date(2026, 2, 6), AbsenceStatus::Approved),
        ];

        let balances = leave_balance(&[annual], &absences, employee, date(2026, 6, 1));

        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].used_days, Decimal::from(7));
        assert_eq!(balances[0].remaining_days, Some(Decimal::from(23)));
    }

    #[test]
    fn test_uncapped_type_has_no_remaining() {
        let sick = absence_type("Sick", None);
        let balances = leave_balance(&[sick], &[], Uuid::new_v4(), date(2026, 6, 1));

        assert_eq!(balances[0].used_days, Decimal::ZERO);
        assert_eq!(balances[0].remaining_days, None);
    }

    #[test]
    fn test_ordered_by_name() {
        let types = vec![absence_type("Unpaid", None), absence_type("Annual", Some(30))];
        let balances = leave_balance(&types, &[], Uuid::new_v4(), date(2026, 6, 1));
        let names: Vec<_> = balances.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Annual", "Unpaid"]);
    }

    #[test]
    fn test_balance_is_idempotent() {
        let employee = Uuid::new_v4();
        let annual = absence_type("Annual", Some(30));
        let absences = vec![absence(
            employee,
            annual.id,
            date(2026, 2, 2),
            date(2026, 2, 6),
            AbsenceStatus::Approved,
        )];
        let types = vec![annual];

        let first = leave_balance(&types, &absences, employee, date(2026, 6, 1));
        let second = leave_balance(&types, &absences, employee, date(2026, 6, 1));

        assert_eq!(first, second);
    }
}
