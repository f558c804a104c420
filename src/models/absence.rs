//! Absence types and absence requests.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HrError, HrResult};

/// A kind of leave (annual, sick...) with an optional yearly cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceType {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    /// Display color on the dashboard (e.g. `#3B82F6`).
    pub color: String,
    /// Days allowed per calendar year; unbounded when `None`.
    pub max_days_per_year: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Status of an absence request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Accepted by an approver.
    Approved,
    /// Refused by an approver.
    Rejected,
    /// Withdrawn.
    Cancelled,
}

impl AbsenceStatus {
    /// The status name as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            AbsenceStatus::Pending => "pending",
            AbsenceStatus::Approved => "approved",
            AbsenceStatus::Rejected => "rejected",
            AbsenceStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true if the absence counts against the leave balance.
    pub fn counts_against_balance(self) -> bool {
        matches!(self, AbsenceStatus::Approved | AbsenceStatus::Pending)
    }
}

impl fmt::Display for AbsenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome an approver gives to a pending absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsenceDecision {
    Approve,
    Reject,
}

impl AbsenceDecision {
    fn target(self) -> AbsenceStatus {
        match self {
            AbsenceDecision::Approve => AbsenceStatus::Approved,
            AbsenceDecision::Reject => AbsenceStatus::Rejected,
        }
    }
}

/// An employee's absence over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub absence_type_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: Decimal,
    pub reason: Option<String>,
    pub status: AbsenceStatus,
    /// Who approved or rejected the request.
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Absence {
    /// Approves or rejects a pending absence.
    ///
    /// Decisions only apply to pending requests; a decided or cancelled
    /// absence yields [`HrError::InvalidTransition`] and is left untouched.
    pub fn decide(
        &mut self,
        decision: AbsenceDecision,
        approver: Uuid,
        at: DateTime<Utc>,
    ) -> HrResult<()> {
        let target = decision.target();
        if self.status != AbsenceStatus::Pending {
            return Err(self.invalid_transition(target));
        }
        self.status = target;
        self.approved_by = Some(approver);
        self.approved_at = Some(at);
        Ok(())
    }

    /// Withdraws a pending or approved absence.
    pub fn cancel(&mut self) -> HrResult<()> {
        match self.status {
            AbsenceStatus::Pending | AbsenceStatus::Approved => {
                self.status = AbsenceStatus::Cancelled;
                Ok(())
            }
            _ => Err(self.invalid_transition(AbsenceStatus::Cancelled)),
        }
    }

    fn invalid_transition(&self, to: AbsenceStatus) -> HrError {
        HrError::InvalidTransition {
            entity: "absence",
            id: self.id.to_string(),
            from: self.status.to_string(),
            to: to.to_string(),
        }
    }
}

/// Counts the calendar days of an inclusive range.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hr_engine::models::inclusive_days;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
/// assert_eq!(inclusive_days(start, end), Decimal::from(5));
/// ```
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Decimal {
    Decimal::from((end - start).num_days() + 1)
}

/// Input for requesting an absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAbsence {
    pub employee_id: Uuid,
    pub absence_type_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Defaults to the inclusive day count of the range (half days allowed).
    #[serde(default)]
    pub total_days: Option<Decimal>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl NewAbsence {
    /// Checks the date range and the day count.
    pub fn validate(&self) -> HrResult<()> {
        if self.end_date < self.start_date {
            return Err(HrError::validation(
                "end_date",
                "must not be before start_date",
            ));
        }
        if let Some(days) = self.total_days {
            if days <= Decimal::ZERO {
                return Err(HrError::validation("total_days", "must be positive"));
            }
            if days > inclusive_days(self.start_date, self.end_date) {
                return Err(HrError::validation(
                    "total_days",
                    "exceeds the number of days in the range",
                ));
            }
        }
        Ok(())
    }

    /// Builds a pending absence.
    pub fn into_absence(self, id: Uuid, now: DateTime<Utc>) -> Absence {
        let total_days = self
            .total_days
            .unwrap_or_else(|| inclusive_days(self.start_date, self.end_date));
        Absence {
            id,
            employee_id: self.employee_id,
            absence_type_id: self.absence_type_id,
            start_date: self.start_date,
            end_date: self.end_date,
            total_days,
            reason: self.reason,
            status: AbsenceStatus::Pending,
            approved_by: None,
            approved_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for declaring an absence type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAbsenceType {
    pub name: String,
    pub code: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub max_days_per_year: Option<Decimal>,
}

fn default_color() -> String {
    "#6B7280".to_string()
}

impl NewAbsenceType {
    pub fn validate(&self) -> HrResult<()> {
        if self.name.trim().is_empty() {
            return Err(HrError::validation("name", "is required"));
        }
        if self.code.trim().is_empty() {
            return Err(HrError::validation("code", "is required"));
        }
        if self.max_days_per_year.is_some_and(|max| max < Decimal::ZERO) {
            return Err(HrError::validation("max_days_per_year", "must not be negative"));
        }
        Ok(())
    }

    /// Builds the absence type record.
    pub fn into_absence_type(self, id: Uuid, now: DateTime<Utc>) -> AbsenceType {
        AbsenceType {
            id,
            name: self.name,
            code: self.code,
            color: self.color,
            max_days_per_year: self.max_days_per_year,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pending() -> Absence {
        NewAbsence {
            employee_id: Uuid::new_v4(),
            absence_type_id: Uuid::new_v4(),
            start_date: date(2026, 4, 6),
            end_date: date(2026, 4, 10),
            total_days: None,
            reason: Some("Family trip".to_string()),
        }
        .into_absence(Uuid::new_v4(), Utc::now())
    }

    #[test]
    fn test_total_days_defaults_to_inclusive_range() {
        assert_eq!(pending().total_days, Decimal::from(5));
    }

    #[test]
    fn test_single_day_absence() {
        assert_eq!(inclusive_days(date(2026, 1, 1), date(2026, 1, 1)), Decimal::ONE);
    }

    #[test]
    fn test_approve_stamps_approver() {
        let mut absence = pending();
        let approver = Uuid::new_v4();
        absence.decide(AbsenceDecision::Approve, approver, Utc::now()).unwrap();
        assert_eq!(absence.status, AbsenceStatus::Approved);
        assert_eq!(absence.approved_by, Some(approver));
        assert!(absence.approved_at.is_some());
    }

    #[test]
    fn test_rejected_absence_cannot_be_approved() {
        let mut absence = pending();
        absence
            .decide(AbsenceDecision::Reject, Uuid::new_v4(), Utc::now())
            .unwrap();
        let before = absence.clone();

        let result = absence.decide(AbsenceDecision::Approve, Uuid::new_v4(), Utc::now());

        assert!(matches!(
            result,
            Err(HrError::InvalidTransition { ref from, ref to, .. })
                if from == "rejected" && to == "approved"
        ));
        assert_eq!(absence, before);
    }

    #[test]
    fn test_cancel_from_pending_and_approved_only() {
        let mut absence = pending();
        absence.cancel().unwrap();
        assert_eq!(absence.status, AbsenceStatus::Cancelled);
        assert!(absence.cancel().is_err());

        let mut approved = pending();
        approved
            .decide(AbsenceDecision::Approve, Uuid::new_v4(), Utc::now())
            .unwrap();
        approved.cancel().unwrap();
        assert_eq!(approved.status, AbsenceStatus::Cancelled);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let input = NewAbsence {
            employee_id: Uuid::new_v4(),
            absence_type_id: Uuid::new_v4(),
            start_date: date(2026, 4, 10),
            end_date: date(2026, 4, 6),
            total_days: None,
            reason: None,
        };
        assert!(matches!(
            input.validate(),
            Err(HrError::Validation { field, .. }) if field == "end_date"
        ));
    }

    #[test]
    fn test_validate_accepts_half_day() {
        let input = NewAbsence {
            employee_id: Uuid::new_v4(),
            absence_type_id: Uuid::new_v4(),
            start_date: date(2026, 4, 10),
            end_date: date(2026, 4, 10),
            total_days: Some(Decimal::new(5, 1)),
            reason: None,
        };
        assert!(input.validate().is_ok());
    }
}
