//! Payslip model and its status lifecycle.
//!
//! A payslip is immutable once calculated: only the status and the approval
//! metadata change afterwards, and only forward:
//!
//! ```text
//! draft ──► calculated ──► approved ──► paid
//!   │            │             │
//!   └────────────┴─────────────┴──► cancelled
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayslipBreakdown;
use crate::error::{HrError, HrResult};

/// Status of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    /// Created but not yet calculated.
    Draft,
    /// Amounts computed by the engine.
    Calculated,
    /// Approved for payment.
    Approved,
    /// Paid out.
    Paid,
    /// Withdrawn before payment.
    Cancelled,
}

impl PayslipStatus {
    /// The status name as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            PayslipStatus::Draft => "draft",
            PayslipStatus::Calculated => "calculated",
            PayslipStatus::Approved => "approved",
            PayslipStatus::Paid => "paid",
            PayslipStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true if the lifecycle allows moving from `self` to `next`.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::models::PayslipStatus;
    ///
    /// assert!(PayslipStatus::Approved.can_transition_to(PayslipStatus::Paid));
    /// assert!(!PayslipStatus::Calculated.can_transition_to(PayslipStatus::Paid));
    /// ```
    pub fn can_transition_to(self, next: PayslipStatus) -> bool {
        use PayslipStatus::*;
        matches!(
            (self, next),
            (Draft, Calculated)
                | (Calculated, Approved)
                | (Approved, Paid)
                | (Draft | Calculated | Approved, Cancelled)
        )
    }
}

impl fmt::Display for PayslipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One payroll record for an employee and a pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub pay_date: NaiveDate,
    /// Base salary at the time of calculation.
    pub base_salary: Decimal,
    pub overtime_hours: Decimal,
    pub overtime_amount: Decimal,
    pub bonuses: Decimal,
    pub allowances: Decimal,
    pub gross_salary: Decimal,
    pub income_tax: Decimal,
    pub social_security: Decimal,
    pub retirement_contribution: Decimal,
    pub health_insurance: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
    pub status: PayslipStatus,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payslip {
    /// Builds a payslip in `calculated` status from the engine's amounts.
    pub fn calculated(
        id: Uuid,
        employee_id: Uuid,
        period: (NaiveDate, NaiveDate),
        pay_date: NaiveDate,
        breakdown: PayslipBreakdown,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            employee_id,
            pay_period_start: period.0,
            pay_period_end: period.1,
            pay_date,
            base_salary: breakdown.base_salary,
            overtime_hours: breakdown.overtime_hours,
            overtime_amount: breakdown.overtime_amount,
            bonuses: breakdown.bonuses,
            allowances: breakdown.allowances,
            gross_salary: breakdown.gross_salary,
            income_tax: breakdown.income_tax,
            social_security: breakdown.social_security,
            retirement_contribution: breakdown.retirement_contribution,
            health_insurance: breakdown.health_insurance,
            total_deductions: breakdown.total_deductions,
            net_salary: breakdown.net_salary,
            status: PayslipStatus::Calculated,
            approved_by: None,
            approved_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true if this payslip covers the same employee and period.
    pub fn same_period(&self, other: &Payslip) -> bool {
        self.employee_id == other.employee_id
            && self.pay_period_start == other.pay_period_start
            && self.pay_period_end == other.pay_period_end
    }

    /// Approves a calculated payslip, stamping the approver.
    pub fn approve(&mut self, approver: Uuid, at: DateTime<Utc>) -> HrResult<()> {
        self.transition(PayslipStatus::Approved)?;
        self.approved_by = Some(approver);
        self.approved_at = Some(at);
        Ok(())
    }

    /// Marks an approved payslip as paid.
    ///
    /// Any other current status yields [`HrError::PayslipNotPayable`] and
    /// leaves the payslip untouched.
    pub fn mark_paid(&mut self) -> HrResult<()> {
        if self.status != PayslipStatus::Approved {
            return Err(HrError::PayslipNotPayable {
                id: self.id.to_string(),
            });
        }
        self.status = PayslipStatus::Paid;
        Ok(())
    }

    /// Cancels a payslip that has not been paid.
    pub fn cancel(&mut self) -> HrResult<()> {
        self.transition(PayslipStatus::Cancelled)
    }

    fn transition(&mut self, next: PayslipStatus) -> HrResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(HrError::InvalidTransition {
                entity: "payslip",
                id: self.id.to_string(),
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}
