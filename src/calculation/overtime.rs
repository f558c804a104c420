//! Hourly rate and overtime pay.
//!
//! Salaried employees are paid overtime on an hourly rate derived from the
//! monthly base salary over a standard month of 173.33 hours.

use rust_decimal::Decimal;

use super::round_money;
use crate::models::AuditStep;

/// Standard hours in a working month (40 h x 52 weeks / 12).
pub const STANDARD_MONTHLY_HOURS: Decimal = Decimal::from_parts(17333, 0, 0, false, 2);

/// Multiplier applied to the hourly rate for every overtime hour.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The hourly rate derived from a monthly salary.
#[derive(Debug, Clone)]
pub struct HourlyRateResult {
    /// Unrounded hourly rate.
    pub hourly_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the unrounded hourly rate from a monthly base salary.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::calculate_hourly_rate;
/// use rust_decimal::Decimal;
///
/// let result = calculate_hourly_rate(Decimal::from(17333), 1);
/// assert_eq!(result.hourly_rate, Decimal::from(100));
/// ```
pub fn calculate_hourly_rate(base_salary: Decimal, step_number: u32) -> HourlyRateResult {
    let hourly_rate = base_salary / STANDARD_MONTHLY_HOURS;

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate".to_string(),
        rule_name: "Hourly Rate".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "standard_monthly_hours": STANDARD_MONTHLY_HOURS.to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": hourly_rate.round_dp(6).normalize().to_string()
        }),
        reasoning: format!(
            "{} / {} = {}",
            base_salary,
            STANDARD_MONTHLY_HOURS,
            hourly_rate.round_dp(6).normalize()
        ),
    };

    HourlyRateResult {
        hourly_rate,
        audit_step,
    }
}

/// The overtime amount for a pay period.
#[derive(Debug, Clone)]
pub struct OvertimeResult {
    /// Overtime pay rounded to cents.
    pub overtime_amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates overtime pay at 150% of the hourly rate.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::{calculate_hourly_rate, calculate_overtime};
/// use rust_decimal::Decimal;
///
/// let rate = calculate_hourly_rate(Decimal::from(2000), 1).hourly_rate;
/// let result = calculate_overtime(Decimal::from(10), rate, 2);
/// assert_eq!(result.overtime_amount.to_string(), "173.08");
/// ```
pub fn calculate_overtime(
    overtime_hours: Decimal,
    hourly_rate: Decimal,
    step_number: u32,
) -> OvertimeResult {
    let overtime_amount = round_money(overtime_hours * hourly_rate * OVERTIME_MULTIPLIER);

    let reasoning = if overtime_hours.is_zero() {
        "No overtime hours worked".to_string()
    } else {
        format!(
            "{}h x {} x {} = {}",
            overtime_hours.normalize(),
            hourly_rate.round_dp(6).normalize(),
            OVERTIME_MULTIPLIER,
            overtime_amount
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.round_dp(6).normalize().to_string(),
            "multiplier": OVERTIME_MULTIPLIER.to_string()
        }),
        output: serde_json::json!({
            "overtime_amount": overtime_amount.to_string()
        }),
        reasoning,
    };

    OvertimeResult {
        overtime_amount,
        audit_step,
    }
}
