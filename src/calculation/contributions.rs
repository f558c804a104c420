//! Retirement and health-insurance contributions.

use rust_decimal::Decimal;

use super::round_money;
use crate::models::AuditStep;

/// Retirement contribution rate on gross salary (2.5%).
pub const RETIREMENT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Health-insurance contribution rate on gross salary (1.8%).
pub const HEALTH_INSURANCE_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 3);

/// Fixed-rate contributions deducted from gross pay.
#[derive(Debug, Clone)]
pub struct ContributionsResult {
    pub retirement_contribution: Decimal,
    pub health_insurance: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the retirement and health-insurance rates to gross salary.
pub fn calculate_contributions(gross_salary: Decimal, step_number: u32) -> ContributionsResult {
    let retirement_contribution = round_money(gross_salary * RETIREMENT_RATE);
    let health_insurance = round_money(gross_salary * HEALTH_INSURANCE_RATE);

    let audit_step = AuditStep {
        step_number,
        rule_id: "contributions".to_string(),
        rule_name: "Retirement and Health Contributions".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "retirement_rate": RETIREMENT_RATE.to_string(),
            "health_insurance_rate": HEALTH_INSURANCE_RATE.to_string()
        }),
        output: serde_json::json!({
            "retirement_contribution": retirement_contribution.to_string(),
            "health_insurance": health_insurance.to_string()
        }),
        reasoning: format!(
            "{} x {} = {}; {} x {} = {}",
            gross_salary,
            RETIREMENT_RATE,
            retirement_contribution,
            gross_salary,
            HEALTH_INSURANCE_RATE,
            health_insurance
        ),
    };

    ContributionsResult {
        retirement_contribution,
        health_insurance,
        audit_step,
    }
}
