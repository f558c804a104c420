//! Employee social-security (CNSS) contribution.

use rust_decimal::Decimal;

use super::{ActiveParameters, round_money};
use crate::models::{AuditStep, ParameterCode};

/// Contribution rate used when no `CNSS_EMP` parameter is in force (9.18%).
pub const DEFAULT_CNSS_RATE: Decimal = Decimal::from_parts(918, 0, 0, false, 4);

/// The social-security deduction for a payslip.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// Rate applied, as a fraction.
    pub rate: Decimal,
    /// Deduction rounded to cents.
    pub social_security: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the CNSS employee rate to gross salary.
///
/// The `CNSS_EMP` parameter is stored as a percentage (`9.18` for 9.18%).
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::{ActiveParameters, calculate_social_security};
/// use rust_decimal::Decimal;
///
/// let result = calculate_social_security(Decimal::from(2000), &ActiveParameters::default(), 5);
/// assert_eq!(result.social_security.to_string(), "183.60");
/// ```
pub fn calculate_social_security(
    gross_salary: Decimal,
    parameters: &ActiveParameters,
    step_number: u32,
) -> SocialSecurityResult {
    let configured = parameters.amount(ParameterCode::CnssEmployee);
    let rate = configured
        .map(|percent| percent / Decimal::ONE_HUNDRED)
        .unwrap_or(DEFAULT_CNSS_RATE);
    let social_security = round_money(gross_salary * rate);

    let source = if configured.is_some() {
        "CNSS_EMP parameter"
    } else {
        "default rate"
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security (CNSS)".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "rate": rate.normalize().to_string(),
            "rate_source": source
        }),
        output: serde_json::json!({
            "social_security": social_security.to_string()
        }),
        reasoning: format!(
            "{} x {} ({}) = {}",
            gross_salary,
            rate.normalize(),
            source,
            social_security
        ),
    };

    SocialSecurityResult {
        rate,
        social_security,
        audit_step,
    }
}
