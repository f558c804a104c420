//! Fixed monthly allowances.

use rust_decimal::Decimal;

use super::ActiveParameters;
use crate::models::{AuditStep, ParameterCode};

/// The allowances added to gross pay.
#[derive(Debug, Clone)]
pub struct AllowancesResult {
    /// Transport allowance, zero when not configured.
    pub transport: Decimal,
    /// Presence bonus, zero when not configured.
    pub presence: Decimal,
    /// Sum of both.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the `TRANSPORT` and `PRESENCE` parameters in force.
///
/// A parameter that is not in force contributes nothing. Values are taken
/// as flat amounts regardless of the percentage flag.
pub fn calculate_allowances(parameters: &ActiveParameters, step_number: u32) -> AllowancesResult {
    let transport = parameters
        .amount(ParameterCode::Transport)
        .unwrap_or(Decimal::ZERO);
    let presence = parameters
        .amount(ParameterCode::Presence)
        .unwrap_or(Decimal::ZERO);
    let total = transport + presence;

    let audit_step = AuditStep {
        step_number,
        rule_id: "allowances".to_string(),
        rule_name: "Allowances".to_string(),
        input: serde_json::json!({
            "transport": transport.to_string(),
            "presence": presence.to_string(),
            "transport_configured": parameters.get(ParameterCode::Transport).is_some(),
            "presence_configured": parameters.get(ParameterCode::Presence).is_some()
        }),
        output: serde_json::json!({
            "allowances": total.to_string()
        }),
        reasoning: format!("{} (transport) + {} (presence) = {}", transport, presence, total),
    };

    AllowancesResult {
        transport,
        presence,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_parameters() {
        let result = calculate_allowances(&ActiveParameters::default(), 1);
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.audit_step.input["transport_configured"], false);
    }

    #[test]
    fn test_sums_both_allowances() {
        let params = ActiveParameters::default()
            .with(ParameterCode::Transport, Decimal::new(6000, 2), false)
            .with(ParameterCode::Presence, Decimal::new(4050, 2), false);

        let result = calculate_allowances(&params, 3);

        assert_eq!(result.transport, Decimal::new(6000, 2));
        assert_eq!(result.presence, Decimal::new(4050, 2));
        assert_eq!(result.total, Decimal::new(10050, 2));
        assert_eq!(result.audit_step.step_number, 3);
    }

    #[test]
    fn test_ignores_cnss_rate() {
        let params = ActiveParameters::default().with(ParameterCode::CnssEmployee, Decimal::new(918, 2), true);
        let result = calculate_allowances(&params, 1);
        assert_eq!(result.total, Decimal::ZERO);
    }
}
