//! The payslip calculation pipeline.
//!
//! Chains the individual rules in order, numbering their audit steps and
//! collecting any warnings into a single [`AuditTrace`].

use std::time::Instant;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{
    ActiveParameters, calculate_allowances, calculate_contributions, calculate_hourly_rate,
    calculate_income_tax, calculate_overtime, calculate_social_security, round_money,
};
use crate::error::{HrError, HrResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, Employee, PayslipBreakdown};

/// Upper bound on any monthly money amount fed to the engine: base
/// salaries, bonuses and parameter values.
pub const MAX_MONTHLY_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Upper bound on overtime hours in one period (31 days of 24 hours).
pub const MAX_OVERTIME_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

/// What the caller supplies for one payroll run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipInput {
    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,
    pub pay_date: NaiveDate,
    pub overtime_hours: Decimal,
    pub bonuses: Decimal,
}

impl PayslipInput {
    /// Checks the period ordering and that hours and bonuses are
    /// non-negative and within [`MAX_OVERTIME_HOURS`] and
    /// [`MAX_MONTHLY_AMOUNT`].
    pub fn validate(&self) -> HrResult<()> {
        if self.pay_period_end < self.pay_period_start {
            return Err(HrError::validation(
                "pay_period_end",
                "must not be before pay_period_start",
            ));
        }
        if self.overtime_hours < Decimal::ZERO {
            return Err(HrError::validation("overtime_hours", "must not be negative"));
        }
        if self.overtime_hours > MAX_OVERTIME_HOURS {
            return Err(HrError::validation(
                "overtime_hours",
                format!("must not exceed {}", MAX_OVERTIME_HOURS),
            ));
        }
        if self.bonuses < Decimal::ZERO {
            return Err(HrError::validation("bonuses", "must not be negative"));
        }
        if self.bonuses > MAX_MONTHLY_AMOUNT {
            return Err(HrError::validation(
                "bonuses",
                format!("must not exceed {}", MAX_MONTHLY_AMOUNT),
            ));
        }
        Ok(())
    }
}

/// The amounts and the trace explaining them.
#[derive(Debug, Clone)]
pub struct PayslipCalculation {
    pub breakdown: PayslipBreakdown,
    pub audit_trace: AuditTrace,
}

/// Runs the payroll rules for one employee and period.
///
/// Pure with respect to its inputs: the same employee, input, and parameters
/// always give the same breakdown. Only `audit_trace.duration_us` varies.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::{ActiveParameters, PayslipInput, calculate_payslip};
/// use hr_engine::models::NewEmployee;
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let hire = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let employee = NewEmployee {
///     first_name: "Amal".to_string(),
///     last_name: "Trabelsi".to_string(),
///     hire_date: hire,
///     base_salary: Some(Decimal::from(2000)),
///     ..Default::default()
/// }
/// .into_employee(Uuid::new_v4(), "EMP001".to_string(), Utc::now());
///
/// let input = PayslipInput {
///     pay_period_start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     pay_period_end: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
///     pay_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
///     overtime_hours: Decimal::ZERO,
///     bonuses: Decimal::ZERO,
/// };
///
/// let result = calculate_payslip(&employee, &input, &ActiveParameters::default());
/// assert_eq!(result.breakdown.net_salary.to_string(), "1471.81");
/// ```
pub fn calculate_payslip(
    employee: &Employee,
    input: &PayslipInput,
    parameters: &ActiveParameters,
) -> PayslipCalculation {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let base_salary = employee.base_salary;
    if base_salary <= Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NON_POSITIVE_BASE_SALARY".to_string(),
            message: format!(
                "Employee {} has a base salary of {}",
                employee.employee_number, base_salary
            ),
            severity: "medium".to_string(),
        });
    }

    let hourly = calculate_hourly_rate(base_salary, step_number);
    steps.push(hourly.audit_step);
    step_number += 1;

    let overtime = calculate_overtime(input.overtime_hours, hourly.hourly_rate, step_number);
    steps.push(overtime.audit_step);
    step_number += 1;

    let allowances = calculate_allowances(parameters, step_number);
    steps.push(allowances.audit_step);
    step_number += 1;

    let gross_salary =
        round_money(base_salary + overtime.overtime_amount + input.bonuses + allowances.total);
    steps.push(AuditStep {
        step_number,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "overtime_amount": overtime.overtime_amount.to_string(),
            "bonuses": input.bonuses.to_string(),
            "allowances": allowances.total.to_string()
        }),
        output: serde_json::json!({
            "gross_salary": gross_salary.to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            base_salary, overtime.overtime_amount, input.bonuses, allowances.total, gross_salary
        ),
    });
    step_number += 1;

    let social = calculate_social_security(gross_salary, parameters, step_number);
    steps.push(social.audit_step);
    step_number += 1;

    let tax = calculate_income_tax(gross_salary, social.social_security, step_number);
    steps.push(tax.audit_step);
    step_number += 1;

    let contributions = calculate_contributions(gross_salary, step_number);
    steps.push(contributions.audit_step);
    step_number += 1;

    let total_deductions = round_money(
        tax.income_tax
            + social.social_security
            + contributions.retirement_contribution
            + contributions.health_insurance,
    );
    let net_salary = round_money(gross_salary - total_deductions);
    steps.push(AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "income_tax": tax.income_tax.to_string(),
            "social_security": social.social_security.to_string(),
            "retirement_contribution": contributions.retirement_contribution.to_string(),
            "health_insurance": contributions.health_insurance.to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.to_string(),
            "net_salary": net_salary.to_string()
        }),
        reasoning: format!("{} - {} = {}", gross_salary, total_deductions, net_salary),
    });

    if net_salary < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_SALARY".to_string(),
            message: format!("Deductions of {} exceed gross salary {}", total_deductions, gross_salary),
            severity: "high".to_string(),
        });
    }

    let breakdown = PayslipBreakdown {
        base_salary,
        overtime_hours: input.overtime_hours,
        overtime_amount: overtime.overtime_amount,
        bonuses: round_money(input.bonuses),
        allowances: round_money(allowances.total),
        gross_salary,
        income_tax: tax.income_tax,
        social_security: social.social_security,
        retirement_contribution: contributions.retirement_contribution,
        health_insurance: contributions.health_insurance,
        total_deductions,
        net_salary,
    };

    PayslipCalculation {
        breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewEmployee, ParameterCode};
    use chrono::Utc;
    use proptest::prelude::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee_with_salary(salary: Decimal) -> Employee {
        NewEmployee {
            first_name: "Sami".to_string(),
            last_name: "Ben Ali".to_string(),
            hire_date: date(2022, 5, 1),
            base_salary: Some(salary),
            ..Default::default()
        }
        .into_employee(Uuid::new_v4(), "EMP001".to_string(), Utc::now())
    }

    fn march_input(overtime_hours: Decimal, bonuses: Decimal) -> PayslipInput {
        PayslipInput {
            pay_period_start: date(2026, 3, 1),
            pay_period_end: date(2026, 3, 31),
            pay_date: date(2026, 3, 31),
            overtime_hours,
            bonuses,
        }
    }

    #[test]
    fn test_reference_payslip_for_2000() {
        let employee = employee_with_salary(dec("2000"));
        let result = calculate_payslip(
            &employee,
            &march_input(Decimal::ZERO, Decimal::ZERO),
            &ActiveParameters::default(),
        );
        let b = result.breakdown;

        assert_eq!(b.gross_salary.to_string(), "2000.00");
        assert_eq!(b.social_security.to_string(), "183.60");
        assert_eq!(b.income_tax.to_string(), "258.59");
        assert_eq!(b.retirement_contribution.to_string(), "50.00");
        assert_eq!(b.health_insurance.to_string(), "36.00");
        assert_eq!(b.total_deductions.to_string(), "528.19");
        assert_eq!(b.net_salary.to_string(), "1471.81");
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let employee = employee_with_salary(dec("2000"));
        let result = calculate_payslip(
            &employee,
            &march_input(Decimal::ZERO, Decimal::ZERO),
            &ActiveParameters::default(),
        );

        let rule_ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "hourly_rate",
                "overtime",
                "allowances",
                "gross_salary",
                "social_security",
                "income_tax",
                "contributions",
                "net_salary"
            ]
        );
        for (i, step) in result.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_overtime_and_bonuses_feed_gross() {
        let employee = employee_with_salary(dec("2000"));
        let result = calculate_payslip(
            &employee,
            &march_input(dec("10"), dec("100")),
            &ActiveParameters::default(),
        );

        assert_eq!(result.breakdown.overtime_amount, dec("173.08"));
        assert_eq!(result.breakdown.gross_salary, dec("2273.08"));
    }

    #[test]
    fn test_parameters_change_allowances_and_cnss() {
        let employee = employee_with_salary(dec("2000"));
        let params = ActiveParameters::default()
            .with(ParameterCode::Transport, dec("60"), false)
            .with(ParameterCode::Presence, dec("40"), false)
            .with(ParameterCode::CnssEmployee, dec("10"), true);

        let result = calculate_payslip(
            &employee,
            &march_input(Decimal::ZERO, Decimal::ZERO),
            &params,
        );

        assert_eq!(result.breakdown.allowances, dec("100.00"));
        assert_eq!(result.breakdown.gross_salary, dec("2100.00"));
        assert_eq!(result.breakdown.social_security, dec("210.00"));
    }

    #[test]
    fn test_zero_salary_warns() {
        let employee = employee_with_salary(Decimal::ZERO);
        let result = calculate_payslip(
            &employee,
            &march_input(Decimal::ZERO, Decimal::ZERO),
            &ActiveParameters::default(),
        );

        assert_eq!(result.breakdown.net_salary, Decimal::ZERO);
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, "NON_POSITIVE_BASE_SALARY");
    }

    #[test]
    fn test_input_validation() {
        let mut input = march_input(Decimal::ZERO, Decimal::ZERO);
        assert!(input.validate().is_ok());

        input.overtime_hours = dec("-1");
        assert!(matches!(
            input.validate(),
            Err(HrError::Validation { ref field, .. }) if field == "overtime_hours"
        ));

        let mut input = march_input(Decimal::ZERO, dec("-5"));
        assert!(input.validate().is_err());
        input.bonuses = Decimal::ZERO;
        input.pay_period_end = date(2026, 2, 28);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_input_validation_caps_hours_and_bonuses() {
        let input = march_input(MAX_OVERTIME_HOURS, MAX_MONTHLY_AMOUNT);
        assert!(input.validate().is_ok());

        let input = march_input(Decimal::from_scientific("7e28").unwrap(), Decimal::ZERO);
        assert!(matches!(
            input.validate(),
            Err(HrError::Validation { ref field, .. }) if field == "overtime_hours"
        ));

        let input = march_input(Decimal::ZERO, Decimal::from_scientific("1e28").unwrap());
        assert!(matches!(
            input.validate(),
            Err(HrError::Validation { ref field, .. }) if field == "bonuses"
        ));
    }

    #[test]
    fn test_largest_accepted_inputs_calculate() {
        let employee = employee_with_salary(MAX_MONTHLY_AMOUNT);
        let input = march_input(MAX_OVERTIME_HOURS, MAX_MONTHLY_AMOUNT);
        assert!(input.validate().is_ok());

        let result = calculate_payslip(&employee, &input, &ActiveParameters::default());

        assert!(result.breakdown.gross_salary > MAX_MONTHLY_AMOUNT);
        assert!(result.breakdown.net_salary > Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_calculation_is_deterministic(
            salary_cents in 0i64..2_000_000,
            overtime_quarters in 0i64..400,
            bonus_cents in 0i64..500_000,
        ) {
            let employee = employee_with_salary(Decimal::new(salary_cents, 2));
            let input = march_input(Decimal::new(overtime_quarters * 25, 2), Decimal::new(bonus_cents, 2));
            let params = ActiveParameters::default();

            let first = calculate_payslip(&employee, &input, &params);
            let second = calculate_payslip(&employee, &input, &params);

            prop_assert_eq!(&first.breakdown, &second.breakdown);
            prop_assert_eq!(first.audit_trace.steps.len(), second.audit_trace.steps.len());
        }

        #[test]
        fn prop_net_plus_deductions_is_gross(
            salary_cents in 1i64..2_000_000,
            bonus_cents in 0i64..500_000,
        ) {
            let employee = employee_with_salary(Decimal::new(salary_cents, 2));
            let input = march_input(Decimal::ZERO, Decimal::new(bonus_cents, 2));
            let b = calculate_payslip(&employee, &input, &ActiveParameters::default()).breakdown;

            prop_assert_eq!(b.net_salary + b.total_deductions, b.gross_salary);
            prop_assert!(b.income_tax >= Decimal::ZERO);
        }
    }
}
