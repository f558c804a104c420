//! Progressive income tax (IRPP).
//!
//! Tax is assessed on the annualised taxable income (gross less social
//! security, times twelve) and then spread back over twelve months. Each
//! bracket applies only strictly above its threshold and adds a fixed amount
//! for the brackets below it.

use rust_decimal::Decimal;

use super::round_money;
use crate::models::AuditStep;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// One bracket of the annual tax scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Annual income above which the bracket applies.
    pub threshold: Decimal,
    /// Marginal rate on income above the threshold.
    pub rate: Decimal,
    /// Fixed tax carried over from the lower brackets.
    pub base_tax: Decimal,
}

/// The annual scale, highest bracket first.
pub const TAX_BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        threshold: Decimal::from_parts(50000, 0, 0, false, 0),
        rate: Decimal::from_parts(35, 0, 0, false, 2),
        base_tax: Decimal::from_parts(11800, 0, 0, false, 0),
    },
    TaxBracket {
        threshold: Decimal::from_parts(30000, 0, 0, false, 0),
        rate: Decimal::from_parts(32, 0, 0, false, 2),
        base_tax: Decimal::from_parts(5400, 0, 0, false, 0),
    },
    TaxBracket {
        threshold: Decimal::from_parts(20000, 0, 0, false, 0),
        rate: Decimal::from_parts(28, 0, 0, false, 2),
        base_tax: Decimal::from_parts(2600, 0, 0, false, 0),
    },
    TaxBracket {
        threshold: Decimal::from_parts(5000, 0, 0, false, 0),
        rate: Decimal::from_parts(26, 0, 0, false, 2),
        base_tax: Decimal::ZERO,
    },
];

/// Finds the bracket an annual income falls in, if any.
pub fn find_bracket(annual_taxable: Decimal) -> Option<&'static TaxBracket> {
    TAX_BRACKETS
        .iter()
        .find(|bracket| annual_taxable > bracket.threshold)
}

/// Unrounded annual tax on an annual taxable income.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::annual_income_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(annual_income_tax(Decimal::from(5000)), Decimal::ZERO);
/// assert_eq!(annual_income_tax(Decimal::from(30000)), Decimal::from(5400));
/// ```
pub fn annual_income_tax(annual_taxable: Decimal) -> Decimal {
    match find_bracket(annual_taxable) {
        Some(bracket) => (annual_taxable - bracket.threshold) * bracket.rate + bracket.base_tax,
        None => Decimal::ZERO,
    }
}

/// The monthly income tax for a payslip.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// Gross less social security.
    pub taxable_income: Decimal,
    /// Taxable income times twelve.
    pub annual_taxable: Decimal,
    /// Monthly tax rounded to cents.
    pub income_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly income tax from gross salary and social security.
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::calculate_income_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_income_tax(
///     Decimal::from_str("2000.00").unwrap(),
///     Decimal::from_str("183.60").unwrap(),
///     6,
/// );
/// assert_eq!(result.income_tax.to_string(), "258.59");
/// ```
pub fn calculate_income_tax(
    gross_salary: Decimal,
    social_security: Decimal,
    step_number: u32,
) -> IncomeTaxResult {
    let taxable_income = gross_salary - social_security;
    let annual_taxable = taxable_income * MONTHS_PER_YEAR;
    let bracket = find_bracket(annual_taxable);
    let annual_tax = annual_income_tax(annual_taxable);
    let income_tax = round_money(annual_tax / MONTHS_PER_YEAR);

    let reasoning = match bracket {
        Some(b) => format!(
            "({} - {}) x {} + {} = {} a year; / 12 = {}",
            annual_taxable,
            b.threshold,
            b.rate,
            b.base_tax,
            annual_tax.normalize(),
            income_tax
        ),
        None => format!(
            "Annual taxable income {} does not exceed {}; no tax",
            annual_taxable, TAX_BRACKETS[3].threshold
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax (IRPP)".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "social_security": social_security.to_string(),
            "taxable_income": taxable_income.to_string(),
            "annual_taxable": annual_taxable.to_string()
        }),
        output: serde_json::json!({
            "bracket_threshold": bracket.map(|b| b.threshold.to_string()),
            "bracket_rate": bracket.map(|b| b.rate.to_string()),
            "annual_tax": annual_tax.normalize().to_string(),
            "income_tax": income_tax.to_string()
        }),
        reasoning,
    };

    IncomeTaxResult {
        taxable_income,
        annual_taxable,
        income_tax,
        audit_step,
    }
}
