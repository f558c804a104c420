//! Payroll calculation logic.
//!
//! Each rule lives in its own module and returns its amount together with the
//! audit step that explains it: hourly rate and overtime, fixed allowances,
//! social security, progressive income tax, and the fixed-rate retirement and
//! health contributions. [`calculate_payslip`] chains them in order.

mod active_parameters;
mod allowances;
mod contributions;
mod engine;
mod income_tax;
mod overtime;
mod rounding;
mod social_security;

pub use active_parameters::{ActiveParameters, ParameterValue};
pub use allowances::{AllowancesResult, calculate_allowances};
pub use contributions::{
    ContributionsResult, HEALTH_INSURANCE_RATE, RETIREMENT_RATE, calculate_contributions,
};
pub use engine::{
    MAX_MONTHLY_AMOUNT, MAX_OVERTIME_HOURS, PayslipCalculation, PayslipInput, calculate_payslip,
};
pub use income_tax::{
    IncomeTaxResult, TAX_BRACKETS, TaxBracket, annual_income_tax, calculate_income_tax,
    find_bracket,
};
pub use overtime::{
    HourlyRateResult, OVERTIME_MULTIPLIER, OvertimeResult, STANDARD_MONTHLY_HOURS,
    calculate_hourly_rate, calculate_overtime,
};
pub use rounding::{MONEY_SCALE, round_money, round_to};
pub use social_security::{DEFAULT_CNSS_RATE, SocialSecurityResult, calculate_social_security};
