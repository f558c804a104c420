//! The typed view of the payroll parameters in force on a date.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{ParameterCode, PayrollParameter};

/// A parameter value as the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterValue {
    /// The stored value.
    pub value: Decimal,
    /// Whether the value is a percentage.
    pub is_percentage: bool,
}

/// Payroll parameters in force on a date, keyed by [`ParameterCode`].
///
/// Records whose code the engine does not know are left out. When two
/// records with the same code are in force, the one with the latest
/// effective date wins.
///
/// # Example
///
/// ```
/// use hr_engine::calculation::ActiveParameters;
/// use hr_engine::models::ParameterCode;
/// use rust_decimal::Decimal;
///
/// let params = ActiveParameters::default()
///     .with(ParameterCode::Transport, Decimal::from(60), false);
/// assert_eq!(params.amount(ParameterCode::Transport), Some(Decimal::from(60)));
/// assert_eq!(params.amount(ParameterCode::Presence), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveParameters {
    values: HashMap<ParameterCode, ParameterValue>,
}

impl ActiveParameters {
    /// Selects the parameters whose effective window covers `on`.
    pub fn effective_on<'a, I>(parameters: I, on: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a PayrollParameter>,
    {
        let mut latest: HashMap<ParameterCode, (NaiveDate, ParameterValue)> = HashMap::new();
        for parameter in parameters {
            if !parameter.is_effective_on(on) {
                continue;
            }
            let Some(code) = parameter.known_code() else {
                continue;
            };
            let value = ParameterValue {
                value: parameter.value,
                is_percentage: parameter.is_percentage,
            };
            match latest.get(&code) {
                Some((effective, _)) if *effective > parameter.effective_date => {}
                _ => {
                    latest.insert(code, (parameter.effective_date, value));
                }
            }
        }

        Self {
            values: latest
                .into_iter()
                .map(|(code, (_, value))| (code, value))
                .collect(),
        }
    }

    /// Returns a copy with `code` set to `value`.
    pub fn with(mut self, code: ParameterCode, value: Decimal, is_percentage: bool) -> Self {
        self.values.insert(
            code,
            ParameterValue {
                value,
                is_percentage,
            },
        );
        self
    }

    /// The full value record for `code`.
    pub fn get(&self, code: ParameterCode) -> Option<ParameterValue> {
        self.values.get(&code).copied()
    }

    /// The raw value for `code`.
    pub fn amount(&self, code: ParameterCode) -> Option<Decimal> {
        self.get(code).map(|p| p.value)
    }

    /// Returns true if no known parameter is in force.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
