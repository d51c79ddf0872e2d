//! The 2026 rate table.
//!
//! Rates are hard-coded assumptions for one fictional business in one
//! fiscal year; a custom table can still be supplied for what-if runs,
//! and is validated at calculator construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a rate table fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegimeRatesError {
    /// A rate was outside the `[0, 1]` range.
    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange {
        name: &'static str,
        value: Decimal,
    },
}

/// The tax rates a [`super::ScenarioCalculator`] applies.
///
/// [`Default`] yields the 2026 table used by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeRates {
    /// USN income variant: 6% of taxable revenue.
    pub usn_income_rate: Decimal,
    /// USN profit variant: 15% of taxable revenue minus expenses.
    pub usn_profit_rate: Decimal,
    /// AUSN income variant: 8% of total revenue.
    pub ausn_income_rate: Decimal,
    /// AUSN profit variant: 20% of total revenue minus expenses.
    pub ausn_profit_rate: Decimal,
    /// Reduced VAT without deductions, applied above the threshold.
    pub vat_reduced_rate: Decimal,
}

impl Default for RegimeRates {
    fn default() -> Self {
        Self {
            usn_income_rate: Decimal::new(6, 2),
            usn_profit_rate: Decimal::new(15, 2),
            ausn_income_rate: Decimal::new(8, 2),
            ausn_profit_rate: Decimal::new(20, 2),
            vat_reduced_rate: Decimal::new(5, 2),
        }
    }
}

impl RegimeRates {
    /// Checks that every rate lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), RegimeRatesError> {
        let checks = [
            ("USN income rate", self.usn_income_rate),
            ("USN profit rate", self.usn_profit_rate),
            ("AUSN income rate", self.ausn_income_rate),
            ("AUSN profit rate", self.ausn_profit_rate),
            ("VAT reduced rate", self.vat_reduced_rate),
        ];
        for (name, value) in checks {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(RegimeRatesError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}
