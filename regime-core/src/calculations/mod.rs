//! Scenario calculation for the 2026 regime comparison.
//!
//! The calculator is pure and stateless: callers re-run it after every
//! input change, or memoize on [`ScenarioInput`] equality.

pub mod common;
pub mod comparison;
pub mod rates;

pub use comparison::{ScenarioCalculator, ScenarioInput};
pub use rates::{RegimeRates, RegimeRatesError};
